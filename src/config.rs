use dioxus::prelude::*;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub owner_name: String,
    pub owner_email: String,
    pub owner_location: String,
    pub github_url: String,
    pub linkedin_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Arvid Lund".to_string(),
            owner_email: "hello@arvidlund.dev".to_string(),
            owner_location: "Gothenburg, Sweden".to_string(),
            github_url: "https://github.com/arvidlund".to_string(),
            linkedin_url: "https://www.linkedin.com/in/arvidlund".to_string(),
        }
    }
}

pub fn use_site_config_resource() -> Resource<Result<SiteConfig, String>> {
    use_resource(|| async move { fetch_site_config().await })
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

#[cfg(target_arch = "wasm32")]
async fn fetch_site_config() -> Result<SiteConfig, String> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from("/assets/config.json").await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<SiteConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<SiteConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_site_config() -> Result<SiteConfig, String> {
    Ok(SiteConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_a_full_config_document() {
        let raw = r#"{
            "owner_name": "Test Person",
            "owner_email": "test@example.com",
            "owner_location": "Somewhere",
            "github_url": "https://github.com/test",
            "linkedin_url": "https://www.linkedin.com/in/test"
        }"#;
        let config: SiteConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.owner_name, "Test Person");
        assert_eq!(config.owner_email, "test@example.com");
    }

    #[test]
    fn rejects_partial_documents() {
        assert!(serde_json::from_str::<SiteConfig>("{}").is_err());
    }

    #[test]
    fn default_profile_is_usable() {
        let config = SiteConfig::default();
        assert!(!config.owner_name.is_empty());
        assert!(config.owner_email.contains('@'));
        assert!(config.github_url.starts_with("https://"));
    }
}
