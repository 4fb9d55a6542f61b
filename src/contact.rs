use dioxus::prelude::*;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

use crate::config::use_site_config;

pub const SUBMIT_DELAY_MS: u32 = 1500;
pub const NOTICE_DISMISS_MS: u32 = 5000;

const SUCCESS_TEXT: &str = "Message sent successfully! I'll get back to you within 24 hours.";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$")
        .expect("email regex should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A draft that passed validation, with surrounding whitespace removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftError {
    MissingFields,
    InvalidEmail,
}

impl DraftError {
    pub fn message(&self) -> &'static str {
        match self {
            DraftError::MissingFields => "Please fill in all fields.",
            DraftError::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

pub fn validate_draft(draft: &ContactDraft) -> Result<Submission, DraftError> {
    let name = draft.name.trim();
    let email = draft.email.trim();
    let subject = draft.subject.trim();
    let message = draft.message.trim();
    if name.is_empty() || email.is_empty() || subject.is_empty() || message.is_empty() {
        return Err(DraftError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(DraftError::InvalidEmail);
    }
    Ok(Submission {
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
    })
}

impl Submission {
    pub fn into_payload(self, timestamp: i64) -> ContactPayload {
        ContactPayload {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            timestamp,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormNotice {
    pub kind: NoticeKind,
    pub text: String,
}

impl FormNotice {
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "form-notice success",
            NoticeKind::Error => "form-notice error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "!",
        }
    }
}

// Stand-in transport. Encodes the payload and waits out a fixed delay;
// replace the body with a real client once a backend exists.
async fn deliver(payload: &ContactPayload) -> Result<(), String> {
    let body =
        serde_json::to_string(payload).map_err(|err| format!("payload encode failed: {err}"))?;
    tracing::debug!("contact: delivering {body}");
    #[cfg(target_arch = "wasm32")]
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
    Ok(())
}

fn show_notice(
    notice: Signal<Option<FormNotice>>,
    notice_generation: Signal<u64>,
    kind: NoticeKind,
    text: &str,
) {
    let mut notice = notice;
    let mut generation = notice_generation;
    let stamp = *generation.peek() + 1;
    generation.set(stamp);
    notice.set(Some(FormNotice {
        kind,
        text: text.to_string(),
    }));
    // A fresh notice restarts the dismiss window; a stale timer must not
    // clear a newer message.
    #[cfg(target_arch = "wasm32")]
    spawn(async move {
        TimeoutFuture::new(NOTICE_DISMISS_MS).await;
        if *generation.peek() == stamp {
            notice.set(None);
        }
    });
}

fn now_timestamp() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() as i64) / 1000
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

#[component]
pub fn ContactSection() -> Element {
    let config = use_site_config();
    let mut draft = use_signal(ContactDraft::default);
    let sending = use_signal(|| false);
    let notice = use_signal(|| None::<FormNotice>);
    let notice_generation = use_signal(|| 0u64);

    rsx! {
        section { id: "contact", class: "section contact-section",
            div { class: "section-head",
                h2 { class: "section-title", "Get In Touch" }
                p { class: "section-lede", "Have a project in mind? I answer every message." }
            }
            div { class: "contact-grid",
                div { class: "contact-info",
                    h3 { "Let's build something" }
                    p {
                        "Freelance, contract, or just a question about one of the \
                         projects above. The form goes straight to my inbox."
                    }
                    ul { class: "contact-lines",
                        li {
                            span { class: "contact-label", "Email" }
                            a { href: "mailto:{config.owner_email}", "{config.owner_email}" }
                        }
                        li {
                            span { class: "contact-label", "Location" }
                            span { "{config.owner_location}" }
                        }
                    }
                    div { class: "contact-social",
                        a {
                            href: "{config.github_url}",
                            target: "_blank",
                            rel: "noreferrer",
                            "GitHub"
                        }
                        a {
                            href: "{config.linkedin_url}",
                            target: "_blank",
                            rel: "noreferrer",
                            "LinkedIn"
                        }
                    }
                }
                form {
                    class: "contact-form",
                    onsubmit: move |event| {
                        event.prevent_default();
                        if sending() {
                            return;
                        }
                        match validate_draft(&draft()) {
                            Err(issue) => {
                                show_notice(notice, notice_generation, NoticeKind::Error, issue.message());
                            }
                            Ok(submission) => {
                                let payload = submission.into_payload(now_timestamp());
                                let mut sending = sending;
                                spawn(async move {
                                    sending.set(true);
                                    let outcome = deliver(&payload).await;
                                    sending.set(false);
                                    match outcome {
                                        Ok(()) => {
                                            draft.set(ContactDraft::default());
                                            show_notice(notice, notice_generation, NoticeKind::Success, SUCCESS_TEXT);
                                        }
                                        Err(message) => {
                                            // Draft stays put so nothing typed is lost.
                                            show_notice(notice, notice_generation, NoticeKind::Error, &message);
                                        }
                                    }
                                });
                            }
                        }
                    },
                    div { class: "form-row",
                        div { class: "form-field",
                            label { r#for: "contact-name", "Name" }
                            input {
                                id: "contact-name",
                                r#type: "text",
                                value: "{draft().name}",
                                maxlength: "80",
                                disabled: sending(),
                                oninput: move |event| {
                                    let mut next = draft();
                                    next.name = event.value();
                                    draft.set(next);
                                },
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "contact-email", "Email" }
                            input {
                                id: "contact-email",
                                r#type: "email",
                                value: "{draft().email}",
                                maxlength: "120",
                                disabled: sending(),
                                oninput: move |event| {
                                    let mut next = draft();
                                    next.email = event.value();
                                    draft.set(next);
                                },
                            }
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "contact-subject", "Subject" }
                        input {
                            id: "contact-subject",
                            r#type: "text",
                            value: "{draft().subject}",
                            maxlength: "120",
                            disabled: sending(),
                            oninput: move |event| {
                                let mut next = draft();
                                next.subject = event.value();
                                draft.set(next);
                            },
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "contact-message", "Message" }
                        textarea {
                            id: "contact-message",
                            value: "{draft().message}",
                            maxlength: "2000",
                            rows: "7",
                            disabled: sending(),
                            oninput: move |event| {
                                let mut next = draft();
                                next.message = event.value();
                                draft.set(next);
                            },
                        }
                    }
                    if let Some(current) = notice() {
                        div { class: "{current.css_class()}",
                            span { class: "form-notice-icon", "{current.icon()}" }
                            "{current.text}"
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn submit-btn",
                        disabled: sending(),
                        if sending() {
                            "Sending..."
                        } else {
                            "Send Message"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn full_draft() -> ContactDraft {
        ContactDraft {
            name: "  Ada Lovelace  ".to_string(),
            email: " ada@example.com ".to_string(),
            subject: " Hello ".to_string(),
            message: " A note. ".to_string(),
        }
    }

    #[test]
    fn valid_draft_is_trimmed() {
        let submission = validate_draft(&full_draft()).unwrap();
        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.email, "ada@example.com");
        assert_eq!(submission.subject, "Hello");
        assert_eq!(submission.message, "A note.");
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        for field in 0..4 {
            let mut draft = full_draft();
            match field {
                0 => draft.name = "   ".to_string(),
                1 => draft.email = "\t".to_string(),
                2 => draft.subject = String::new(),
                _ => draft.message = " \n ".to_string(),
            }
            assert_eq!(
                validate_draft(&draft),
                Err(DraftError::MissingFields),
                "field {field} should be required"
            );
        }
    }

    #[test]
    fn missing_fields_reported_before_bad_email() {
        let mut draft = full_draft();
        draft.email = "not-an-email".to_string();
        draft.subject = String::new();
        assert_eq!(validate_draft(&draft), Err(DraftError::MissingFields));
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        for email in [
            "plainaddress",
            "user@",
            "@example.com",
            "user@-bad.com",
            "two words@example.com",
            "user@exa mple.com",
        ] {
            let mut draft = full_draft();
            draft.email = email.to_string();
            assert_eq!(
                validate_draft(&draft),
                Err(DraftError::InvalidEmail),
                "{email} should be invalid"
            );
        }
    }

    #[test]
    fn unusual_but_wellformed_addresses_pass() {
        for email in [
            "user@example.com",
            "first.last+tag@sub.domain.co",
            "x@y",
            "o'brien@example.ie",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn error_messages_match_the_form_copy() {
        assert_eq!(DraftError::MissingFields.message(), "Please fill in all fields.");
        assert_eq!(
            DraftError::InvalidEmail.message(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn payload_carries_every_field() {
        let payload = validate_draft(&full_draft()).unwrap().into_payload(1_700_000_000);
        let value = serde_json::to_value(&payload).unwrap();
        for key in ["name", "email", "subject", "message", "timestamp"] {
            assert!(value.get(key).is_some(), "payload missing {key}");
        }
        assert_eq!(value["timestamp"], 1_700_000_000);
    }

    #[test]
    fn notice_styling_follows_kind() {
        let success = FormNotice {
            kind: NoticeKind::Success,
            text: "ok".to_string(),
        };
        let error = FormNotice {
            kind: NoticeKind::Error,
            text: "no".to_string(),
        };
        assert_eq!(success.css_class(), "form-notice success");
        assert_eq!(success.icon(), "✓");
        assert_eq!(error.css_class(), "form-notice error");
        assert_eq!(error.icon(), "!");
    }
}
