use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

use crate::config::use_site_config;
use crate::content;
use crate::counter::StatCounter;
use crate::modal::{use_project_modal, ModalSession};
use crate::reveal::{stagger_delay_ms, use_reveal, LazyImage, CARD_REVEAL, PANEL_REVEAL};
use crate::scroll::scroll_to_section;
use crate::typed::TypedHeadline;

pub const COPY_FEEDBACK_MS: u32 = 2000;

#[component]
pub fn Hero() -> Element {
    let config = use_site_config();
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-inner",
                p { class: "hero-greeting", "{content::HERO_GREETING}" }
                h1 { class: "hero-name", "{config.owner_name}" }
                h2 { class: "hero-role", TypedHeadline {} }
                p { class: "hero-blurb", "{content::HERO_BLURB}" }
                div { class: "hero-meta",
                    EmailCopy { email: config.owner_email.clone() }
                    span { class: "hero-location", "{config.owner_location}" }
                }
                div { class: "hero-actions",
                    a {
                        class: "btn",
                        href: "#contact",
                        onclick: move |event| {
                            event.prevent_default();
                            scroll_to_section("contact");
                        },
                        "Hire Me"
                    }
                    a {
                        class: "btn ghost",
                        href: "#portfolio",
                        onclick: move |event| {
                            event.prevent_default();
                            scroll_to_section("portfolio");
                        },
                        "View Work"
                    }
                }
            }
        }
    }
}

#[component]
fn EmailCopy(email: String) -> Element {
    let copied = use_signal(|| false);
    let email_for_click = email.clone();
    rsx! {
        button {
            r#type: "button",
            class: if copied() { "email-copy copied" } else { "email-copy" },
            title: "Click to copy",
            onclick: move |_| {
                #[cfg(target_arch = "wasm32")]
                {
                    let text = email_for_click.clone();
                    let mut copied = copied;
                    spawn(async move {
                        let Some(window) = web_sys::window() else {
                            return;
                        };
                        let promise = window.navigator().clipboard().write_text(&text);
                        if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
                            copied.set(true);
                            TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                            copied.set(false);
                        } else {
                            tracing::debug!("clipboard: copy failed");
                        }
                    });
                }
                #[cfg(not(target_arch = "wasm32"))]
                let _ = &email_for_click;
            },
            if copied() {
                "Copied to clipboard!"
            } else {
                "{email}"
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let reveal = use_reveal(PANEL_REVEAL);
    rsx! {
        section { id: "about", class: "section about-section",
            div { class: "section-head",
                h2 { class: "section-title", "About Me" }
                p { class: "section-lede", "A few numbers and the story behind them." }
            }
            div {
                class: if reveal.revealed() { "about-body revealed" } else { "about-body" },
                onmounted: move |event| reveal.on_mounted(event),
                for (index, paragraph) in content::ABOUT_PARAGRAPHS.iter().enumerate() {
                    p { key: "{index}", "{paragraph}" }
                }
            }
            div { class: "stat-grid",
                for stat in content::STATS {
                    StatCounter {
                        key: "{stat.label}",
                        value: stat.value,
                        suffix: stat.suffix.to_string(),
                        label: stat.label.to_string(),
                    }
                }
            }
        }
    }
}

#[component]
fn SkillBar(index: usize) -> Element {
    let skill = &content::SKILLS[index];
    let reveal = use_reveal(PANEL_REVEAL);
    let width = if reveal.revealed() { skill.percent } else { 0 };
    rsx! {
        div {
            class: if reveal.revealed() { "skill revealed" } else { "skill" },
            style: "transition-delay: {stagger_delay_ms(index)}ms",
            onmounted: move |event| reveal.on_mounted(event),
            div { class: "skill-head",
                span { class: "skill-name", "{skill.name}" }
                span { class: "skill-percent", "{skill.percent}%" }
            }
            div { class: "skill-bar",
                div { class: "skill-per", style: "width: {width}%" }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "section skills-section",
            div { class: "section-head",
                h2 { class: "section-title", "Skills" }
                p { class: "section-lede", "Tools I reach for, honestly weighted." }
            }
            div { class: "skill-list",
                for index in 0..content::SKILLS.len() {
                    SkillBar { key: "{index}", index: index }
                }
            }
        }
    }
}

#[component]
fn ServiceCard(index: usize) -> Element {
    let service = &content::SERVICES[index];
    let reveal = use_reveal(PANEL_REVEAL);
    rsx! {
        div {
            class: if reveal.revealed() { "service-card revealed" } else { "service-card" },
            style: "transition-delay: {stagger_delay_ms(index)}ms",
            onmounted: move |event| reveal.on_mounted(event),
            span { class: "service-icon", aria_hidden: "true", "{service.icon}" }
            h3 { class: "service-title", "{service.title}" }
            p { class: "service-blurb", "{service.blurb}" }
        }
    }
}

#[component]
pub fn Services() -> Element {
    rsx! {
        section { id: "services", class: "section services-section",
            div { class: "section-head",
                h2 { class: "section-title", "Services" }
                p { class: "section-lede", "What I can take off your plate." }
            }
            div { class: "service-grid",
                for index in 0..content::SERVICES.len() {
                    ServiceCard { key: "{index}", index: index }
                }
            }
        }
    }
}

fn project_monogram(title: &str) -> String {
    title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[component]
fn ProjectCard(index: usize) -> Element {
    let project = &content::PROJECTS[index];
    let modal = use_project_modal();
    let reveal = use_reveal(CARD_REVEAL);
    rsx! {
        article {
            class: if reveal.revealed() { "project-card revealed" } else { "project-card" },
            style: "transition-delay: {stagger_delay_ms(index)}ms",
            onmounted: move |event| reveal.on_mounted(event),
            if let Some(image) = project.image {
                LazyImage {
                    src: image.to_string(),
                    alt: project.title.to_string(),
                    class: Some("project-thumb".to_string()),
                }
            } else {
                div { class: "project-thumb project-thumb-blank", aria_hidden: "true",
                    "{project_monogram(project.title)}"
                }
            }
            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-desc", "{project.blurb}" }
                div { class: "project-tags",
                    for tag in project.tags {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                button {
                    r#type: "button",
                    class: "view-details",
                    onclick: move |event| {
                        event.stop_propagation();
                        modal.open(ModalSession::from_project(&content::PROJECTS[index]));
                    },
                    "View Details"
                }
            }
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        section { id: "portfolio", class: "section portfolio-section",
            div { class: "section-head",
                h2 { class: "section-title", "Portfolio" }
                p { class: "section-lede", "Selected work, client and personal." }
            }
            div { class: "project-grid",
                for index in 0..content::PROJECTS.len() {
                    ProjectCard { key: "{index}", index: index }
                }
            }
        }
    }
}

#[component]
fn PostCard(index: usize) -> Element {
    let post = &content::POSTS[index];
    let reveal = use_reveal(PANEL_REVEAL);
    rsx! {
        article {
            class: if reveal.revealed() { "post-card revealed" } else { "post-card" },
            style: "transition-delay: {stagger_delay_ms(index)}ms",
            onmounted: move |event| reveal.on_mounted(event),
            if let Some(image) = post.image {
                LazyImage {
                    src: image.to_string(),
                    alt: post.title.to_string(),
                    class: Some("post-thumb".to_string()),
                }
            }
            div { class: "post-body",
                span { class: "post-date", "{post.date}" }
                h3 { class: "post-title", "{post.title}" }
                p { class: "post-excerpt", "{post.excerpt}" }
                if let Some(url) = post.url {
                    a { class: "post-link", href: "{url}", "Read more" }
                } else {
                    span { class: "post-link soon", "Full write-up coming soon" }
                }
            }
        }
    }
}

#[component]
pub fn Blog() -> Element {
    rsx! {
        section { id: "blog", class: "section blog-section",
            div { class: "section-head",
                h2 { class: "section-title", "From the Blog" }
                p { class: "section-lede", "Notes on builds, budgets, and repairs." }
            }
            div { class: "post-grid",
                for index in 0..content::POSTS.len() {
                    PostCard { key: "{index}", index: index }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn monogram_takes_two_initials() {
        assert_eq!(project_monogram("Lindholmen Storefront"), "LS");
        assert_eq!(project_monogram("Kartong Design System"), "KD");
    }

    #[test]
    fn monogram_handles_short_titles() {
        assert_eq!(project_monogram("tidvis"), "t");
        assert_eq!(project_monogram(""), "");
    }
}
