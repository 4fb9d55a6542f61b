use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::content::Project;
use crate::nav::set_body_scroll_locked;

pub const MODAL_EXIT_MS: u32 = 300;

/// Snapshot of one project taken when its card is opened. The overlay
/// renders from this copy, so later content changes don't reach into an
/// open modal.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalSession {
    pub title: String,
    pub blurb: String,
    pub details: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub highlights: Vec<String>,
}

impl ModalSession {
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.to_string(),
            blurb: project.blurb.to_string(),
            details: project.details.to_string(),
            tags: project.tags.iter().map(|tag| tag.to_string()).collect(),
            image: project.image.map(|src| src.to_string()),
            repo_url: project.repo_url.map(|url| url.to_string()),
            demo_url: project.demo_url.map(|url| url.to_string()),
            highlights: project
                .highlights
                .iter()
                .map(|item| item.to_string())
                .collect(),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ProjectModal {
    session: Signal<Option<ModalSession>>,
    closing: Signal<bool>,
    generation: Signal<u64>,
}

pub fn use_project_modal_provider() -> ProjectModal {
    let session = use_signal(|| None::<ModalSession>);
    let closing = use_signal(|| false);
    let generation = use_signal(|| 0u64);
    use_context_provider(|| ProjectModal {
        session,
        closing,
        generation,
    })
}

pub fn use_project_modal() -> ProjectModal {
    use_context::<ProjectModal>()
}

impl ProjectModal {
    pub fn session(&self) -> Option<ModalSession> {
        (self.session)()
    }

    pub fn is_closing(&self) -> bool {
        (self.closing)()
    }

    pub fn open(&self, session: ModalSession) {
        let mut generation = self.generation;
        let next_generation = *generation.peek() + 1;
        generation.set(next_generation);
        let mut closing = self.closing;
        closing.set(false);
        let mut slot = self.session;
        slot.set(Some(session));
        set_body_scroll_locked(true);
        tracing::debug!("modal: open");
    }

    /// Starts the exit animation. The session is dropped once the
    /// animation has run, unless the modal was reopened in the meantime.
    pub fn request_close(&self) {
        if self.session.peek().is_none() || *self.closing.peek() {
            return;
        }
        tracing::debug!("modal: close requested");
        let mut closing = self.closing;
        closing.set(true);
        let generation = self.generation;
        let opened_at = *generation.peek();
        let mut slot = self.session;
        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            TimeoutFuture::new(MODAL_EXIT_MS).await;
            if *generation.peek() != opened_at {
                return;
            }
            slot.set(None);
            closing.set(false);
            set_body_scroll_locked(false);
        });
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = opened_at;
            slot.set(None);
            closing.set(false);
            set_body_scroll_locked(false);
        }
    }
}

#[cfg(target_arch = "wasm32")]
struct EscapeListener {
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

#[component]
pub fn ProjectModalHost() -> Element {
    let modal = use_project_modal();
    #[cfg(target_arch = "wasm32")]
    let mut escape_listener = use_signal(|| None::<EscapeListener>);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        let open = modal.session.read().is_some();
        let attached = escape_listener.read().is_some();
        if open && !attached {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            let closure = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
                let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                    return;
                };
                if key_event.key() == "Escape" {
                    modal.request_close();
                }
            }) as Box<dyn FnMut(_)>));
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().as_ref().unchecked_ref());
            escape_listener.set(Some(EscapeListener { closure }));
        } else if !open && attached {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                if let Some(listener) = escape_listener.peek().as_ref() {
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        listener.closure.as_ref().as_ref().unchecked_ref(),
                    );
                }
            }
            escape_listener.set(None);
        }
    });

    #[cfg(target_arch = "wasm32")]
    {
        let escape_listener = escape_listener;
        use_drop(move || {
            let binding = escape_listener.read();
            let Some(listener) = binding.as_ref() else {
                return;
            };
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    listener.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    let Some(session) = modal.session() else {
        return rsx! {};
    };
    let closing = modal.is_closing();

    rsx! {
        div {
            class: if closing { "modal-overlay closing" } else { "modal-overlay" },
            onclick: move |_| modal.request_close(),
            div {
                class: "modal-card",
                role: "dialog",
                aria_label: "{session.title}",
                onclick: move |event| event.stop_propagation(),
                button {
                    r#type: "button",
                    class: "modal-close",
                    aria_label: "Close project details",
                    onclick: move |_| modal.request_close(),
                    "×"
                }
                if let Some(image) = session.image.clone() {
                    img { class: "modal-image", src: "{image}", alt: "{session.title}" }
                }
                h3 { class: "modal-title", "{session.title}" }
                div { class: "modal-tags",
                    for tag in session.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                p { class: "modal-blurb", "{session.blurb}" }
                p { class: "modal-details", "{session.details}" }
                h4 { class: "modal-subhead", "Highlights" }
                ul { class: "modal-highlights",
                    for item in session.highlights.iter() {
                        li { key: "{item}", "{item}" }
                    }
                }
                div { class: "modal-links",
                    if let Some(repo) = session.repo_url.clone() {
                        a {
                            class: "btn ghost",
                            href: "{repo}",
                            target: "_blank",
                            rel: "noreferrer",
                            "Source"
                        }
                    }
                    if let Some(demo) = session.demo_url.clone() {
                        a {
                            class: "btn",
                            href: "{demo}",
                            target: "_blank",
                            rel: "noreferrer",
                            "Live Demo"
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

    fn sample_project() -> Project {
        Project {
            title: "Sample",
            blurb: "Short line.",
            details: "Longer line.",
            tags: &["Rust", "Wasm", "Design"],
            image: None,
            repo_url: Some("https://example.com/repo"),
            demo_url: None,
            highlights: &["First", "Second"],
        }
    }

    #[test]
    fn session_preserves_tag_order() {
        let session = ModalSession::from_project(&sample_project());
        assert_eq!(session.tags, vec!["Rust", "Wasm", "Design"]);
    }

    #[test]
    fn session_keeps_optional_fields_explicit() {
        let session = ModalSession::from_project(&sample_project());
        assert_eq!(session.image, None);
        assert_eq!(session.repo_url.as_deref(), Some("https://example.com/repo"));
        assert_eq!(session.demo_url, None);
    }

    #[test]
    fn session_copies_highlights() {
        let session = ModalSession::from_project(&sample_project());
        assert_eq!(session.highlights, vec!["First", "Second"]);
    }
}
