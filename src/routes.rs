use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::config::{use_site_config_resource, SiteConfig};
use crate::contact::ContactSection;
use crate::modal::{use_project_modal_provider, ProjectModalHost};
use crate::nav::{BackToTop, NavBar, ScrollProgress};
use crate::scroll::{use_scroll_state_provider, ScrollWatch};
use crate::sections::{About, Blog, Hero, Portfolio, Services, Skills};
use crate::visits::SiteFooter;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_site_config_resource();
    let config = match config_resource() {
        None => {
            return rsx! {
                document::Title { "Portfolio" }
                div { class: "page loading",
                    h1 { "Loading..." }
                }
            }
        }
        Some(Ok(config)) => config,
        Some(Err(message)) => {
            tracing::warn!("config: using built-in defaults: {message}");
            SiteConfig::default()
        }
    };

    use_context_provider(|| config);
    use_scroll_state_provider();
    use_project_modal_provider();
    let using_keyboard = use_focus_mode();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta {
            name: "description",
            content: "Personal portfolio of a full-stack web developer. Projects, skills, and contact.",
        }
        div {
            class: if using_keyboard() { "page using-keyboard" } else { "page" },
            Router::<Route> {}
        }
    }
}

#[cfg(target_arch = "wasm32")]
struct FocusModeListeners {
    keydown: Rc<Closure<dyn FnMut(web_sys::Event)>>,
    mousedown: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

// Tab switches focus outlines on, the next mouse press switches them off.
fn use_focus_mode() -> Signal<bool> {
    let using_keyboard = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        let mut listeners = use_signal(|| None::<FocusModeListeners>);
        use_effect(move || {
            if listeners.read().is_some() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            let mut by_key = using_keyboard;
            let keydown = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
                let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                    return;
                };
                if key_event.key() == "Tab" && !*by_key.peek() {
                    by_key.set(true);
                }
            }) as Box<dyn FnMut(_)>));
            let mut by_mouse = using_keyboard;
            let mousedown = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
                if *by_mouse.peek() {
                    by_mouse.set(false);
                }
            }) as Box<dyn FnMut(_)>));
            let _ = document
                .add_event_listener_with_callback("keydown", keydown.as_ref().as_ref().unchecked_ref());
            let _ = document.add_event_listener_with_callback(
                "mousedown",
                mousedown.as_ref().as_ref().unchecked_ref(),
            );
            listeners.set(Some(FocusModeListeners { keydown, mousedown }));
        });
        use_drop(move || {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            if let Some(attached) = listeners.read().as_ref() {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    attached.keydown.as_ref().as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "mousedown",
                    attached.mousedown.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    using_keyboard
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    let config = use_context::<SiteConfig>();
    rsx! {
        document::Title { "{config.owner_name} | Full-Stack Web Developer" }
        ScrollWatch {}
        NavBar {}
        ScrollProgress {}
        main { class: "page-main",
            Hero {}
            About {}
            Skills {}
            Services {}
            Portfolio {}
            Blog {}
            ContactSection {}
        }
        SiteFooter {}
        BackToTop {}
        ProjectModalHost {}
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Not Found" }
        div { class: "page not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "btn", "Back home" }
        }
    }
}
