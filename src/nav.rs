use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::config::use_site_config;
use crate::content;
use crate::scroll::{scroll_to_section, scroll_to_top, use_scroll_state};

pub const DESKTOP_BREAKPOINT_PX: f64 = 991.0;
pub const RESIZE_QUIET_MS: i32 = 250;

pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = locked;
}

#[cfg(target_arch = "wasm32")]
fn click_landed_in_menu(event: &web_sys::Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Ok(element) = target.dyn_into::<web_sys::Element>() else {
        return false;
    };
    for selector in [".nav-menu", ".hamburger"] {
        if element.closest(selector).ok().flatten().is_some() {
            return true;
        }
    }
    false
}

#[cfg(target_arch = "wasm32")]
struct DocumentClickListener {
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

#[cfg(target_arch = "wasm32")]
struct WindowResizeListener {
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

#[cfg(target_arch = "wasm32")]
struct TimeoutHandle {
    id: i32,
    _closure: Rc<Closure<dyn FnMut()>>,
}

#[component]
pub fn NavBar() -> Element {
    let config = use_site_config();
    let scroll = use_scroll_state();
    let mut menu_open = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    let mut outside_listener = use_signal(|| None::<DocumentClickListener>);
    #[cfg(target_arch = "wasm32")]
    let mut resize_listener = use_signal(|| None::<WindowResizeListener>);
    #[cfg(target_arch = "wasm32")]
    let resize_debounce = use_signal(|| None::<TimeoutHandle>);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if outside_listener.read().is_some() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let mut menu_open_for_click = menu_open;
        let closure = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
            if !*menu_open_for_click.peek() {
                return;
            }
            if click_landed_in_menu(&event) {
                return;
            }
            menu_open_for_click.set(false);
            set_body_scroll_locked(false);
        }) as Box<dyn FnMut(_)>));
        let _ = document
            .add_event_listener_with_callback("click", closure.as_ref().as_ref().unchecked_ref());
        outside_listener.set(Some(DocumentClickListener { closure }));
    });

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if resize_listener.read().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut menu_open_for_resize = menu_open;
        let mut debounce = resize_debounce;
        let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(handle) = debounce.peek().as_ref() {
                window.clear_timeout_with_handle(handle.id);
            }
            let mut debounce_for_fire = debounce;
            let fire = Rc::new(Closure::wrap(Box::new(move || {
                if let Some(window) = web_sys::window() {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|value| value.as_f64())
                        .unwrap_or(0.0);
                    if width > DESKTOP_BREAKPOINT_PX && *menu_open_for_resize.peek() {
                        menu_open_for_resize.set(false);
                        set_body_scroll_locked(false);
                    }
                }
                debounce_for_fire.set(None);
            }) as Box<dyn FnMut()>));
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                fire.as_ref().as_ref().unchecked_ref(),
                RESIZE_QUIET_MS,
            ) {
                debounce.set(Some(TimeoutHandle { id, _closure: fire }));
            }
        }) as Box<dyn FnMut(_)>));
        let _ = window
            .add_event_listener_with_callback("resize", closure.as_ref().as_ref().unchecked_ref());
        resize_listener.set(Some(WindowResizeListener { closure }));
    });

    #[cfg(target_arch = "wasm32")]
    {
        let outside_listener = outside_listener;
        let resize_listener = resize_listener;
        use_drop(move || {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                if let Some(listener) = outside_listener.read().as_ref() {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        listener.closure.as_ref().as_ref().unchecked_ref(),
                    );
                }
            }
            if let Some(window) = web_sys::window() {
                if let Some(listener) = resize_listener.read().as_ref() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        listener.closure.as_ref().as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    #[cfg(target_arch = "wasm32")]
    {
        let resize_debounce = resize_debounce;
        use_drop(move || {
            if let Some(handle) = resize_debounce.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    window.clear_timeout_with_handle(handle.id);
                }
            }
        });
    }

    let active = (scroll.active_section)();

    rsx! {
        nav { id: "navbar", class: if (scroll.nav_solid)() { "navbar scrolled" } else { "navbar" },
            div { class: "nav-inner",
                a {
                    class: "nav-logo",
                    href: "#home",
                    onclick: move |event| {
                        event.prevent_default();
                        menu_open.set(false);
                        set_body_scroll_locked(false);
                        scroll_to_top();
                    },
                    span { class: "logo-mark", "<" }
                    "{config.owner_name}"
                    span { class: "logo-mark", "/>" }
                }
                button {
                    r#type: "button",
                    class: if menu_open() { "hamburger active" } else { "hamburger" },
                    aria_label: "Toggle navigation menu",
                    aria_expanded: if menu_open() { "true" } else { "false" },
                    onclick: move |_| {
                        let next = !menu_open();
                        menu_open.set(next);
                        set_body_scroll_locked(next);
                    },
                    span { class: "hamburger-bar" }
                    span { class: "hamburger-bar" }
                    span { class: "hamburger-bar" }
                }
                ul { class: if menu_open() { "nav-menu active" } else { "nav-menu" },
                    for section in content::SECTIONS {
                        li { key: "{section.id}",
                            a {
                                href: "#{section.id}",
                                class: if active == Some(section.id) { "nav-link active" } else { "nav-link" },
                                onclick: move |event| {
                                    event.prevent_default();
                                    menu_open.set(false);
                                    set_body_scroll_locked(false);
                                    scroll_to_section(section.id);
                                },
                                "{section.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ScrollProgress() -> Element {
    let scroll = use_scroll_state();
    let width = (scroll.fraction)() * 100.0;
    rsx! {
        div { class: "scroll-progress", style: "width: {width:.2}%" }
    }
}

#[component]
pub fn BackToTop() -> Element {
    let scroll = use_scroll_state();
    rsx! {
        button {
            r#type: "button",
            class: if (scroll.top_button)() { "back-to-top visible" } else { "back-to-top" },
            aria_label: "Back to top",
            onclick: move |_| scroll_to_top(),
            "↑"
        }
    }
}
