use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
use crate::content;

pub const NAV_SOLID_AT: f64 = 50.0;
pub const TOP_BUTTON_AT: f64 = 300.0;
pub const SECTION_TRIGGER_MARGIN: f64 = 100.0;
#[cfg(target_arch = "wasm32")]
const NAV_HEIGHT_FALLBACK: f64 = 70.0;

pub fn scroll_fraction(offset: f64, scrollable: f64) -> f64 {
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Index of the last section whose top edge sits at or above the
/// reference line (the scroll offset plus navbar height and margin).
pub fn active_section(offset: f64, section_tops: &[f64], nav_height: f64) -> Option<usize> {
    let mut current = None;
    for (index, top) in section_tops.iter().enumerate() {
        if offset >= top - nav_height - SECTION_TRIGGER_MARGIN {
            current = Some(index);
        }
    }
    current
}

/// Everything on the page that reacts to scrolling reads these signals.
/// They are fed by the one window listener that `ScrollWatch` owns.
#[derive(Clone, Copy)]
pub struct ScrollState {
    pub fraction: Signal<f64>,
    pub nav_solid: Signal<bool>,
    pub top_button: Signal<bool>,
    pub active_section: Signal<Option<&'static str>>,
}

pub fn use_scroll_state_provider() -> ScrollState {
    let fraction = use_signal(|| 0.0f64);
    let nav_solid = use_signal(|| false);
    let top_button = use_signal(|| false);
    let active_section = use_signal(|| None::<&'static str>);
    use_context_provider(|| ScrollState {
        fraction,
        nav_solid,
        top_button,
        active_section,
    })
}

pub fn use_scroll_state() -> ScrollState {
    use_context::<ScrollState>()
}

#[cfg(target_arch = "wasm32")]
struct ScrollListener {
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

#[component]
pub fn ScrollWatch() -> Element {
    let state = use_scroll_state();
    #[cfg(target_arch = "wasm32")]
    let mut listener = use_signal(|| None::<ScrollListener>);
    #[cfg(not(target_arch = "wasm32"))]
    let _listener = state;

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if listener.read().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        tracing::debug!("scroll: attach window listener");
        let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
            apply_scroll_snapshot(state);
        }) as Box<dyn FnMut(_)>));
        let _ = window
            .add_event_listener_with_callback("scroll", closure.as_ref().as_ref().unchecked_ref());
        // Seed the signals so a reload mid-page starts correct.
        apply_scroll_snapshot(state);
        listener.set(Some(ScrollListener { closure }));
    });

    #[cfg(target_arch = "wasm32")]
    {
        let listener = listener;
        use_drop(move || {
            let binding = listener.read();
            let Some(listener) = binding.as_ref() else {
                return;
            };
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    listener.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    rsx! {}
}

#[cfg(target_arch = "wasm32")]
fn apply_scroll_snapshot(state: ScrollState) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    let scrollable = document
        .document_element()
        .map(|root| (root.scroll_height() - root.client_height()) as f64)
        .unwrap_or(0.0);

    let mut fraction = state.fraction;
    fraction.set(scroll_fraction(offset, scrollable));

    let solid = past_threshold(offset, NAV_SOLID_AT);
    if *state.nav_solid.peek() != solid {
        let mut nav_solid = state.nav_solid;
        nav_solid.set(solid);
    }

    let show_top = past_threshold(offset, TOP_BUTTON_AT);
    if *state.top_button.peek() != show_top {
        let mut top_button = state.top_button;
        top_button.set(show_top);
    }

    let nav_height = nav_offset_height(&document);
    let mut tops = Vec::new();
    let mut ids = Vec::new();
    for section in content::SECTIONS {
        let Some(element) = document.get_element_by_id(section.id) else {
            continue;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        tops.push(element.offset_top() as f64);
        ids.push(section.id);
    }
    let active = active_section(offset, &tops, nav_height).map(|index| ids[index]);
    if *state.active_section.peek() != active {
        let mut active_section = state.active_section;
        active_section.set(active);
    }
}

#[cfg(target_arch = "wasm32")]
fn nav_offset_height(document: &web_sys::Document) -> f64 {
    document
        .get_element_by_id("navbar")
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|element| element.offset_height() as f64)
        .unwrap_or(NAV_HEIGHT_FALLBACK)
}

pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(element) = document.get_element_by_id(id) else {
            tracing::debug!("scroll: no section with id {id}");
            return;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let top = (element.offset_top() as f64 - nav_offset_height(&document)).max(0.0);
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fraction_is_zero_when_nothing_scrolls() {
        assert_eq!(scroll_fraction(250.0, 0.0), 0.0);
        assert_eq!(scroll_fraction(250.0, -40.0), 0.0);
    }

    #[test]
    fn fraction_tracks_progress_and_clamps() {
        assert_eq!(scroll_fraction(0.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(500.0, 1000.0), 0.5);
        assert_eq!(scroll_fraction(1000.0, 1000.0), 1.0);
        assert_eq!(scroll_fraction(1500.0, 1000.0), 1.0);
        assert_eq!(scroll_fraction(-10.0, 1000.0), 0.0);
    }

    #[test]
    fn thresholds_are_strictly_greater_than() {
        assert!(!past_threshold(TOP_BUTTON_AT, TOP_BUTTON_AT));
        assert!(past_threshold(TOP_BUTTON_AT + 0.5, TOP_BUTTON_AT));
        assert!(!past_threshold(NAV_SOLID_AT - 1.0, NAV_SOLID_AT));
    }

    #[test]
    fn no_active_section_above_the_first() {
        let tops = [1000.0, 2000.0];
        assert_eq!(active_section(0.0, &tops, 70.0), None);
    }

    #[test]
    fn active_section_takes_the_last_match() {
        let tops = [0.0, 600.0, 1400.0];
        assert_eq!(active_section(0.0, &tops, 70.0), Some(0));
        assert_eq!(active_section(500.0, &tops, 70.0), Some(1));
        assert_eq!(active_section(2000.0, &tops, 70.0), Some(2));
    }

    #[test]
    fn active_section_boundary_is_inclusive() {
        let tops = [500.0];
        let boundary = 500.0 - 70.0 - SECTION_TRIGGER_MARGIN;
        assert_eq!(active_section(boundary, &tops, 70.0), Some(0));
        assert_eq!(active_section(boundary - 0.1, &tops, 70.0), None);
    }

    #[test]
    fn active_section_handles_empty_page() {
        assert_eq!(active_section(400.0, &[], 70.0), None);
    }
}
