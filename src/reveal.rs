use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use dioxus::web::WebEventExt;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

pub const STAGGER_STEP_MS: u32 = 100;

/// How far up the page an element must come before it reveals.
///
/// `viewport_ratio` mirrors the classic `elementTop < innerHeight / ratio`
/// trigger: the reveal line sits at `1/ratio` of the viewport height,
/// expressed here as a negative bottom root margin. `threshold` is the
/// visible fraction required when no ratio is set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTuning {
    pub viewport_ratio: Option<f64>,
    pub threshold: f64,
}

pub const PANEL_REVEAL: RevealTuning = RevealTuning {
    viewport_ratio: Some(1.2),
    threshold: 0.0,
};

pub const CARD_REVEAL: RevealTuning = RevealTuning {
    viewport_ratio: Some(1.3),
    threshold: 0.0,
};

pub const IMAGE_REVEAL: RevealTuning = RevealTuning {
    viewport_ratio: None,
    threshold: 0.1,
};

pub fn viewport_ratio_margin(ratio: f64) -> String {
    let pct = ((1.0 - 1.0 / ratio) * 100.0).round() as i32;
    if pct <= 0 {
        return "0px".to_string();
    }
    format!("0px 0px -{pct}% 0px")
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _closure: Rc<Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

/// One-shot visibility latch for a rendered element. Flips to revealed
/// the first time the element crosses the tuning's trigger line and
/// stays revealed afterwards.
#[derive(Clone, Copy)]
pub struct Reveal {
    revealed: Signal<bool>,
    #[cfg(target_arch = "wasm32")]
    target: Signal<Option<web_sys::Element>>,
}

impl Reveal {
    pub fn revealed(&self) -> bool {
        (self.revealed)()
    }

    pub fn on_mounted(&self, event: Event<MountedData>) {
        #[cfg(target_arch = "wasm32")]
        {
            let element = event.data.as_ref().as_web_event();
            let mut target = self.target;
            target.set(Some(element));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = event;
            let mut revealed = self.revealed;
            revealed.set(true);
        }
    }
}

pub fn use_reveal(tuning: RevealTuning) -> Reveal {
    let revealed = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    let target = use_signal(|| None::<web_sys::Element>);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = tuning;

    #[cfg(target_arch = "wasm32")]
    {
        let mut observer_handle = use_signal(|| None::<ObserverHandle>);
        use_effect(move || {
            let mut revealed = revealed;
            if revealed() || observer_handle.read().is_some() {
                return;
            }
            let Some(element) = target.read().as_ref().cloned() else {
                return;
            };
            let closure = Rc::new(Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let entry = entries.get(0);
                    if entry.is_null() || entry.is_undefined() {
                        return;
                    }
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        revealed.set(true);
                        observer.disconnect();
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));

            let init = web_sys::IntersectionObserverInit::new();
            if let Some(ratio) = tuning.viewport_ratio {
                init.set_root_margin(&viewport_ratio_margin(ratio));
            }
            if tuning.threshold > 0.0 {
                init.set_threshold(&JsValue::from_f64(tuning.threshold));
            }
            let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                closure.as_ref().as_ref().unchecked_ref(),
                &init,
            ) else {
                // No observer support, show the element right away.
                tracing::debug!("reveal: observer unavailable, revealing immediately");
                revealed.set(true);
                return;
            };
            observer.observe(&element);
            observer_handle.set(Some(ObserverHandle {
                observer,
                _closure: closure,
            }));
        });

        let observer_handle = observer_handle;
        use_drop(move || {
            if let Some(handle) = observer_handle.read().as_ref() {
                handle.observer.disconnect();
            }
        });
    }

    Reveal {
        revealed,
        #[cfg(target_arch = "wasm32")]
        target,
    }
}

const PLACEHOLDER_SRC: &str =
    "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='3' height='2'%3E%3C/svg%3E";

#[component]
pub fn LazyImage(src: String, alt: String, class: Option<String>) -> Element {
    let reveal = use_reveal(IMAGE_REVEAL);
    let loaded = reveal.revealed();
    let base = match class {
        Some(extra) => format!("lazy-img {extra}"),
        None => "lazy-img".to_string(),
    };
    let shown_src = if loaded {
        src
    } else {
        PLACEHOLDER_SRC.to_string()
    };

    rsx! {
        img {
            class: if loaded { "{base} loaded" } else { "{base}" },
            src: "{shown_src}",
            alt: "{alt}",
            onmounted: move |event| reveal.on_mounted(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn panel_ratio_maps_to_sixth_of_viewport() {
        assert_eq!(viewport_ratio_margin(1.2), "0px 0px -17% 0px");
    }

    #[test]
    fn card_ratio_maps_to_deeper_line() {
        assert_eq!(viewport_ratio_margin(1.3), "0px 0px -23% 0px");
    }

    #[test]
    fn whole_viewport_ratio_needs_no_margin() {
        assert_eq!(viewport_ratio_margin(1.0), "0px");
    }

    #[test]
    fn stagger_grows_linearly_with_position() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), STAGGER_STEP_MS);
        assert_eq!(stagger_delay_ms(5), 5 * STAGGER_STEP_MS);
    }

    #[test]
    fn tunings_cover_both_trigger_styles() {
        assert!(PANEL_REVEAL.viewport_ratio.is_some());
        assert!(CARD_REVEAL.viewport_ratio.unwrap() > PANEL_REVEAL.viewport_ratio.unwrap());
        assert!(IMAGE_REVEAL.viewport_ratio.is_none());
        assert!(IMAGE_REVEAL.threshold > 0.0);
    }
}
