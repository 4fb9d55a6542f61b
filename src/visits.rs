use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};

use crate::config::use_site_config;

pub const VISITS_KEY: &str = "portfolio.visits";

pub fn next_visit_count(previous: Option<u64>) -> u64 {
    previous.unwrap_or(0).saturating_add(1)
}

fn record_visit() -> u64 {
    let count = next_visit_count(LocalStorage::get(VISITS_KEY).ok());
    if LocalStorage::set(VISITS_KEY, count).is_err() {
        tracing::debug!("visits: count not persisted");
    }
    count
}

#[cfg(target_arch = "wasm32")]
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> u32 {
    2026
}

#[component]
pub fn SiteFooter() -> Element {
    let config = use_site_config();
    let mut visits = use_signal(|| None::<u64>);
    let mut recorded = use_signal(|| false);

    use_effect(move || {
        if recorded() {
            return;
        }
        recorded.set(true);
        visits.set(Some(record_visit()));
    });

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-inner",
                p { class: "footer-copy",
                    "© {current_year()} {config.owner_name}. All rights reserved."
                }
                p { class: "footer-note", "Hand-built with Rust and Dioxus. No trackers, just a local tally." }
                if let Some(count) = visits() {
                    span { class: "visit-badge", title: "Counted on this device only", "Visits: {count}" }
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
    fn first_visit_counts_as_one() {
        assert_eq!(next_visit_count(None), 1);
    }

    #[test]
    fn stored_count_increments_by_one() {
        assert_eq!(next_visit_count(Some(41)), 42);
    }

    #[test]
    fn count_saturates_instead_of_wrapping() {
        assert_eq!(next_visit_count(Some(u64::MAX)), u64::MAX);
    }
}
