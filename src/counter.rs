use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

use crate::reveal::{use_reveal, PANEL_REVEAL};

pub const COUNT_STEPS: u32 = 20;
pub const COUNT_TICK_MS: u32 = 50;

/// Counts from zero to `target` in `COUNT_STEPS` even increments,
/// snapping to the exact target on the final tick.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
    target: u64,
    increment: f64,
    accumulated: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            increment: target as f64 / COUNT_STEPS as f64,
            accumulated: 0.0,
            done: false,
        }
    }

    pub fn tick(&mut self) -> u64 {
        if self.done {
            return self.target;
        }
        self.accumulated += self.increment;
        if self.accumulated >= self.target as f64 {
            self.done = true;
            self.target
        } else {
            self.accumulated as u64
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[component]
pub fn StatCounter(value: u64, suffix: String, label: String) -> Element {
    let reveal = use_reveal(PANEL_REVEAL);
    let mut shown = use_signal(|| 0u64);
    let mut started = use_signal(|| false);

    use_effect(move || {
        if !reveal.revealed() || started() {
            return;
        }
        started.set(true);
        #[cfg(target_arch = "wasm32")]
        {
            let mut machine = CountUp::new(value);
            spawn(async move {
                loop {
                    TimeoutFuture::new(COUNT_TICK_MS).await;
                    shown.set(machine.tick());
                    if machine.is_done() {
                        break;
                    }
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        shown.set(value);
    });

    rsx! {
        div {
            class: if reveal.revealed() { "stat-box revealed" } else { "stat-box" },
            onmounted: move |event| reveal.on_mounted(event),
            span { class: "stat-value", "{shown}{suffix}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_completion(target: u64) -> (Vec<u64>, u32) {
        let mut machine = CountUp::new(target);
        let mut shown = Vec::new();
        let mut ticks = 0;
        while !machine.is_done() {
            shown.push(machine.tick());
            ticks += 1;
            assert!(ticks <= COUNT_STEPS + 1, "target {target} never settled");
        }
        (shown, ticks)
    }

    #[test]
    fn zero_target_completes_on_first_tick() {
        let mut machine = CountUp::new(0);
        assert_eq!(machine.tick(), 0);
        assert!(machine.is_done());
    }

    #[test]
    fn round_target_takes_exactly_the_step_count() {
        let (shown, ticks) = run_to_completion(120);
        assert_eq!(ticks, COUNT_STEPS);
        assert_eq!(shown.first(), Some(&6));
        assert_eq!(shown.last(), Some(&120));
    }

    #[test]
    fn display_is_monotonic_and_never_overshoots() {
        for target in [1u64, 6, 7, 85, 98, 120, 999] {
            let (shown, _) = run_to_completion(target);
            let mut previous = 0;
            for value in &shown {
                assert!(*value >= previous, "target {target} went backwards");
                assert!(*value <= target, "target {target} overshot");
                previous = *value;
            }
            assert_eq!(shown.last(), Some(&target));
        }
    }

    #[test]
    fn ticks_after_completion_hold_the_target() {
        let mut machine = CountUp::new(42);
        while !machine.is_done() {
            machine.tick();
        }
        assert_eq!(machine.tick(), 42);
        assert_eq!(machine.tick(), 42);
    }
}
