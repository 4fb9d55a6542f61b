use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

#[cfg(target_arch = "wasm32")]
use crate::content;

pub const TYPE_TICK_MS: u32 = 100;
pub const ERASE_TICK_MS: u32 = 50;
pub const DWELL_MS: u32 = 2000;
pub const REST_MS: u32 = TYPE_TICK_MS + 500;
pub const START_DELAY_MS: u32 = DWELL_MS + 250;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Erasing,
}

/// Drives the hero headline one character at a time. Each call to
/// `advance` mutates the visible text and returns how long to wait
/// before the next call.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    chars: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: &[&str]) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            index: 0,
            chars: 0,
            phase: Phase::Typing,
        })
    }

    pub fn shown(&self) -> &str {
        let phrase = &self.phrases[self.index];
        let end = phrase
            .char_indices()
            .nth(self.chars)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    fn phrase_chars(&self) -> usize {
        self.phrases[self.index].chars().count()
    }

    pub fn advance(&mut self) -> u32 {
        match self.phase {
            Phase::Typing => {
                if self.chars < self.phrase_chars() {
                    self.chars += 1;
                    TYPE_TICK_MS
                } else {
                    // Full phrase is on screen. Dwell, then start erasing.
                    self.phase = Phase::Erasing;
                    DWELL_MS
                }
            }
            Phase::Erasing => {
                if self.chars > 0 {
                    self.chars -= 1;
                    ERASE_TICK_MS
                } else {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    REST_MS
                }
            }
        }
    }
}

#[component]
pub fn TypedHeadline() -> Element {
    let shown = use_signal(String::new);

    #[cfg(target_arch = "wasm32")]
    {
        let mut shown = shown;
        let mut started = use_signal(|| false);
        use_effect(move || {
            if started() {
                return;
            }
            started.set(true);
            let Some(mut machine) = Typewriter::new(content::TYPED_PHRASES) else {
                return;
            };
            spawn(async move {
                TimeoutFuture::new(START_DELAY_MS).await;
                loop {
                    let delay = machine.advance();
                    shown.set(machine.shown().to_string());
                    TimeoutFuture::new(delay).await;
                }
            });
        });
    }

    rsx! {
        span { class: "typed-text", "{shown}" }
        span { class: "typed-cursor", aria_hidden: "true", "|" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_empty_phrase_list() {
        assert!(Typewriter::new(&[]).is_none());
    }

    #[test]
    fn types_one_character_per_tick() {
        let mut tw = Typewriter::new(&["abc"]).unwrap();
        let mut seen = Vec::new();
        for _ in 0..3 {
            tw.advance();
            seen.push(tw.shown().to_string());
        }
        assert_eq!(seen, vec!["a", "ab", "abc"]);
    }

    #[test]
    fn delay_sequence_for_one_phrase_cycle() {
        let mut tw = Typewriter::new(&["ab"]).unwrap();
        let delays: Vec<u32> = (0..6).map(|_| tw.advance()).collect();
        assert_eq!(
            delays,
            vec![
                TYPE_TICK_MS,
                TYPE_TICK_MS,
                DWELL_MS,
                ERASE_TICK_MS,
                ERASE_TICK_MS,
                REST_MS,
            ]
        );
        // Back at the start of the same phrase.
        assert_eq!(tw.shown(), "");
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn visits_phrases_in_order_and_wraps() {
        let mut tw = Typewriter::new(&["ab", "c", "de"]).unwrap();
        let mut order = Vec::new();
        let mut last_index = tw.phrase_index();
        for _ in 0..60 {
            tw.advance();
            if tw.phrase_index() != last_index {
                order.push(tw.phrase_index());
                last_index = tw.phrase_index();
            }
        }
        assert_eq!(&order[..4], &[1, 2, 0, 1]);
    }

    #[test]
    fn erases_fully_before_next_phrase_appears() {
        let mut tw = Typewriter::new(&["ab", "xy"]).unwrap();
        loop {
            tw.advance();
            if tw.phrase_index() == 1 {
                break;
            }
        }
        // The switch happens on the tick after the last erase, so the
        // first phrase must already be gone.
        assert_eq!(tw.shown(), "");
    }

    #[test]
    fn handles_multibyte_phrases() {
        let mut tw = Typewriter::new(&["åäö"]).unwrap();
        tw.advance();
        assert_eq!(tw.shown(), "å");
        tw.advance();
        assert_eq!(tw.shown(), "åä");
        tw.advance();
        assert_eq!(tw.shown(), "åäö");
    }

    #[test]
    fn shown_never_exceeds_phrase() {
        let mut tw = Typewriter::new(&["hello", "hi"]).unwrap();
        for _ in 0..200 {
            tw.advance();
            let phrase_len = ["hello", "hi"][tw.phrase_index()].len();
            assert!(tw.shown().len() <= phrase_len);
        }
    }
}
