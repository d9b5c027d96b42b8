use crate::{
    animation::{ease::Ease, visual::VisualState},
    reveal::spec::RevealStyle,
};

const FADE_UP_OFFSET: f64 = 60.0;
const SLIDE_OFFSET: f64 = 80.0;
const STAGGER_OFFSET: f64 = 50.0;
const SCALE_FROM: f64 = 0.85;
const SCALE_OVERSHOOT: f64 = 1.2;

/// Hidden/revealed end states of one reveal style and the curve between them.
///
/// For `Stagger` this describes a single member; the parent itself is never animated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Transition {
    pub from: VisualState,
    pub to: VisualState,
    pub ease: Ease,
}

impl Transition {
    pub fn for_style(style: RevealStyle) -> Self {
        let hidden = VisualState::hidden();
        let (from, ease) = match style {
            RevealStyle::FadeUp => (hidden.with_translate(0.0, FADE_UP_OFFSET), Ease::OutCubic),
            RevealStyle::FadeIn => (hidden, Ease::OutQuad),
            RevealStyle::SlideLeft => (hidden.with_translate(SLIDE_OFFSET, 0.0), Ease::OutCubic),
            RevealStyle::SlideRight => (hidden.with_translate(-SLIDE_OFFSET, 0.0), Ease::OutCubic),
            RevealStyle::Scale => (hidden.with_scale(SCALE_FROM), Ease::OutBack(SCALE_OVERSHOOT)),
            RevealStyle::Stagger => (hidden.with_translate(0.0, STAGGER_OFFSET), Ease::OutCubic),
        };
        Self {
            from,
            to: VisualState::IDENTITY,
            ease,
        }
    }

    pub fn end_state(&self, revealed: bool) -> VisualState {
        if revealed { self.to } else { self.from }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/transition.rs"]
mod tests;
