//! Headless motion engine for the Estecol corporate site.
//!
//! The site is a single page of static sections. What moves is driven from here:
//!
//! 1. **Scan**: `Document -> Vec<RevealSpec>` (which elements carry a `data-scroll-animate`
//!    annotation, with what timing)
//! 2. **Register**: one visibility trigger per spec, initial state applied before first paint
//! 3. **Scroll**: triggers that cross the start line play their transition forward, or back to
//!    hidden when scrolled back up
//! 4. **Frame**: tweens, count-ups, parallax drift and continuous effects advance by `dt`
//!
//! [`ScrollAnimator`] owns all of it and tears it down in one call. The host document is reached
//! only through the [`Document`] trait; [`Page`] is an in-memory implementation used by the CLI
//! and tests.
//!
//! The contact form's relay collaborator lives in [`contact`].
#![forbid(unsafe_code)]

mod animation;
mod config;
mod document;
mod effects;
mod foundation;
mod reveal;
mod schedule;

/// Contact-form validation and delivery through a form-to-email relay.
pub mod contact;

pub use animation::ease::Ease;
pub use animation::tween::Tween;
pub use animation::visual::{Lerp, VisualState};
pub use config::MotionConfig;
pub use document::host::Document;
pub use document::page::{Page, PageElement, PageSpec};
pub use effects::particles::ParticleRing;
pub use effects::pulse::Heartbeat;
pub use effects::tilt::HoverTilt;
pub use foundation::core::{ElementId, Rect, Vec2, Viewport, line_crossing_scroll};
pub use foundation::error::{MotionError, MotionResult};
pub use reveal::counter::CountUp;
pub use reveal::lifecycle::ScrollAnimator;
pub use reveal::parallax::{Parallax, Scrub};
pub use reveal::scan::{ANIMATE_ATTR, DELAY_ATTR, DURATION_ATTR, STAGGER_ATTR, scan};
pub use reveal::spec::{RevealSpec, RevealStyle, StaggerGroup};
pub use reveal::transition::Transition;
pub use reveal::trigger::{ThresholdLine, TriggerId, TriggerRegistry, TriggerState, Zone};
pub use schedule::driver::{DisposeToken, Drivers, EffectHandle, FrameEffect};
pub use schedule::timers::{TimerId, Timers};
