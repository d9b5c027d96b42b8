use crate::foundation::core::Vec2;

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// The animatable subset of an element's style: opacity, a 2D translation in pixels, and a
/// uniform scale about the element centre.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    pub opacity: f64,
    pub translate: Vec2,
    pub scale: f64,
}

impl VisualState {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::IDENTITY
        }
    }

    pub fn with_translate(self, x: f64, y: f64) -> Self {
        Self {
            translate: Vec2::new(x, y),
            ..self
        }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Largest per-channel difference, used to compare states in tests and logs.
    pub fn distance(&self, other: &Self) -> f64 {
        let d = [
            (self.opacity - other.opacity).abs(),
            (self.translate.x - other.translate.x).abs(),
            (self.translate.y - other.translate.y).abs(),
            (self.scale - other.scale).abs(),
        ];
        d.into_iter().fold(0.0, f64::max)
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for VisualState {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
        }
    }
}
