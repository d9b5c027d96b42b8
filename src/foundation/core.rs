pub use kurbo::{Rect, Vec2};

/// Opaque handle the host uses to identify a document element.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Visible window onto the document, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64, // document offset of the viewport top
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    pub fn scrolled_to(self, scroll_y: f64) -> Self {
        Self { scroll_y, ..self }
    }

    /// Document-space y of the viewport bottom edge.
    pub fn bottom(self) -> f64 {
        self.scroll_y + self.height
    }

    /// Whether `bounds` lies entirely under the viewport bottom edge.
    pub fn is_fully_below(self, bounds: Rect) -> bool {
        bounds.y0 >= self.bottom()
    }
}

/// Scroll offset at which an element's top edge reaches `fraction` of the viewport height.
pub fn line_crossing_scroll(bounds: Rect, viewport_height: f64, fraction: f64) -> f64 {
    bounds.y0 - viewport_height * fraction
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
