use crate::{
    animation::visual::VisualState,
    document::host::Document,
    foundation::core::{ElementId, Rect, Viewport},
};

/// How closely a scrubbed effect follows the scroll position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Scrub {
    Instant,
    /// Exponential catch-up with this time constant, in seconds.
    Smoothed(f64),
}

/// Scroll-scrubbed vertical drift: `translateY = viewport height * speed * progress`, where
/// progress runs from 0 (element top at viewport bottom) to 1 (element bottom at viewport top).
#[derive(Clone, Debug)]
pub struct Parallax {
    element: ElementId,
    speed: f64,
    scrub: Scrub,
    bounds: Rect,
    viewport_height: f64,
    target: f64,
    current: f64,
}

impl Parallax {
    pub fn new<D>(
        doc: &mut D,
        element: ElementId,
        speed: f64,
        scrub: Scrub,
        viewport: Viewport,
    ) -> Option<Self>
    where
        D: Document + ?Sized,
    {
        let bounds = doc.bounds(element)?;
        let mut p = Self {
            element,
            speed,
            scrub,
            bounds,
            viewport_height: viewport.height,
            target: 0.0,
            current: 0.0,
        };
        p.target = p.offset_at(viewport);
        p.current = p.target;
        p.apply(doc);
        Some(p)
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn progress(&self, viewport: Viewport) -> f64 {
        let start = self.bounds.y0 - viewport.height;
        let end = self.bounds.y1;
        if end <= start {
            return 0.0;
        }
        ((viewport.scroll_y - start) / (end - start)).clamp(0.0, 1.0)
    }

    fn offset_at(&self, viewport: Viewport) -> f64 {
        self.viewport_height * self.speed * self.progress(viewport)
    }

    pub fn offset(&self) -> f64 {
        self.current
    }

    pub fn on_scroll<D>(&mut self, doc: &mut D, viewport: Viewport)
    where
        D: Document + ?Sized,
    {
        self.target = self.offset_at(viewport);
        if self.scrub == Scrub::Instant {
            self.current = self.target;
            self.apply(doc);
        }
    }

    pub fn refresh<D>(&mut self, doc: &mut D, viewport: Viewport)
    where
        D: Document + ?Sized,
    {
        if let Some(bounds) = doc.bounds(self.element) {
            self.bounds = bounds;
        }
        self.viewport_height = viewport.height;
        self.on_scroll(doc, viewport);
    }

    pub fn tick<D>(&mut self, doc: &mut D, dt: f64)
    where
        D: Document + ?Sized,
    {
        let Scrub::Smoothed(lag) = self.scrub else {
            return;
        };
        let gap = self.target - self.current;
        if gap.abs() < 1e-6 || dt <= 0.0 {
            return;
        }
        self.current = if lag <= 0.0 {
            self.target
        } else {
            self.current + gap * (1.0 - (-dt / lag).exp())
        };
        self.apply(doc);
    }

    fn apply<D>(&self, doc: &mut D)
    where
        D: Document + ?Sized,
    {
        if doc.contains(self.element) {
            doc.apply_visual(
                self.element,
                VisualState::IDENTITY.with_translate(0.0, self.current),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/parallax.rs"]
mod tests;
