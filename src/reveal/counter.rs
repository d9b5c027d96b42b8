use crate::{
    animation::{ease::Ease, tween::Tween},
    document::host::Document,
    foundation::core::{ElementId, Viewport},
    reveal::trigger::{ThresholdLine, Zone},
};

/// Count-up number that runs once, the first time its element reaches the start line.
#[derive(Clone, Debug)]
pub struct CountUp {
    element: ElementId,
    target: f64,
    duration: f64,
    line: ThresholdLine,
    tween: Option<Tween<f64>>,
    fired: bool,
    shown: Option<i64>,
}

impl CountUp {
    /// Returns `None` if `element` is not in the document.
    pub fn new<D>(
        doc: &D,
        element: ElementId,
        target: f64,
        duration: f64,
        viewport: Viewport,
        start_fraction: f64,
    ) -> Option<Self>
    where
        D: Document + ?Sized,
    {
        let bounds = doc.bounds(element)?;
        let mut counter = Self {
            element,
            target,
            duration,
            line: ThresholdLine::measure(bounds, viewport, start_fraction),
            tween: None,
            fired: false,
            shown: None,
        };
        counter.on_scroll(viewport);
        Some(counter)
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn on_scroll(&mut self, viewport: Viewport) {
        if self.fired || self.line.zone(viewport) != Zone::AboveThreshold {
            return;
        }
        self.fired = true;
        self.tween = Some(Tween::new(0.0, self.target, Ease::OutQuad, 0.0, self.duration));
        tracing::debug!(element = %self.element, target = self.target, "count-up started");
    }

    pub fn refresh<D>(&mut self, doc: &D, viewport: Viewport, start_fraction: f64)
    where
        D: Document + ?Sized,
    {
        if let Some(bounds) = doc.bounds(self.element) {
            self.line = ThresholdLine::measure(bounds, viewport, start_fraction);
        }
        self.on_scroll(viewport);
    }

    pub fn tick<D>(&mut self, doc: &mut D, dt: f64)
    where
        D: Document + ?Sized,
    {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        let shown = tween.advance(dt).round() as i64;
        if tween.is_finished() {
            self.tween = None;
        }
        if self.shown != Some(shown) && doc.contains(self.element) {
            doc.set_text(self.element, &shown.to_string());
            self.shown = Some(shown);
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn is_running(&self) -> bool {
        self.tween.is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/counter.rs"]
mod tests;
