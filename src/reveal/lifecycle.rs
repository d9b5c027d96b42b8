use crate::{
    config::MotionConfig,
    document::host::Document,
    foundation::{
        core::{ElementId, Viewport},
        error::MotionResult,
    },
    reveal::{
        counter::CountUp,
        parallax::{Parallax, Scrub},
        scan::scan,
        trigger::TriggerRegistry,
    },
    schedule::{
        driver::{Drivers, EffectHandle, FrameEffect},
        timers::Timers,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    Setup,
    Refresh,
}

/// Owns every scroll-driven animation of a page and its lifecycle.
///
/// The host forwards scroll and resize events and calls [`ScrollAnimator::advance`] once per
/// frame. All deferred work (the settle delay before scanning, the late refresh) lives in an
/// internal timer queue, so [`ScrollAnimator::cleanup`] can cancel it synchronously.
pub struct ScrollAnimator {
    config: MotionConfig,
    viewport: Viewport,
    root: Option<ElementId>,
    registry: TriggerRegistry,
    timers: Timers<Task>,
    counters: Vec<CountUp>,
    parallax: Vec<Parallax>,
    drivers: Drivers,
}

impl ScrollAnimator {
    pub fn new(config: MotionConfig, viewport: Viewport) -> MotionResult<Self> {
        config.validate()?;
        Ok(Self {
            registry: TriggerRegistry::new(config.start_fraction),
            config,
            viewport,
            root: None,
            timers: Timers::new(),
            counters: Vec::new(),
            parallax: Vec::new(),
            drivers: Drivers::new(),
        })
    }

    /// Restricts scans to the subtree under `root`.
    pub fn with_root(mut self, root: ElementId) -> Self {
        self.root = Some(root);
        self
    }

    /// Schedules a fresh scan + registration after the settle delay.
    ///
    /// Existing triggers and any setup still pending from an earlier call are dropped first, so
    /// calling this repeatedly never stacks triggers.
    #[tracing::instrument(skip(self))]
    pub fn initialize(&mut self) {
        let dropped = self.registry.dispose_all();
        let cancelled = self.timers.cancel_all();
        if dropped > 0 || cancelled > 0 {
            tracing::debug!(dropped, cancelled, "reset before re-initialization");
        }
        self.timers.schedule_after(self.config.settle_delay, Task::Setup);
    }

    /// Tears down triggers, tweens, counters, parallax effects, frame drivers and pending
    /// timers. Safe to call at any time, any number of times.
    #[tracing::instrument(skip(self))]
    pub fn cleanup(&mut self) {
        let triggers = self.registry.dispose_all();
        let timers = self.timers.cancel_all();
        self.counters.clear();
        self.parallax.clear();
        self.drivers.dispose_all();
        tracing::debug!(triggers, timers, "scroll animations cleaned up");
    }

    pub fn on_scroll<D>(&mut self, doc: &mut D, viewport: Viewport)
    where
        D: Document + ?Sized,
    {
        self.viewport = viewport;
        self.registry.update(doc, viewport);
        for c in &mut self.counters {
            c.on_scroll(viewport);
        }
        for p in &mut self.parallax {
            p.on_scroll(doc, viewport);
        }
    }

    pub fn on_resize<D>(&mut self, doc: &mut D, viewport: Viewport)
    where
        D: Document + ?Sized,
    {
        self.viewport = viewport;
        self.refresh(doc);
    }

    /// Re-measures every start line against current layout.
    pub fn refresh<D>(&mut self, doc: &mut D)
    where
        D: Document + ?Sized,
    {
        let vp = self.viewport;
        self.registry.refresh(doc, vp);
        for c in &mut self.counters {
            c.refresh(doc, vp, self.config.start_fraction);
        }
        for p in &mut self.parallax {
            p.refresh(doc, vp);
        }
    }

    /// One host frame: advance tweens and frame drivers by `dt` seconds, then run due timers.
    pub fn advance<D>(&mut self, doc: &mut D, dt: f64)
    where
        D: Document + ?Sized,
    {
        self.registry.tick(doc, dt);
        for c in &mut self.counters {
            c.tick(doc, dt);
        }
        for p in &mut self.parallax {
            p.tick(doc, dt);
        }
        self.drivers.tick(dt);

        for task in self.timers.advance(dt) {
            match task {
                Task::Setup => self.setup(doc),
                Task::Refresh => {
                    tracing::debug!("late refresh");
                    self.refresh(doc);
                }
            }
        }
    }

    fn setup<D>(&mut self, doc: &mut D)
    where
        D: Document + ?Sized,
    {
        let specs = scan(&*doc, self.root, &self.config);
        let mut registered = 0usize;
        for spec in specs {
            match self.registry.register(doc, spec, self.viewport) {
                Ok(Some(_)) => registered += 1,
                Ok(None) => {}
                Err(err) => tracing::warn!(%err, "reveal trigger not registered"),
            }
        }
        tracing::debug!(registered, "reveal triggers registered");
        self.refresh(doc);
        self.timers
            .schedule_after(self.config.late_refresh_delay, Task::Refresh);
    }

    /// Starts a once-only count-up on `element`; returns `false` if it is not in the document.
    pub fn count_up<D>(
        &mut self,
        doc: &D,
        element: ElementId,
        target: f64,
        duration: Option<f64>,
    ) -> bool
    where
        D: Document + ?Sized,
    {
        let duration = duration
            .filter(|d| *d > 0.0)
            .unwrap_or(self.config.counter_duration);
        match CountUp::new(
            doc,
            element,
            target,
            duration,
            self.viewport,
            self.config.start_fraction,
        ) {
            Some(c) => {
                self.counters.push(c);
                true
            }
            None => false,
        }
    }

    /// Attaches a scroll-scrubbed parallax drift to `element`.
    pub fn parallax<D>(&mut self, doc: &mut D, element: ElementId, speed: f64, scrub: Scrub) -> bool
    where
        D: Document + ?Sized,
    {
        match Parallax::new(doc, element, speed, scrub, self.viewport) {
            Some(p) => {
                self.parallax.push(p);
                true
            }
            None => false,
        }
    }

    /// Runs `effect` every frame until its handle is disposed or [`Self::cleanup`] is called.
    pub fn spawn_effect<E>(&mut self, effect: E) -> EffectHandle<E>
    where
        E: FrameEffect + 'static,
    {
        self.drivers.spawn(effect)
    }

    pub fn registry(&self) -> &TriggerRegistry {
        &self.registry
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn active_effects(&self) -> usize {
        self.drivers.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/lifecycle.rs"]
mod tests;
