use crate::{
    animation::{tween::Tween, visual::VisualState},
    document::host::Document,
    foundation::{
        core::{ElementId, Rect, Viewport, line_crossing_scroll},
        error::{MotionError, MotionResult},
    },
    reveal::{spec::RevealSpec, transition::Transition},
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TriggerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TriggerState {
    pub revealed: bool,
    pub handle: TriggerId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Zone {
    BelowThreshold,
    AboveThreshold,
}

/// Cached start line of one element: the scroll offset at which its top edge crosses
/// `fraction` of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdLine {
    pub bounds: Rect,
    pub start_scroll: f64,
}

impl ThresholdLine {
    pub fn measure(bounds: Rect, viewport: Viewport, fraction: f64) -> Self {
        Self {
            bounds,
            start_scroll: line_crossing_scroll(bounds, viewport.height, fraction),
        }
    }

    pub fn zone(&self, viewport: Viewport) -> Zone {
        if viewport.is_fully_below(self.bounds) {
            return Zone::BelowThreshold;
        }
        if viewport.scroll_y >= self.start_scroll {
            Zone::AboveThreshold
        } else {
            Zone::BelowThreshold
        }
    }
}

#[derive(Clone, Debug)]
struct Run {
    tween: Tween<VisualState>,
    start_progress: f64,
    target_progress: f64,
}

#[derive(Clone, Debug)]
struct Member {
    element: ElementId,
    forward_delay: f64,
    progress: f64, // linear position, 0 = hidden, 1 = revealed
    visual: VisualState,
    run: Option<Run>,
}

impl Member {
    /// Wait before this member starts moving when the group turns around at `timeline`.
    ///
    /// Forward, a member starts once the clock reaches its forward delay. Backward, it starts
    /// once the clock falls back to the time it finished (or would finish) revealing.
    fn turn_delay(&self, reveal: bool, timeline: f64, duration: f64) -> f64 {
        let wait = if reveal {
            self.forward_delay - timeline
        } else {
            timeline - (self.forward_delay + duration)
        };
        wait.max(0.0)
    }

    fn retarget(&mut self, transition: &Transition, reveal: bool, duration: f64, delay: f64) {
        let target_progress = if reveal { 1.0 } else { 0.0 };
        let distance = (target_progress - self.progress).abs();
        if distance <= f64::EPSILON {
            self.run = None;
            return;
        }
        self.run = Some(Run {
            tween: Tween::new(
                self.visual,
                transition.end_state(reveal),
                transition.ease,
                delay,
                duration * distance,
            ),
            start_progress: self.progress,
            target_progress,
        });
    }

    fn step(&mut self, dt: f64) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };
        self.visual = run.tween.advance(dt);
        let t = run.tween.progress();
        self.progress = run.start_progress + (run.target_progress - run.start_progress) * t;
        if run.tween.is_finished() {
            self.run = None;
        }
        true
    }
}

#[derive(Clone, Debug)]
struct Trigger {
    spec: RevealSpec,
    transition: Transition,
    state: TriggerState,
    line: ThresholdLine,
    members: Vec<Member>,
    // Group clock in forward-play seconds: runs up while revealed, down while hidden.
    timeline: f64,
    span: f64,
}

impl Trigger {
    fn step_clock(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        self.timeline = if self.state.revealed {
            (self.timeline + dt).min(self.span)
        } else {
            (self.timeline - dt).max(0.0)
        };
    }
}

/// Owns one visibility trigger per registered [`RevealSpec`] and every tween those triggers
/// start.
///
/// Triggers play forward when their element's top crosses the start line going down the page
/// and play back to hidden when it crosses back up. Crossings are evaluated against cached
/// lines; [`TriggerRegistry::refresh`] re-measures them after layout changes.
#[derive(Clone, Debug)]
pub struct TriggerRegistry {
    start_fraction: f64,
    next_handle: u64,
    triggers: Vec<Trigger>,
}

impl TriggerRegistry {
    pub fn new(start_fraction: f64) -> Self {
        Self {
            start_fraction,
            next_handle: 0,
            triggers: Vec::new(),
        }
    }

    /// Registers `spec` and applies its initial end state without animating.
    ///
    /// Returns `Ok(None)` if the element is no longer in the document, and an error if the
    /// element already owns a trigger.
    pub fn register<D>(
        &mut self,
        doc: &mut D,
        spec: RevealSpec,
        viewport: Viewport,
    ) -> MotionResult<Option<TriggerId>>
    where
        D: Document + ?Sized,
    {
        if let Some(existing) = self.handle_for(spec.element) {
            return Err(MotionError::registry(format!(
                "element {} already has trigger {}",
                spec.element, existing.0
            )));
        }
        let Some(bounds) = doc.bounds(spec.element) else {
            tracing::trace!(element = %spec.element, "element gone before registration");
            return Ok(None);
        };

        let line = ThresholdLine::measure(bounds, viewport, self.start_fraction);
        let revealed = line.zone(viewport) == Zone::AboveThreshold;
        let transition = Transition::for_style(spec.style);
        let initial = transition.end_state(revealed);

        let members: Vec<Member> = spec
            .targets()
            .into_iter()
            .map(|(element, forward_delay)| Member {
                element,
                forward_delay,
                progress: if revealed { 1.0 } else { 0.0 },
                visual: initial,
                run: None,
            })
            .collect();
        for m in &members {
            if doc.contains(m.element) {
                doc.apply_visual(m.element, m.visual);
            }
        }
        let span = members
            .iter()
            .map(|m| m.forward_delay)
            .fold(0.0, f64::max)
            + spec.duration;

        let handle = TriggerId(self.next_handle);
        self.next_handle += 1;
        tracing::debug!(
            element = %spec.element,
            style = spec.style.tag(),
            handle = handle.0,
            revealed,
            "registered reveal trigger"
        );
        self.triggers.push(Trigger {
            spec,
            transition,
            state: TriggerState { revealed, handle },
            line,
            timeline: if revealed { span } else { 0.0 },
            span,
            members,
        });
        Ok(Some(handle))
    }

    /// Evaluates every trigger against `viewport`, starting tweens for those that crossed.
    pub fn update<D>(&mut self, doc: &D, viewport: Viewport)
    where
        D: Document + ?Sized,
    {
        for trig in &mut self.triggers {
            let above = trig.line.zone(viewport) == Zone::AboveThreshold;
            if above == trig.state.revealed {
                continue;
            }
            if !doc.contains(trig.spec.element) {
                tracing::trace!(element = %trig.spec.element, "trigger element gone; skipping");
                continue;
            }
            trig.state.revealed = above;
            tracing::debug!(
                element = %trig.spec.element,
                handle = trig.state.handle.0,
                revealed = above,
                "trigger crossed start line"
            );
            let (timeline, duration) = (trig.timeline, trig.spec.duration);
            for m in &mut trig.members {
                let delay = m.turn_delay(above, timeline, duration);
                m.retarget(&trig.transition, above, duration, delay);
            }
        }
    }

    /// Re-measures every start line from live layout, then re-evaluates crossings.
    #[tracing::instrument(skip(self, doc))]
    pub fn refresh<D>(&mut self, doc: &D, viewport: Viewport)
    where
        D: Document + ?Sized,
    {
        for trig in &mut self.triggers {
            if let Some(bounds) = doc.bounds(trig.spec.element) {
                trig.line = ThresholdLine::measure(bounds, viewport, self.start_fraction);
            }
        }
        self.update(doc, viewport);
    }

    /// Advances in-flight tweens and writes the resulting visuals.
    pub fn tick<D>(&mut self, doc: &mut D, dt: f64)
    where
        D: Document + ?Sized,
    {
        for trig in &mut self.triggers {
            trig.step_clock(dt);
            for m in &mut trig.members {
                if m.step(dt) && doc.contains(m.element) {
                    doc.apply_visual(m.element, m.visual);
                }
            }
        }
    }

    /// Drops every trigger along with its in-flight tweens; returns how many were dropped.
    pub fn dispose_all(&mut self) -> usize {
        let n = self.triggers.len();
        self.triggers.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.triggers
            .iter()
            .any(|t| t.members.iter().any(|m| m.run.is_some()))
    }

    pub fn handle_for(&self, element: ElementId) -> Option<TriggerId> {
        self.state_for(element).map(|s| s.handle)
    }

    pub fn state(&self, handle: TriggerId) -> Option<TriggerState> {
        self.triggers
            .iter()
            .find(|t| t.state.handle == handle)
            .map(|t| t.state)
    }

    pub fn state_for(&self, element: ElementId) -> Option<TriggerState> {
        self.triggers
            .iter()
            .find(|t| t.spec.element == element)
            .map(|t| t.state)
    }

    pub fn states(&self) -> impl Iterator<Item = TriggerState> + '_ {
        self.triggers.iter().map(|t| t.state)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/trigger.rs"]
mod tests;
