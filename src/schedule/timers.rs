#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

#[derive(Clone, Debug)]
struct Pending<T> {
    id: TimerId,
    due: f64,
    task: T,
}

/// Cooperative one-shot timer queue driven by the host's frame clock.
///
/// Nothing runs on its own: [`Timers::advance`] moves the clock and hands back every task that
/// came due, ordered by due time and then by scheduling order.
#[derive(Clone, Debug)]
pub struct Timers<T> {
    now: f64,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn schedule_after(&mut self, delay: f64, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay.max(0.0),
            task,
        });
        id
    }

    /// Drops every pending task; returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn advance(&mut self, dt: f64) -> Vec<T> {
        if dt > 0.0 {
            self.now += dt;
        }
        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|p| p.due <= now);
        self.pending = rest;
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)));
        due.into_iter().map(|p| p.task).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/timers.rs"]
mod tests;
