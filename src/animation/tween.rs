use crate::animation::{ease::Ease, visual::Lerp};

/// A single interpolation from `from` to `to` over wall-clock seconds.
///
/// Time spent in `delay` holds the value at `from`. A non-positive `duration` completes as soon
/// as the delay has elapsed.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    ease: Ease,
    delay: f64,
    duration: f64,
    elapsed: f64, // includes delay
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    pub fn new(from: T, to: T, ease: Ease, delay: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            ease,
            delay: delay.max(0.0),
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f64) -> T {
        if dt > 0.0 {
            self.elapsed += dt;
        }
        self.value()
    }

    /// Unshaped progress through the active (post-delay) part, in `0..=1`.
    pub fn progress(&self) -> f64 {
        let active = self.elapsed - self.delay;
        if self.duration == 0.0 {
            return if self.elapsed > 0.0 && active >= 0.0 {
                1.0
            } else {
                0.0
            };
        }
        (active / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> T {
        let t = self.progress();
        if t >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(t))
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
