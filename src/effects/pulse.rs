use crate::schedule::driver::FrameEffect;

/// Rhythmic "heartbeat" scale used on the logo: `base * (|sin(t * rate)| * amplitude + 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Heartbeat {
    pub base_scale: f64,
    pub rate: f64,
    pub amplitude: f64,
    scale: f64,
}

impl Heartbeat {
    pub fn new(base_scale: f64) -> Self {
        Self {
            base_scale,
            rate: 2.5,
            amplitude: 0.1,
            scale: base_scale,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn scale_at(&self, time: f64) -> f64 {
        self.base_scale * ((time * self.rate).sin().abs() * self.amplitude + 1.0)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl FrameEffect for Heartbeat {
    fn frame(&mut self, time: f64, _dt: f64) {
        self.scale = self.scale_at(time);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pulse.rs"]
mod tests;
