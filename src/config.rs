use crate::foundation::error::{MotionError, MotionResult};

/// Tunables for the scroll-reveal engine.
///
/// Every field has a serde default, so `{}` is a valid config. Times are seconds unless the
/// name says otherwise.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Fraction of viewport height, from the top, that an element's top edge must cross.
    pub start_fraction: f64,
    pub settle_delay: f64,
    pub late_refresh_delay: f64,
    pub default_duration: f64,
    pub default_stagger: f64,
    pub counter_duration: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            start_fraction: 0.85,
            settle_delay: 0.1,
            late_refresh_delay: 0.5,
            default_duration: 0.5,
            default_stagger: 0.1,
            counter_duration: 2.0,
        }
    }
}

impl MotionConfig {
    pub fn from_json_str(s: &str) -> MotionResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| MotionError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> MotionResult<()> {
        if !(self.start_fraction > 0.0 && self.start_fraction <= 1.0) {
            return Err(MotionError::config("start_fraction must be in (0, 1]"));
        }
        for (name, v) in [
            ("settle_delay", self.settle_delay),
            ("late_refresh_delay", self.late_refresh_delay),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(MotionError::config(format!("{name} must be >= 0")));
            }
        }
        for (name, v) in [
            ("default_duration", self.default_duration),
            ("default_stagger", self.default_stagger),
            ("counter_duration", self.counter_duration),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(MotionError::config(format!("{name} must be > 0")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
