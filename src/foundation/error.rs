/// Result type returned by the motion engine's fallible APIs.
pub type MotionResult<T> = Result<T, MotionError>;

/// Errors raised while loading pages and config or registering triggers.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Malformed page data (duplicate ids, inverted bounds).
    #[error("validation error: {0}")]
    Validation(String),

    /// A trigger could not be registered, e.g. the element already owns one.
    #[error("registry error: {0}")]
    Registry(String),

    /// An out-of-range tunable in [`crate::MotionConfig`] or a relay config.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when deserializing pages or configs.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MotionError::Registry`] value.
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Build a [`MotionError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`MotionError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
