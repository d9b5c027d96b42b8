/// Failures surfaced to whoever submits the contact form.
///
/// `Display` is the user-facing text; [`ContactError::reason`] keeps the underlying detail for
/// logs.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("please fill in the required field: {0}")]
    MissingField(&'static str),

    #[error("please enter a valid email address")]
    InvalidEmail,

    #[error("the message could not be sent, please try again")]
    Delivery(String),
}

impl ContactError {
    pub fn delivery(reason: impl Into<String>) -> Self {
        Self::Delivery(reason.into())
    }

    pub fn reason(&self) -> String {
        match self {
            Self::Delivery(reason) => reason.clone(),
            other => other.to_string(),
        }
    }
}
