use serde_json::json;

use crate::{
    contact::{
        error::ContactError,
        form::{ContactSubmission, is_email_shaped},
    },
    foundation::error::{MotionError, MotionResult},
};

pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";
const NOT_PROVIDED: &str = "Not provided";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub access_key: String,
    /// Mailbox the relay forwards submissions to.
    pub recipient: String,
}

impl RelayConfig {
    pub fn new(access_key: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            endpoint: default_endpoint(),
            access_key: access_key.into(),
            recipient: recipient.into(),
        }
    }

    pub fn from_json_str(s: &str) -> MotionResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| MotionError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> MotionResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(MotionError::config("relay endpoint must not be empty"));
        }
        if self.access_key.trim().is_empty() {
            return Err(MotionError::config("relay access_key must not be empty"));
        }
        if !is_email_shaped(&self.recipient) {
            return Err(MotionError::config("relay recipient must be an email address"));
        }
        Ok(())
    }
}

/// Raw reply from the relay endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayReply {
    pub status: u16,
    pub body: serde_json::Value,
}

/// One JSON request/response exchange with the relay. Supplied by the host.
pub trait RelayTransport {
    fn post_json(&self, url: &str, body: &serde_json::Value) -> anyhow::Result<RelayReply>;
}

/// The contact-submission collaborator: delivers a validated submission or says why it could not.
pub trait ContactRelay {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// Delivers submissions through a hosted form-to-email relay. No retries.
pub struct FormRelay<T> {
    config: RelayConfig,
    transport: T,
}

impl<T> FormRelay<T>
where
    T: RelayTransport,
{
    pub fn new(config: RelayConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn payload(&self, s: &ContactSubmission) -> serde_json::Value {
        json!({
            "access_key": self.config.access_key,
            "subject": format!("New website contact - {}", s.display_sender()),
            "from_name": s.name.trim(),
            "email": s.email.trim(),
            "to": self.config.recipient,
            "message": format_body(s),
            "phone": or_not_provided(&s.phone),
            "company": or_not_provided(&s.company),
        })
    }

    fn deliver(&self, s: &ContactSubmission) -> Result<(), ContactError> {
        let reply = self
            .transport
            .post_json(&self.config.endpoint, &self.payload(s))
            .map_err(|e| ContactError::delivery(format!("{e:#}")))?;

        if !(200..300).contains(&reply.status) {
            return Err(ContactError::delivery(format!(
                "relay returned HTTP {}",
                reply.status
            )));
        }
        if reply.body.get("success").and_then(|v| v.as_bool()) != Some(true) {
            let reason = reply
                .body
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("relay rejected the message");
            return Err(ContactError::delivery(reason));
        }
        Ok(())
    }
}

impl<T> ContactRelay for FormRelay<T>
where
    T: RelayTransport,
{
    #[tracing::instrument(skip_all)]
    fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        match self.deliver(submission) {
            Ok(()) => {
                tracing::info!("contact submission delivered");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(reason = %err.reason(), "contact submission failed");
                Err(err)
            }
        }
    }
}

fn or_not_provided(s: &str) -> &str {
    let s = s.trim();
    if s.is_empty() { NOT_PROVIDED } else { s }
}

pub fn format_body(s: &ContactSubmission) -> String {
    format!(
        "New contact message from the website\n\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Company: {}\n\n\
         Message:\n{}",
        s.name.trim(),
        s.email.trim(),
        or_not_provided(&s.phone),
        or_not_provided(&s.company),
        s.message.trim(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/contact/relay.rs"]
mod tests;
