pub mod error;
pub mod form;
pub mod relay;

pub use error::ContactError;
pub use form::{ContactSubmission, is_email_shaped};
pub use relay::{ContactRelay, DEFAULT_ENDPOINT, FormRelay, RelayConfig, RelayReply, RelayTransport};
