use thiserror::Error;

/// Failure reported by the API host through the response envelope.
///
/// Displays as the server's message with nothing prepended.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteError {
    message: String,
    status: Option<u16>,
}

impl RemoteError {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the response carrying the envelope, when it was not 2xx
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}
