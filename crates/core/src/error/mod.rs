mod builder;
mod config;
mod context;
mod decode;
mod network;
mod remote;

pub use builder::ErrorBuilder;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use decode::DecodeError;
pub use network::NetworkError;
pub use remote::RemoteError;

use thiserror::Error;

/// Main error type returned by every registry operation
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a usable response (connection, DNS, non-2xx status)
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The API host answered with `success: false`
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The body could not be decoded into the expected shape
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A caller-supplied identifier cannot be placed in a URL
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("URL parsing error")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Check if this error indicates a temporary issue.
    ///
    /// The client itself never retries; this is for callers that want to.
    pub fn is_temporary(&self) -> bool {
        match self {
            Error::Network(e) => e.is_temporary(),
            Error::Io(_) => true,
            _ => false,
        }
    }

    /// Server-supplied failure message, if the API host reported one
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Error::Remote(e) => Some(e.message()),
            _ => None,
        }
    }

    /// HTTP status attached to this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Network(e) => e.status(),
            Error::Remote(e) => e.status(),
            _ => None,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Network(_) => ErrorCategory::Transport,
            Error::Remote(_) => ErrorCategory::Remote,
            Error::Decode(_) => ErrorCategory::Decode,
            Error::Config(_) => ErrorCategory::Configuration,
            Error::InvalidInput(_) | Error::UrlParse(_) => ErrorCategory::Data,
            Error::Io(_) => ErrorCategory::Io,
            Error::Internal(_) => ErrorCategory::Internal,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::invalid_json("JSON value", err).into()
    }
}

/// Error categories for classification and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Transport,
    Remote,
    Decode,
    Configuration,
    Data,
    Io,
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Transport => write!(f, "transport"),
            ErrorCategory::Remote => write!(f, "remote"),
            ErrorCategory::Decode => write!(f, "decode"),
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::Data => write!(f, "data"),
            ErrorCategory::Io => write!(f, "io"),
            ErrorCategory::Internal => write!(f, "internal"),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
