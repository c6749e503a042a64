use std::path::PathBuf;
use thiserror::Error;

/// Rejected client configuration. Raised before any request is sent.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid `{field}` setting: {reason}")]
    InvalidField { field: String, reason: String },

    /// The value cannot be sent as an HTTP header (control characters, non-visible ASCII)
    #[error("{header} header cannot be sent as {value:?}")]
    InvalidHeader { header: String, value: String },

    #[error("Config file {} does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Malformed TOML config: {reason}")]
    Toml { reason: String },
}

impl ConfigError {
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_header(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidHeader {
            header: header.into(),
            value: value.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn toml(reason: impl ToString) -> Self {
        Self::Toml {
            reason: reason.to_string(),
        }
    }
}
