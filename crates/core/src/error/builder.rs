use super::{ConfigError, DecodeError, Error, NetworkError, RemoteError};
use std::path::PathBuf;

/// Builder for creating errors with a fluent API
pub struct ErrorBuilder;

impl ErrorBuilder {
    /// Transport errors
    pub fn network() -> NetworkErrorBuilder {
        NetworkErrorBuilder
    }

    /// Envelope failures reported by the API host
    pub fn remote(message: impl Into<String>, status: Option<u16>) -> Error {
        RemoteError::new(message, status).into()
    }

    /// Decode errors
    pub fn decode() -> DecodeErrorBuilder {
        DecodeErrorBuilder
    }

    /// Configuration errors
    pub fn config() -> ConfigErrorBuilder {
        ConfigErrorBuilder
    }

    /// Rejected caller input
    pub fn invalid_input(message: impl Into<String>) -> Error {
        Error::InvalidInput(message.into())
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Error {
        Error::Internal(message.into())
    }
}

pub struct NetworkErrorBuilder;

impl NetworkErrorBuilder {
    pub fn http_status(self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Error {
        NetworkError::http_status(url, status, body).into()
    }

    pub fn rate_limit(self, retry_after: Option<u64>) -> Error {
        NetworkError::rate_limit(retry_after).into()
    }

    pub fn request(self, err: reqwest::Error) -> Error {
        NetworkError::from_reqwest(err).into()
    }
}

pub struct DecodeErrorBuilder;

impl DecodeErrorBuilder {
    pub fn invalid_json(self, context: impl Into<String>, reason: impl ToString) -> Error {
        DecodeError::invalid_json(context, reason).into()
    }

    pub fn missing_data(self, context: impl Into<String>) -> Error {
        DecodeError::missing_data(context).into()
    }
}

pub struct ConfigErrorBuilder;

impl ConfigErrorBuilder {
    pub fn invalid_field(self, field: impl Into<String>, reason: impl Into<String>) -> Error {
        ConfigError::invalid_field(field, reason).into()
    }

    pub fn invalid_header(self, header: impl Into<String>, value: impl Into<String>) -> Error {
        ConfigError::invalid_header(header, value).into()
    }

    pub fn file_not_found(self, path: impl Into<PathBuf>) -> Error {
        ConfigError::file_not_found(path).into()
    }

    pub fn toml(self, reason: impl ToString) -> Error {
        ConfigError::toml(reason).into()
    }
}
