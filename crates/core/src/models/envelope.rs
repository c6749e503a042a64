use crate::error::{Error, ErrorBuilder, RemoteError};
use serde::{Deserialize, Serialize};

/// Wrapper the API host puts around every payload.
///
/// `success == false` carries `error`; `success == true` carries `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Message used when a failure envelope omits its `error` field
pub const UNKNOWN_REMOTE_ERROR: &str = "unknown error";

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            data: None,
        }
    }

    /// Unwrap the payload, turning a failure envelope into a [`RemoteError`].
    ///
    /// `context` names the endpoint for the decode error raised when a
    /// successful envelope has no `data`.
    pub fn into_result(self, context: &str, status: Option<u16>) -> Result<T, Error> {
        if !self.success {
            let message = self
                .error
                .unwrap_or_else(|| UNKNOWN_REMOTE_ERROR.to_string());
            return Err(RemoteError::new(message, status).into());
        }

        self.data
            .ok_or_else(|| ErrorBuilder::decode().missing_data(context))
    }
}

/// Response of the build lookup endpoint. Its schema is undocumented upstream.
pub type BuildInfo = serde_json::Value;
