use thiserror::Error;

/// Response bodies that do not match the expected schema
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to decode {context}: {reason}")]
    InvalidJson { context: String, reason: String },

    #[error("Response envelope for {context} reported success without data")]
    MissingData { context: String },
}

impl DecodeError {
    pub fn invalid_json(context: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidJson {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    pub fn missing_data(context: impl Into<String>) -> Self {
        Self::MissingData {
            context: context.into(),
        }
    }
}
