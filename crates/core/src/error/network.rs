use thiserror::Error;

/// Transport-level failures: the request failed or the status was not 2xx
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP {status} from {url}: {body}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Rate limit exceeded")]
    RateLimit { retry_after: Option<u64> },
}

impl NetworkError {
    pub fn http_status(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
            body: body.into(),
        }
    }

    pub fn rate_limit(retry_after: Option<u64>) -> Self {
        Self::RateLimit { retry_after }
    }

    /// Classify a transport error coming out of reqwest
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Reqwest(err)
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::HttpStatus { status, .. } => Some(*status),
            NetworkError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            NetworkError::RateLimit { .. } => Some(429),
            NetworkError::Timeout => None,
        }
    }

    /// Check if this error is temporary
    pub fn is_temporary(&self) -> bool {
        match self {
            NetworkError::Timeout | NetworkError::RateLimit { .. } => true,
            NetworkError::HttpStatus { status, .. } => *status >= 500,
            NetworkError::Reqwest(e) => e.is_connect() || e.is_timeout(),
        }
    }
}
