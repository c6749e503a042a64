use bytes::Bytes;
use std::borrow::Cow;

/// One file downloaded from the CDN, exactly as served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSource {
    /// URL the file was fetched from
    pub url: String,
    /// `Content-Type` reported by the CDN; interpreting it is up to the caller
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl RawSource {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// View the content as text, replacing invalid UTF-8 sequences
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}
