//! Per-endpoint response decoding.
//!
//! The API host wraps every payload in an [`ApiEnvelope`]; the CDN host
//! serves bare JSON or raw files. Each endpoint picks exactly one strategy.

use crate::error_handling::{handle_http_response, read_body, retry_after, status_error};
use async_trait::async_trait;
use deno_registry_core::{
    constants::RAW_ACCEPT, models::envelope::UNKNOWN_REMOTE_ERROR, ApiEnvelope, ErrorBuilder,
    RawSource, Result,
};
use reqwest::{header::CONTENT_TYPE, Response};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::{trace, warn};

/// Turns an HTTP response into the value an endpoint returns
#[async_trait]
pub trait ResponseDecoder: Send + Sync {
    type Output: Send;

    /// `Accept` header to send instead of the configured one
    fn accept_override(&self) -> Option<&'static str> {
        None
    }

    async fn decode(&self, response: Response, context: &str) -> Result<Self::Output>;
}

/// Unwraps `{ success, error, data }` and decodes `data` as `T`
pub struct EnvelopeDecoder<T>(PhantomData<fn() -> T>);

impl<T> EnvelopeDecoder<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for EnvelopeDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> ResponseDecoder for EnvelopeDecoder<T>
where
    T: DeserializeOwned + Send,
{
    type Output = T;

    async fn decode(&self, response: Response, context: &str) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = read_body(response).await?;
            return decode_envelope(&body, context);
        }

        let url = response.url().to_string();
        let retry_after = retry_after(&response);
        let body = read_body(response).await?;

        // Failures often still carry an envelope; its message is more useful
        // than the bare status.
        if let Some(message) = failure_message(&body) {
            warn!(
                url = %url,
                status = %status,
                context = %context,
                error = %message,
                "Registry API reported failure"
            );
            return Err(ErrorBuilder::remote(message, Some(status.as_u16())));
        }

        Err(status_error(
            &url,
            status,
            retry_after,
            &String::from_utf8_lossy(&body),
            context,
        ))
    }
}

/// Decodes the body directly as `T`
pub struct JsonDecoder<T>(PhantomData<fn() -> T>);

impl<T> JsonDecoder<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for JsonDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> ResponseDecoder for JsonDecoder<T>
where
    T: DeserializeOwned + Send,
{
    type Output = T;

    async fn decode(&self, response: Response, context: &str) -> Result<T> {
        let response = handle_http_response(response, context).await?;
        let body = read_body(response).await?;
        decode_json(&body, context)
    }
}

/// Returns the body untouched
#[derive(Debug, Default)]
pub struct BinaryDecoder;

#[async_trait]
impl ResponseDecoder for BinaryDecoder {
    type Output = RawSource;

    fn accept_override(&self) -> Option<&'static str> {
        Some(RAW_ACCEPT)
    }

    async fn decode(&self, response: Response, context: &str) -> Result<RawSource> {
        let response = handle_http_response(response, context).await?;
        let url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = read_body(response).await?;

        trace!(
            url = %url,
            content_type = ?content_type,
            size = bytes.len(),
            "Downloaded raw source"
        );

        Ok(RawSource {
            url,
            content_type,
            bytes,
        })
    }
}

/// Decode the enveloped body of a 2xx response
pub fn decode_envelope<T>(body: &[u8], context: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_slice(body)
        .map_err(|e| ErrorBuilder::decode().invalid_json(context, e))?;

    let data = envelope.into_result(context, None)?;

    serde_json::from_value(data).map_err(|e| ErrorBuilder::decode().invalid_json(context, e))
}

/// Decode a bare JSON body
pub fn decode_json<T>(body: &[u8], context: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|e| ErrorBuilder::decode().invalid_json(context, e))
}

fn failure_message(body: &[u8]) -> Option<String> {
    let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_slice(body).ok()?;
    if envelope.success {
        return None;
    }
    Some(
        envelope
            .error
            .unwrap_or_else(|| UNKNOWN_REMOTE_ERROR.to_string()),
    )
}
