use deno_registry_core::{Error, ErrorBuilder, Result};
use reqwest::{header::RETRY_AFTER, Response, StatusCode};
use tracing::warn;

/// Longest response body kept in a transport error
const MAX_ERROR_BODY: usize = 512;

/// Pass 2xx responses through, turn anything else into a transport error
pub(crate) async fn handle_http_response(response: Response, context: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let retry_after = retry_after(&response);
    let body = response.text().await.unwrap_or_default();
    Err(status_error(&url, status, retry_after, &body, context))
}

/// Build the transport error for a non-2xx response whose body is already read
pub(crate) fn status_error(
    url: &str,
    status: StatusCode,
    retry_after: Option<u64>,
    body: &str,
    context: &str,
) -> Error {
    warn!(
        url = %url,
        status = %status,
        context = %context,
        "HTTP request failed"
    );

    match status {
        StatusCode::TOO_MANY_REQUESTS => ErrorBuilder::network().rate_limit(retry_after),
        _ => ErrorBuilder::network().http_status(url, status.as_u16(), truncate(body)),
    }
}

/// Seconds from a numeric `Retry-After` header
pub(crate) fn retry_after(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Read the full body, mapping transport failures mid-stream
pub(crate) async fn read_body(response: Response) -> Result<bytes::Bytes> {
    response
        .bytes()
        .await
        .map_err(|e| ErrorBuilder::network().request(e))
}

fn truncate(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
