/// JSON API host; every response is wrapped in a success/error envelope
pub const API_BASE_URL: &str = "https://api.deno.land";

/// Content-delivery host serving per-version metadata and raw files, no envelope
pub const CDN_BASE_URL: &str = "https://cdn.deno.land";

/// User-Agent sent when the configuration does not override it
pub const DEFAULT_USER_AGENT: &str = concat!("deno-registry/", env!("CARGO_PKG_VERSION"));

/// Accept header for JSON endpoints
pub const DEFAULT_ACCEPT: &str = "application/json";

/// Accept header for raw source downloads
pub const RAW_ACCEPT: &str = "*/*";

/// Default page size for module listings
pub const DEFAULT_LIMIT: u32 = 20;

/// Default (1-based) page for module listings
pub const DEFAULT_PAGE: u32 = 1;
