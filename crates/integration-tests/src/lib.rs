//! Shared helpers for the registry client integration tests.
//!
//! Every test runs against a local mockito server standing in for both the
//! API and CDN hosts.

pub mod common;

pub use deno_registry_client::{ClientConfig, HeaderConfig, HostConfig, RegistryClient};
pub use deno_registry_core::{error, Error, ErrorCategory};
pub use mockito::{Matcher, Server, ServerGuard};
pub use serde_json::{json, Value};
