//! Typed async client for the deno.land third-party module registry.
//!
//! Module listings, search and statistics come from the API host and arrive
//! in a `{success, data, error}` envelope. Version lists, dependency graphs,
//! version metadata and raw source files come from the CDN host as plain JSON
//! or bytes.

pub mod client;
pub mod config;
pub mod decode;
pub mod endpoints;
pub(crate) mod error_handling;
pub mod urls;

pub use client::RegistryClient;
pub use config::{ClientConfig, HeaderConfig, HostConfig};
pub use decode::{
    decode_envelope, decode_json, BinaryDecoder, EnvelopeDecoder, JsonDecoder, ResponseDecoder,
};
pub use urls::RegistryUrls;

pub use deno_registry_core::{
    constants, error, BuildInfo, DependencyData, DependencyGraph, DependencyNode, DirectoryEntry,
    EntryKind, Error, ErrorCategory, ModuleQuery, ModuleSearchResult, ModuleSummary, RawSource,
    ReportedSort, Result, SearchOptions, SortOrder, SourceKind, StatsSnapshot, UploadOptions,
    VersionList, VersionMetadata,
};
