//! Data models and error types shared by the deno.land registry client.
//!
//! Nothing in this crate performs I/O.

pub mod constants;
pub mod error;
pub mod models;

pub use error::{Error, ErrorBuilder, ErrorCategory, ErrorContext, Result};

// Re-export commonly used models for convenience
pub use models::{
    envelope::{ApiEnvelope, BuildInfo},
    module::{ModuleSummary, StatsSnapshot},
    search::{ModuleQuery, ModuleSearchResult, ReportedSort, SearchOptions, SortOrder},
    source::RawSource,
    versions::{
        DependencyData, DependencyGraph, DependencyNode, DirectoryEntry, EntryKind, SourceKind,
        UploadOptions, VersionList, VersionMetadata,
    },
};
