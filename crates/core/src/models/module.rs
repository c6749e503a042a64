use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A module as it appears in stats, listings and module lookups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Latest version known to the registry, when the endpoint reports one
    #[serde(default, alias = "latest_version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_count: Option<u64>,
    pub created_at: DateTime<Utc>,
}

/// Registry-wide upload statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_count: u64,
    pub total_versions: u64,
    pub recently_added_modules: Vec<ModuleSummary>,
    pub recently_uploaded_versions: Vec<ModuleSummary>,
}
