use super::module::ModuleSummary;
use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort order a caller can request for module listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Stars,
    Newest,
    Oldest,
    Random,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Stars => "stars",
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Random => "random",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stars" => Ok(SortOrder::Stars),
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "random" => Ok(SortOrder::Random),
            other => Err(format!(
                "unknown sort order '{other}' (expected stars, newest, oldest or random)"
            )),
        }
    }
}

/// Sort order echoed back by the server, which may rank searches by relevance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportedSort {
    Stars,
    Newest,
    Oldest,
    Random,
    SearchOrder,
}

impl From<SortOrder> for ReportedSort {
    fn from(sort: SortOrder) -> Self {
        match sort {
            SortOrder::Stars => ReportedSort::Stars,
            SortOrder::Newest => ReportedSort::Newest,
            SortOrder::Oldest => ReportedSort::Oldest,
            SortOrder::Random => ReportedSort::Random,
        }
    }
}

/// Paging and ordering for module list and search requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleQuery {
    pub limit: u32,
    pub page: u32,
    pub sort: SortOrder,
}

impl Default for ModuleQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
            sort: SortOrder::default(),
        }
    }
}

impl ModuleQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Options the server applied to produce a result page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub limit: u32,
    pub page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub sort: ReportedSort,
}

/// One page of modules, in server rank order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSearchResult {
    pub total_count: u64,
    pub options: SearchOptions,
    pub results: Vec<ModuleSummary>,
}

impl ModuleSearchResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether pages after this one may hold more results
    pub fn has_more(&self) -> bool {
        let seen = u64::from(self.options.page.saturating_sub(1)) * u64::from(self.options.limit)
            + self.results.len() as u64;
        seen < self.total_count
    }
}
