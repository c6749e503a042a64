use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every published version of one module, from `meta/versions.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionList {
    pub latest: String,
    /// Known versions. The registry gives no ordering guarantee.
    pub versions: Vec<String>,
}

impl VersionList {
    pub fn contains(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// Body of `meta/deps_v2.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyData {
    pub graph: DependencyGraph,
}

/// Module graph keyed by specifier URL
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub nodes: BTreeMap<String, DependencyNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    /// Direct dependency specifiers of this node
    pub deps: Vec<String>,
    /// Size in bytes
    pub size: u64,
}

impl DependencyData {
    pub fn node(&self, specifier: &str) -> Option<&DependencyNode> {
        self.graph.nodes.get(specifier)
    }

    pub fn len(&self) -> usize {
        self.graph.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.nodes.is_empty()
    }

    /// Sum of the sizes of every node in the graph
    pub fn total_size(&self) -> u64 {
        self.graph.nodes.values().map(|n| n.size).sum()
    }
}

/// Body of `meta/meta.json` for one module version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionMetadata {
    pub uploaded_at: DateTime<Utc>,
    pub directory_listing: Vec<DirectoryEntry>,
    pub upload_options: UploadOptions,
}

impl VersionMetadata {
    /// File entries only, in listing order
    pub fn files(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.directory_listing
            .iter()
            .filter(|e| e.kind == EntryKind::File)
    }

    /// Total size of all listed files
    pub fn total_size(&self) -> u64 {
        self.files().filter_map(|e| e.size).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

/// Where an uploaded version was published from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOptions {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub repository: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdir: Option<String>,
    #[serde(rename = "ref")]
    pub git_ref: String,
}

/// Upload source. Tags other than `github` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceKind {
    Github,
    Other(String),
}

impl SourceKind {
    pub fn as_str(&self) -> &str {
        match self {
            SourceKind::Github => "github",
            SourceKind::Other(tag) => tag,
        }
    }
}

impl From<String> for SourceKind {
    fn from(tag: String) -> Self {
        if tag == "github" {
            SourceKind::Github
        } else {
            SourceKind::Other(tag)
        }
    }
}

impl From<SourceKind> for String {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Github => "github".to_string(),
            SourceKind::Other(tag) => tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version_list() {
        let list: VersionList = serde_json::from_value(json!({
            "latest": "1.2.3",
            "versions": ["1.0.0", "1.2.3"]
        }))
        .unwrap();

        assert_eq!(list.latest, "1.2.3");
        assert_eq!(list.len(), 2);
        assert!(list.contains("1.0.0"));
        assert!(!list.contains("2.0.0"));
    }

    #[test]
    fn test_dependency_graph() {
        let deps: DependencyData = serde_json::from_value(json!({
            "graph": {
                "nodes": {
                    "https://deno.land/std@0.83.0/fs/mod.ts": {
                        "deps": ["https://deno.land/std@0.83.0/fs/copy.ts"],
                        "size": 600
                    },
                    "https://deno.land/std@0.83.0/fs/copy.ts": {
                        "deps": [],
                        "size": 400
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(deps.len(), 2);
        assert_eq!(deps.total_size(), 1000);
        let root = deps.node("https://deno.land/std@0.83.0/fs/mod.ts").unwrap();
        assert_eq!(root.deps.len(), 1);
        assert!(deps.node("https://deno.land/std@0.83.0/missing.ts").is_none());
    }

    #[test]
    fn test_version_metadata() {
        let meta: VersionMetadata = serde_json::from_value(json!({
            "uploaded_at": "2020-11-26T10:26:44.593Z",
            "directory_listing": [
                { "path": "", "type": "dir", "size": 3000 },
                { "path": "/index.js", "type": "file", "size": 2000 },
                { "path": "/readme.md", "type": "file", "size": 1000 },
                { "path": "/src", "type": "dir" }
            ],
            "upload_options": {
                "type": "github",
                "repository": "sindresorhus/ky",
                "ref": "v0.23.0"
            }
        }))
        .unwrap();

        assert_eq!(meta.directory_listing[0].size, Some(3000));
        assert_eq!(meta.files().count(), 2);
        assert_eq!(meta.total_size(), 3000);
        assert_eq!(meta.upload_options.kind, SourceKind::Github);
        assert_eq!(meta.upload_options.repository, "sindresorhus/ky");
        assert_eq!(meta.upload_options.git_ref, "v0.23.0");
        assert_eq!(meta.upload_options.subdir, None);
    }

    #[test]
    fn test_unknown_source_kind() {
        let options: UploadOptions = serde_json::from_value(json!({
            "type": "gitlab",
            "repository": "someone/thing",
            "subdir": "lib/",
            "ref": "main"
        }))
        .unwrap();
        assert_eq!(options.kind, SourceKind::Other("gitlab".to_string()));
        assert_eq!(options.subdir.as_deref(), Some("lib/"));
    }

    #[test]
    fn test_source_kind_keeps_tag_when_serialized() {
        let options = UploadOptions {
            kind: SourceKind::Other("gitlab".to_string()),
            repository: "someone/thing".to_string(),
            subdir: None,
            git_ref: "main".to_string(),
        };
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["type"], "gitlab");
        assert_eq!(options.kind.as_str(), "gitlab");

        let github = serde_json::to_value(SourceKind::Github).unwrap();
        assert_eq!(github, "github");
        let back: UploadOptions = serde_json::from_value(value).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn test_unknown_entry_kind_is_rejected() {
        let entry = serde_json::from_value::<DirectoryEntry>(json!({
            "path": "/link", "type": "symlink"
        }));
        assert!(entry.is_err());
    }
}
