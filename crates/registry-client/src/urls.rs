//! Endpoint URL builders.
//!
//! Pure functions of their arguments: nothing here touches the network.
//! Every interpolated identifier is percent-encoded as a single path segment
//! or query value, so reserved characters in module names, versions or file
//! paths cannot change the shape of the request.

use crate::config::HostConfig;
use deno_registry_core::{ErrorBuilder, ErrorContext, ModuleQuery, Result};
use std::borrow::Cow;
use tracing::trace;
use url::Url;

/// URL templates for every registry endpoint, bound to a pair of hosts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryUrls {
    api_base: String,
    cdn_base: String,
}

impl Default for RegistryUrls {
    fn default() -> Self {
        Self::from_hosts(&HostConfig::default())
    }
}

impl RegistryUrls {
    pub fn new(api_base: &str, cdn_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            cdn_base: cdn_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_hosts(hosts: &HostConfig) -> Self {
        Self::new(&hosts.api_base, &hosts.cdn_base)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn cdn_base(&self) -> &str {
        &self.cdn_base
    }

    /// `GET {api}/stats`
    pub fn stats_url(&self) -> Result<Url> {
        parse(format!("{}/stats", self.api_base))
    }

    /// `GET {api}/builds/{build_id}`
    pub fn build_url(&self, build_id: &str) -> Result<Url> {
        let build_id = segment("build id", build_id)?;
        parse(format!("{}/builds/{build_id}", self.api_base))
    }

    /// `GET {api}/modules/{name}`
    pub fn module_url(&self, name: &str) -> Result<Url> {
        let name = segment("module name", name)?;
        parse(format!("{}/modules/{name}", self.api_base))
    }

    /// `GET {api}/modules?limit=&page=&sort=`
    pub fn list_modules_url(&self, query: &ModuleQuery) -> Result<Url> {
        parse(format!(
            "{}/modules?limit={}&page={}&sort={}",
            self.api_base, query.limit, query.page, query.sort
        ))
    }

    /// `GET {api}/modules?limit=&page=&sort=&query=`
    pub fn search_modules_url(&self, search: &str, query: &ModuleQuery) -> Result<Url> {
        let search = urlencoding::encode(search);
        parse(format!(
            "{}/modules?limit={}&page={}&sort={}&query={search}",
            self.api_base, query.limit, query.page, query.sort
        ))
    }

    /// `GET {cdn}/{name}/meta/versions.json`
    pub fn versions_url(&self, name: &str) -> Result<Url> {
        let name = segment("module name", name)?;
        parse(format!("{}/{name}/meta/versions.json", self.cdn_base))
    }

    /// `GET {cdn}/{name}/versions/{version}/meta/deps_v2.json`
    pub fn deps_url(&self, name: &str, version: &str) -> Result<Url> {
        let base = self.version_base(name, version)?;
        parse(format!("{base}/meta/deps_v2.json"))
    }

    /// `GET {cdn}/{name}/versions/{version}/meta/meta.json`
    pub fn metadata_url(&self, name: &str, version: &str) -> Result<Url> {
        let base = self.version_base(name, version)?;
        parse(format!("{base}/meta/meta.json"))
    }

    /// `GET {cdn}/{name}/versions/{version}/raw{path}`
    ///
    /// `path` is a file path inside the module (`/README.md`); the leading
    /// slash is optional and each of its segments is encoded on its own.
    pub fn raw_source_url(&self, name: &str, version: &str, path: &str) -> Result<Url> {
        let base = self.version_base(name, version)?;
        let path = file_path(path)?;
        parse(format!("{base}/raw{path}"))
    }

    fn version_base(&self, name: &str, version: &str) -> Result<String> {
        let name = segment("module name", name)?;
        let version = segment("version", version)?;
        Ok(format!("{}/{name}/versions/{version}", self.cdn_base))
    }
}

fn parse(raw: String) -> Result<Url> {
    trace!(url = %raw, "Built registry URL");
    Url::parse(&raw).with_context(|| format!("Failed to construct URL {raw}"))
}

/// Encode one path segment, rejecting values the URL parser would
/// collapse or resolve as relative references.
fn segment<'a>(what: &str, value: &'a str) -> Result<Cow<'a, str>> {
    if value.is_empty() {
        return Err(ErrorBuilder::invalid_input(format!("{what} cannot be empty")));
    }
    if value == "." || value == ".." {
        return Err(ErrorBuilder::invalid_input(format!(
            "{what} cannot be '{value}'"
        )));
    }
    Ok(urlencoding::encode(value))
}

/// Encode a file path segment by segment. Only the leading `/` is optional;
/// doubled or trailing slashes would name a different file, so they fail.
fn file_path(path: &str) -> Result<String> {
    let relative = path.strip_prefix('/').unwrap_or(path);
    if relative.is_empty() {
        return Err(ErrorBuilder::invalid_input("source path cannot be empty"));
    }

    let mut encoded = String::with_capacity(relative.len() + 1);
    for part in relative.split('/') {
        encoded.push('/');
        encoded.push_str(&segment("source path segment", part).map_err(|_| {
            ErrorBuilder::invalid_input(format!(
                "source path {path:?} has an empty or dot segment"
            ))
        })?);
    }
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deno_registry_core::{Error, SortOrder};
    use std::collections::HashMap;

    fn urls() -> RegistryUrls {
        RegistryUrls::default()
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    fn segments(url: &Url) -> Vec<String> {
        url.path_segments()
            .unwrap()
            .map(|s| urlencoding::decode(s).unwrap().into_owned())
            .collect()
    }

    #[test]
    fn test_api_host_urls() {
        assert_eq!(urls().stats_url().unwrap().as_str(), "https://api.deno.land/stats");
        assert_eq!(
            urls().build_url("c2a2f8e1").unwrap().as_str(),
            "https://api.deno.land/builds/c2a2f8e1"
        );
        assert_eq!(
            urls().module_url("lodash").unwrap().as_str(),
            "https://api.deno.land/modules/lodash"
        );
    }

    #[test]
    fn test_list_modules_defaults() {
        let url = urls().list_modules_url(&ModuleQuery::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.deno.land/modules?limit=20&page=1&sort=stars"
        );
    }

    #[test]
    fn test_list_modules_query_matches_arguments() {
        let cases = [
            (1, 1, SortOrder::Random),
            (100, 7, SortOrder::Newest),
            (0, 0, SortOrder::Oldest),
            (u32::MAX, 2, SortOrder::Stars),
        ];

        for (limit, page, sort) in cases {
            let query = ModuleQuery::new()
                .with_limit(limit)
                .with_page(page)
                .with_sort(sort);
            let url = urls().list_modules_url(&query).unwrap();
            let params = query_map(&url);

            assert_eq!(url.path(), "/modules");
            assert_eq!(params.len(), 3);
            assert_eq!(params["limit"], limit.to_string());
            assert_eq!(params["page"], page.to_string());
            assert_eq!(params["sort"], sort.as_str());
        }
    }

    #[test]
    fn test_search_modules_url() {
        let url = urls()
            .search_modules_url("middleware", &ModuleQuery::new().with_limit(100))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.deno.land/modules?limit=100&page=1&sort=stars&query=middleware"
        );
    }

    #[test]
    fn test_search_query_is_encoded() {
        let url = urls()
            .search_modules_url("a&sort=random b", &ModuleQuery::default())
            .unwrap();
        let params = query_map(&url);

        assert_eq!(params.len(), 4);
        assert_eq!(params["sort"], "stars");
        assert_eq!(params["query"], "a&sort=random b");
    }

    #[test]
    fn test_cdn_host_urls() {
        assert_eq!(
            urls().versions_url("harmony").unwrap().as_str(),
            "https://cdn.deno.land/harmony/meta/versions.json"
        );
        assert_eq!(
            urls().deps_url("std", "0.83.0").unwrap().as_str(),
            "https://cdn.deno.land/std/versions/0.83.0/meta/deps_v2.json"
        );
        assert_eq!(
            urls().metadata_url("ky", "v0.23.0").unwrap().as_str(),
            "https://cdn.deno.land/ky/versions/v0.23.0/meta/meta.json"
        );
        assert_eq!(
            urls()
                .raw_source_url("urlcat", "v2.0.4", "/README.md")
                .unwrap()
                .as_str(),
            "https://cdn.deno.land/urlcat/versions/v2.0.4/raw/README.md"
        );
    }

    #[test]
    fn test_raw_source_path_variants() {
        let nested = urls()
            .raw_source_url("std", "0.83.0", "/fs/mod.ts")
            .unwrap();
        assert_eq!(nested.path(), "/std/versions/0.83.0/raw/fs/mod.ts");

        let no_leading_slash = urls().raw_source_url("std", "0.83.0", "fs/mod.ts").unwrap();
        assert_eq!(no_leading_slash, nested);

        assert!(urls().raw_source_url("std", "0.83.0", "").is_err());
        assert!(urls().raw_source_url("std", "0.83.0", "/").is_err());
    }

    #[test]
    fn test_raw_source_path_keeps_every_segment() {
        for path in ["/fs//mod.ts", "/fs/", "//mod.ts", "fs/./mod.ts"] {
            assert!(
                matches!(
                    urls().raw_source_url("std", "0.83.0", path).unwrap_err(),
                    Error::InvalidInput(_)
                ),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_url_safe_identifiers_round_trip() {
        let cases = [
            ("oak", "v6.5.0", "/mod.ts"),
            ("std", "0.83.0", "/http/server.ts"),
            ("deno_dom", "v0.1.3-alpha", "/src/api.ts"),
        ];

        for (name, version, path) in cases {
            let url = urls().raw_source_url(name, version, path).unwrap();
            let segs = segments(&url);
            assert_eq!(segs[0], name);
            assert_eq!(segs[1], "versions");
            assert_eq!(segs[2], version);
            assert_eq!(segs[3], "raw");
            assert_eq!(format!("/{}", segs[4..].join("/")), path);
        }
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let url = urls().module_url("evil/../../stats?x=1#frag").unwrap();
        assert_eq!(url.path_segments().unwrap().count(), 2);
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        assert_eq!(segments(&url)[1], "evil/../../stats?x=1#frag");

        let url = urls()
            .raw_source_url("mod", "v1", "/dir with space/file#1.ts")
            .unwrap();
        let segs = segments(&url);
        assert_eq!(segs[4], "dir with space");
        assert_eq!(segs[5], "file#1.ts");
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        assert!(matches!(
            urls().module_url("..").unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(urls().versions_url(".").is_err());
        assert!(urls().deps_url("std", "..").is_err());
        // '%' is itself encoded, so this stays a literal segment
        let url = urls().deps_url("std", "%2e%2e").unwrap();
        assert_eq!(url.path(), "/std/versions/%252e%252e/meta/deps_v2.json");
        assert!(urls().raw_source_url("std", "0.83.0", "/../../secret").is_err());
        assert!(urls().module_url("").is_err());
    }

    #[test]
    fn test_custom_hosts_trailing_slash_is_stripped() {
        let urls = RegistryUrls::new("http://127.0.0.1:1234/", "http://127.0.0.1:5678/");
        assert_eq!(urls.api_base(), "http://127.0.0.1:1234");
        assert_eq!(
            urls.stats_url().unwrap().as_str(),
            "http://127.0.0.1:1234/stats"
        );
        assert_eq!(
            urls.versions_url("oak").unwrap().as_str(),
            "http://127.0.0.1:5678/oak/meta/versions.json"
        );
    }
}
