use crate::{client::RegistryClient, decode::JsonDecoder};
use deno_registry_core::{DependencyData, Result, VersionList, VersionMetadata};

impl RegistryClient {
    /// Fetch the latest version and every known version of a module
    pub async fn list_versions(&self, name: &str) -> Result<VersionList> {
        let url = self.urls().versions_url(name)?;
        self.fetch(url, JsonDecoder::new(), "version list").await
    }

    /// Fetch the dependency graph of one module version.
    ///
    /// The CDN only publishes graphs for some modules; a missing graph is a
    /// 404 transport error.
    pub async fn list_dependencies(&self, name: &str, version: &str) -> Result<DependencyData> {
        let url = self.urls().deps_url(name, version)?;
        self.fetch(url, JsonDecoder::new(), "dependency graph").await
    }

    /// Fetch upload time, directory listing and provenance of a module version
    pub async fn get_metadata(&self, name: &str, version: &str) -> Result<VersionMetadata> {
        let url = self.urls().metadata_url(name, version)?;
        self.fetch(url, JsonDecoder::new(), "version metadata").await
    }
}
