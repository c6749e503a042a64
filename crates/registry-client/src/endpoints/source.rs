use crate::{client::RegistryClient, decode::BinaryDecoder};
use deno_registry_core::{RawSource, Result};

impl RegistryClient {
    /// Download one file of a module version as raw bytes.
    ///
    /// Sends `Accept: */*` regardless of the configured header. The body is
    /// returned as-is; no JSON parsing is attempted.
    ///
    /// ```no_run
    /// # async fn run() -> deno_registry_client::Result<()> {
    /// let client = deno_registry_client::RegistryClient::new()?;
    /// let readme = client.get_raw_source("urlcat", "v2.0.4", "/README.md").await?;
    /// std::fs::write("README.md", &readme.bytes)?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_raw_source(&self, name: &str, version: &str, path: &str) -> Result<RawSource> {
        let url = self.urls().raw_source_url(name, version, path)?;
        self.fetch(url, BinaryDecoder, "raw source").await
    }
}
