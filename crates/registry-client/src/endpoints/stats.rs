use crate::{client::RegistryClient, decode::EnvelopeDecoder};
use deno_registry_core::{BuildInfo, Result, StatsSnapshot};

impl RegistryClient {
    /// Fetch registry-wide upload statistics.
    ///
    /// ```no_run
    /// # async fn run() -> deno_registry_client::Result<()> {
    /// let client = deno_registry_client::RegistryClient::new()?;
    /// let stats = client.get_stats().await?;
    /// println!("deno.land/x has {} modules", stats.total_count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_stats(&self) -> Result<StatsSnapshot> {
        let url = self.urls().stats_url()?;
        self.fetch(url, EnvelopeDecoder::new(), "stats").await
    }

    /// Look up a build by id. The payload schema is undocumented, so it is
    /// returned as raw JSON.
    pub async fn get_build(&self, build_id: &str) -> Result<BuildInfo> {
        let url = self.urls().build_url(build_id)?;
        self.fetch(url, EnvelopeDecoder::new(), "build").await
    }
}
