use crate::{client::RegistryClient, decode::EnvelopeDecoder};
use deno_registry_core::{ModuleQuery, ModuleSearchResult, ModuleSummary, Result};
use tracing::debug;

impl RegistryClient {
    /// Fetch one module by its exact name
    pub async fn get_module(&self, name: &str) -> Result<ModuleSummary> {
        let url = self.urls().module_url(name)?;
        self.fetch(url, EnvelopeDecoder::new(), "module").await
    }

    /// Page through all modules.
    ///
    /// ```no_run
    /// # async fn run() -> deno_registry_client::Result<()> {
    /// use deno_registry_client::{ModuleQuery, RegistryClient, SortOrder};
    ///
    /// let client = RegistryClient::new()?;
    /// let page = client
    ///     .list_modules(&ModuleQuery::new().with_limit(1).with_sort(SortOrder::Random))
    ///     .await?;
    /// if let Some(module) = page.results.first() {
    ///     println!("Today's module: {}", module.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_modules(&self, query: &ModuleQuery) -> Result<ModuleSearchResult> {
        let url = self.urls().list_modules_url(query)?;
        let result: ModuleSearchResult = self
            .fetch(url, EnvelopeDecoder::new(), "module list")
            .await?;

        debug!(
            total = result.total_count,
            returned = result.results.len(),
            page = query.page,
            "Listed modules"
        );

        Ok(result)
    }

    /// Search modules by name or description.
    ///
    /// The registry ranks matches itself and may ignore `sort` for searches,
    /// reporting `search_order` in the echoed options instead.
    pub async fn search_modules(
        &self,
        search: &str,
        query: &ModuleQuery,
    ) -> Result<ModuleSearchResult> {
        let url = self.urls().search_modules_url(search, query)?;
        let result: ModuleSearchResult = self
            .fetch(url, EnvelopeDecoder::new(), "module search")
            .await?;

        debug!(
            query = %search,
            total = result.total_count,
            returned = result.results.len(),
            "Searched modules"
        );

        Ok(result)
    }
}
