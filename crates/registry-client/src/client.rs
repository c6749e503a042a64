use crate::{config::ClientConfig, decode::ResponseDecoder, urls::RegistryUrls};
use deno_registry_core::{ErrorBuilder, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client,
};
use tracing::{debug, trace, warn};
use url::Url;

/// Client for the deno.land registry.
///
/// Holds no per-request state: every method is one independent GET, so a
/// single instance (or its clones, which share one connection pool) can be
/// used from many tasks at once.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: Client,
    config: ClientConfig,
    urls: RegistryUrls,
}

impl RegistryClient {
    /// Client with the default headers and the public deno.land hosts
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let user_agent = config.headers.effective_user_agent();
        let accept = config.headers.effective_accept();

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|_| ErrorBuilder::config().invalid_header("User-Agent", user_agent))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(accept)
                .map_err(|_| ErrorBuilder::config().invalid_header("Accept", accept))?,
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ErrorBuilder::network().request(e))?;

        let urls = RegistryUrls::from_hosts(&config.hosts);

        debug!(
            user_agent = %user_agent,
            accept = %accept,
            api_base = %urls.api_base(),
            cdn_base = %urls.cdn_base(),
            "Created registry client"
        );

        Ok(Self {
            client,
            config,
            urls,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn urls(&self) -> &RegistryUrls {
        &self.urls
    }

    /// Issue one GET and decode the response with `decoder`
    pub(crate) async fn fetch<D>(&self, url: Url, decoder: D, context: &str) -> Result<D::Output>
    where
        D: ResponseDecoder,
    {
        trace!(url = %url, context = %context, "Sending registry request");

        let mut request = self.client.get(url.clone());
        if let Some(accept) = decoder.accept_override() {
            request = request.header(ACCEPT, accept);
        }

        let response = request.send().await.map_err(|e| {
            warn!(url = %url, context = %context, error = %e, "Registry request failed");
            ErrorBuilder::network().request(e)
        })?;

        let status = response.status();
        let output = decoder.decode(response, context).await?;

        debug!(url = %url, status = %status, context = %context, "Registry request completed");

        Ok(output)
    }
}

#[cfg(test)]
impl RegistryClient {
    /// Client whose API and CDN hosts both point at `base_url`
    pub(crate) fn test_client(base_url: &str) -> Self {
        let hosts = crate::config::HostConfig::new(base_url, base_url);
        Self::with_config(ClientConfig::new().with_hosts(hosts))
            .expect("Failed to create test client")
    }
}
