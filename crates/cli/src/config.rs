use anyhow::{Context, Result};
use deno_registry_client::ClientConfig;
use std::{env, path::Path, time::Duration};

pub const ENV_USER_AGENT: &str = "DENO_REGISTRY_USER_AGENT";
pub const ENV_ACCEPT: &str = "DENO_REGISTRY_ACCEPT";
pub const ENV_API_URL: &str = "DENO_REGISTRY_API_URL";
pub const ENV_CDN_URL: &str = "DENO_REGISTRY_CDN_URL";
pub const ENV_TIMEOUT: &str = "DENO_REGISTRY_TIMEOUT";

/// Values given on the command line, applied last
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub user_agent: Option<String>,
}

/// Build the client configuration: defaults, then the TOML file, then the
/// environment, then command line flags.
pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<ClientConfig> {
    let mut config = match path {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };

    apply_env(&mut config, |key| env::var(key).ok())?;
    apply_overrides(&mut config, overrides);

    config.validate()?;
    Ok(config)
}

fn apply_env<F>(config: &mut ClientConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(user_agent) = lookup(ENV_USER_AGENT) {
        config.headers.user_agent = Some(user_agent);
    }
    if let Some(accept) = lookup(ENV_ACCEPT) {
        config.headers.accept = Some(accept);
    }
    if let Some(api_base) = lookup(ENV_API_URL) {
        config.hosts.api_base = api_base;
    }
    if let Some(cdn_base) = lookup(ENV_CDN_URL) {
        config.hosts.cdn_base = cdn_base;
    }
    if let Some(timeout) = lookup(ENV_TIMEOUT) {
        let timeout = timeout
            .parse()
            .ok()
            .and_then(|secs: f64| Duration::try_from_secs_f64(secs).ok())
            .with_context(|| {
                format!("{ENV_TIMEOUT} must be a number of seconds, got {timeout:?}")
            })?;
        *config = std::mem::take(config).with_timeout(timeout);
    }

    Ok(())
}

fn apply_overrides(config: &mut ClientConfig, overrides: &Overrides) {
    if let Some(user_agent) = &overrides.user_agent {
        config.headers.user_agent = Some(user_agent.clone());
    }
}
