//! CLI configuration: an optional TOML file plus command-line overrides.

use std::path::{Path, PathBuf};

use paperdesk_core::{LatencyConfig, ServiceConfig};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub no_latency: bool,
    pub latency_ms: Option<u64>,
}

/// Load the config file (if given) and apply overrides on top.
pub fn resolve(path: Option<&Path>, overrides: Overrides) -> anyhow::Result<ServiceConfig> {
    let mut config = match path {
        Some(path) => ServiceConfig::load(path)
            .map_err(|e| anyhow::anyhow!("failed to load config: {}", e))?,
        None => ServiceConfig::default(),
    };

    if let Some(dir) = overrides.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(ms) = overrides.latency_ms {
        config.latency = LatencyConfig::uniform(ms);
    }
    // --no-latency wins over everything else.
    if overrides.no_latency {
        config.latency.enabled = false;
    }

    Ok(config)
}
