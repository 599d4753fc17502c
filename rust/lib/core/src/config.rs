use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::ServiceError;

/// Common configuration shared by the stores and the CLI.
///
/// Parsed from a TOML file (`load` / `from_toml_str`); binaries apply their
/// command-line overrides on top. Missing keys fall back to the defaults
/// below.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Directory holding fixture overrides (`customers.json`,
    /// `publications.json`). Embedded fixtures are used when unset.
    pub data_dir: Option<PathBuf>,

    /// Simulated store latency.
    pub latency: LatencyConfig,
}

/// Per-operation delays applied by the simulated-latency strategy.
///
/// Defaults reproduce the timings of the mock services the admin UI was
/// built against.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LatencyConfig {
    /// When false, every operation resolves immediately.
    pub enabled: bool,
    pub get_all_ms: u64,
    pub get_by_id_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            get_all_ms: 300,
            get_by_id_ms: 200,
            create_ms: 400,
            update_ms: 350,
            delete_ms: 250,
        }
    }
}

impl LatencyConfig {
    /// A configuration with latency switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// The same delay for every operation.
    pub fn uniform(ms: u64) -> Self {
        Self {
            enabled: true,
            get_all_ms: ms,
            get_by_id_ms: ms,
            create_ms: ms,
            update_ms: ms,
            delete_ms: ms,
        }
    }

    pub fn get_all(&self) -> Duration {
        Duration::from_millis(self.get_all_ms)
    }

    pub fn get_by_id(&self) -> Duration {
        Duration::from_millis(self.get_by_id_ms)
    }

    pub fn create(&self) -> Duration {
        Duration::from_millis(self.create_ms)
    }

    pub fn update(&self) -> Duration {
        Duration::from_millis(self.update_ms)
    }

    pub fn delete(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }
}

impl ServiceConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ServiceError> {
        toml::from_str(content)
            .map_err(|e| ServiceError::Validation(format!("invalid config: {}", e)))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ServiceError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ServiceError::Storage(format!("read config {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve a fixture file inside `data_dir`, if a data dir is configured.
    pub fn resolve_fixture_path(&self, file_name: &str) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|d| d.join(file_name))
    }
}
