//! # sigscan-config
//!
//! Hierarchical configuration for the ambient pieces of the matcher: how
//! many worker threads the compute device gets, which device backend to
//! construct, whether the table buffer is reused across depths, and the
//! log level. None of these change match semantics — they size and wire
//! the pipeline, per spec.md §5's "either is acceptable" framing of the
//! buffer-reuse choice.

mod error;

pub use error::ConfigError;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Which [`sigscan_device::ComputeDevice`] backend to construct. Only
/// `Cpu` ships in this repo; the variant exists so a future GPU backend
/// has a configuration slot without a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceBackend {
    #[default]
    Cpu,
}

/// Top-level configuration for a match run.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchConfig {
    /// Worker threads handed to the CPU compute device.
    #[serde(default = "default_worker_threads")]
    #[validate(range(min = 1))]
    pub worker_threads: usize,

    /// Which device backend to construct.
    #[serde(default)]
    pub device_backend: DeviceBackend,

    /// Reuse a single on-device table buffer across depths (re-uploading
    /// the next table into it) instead of allocating one buffer per
    /// depth. Caps device memory at `O(N + 65,536 * sizeof(signature))`
    /// per spec.md §5; the CPU backend doesn't hold device buffers so
    /// this only affects a future accelerator backend.
    #[serde(default = "default_true")]
    pub reuse_table_buffer: bool,

    /// Log level passed to [`sigscan_telemetry::logging::init_logging`].
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_worker_threads() -> usize {
    num_cpus::get()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            worker_threads: default_worker_threads(),
            device_backend: DeviceBackend::default(),
            reuse_table_buffer: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from defaults, an optional `sigscan.yaml` in
    /// the working directory, then `SIGSCAN_*` environment variables,
    /// each overriding the last.
    pub fn load() -> Result<Self, ConfigError> {
        let figment = Figment::from(Serialized::defaults(MatchConfig::default()));

        let figment = if Path::new("sigscan.yaml").exists() {
            figment.merge(Yaml::file("sigscan.yaml"))
        } else {
            figment
        };

        let config: Self = figment
            .merge(Env::prefixed("SIGSCAN_"))
            .extract()
            .map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific YAML file, bypassing the
    /// working-directory lookup. Used by tests and by callers embedding
    /// this crate in a larger configuration surface.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = Figment::from(Serialized::defaults(MatchConfig::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("SIGSCAN_"))
            .extract()
            .map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = MatchConfig::default();
        config.validate().expect("default config should validate");
    }

    #[test]
    fn zero_worker_threads_fails_validation() {
        let mut config = MatchConfig::default();
        config.worker_threads = 0;
        assert!(config.validate().is_err());
    }
}
