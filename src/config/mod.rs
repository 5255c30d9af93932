//! Configuration: optional config file plus environment.
//!
//! The config file only supplies defaults; `GOPATH` and command-line flags
//! take precedence.

mod loader;
mod paths;
mod types;

use std::path::PathBuf;

use tracing::debug;

use crate::error::ScaffoldError;
use crate::template::OutputSink;

pub use loader::{ConfigError, CONFIG_PATH_ENV};
pub use paths::{absolutize, plugin_dir, resolve_base_path, GOPATH_ENV};
pub use types::Config;

/// Resolved runtime settings, read-only once dispatch starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Absolute Go workspace directory.
    pub base_path: PathBuf,
    /// Sink used unless `--output` overrides it.
    pub output: OutputSink,
}

impl Settings {
    /// Combine a loaded config with the value of `GOPATH`.
    pub fn resolve(config: &Config, gopath_env: Option<&str>) -> Result<Self, ScaffoldError> {
        let base_path = absolutize(&resolve_base_path(gopath_env, config))?;
        debug!(base_path = %base_path.display(), output = %config.output, "Resolved settings");
        Ok(Self {
            base_path,
            output: config.output,
        })
    }

    /// Load the config file and read `GOPATH` from the process environment.
    pub fn from_env() -> Result<Self, ScaffoldError> {
        let config = Config::load()?;
        let gopath = std::env::var(GOPATH_ENV).ok();
        Self::resolve(&config, gopath.as_deref())
    }
}
