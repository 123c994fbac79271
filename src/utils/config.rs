// src/utils/config.rs
//! Engine configuration
//!
//! Configuration is layered: built-in defaults, then an optional `engine.*`
//! file in the working directory, then `CODELAB_*` environment variables.
//! Every field has a sensible default so the engine works out of the box.

use crate::utils::errors::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration for the execution engine
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Interpreter command resolved from PATH (default: python3)
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Grace margin added to the caller's time limit before the child is
    /// killed, in seconds (default: 2)
    #[serde(default = "default_grace_secs")]
    pub grace_secs: u64,

    /// Time limit applied when a request does not specify one (default: 5)
    #[serde(default = "default_time_limit_secs")]
    pub default_time_limit_secs: u64,

    /// Directory under which per-execution workspaces are created
    /// (default: the system temp directory)
    #[serde(default = "default_workspace_root")]
    pub workspace_root: PathBuf,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_grace_secs() -> u64 {
    2
}

fn default_time_limit_secs() -> u64 {
    5
}

fn default_workspace_root() -> PathBuf {
    std::env::temp_dir()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            grace_secs: default_grace_secs(),
            default_time_limit_secs: default_time_limit_secs(),
            workspace_root: default_workspace_root(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("engine").required(false))
            .add_source(config::Environment::with_prefix("CODELAB"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
