// src/utils/errors.rs
//! Engine error taxonomy
//!
//! These variants cover engine-level faults only: workspace provisioning,
//! interpreter resolution, and process spawning. A submission that raises,
//! prints to stderr, or exits non-zero is NOT an engine error — it surfaces
//! as captured stderr in the [`ExecutionResult`](crate::ExecutionResult).
//!
//! The public `execute` surface never lets these cross its boundary; they
//! are folded into the result record so callers have a uniform handling
//! path.

use thiserror::Error;

/// Errors raised inside the execution engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// The configured interpreter was not found on the search path
    #[error("interpreter '{0}' not found in PATH")]
    InterpreterNotFound(String),

    /// The per-execution workspace could not be created or written
    #[error("failed to provision workspace: {0}")]
    WorkspaceProvision(#[source] std::io::Error),

    /// The child process could not be spawned
    #[error("failed to spawn process: {0}")]
    ProcessSpawnFailed(String),

    /// Configuration could not be loaded or deserialized
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Other I/O failure while supervising the child
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, EngineError>;
