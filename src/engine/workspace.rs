// src/engine/workspace.rs
//! Per-execution workspace
//!
//! Each execution materializes the submitted source into its own uniquely
//! named temp directory. The workspace is owned by exactly one in-flight
//! execution and is removed when it is dropped, whatever happened in
//! between. Removal failures are logged at debug and swallowed — cleanup
//! must never change the returned result.

use crate::utils::errors::{EngineError, Result};
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ephemeral directory and source file for one execution
pub struct Workspace {
    dir: PathBuf,
    source: PathBuf,
}

impl Workspace {
    /// Create a fresh workspace under `root` and write `code` into it
    ///
    /// Uniqueness comes from a 32-bit random token in the directory and
    /// file names; a collision surfaces as an `AlreadyExists` provisioning
    /// error rather than silently sharing state.
    pub async fn provision(root: &Path, code: &str) -> Result<Self> {
        let token: u32 = rand::thread_rng().gen();
        let dir = root.join(format!("codelab-{:08x}", token));

        tokio::fs::create_dir(&dir)
            .await
            .map_err(EngineError::WorkspaceProvision)?;

        let source = dir.join(format!("submission_{:08x}.py", token));
        let workspace = Self { dir, source };

        // From here on the Drop impl owns cleanup, including on write failure.
        tokio::fs::write(&workspace.source, code)
            .await
            .map_err(EngineError::WorkspaceProvision)?;

        debug!(path = %workspace.source.display(), "workspace provisioned");
        Ok(workspace)
    }

    /// Path of the materialized source file
    pub fn source_path(&self) -> &Path {
        &self.source
    }

    /// Path of the workspace directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.source) {
            debug!(path = %self.source.display(), "workspace file removal failed: {}", e);
        }
        if let Err(e) = std::fs::remove_dir_all(&self.dir) {
            debug!(path = %self.dir.display(), "workspace dir removal failed: {}", e);
        }
    }
}
