// src/engine/mod.rs
//! Sandboxed submission execution
//!
//! This module is the core of the crate. For each submission it:
//!
//! - **Provisions a workspace**: a uniquely named temp directory holding the
//!   materialized source file
//! - **Runs the interpreter**: one child process per call, stdin piped in,
//!   stdout/stderr captured separately
//! - **Enforces a deadline**: nominal time limit plus a grace margin, then
//!   the whole process group is killed
//! - **Cleans up unconditionally**: the workspace never outlives the call
//!
//! # Isolation model
//!
//! Isolation is process-level only: a fresh child process, a private temp
//! directory, and a hard wall-clock ceiling. There is no filesystem,
//! network, or memory confinement — a known limitation of the platform,
//! kept as-is here.
//!
//! # Concurrency
//!
//! Calls share nothing but the host's process table and temp-directory
//! namespace; workspace names carry enough entropy that concurrent calls
//! cannot collide. Safe to fan out across tasks.

pub mod executor;
pub mod request;
pub mod workspace;

// Re-export commonly used types
pub use executor::ExecutionEngine;
pub use request::{ExecutionRequest, ExecutionResult};
pub use workspace::Workspace;
