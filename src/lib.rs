// src/lib.rs
//! CodeLab Execution Engine Library
//!
//! This library provides the sandboxed code runner behind the CodeLab
//! learning platform: it takes one student submission at a time, runs it
//! against a test-case input under a wall-clock deadline, and reports the
//! captured output as a structured result.
//!
//! # Architecture
//!
//! The engine is structured into several key modules:
//!
//! - **engine**: Workspace provisioning, process execution, deadline
//!   enforcement
//! - **observability**: Tracing and logging setup
//! - **utils**: Configuration and error types
//!
//! The platform's test-running orchestrator invokes
//! [`ExecutionEngine::execute`] once per test case and aggregates the
//! results; aggregation, grading, and persistence live outside this crate.

// Public module exports
pub mod engine;
pub mod observability;
pub mod utils;

// Re-export commonly used types
pub use engine::executor::ExecutionEngine;
pub use engine::request::{ExecutionRequest, ExecutionResult};
pub use utils::config::EngineConfig;
pub use utils::errors::{EngineError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
