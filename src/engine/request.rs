// src/engine/request.rs
//! Input and output contracts of the execution engine
//!
//! [`ExecutionRequest`] is created fresh per invocation by the caller.
//! [`ExecutionResult`] is produced exactly once per request; the caller
//! decides pass/fail by comparing trimmed `output` against an expected
//! value and treating non-empty `error` as failure.

use serde::{Deserialize, Serialize};

fn default_time_limit_secs() -> u64 {
    5
}

/// One submission to run: source text, test-case input, and a time limit
#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionRequest {
    /// Submitted source text, written to the workspace verbatim
    pub code: String,

    /// Text piped to the child's standard input
    #[serde(default)]
    pub stdin: String,

    /// Nominal time limit in seconds; the hard ceiling adds the engine's
    /// grace margin on top
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: u64,
}

impl ExecutionRequest {
    /// Create a request with no stdin and the default 5 second limit
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            stdin: String::new(),
            time_limit_secs: default_time_limit_secs(),
        }
    }

    /// Set the text piped to the child's standard input
    pub fn with_stdin(mut self, stdin: impl Into<String>) -> Self {
        self.stdin = stdin.into();
        self
    }

    /// Set the nominal time limit in seconds
    pub fn with_time_limit(mut self, secs: u64) -> Self {
        self.time_limit_secs = secs;
        self
    }
}

/// Outcome of one execution
///
/// Exactly one of three shapes, all through the same record:
/// - normal completion: captured streams, measured `runtime`
/// - timeout: `timeout=true`, synthetic `error`, empty `output`
/// - engine failure: descriptive `error`, `runtime=0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Raw captured stdout
    pub output: String,

    /// Raw captured stderr, or a synthetic message for timeout, engine
    /// failure, or cancellation
    pub error: String,

    /// Wall-clock seconds, rounded to 3 decimal places
    pub runtime: f64,

    /// True when the child was killed at the deadline
    pub timeout: bool,
}

impl ExecutionResult {
    /// Child exited before the deadline (any exit status)
    pub fn completed(output: String, error: String, elapsed_secs: f64) -> Self {
        Self {
            output,
            error,
            runtime: round_millis(elapsed_secs),
            timeout: false,
        }
    }

    /// Child was killed at the hard deadline
    pub fn timed_out(elapsed_secs: f64) -> Self {
        Self {
            output: String::new(),
            error: "Time limit exceeded".to_string(),
            runtime: round_millis(elapsed_secs),
            timeout: true,
        }
    }

    /// Caller cancelled the execution before the child exited
    pub fn cancelled(elapsed_secs: f64) -> Self {
        Self {
            output: String::new(),
            error: "Execution cancelled".to_string(),
            runtime: round_millis(elapsed_secs),
            timeout: false,
        }
    }

    /// The engine itself failed before or while supervising the child
    pub fn engine_failure(error: impl std::fmt::Display) -> Self {
        Self {
            output: String::new(),
            error: error.to_string(),
            runtime: 0.0,
            timeout: false,
        }
    }
}

/// Round seconds to millisecond precision
fn round_millis(secs: f64) -> f64 {
    (secs * 1000.0).round() / 1000.0
}
