// src/engine/executor.rs
//! Execution engine for single submissions
//!
//! One call runs one (code, stdin, time limit) triple to completion:
//! provision a workspace, spawn the interpreter on the materialized source,
//! pipe stdin in, capture stdout/stderr, and enforce a hard wall-clock
//! ceiling of `time_limit + grace`. The engine never returns an error to
//! the caller — timeouts and its own internal faults are folded into the
//! [`ExecutionResult`] so every invocation has a uniform handling path.

use crate::engine::request::{ExecutionRequest, ExecutionResult};
use crate::engine::workspace::Workspace;
use crate::utils::config::EngineConfig;
use crate::utils::errors::{EngineError, Result};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// How waiting on the child ended
enum WaitOutcome {
    Exited(std::process::ExitStatus),
    WaitFailed(std::io::Error),
    DeadlineExceeded,
    Cancelled,
}

/// Sandboxed runner for student submissions
pub struct ExecutionEngine {
    config: EngineConfig,
}

impl ExecutionEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one submission to completion
    ///
    /// Always returns a result: child runtime errors surface as captured
    /// stderr, a deadline kill as `timeout=true`, and engine-level faults
    /// (workspace, interpreter, spawn) as a descriptive `error` with
    /// `runtime=0`.
    pub async fn execute(&self, request: ExecutionRequest) -> ExecutionResult {
        self.execute_cancellable(request, CancellationToken::new())
            .await
    }

    /// Run one submission, abortable through `cancel`
    ///
    /// Cancelling while the child runs kills it and returns a result with
    /// `error = "Execution cancelled"`. Lets an orchestrator short-circuit
    /// remaining test cases once a submission has already failed.
    pub async fn execute_cancellable(
        &self,
        request: ExecutionRequest,
        cancel: CancellationToken,
    ) -> ExecutionResult {
        match self.run(&request, &cancel).await {
            Ok(result) => result,
            Err(e) => {
                warn!("engine failure: {}", e);
                ExecutionResult::engine_failure(e)
            }
        }
    }

    async fn run(
        &self,
        request: &ExecutionRequest,
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult> {
        let interpreter = which::which(&self.config.interpreter)
            .map_err(|_| EngineError::InterpreterNotFound(self.config.interpreter.clone()))?;

        let workspace = Workspace::provision(&self.config.workspace_root, &request.code).await?;

        // A limit of 0 means "use the engine's configured default".
        let limit_secs = if request.time_limit_secs == 0 {
            self.config.default_time_limit_secs
        } else {
            request.time_limit_secs
        };
        // Saturate: limits are caller-supplied and may be arbitrarily large.
        let ceiling = Duration::from_secs(limit_secs.saturating_add(self.config.grace_secs));

        let mut command = Command::new(&interpreter);
        command
            .arg(workspace.source_path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // Own process group so the deadline kill reaches any children the
        // submission itself spawned.
        #[cfg(unix)]
        command.process_group(0);

        let started = Instant::now();
        let mut child = command
            .spawn()
            .map_err(|e| EngineError::ProcessSpawnFailed(e.to_string()))?;
        debug!(pid = ?child.id(), limit_secs, "submission process spawned");

        // Feed stdin from a separate task; the submission may exit without
        // reading it, so write errors are ignored.
        if let Some(mut stdin_pipe) = child.stdin.take() {
            let input = request.stdin.clone().into_bytes();
            tokio::spawn(async move {
                let _ = stdin_pipe.write_all(&input).await;
                let _ = stdin_pipe.shutdown().await;
            });
        }

        // Drain both pipes concurrently with the wait so a chatty
        // submission cannot deadlock on a full pipe buffer.
        let mut stdout_pipe = child
            .stdout
            .take()
            .ok_or_else(|| EngineError::ProcessSpawnFailed("stdout not captured".to_string()))?;
        let mut stderr_pipe = child
            .stderr
            .take()
            .ok_or_else(|| EngineError::ProcessSpawnFailed("stderr not captured".to_string()))?;

        let stdout_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = stdout_pipe.read_to_end(&mut buf).await;
            buf
        });
        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            let _ = stderr_pipe.read_to_end(&mut buf).await;
            buf
        });

        let outcome = tokio::select! {
            waited = tokio::time::timeout(ceiling, child.wait()) => match waited {
                Ok(Ok(status)) => WaitOutcome::Exited(status),
                Ok(Err(e)) => WaitOutcome::WaitFailed(e),
                Err(_) => WaitOutcome::DeadlineExceeded,
            },
            _ = cancel.cancelled() => WaitOutcome::Cancelled,
        };
        let elapsed = started.elapsed().as_secs_f64();

        match outcome {
            WaitOutcome::Exited(status) => {
                let stdout = stdout_task.await.unwrap_or_default();
                let stderr = stderr_task.await.unwrap_or_default();
                debug!(code = ?status.code(), elapsed, "submission process exited");

                // A non-zero exit is the submission's problem, not the
                // engine's; it surfaces as stderr content.
                Ok(ExecutionResult::completed(
                    String::from_utf8_lossy(&stdout).into_owned(),
                    String::from_utf8_lossy(&stderr).into_owned(),
                    elapsed,
                ))
            }
            WaitOutcome::WaitFailed(e) => Err(e.into()),
            WaitOutcome::DeadlineExceeded => {
                warn!(elapsed, "submission exceeded time limit, killing");
                Self::terminate(&mut child).await;
                stdout_task.abort();
                stderr_task.abort();
                Ok(ExecutionResult::timed_out(elapsed))
            }
            WaitOutcome::Cancelled => {
                debug!(elapsed, "execution cancelled by caller");
                Self::terminate(&mut child).await;
                stdout_task.abort();
                stderr_task.abort();
                Ok(ExecutionResult::cancelled(elapsed))
            }
        }
    }

    /// Kill the child's process group and reap it
    async fn terminate(child: &mut Child) {
        #[cfg(unix)]
        if let Some(pid) = child.id() {
            use nix::sys::signal::{killpg, Signal};
            use nix::unistd::Pid;

            let _ = killpg(Pid::from_raw(pid as i32), Signal::SIGKILL);
        }

        let _ = child.start_kill();
        let _ = child.wait().await;
    }
}

impl Default for ExecutionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
