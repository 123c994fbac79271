// tests/execute.rs
//! End-to-end execution scenarios against the real interpreter
//!
//! These tests require `python3` on PATH, as in CI.

use codelab_engine::{EngineConfig, ExecutionEngine, ExecutionRequest};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn engine_with_root(root: &std::path::Path) -> ExecutionEngine {
    ExecutionEngine::new(EngineConfig {
        workspace_root: root.to_path_buf(),
        ..Default::default()
    })
}

#[tokio::test]
async fn echoes_stdin_to_stdout() {
    let engine = ExecutionEngine::default();
    let request = ExecutionRequest::new("print(input())")
        .with_stdin("hello")
        .with_time_limit(5);

    let result = engine.execute(request).await;

    assert_eq!(result.output, "hello\n");
    assert_eq!(result.error, "");
    assert!(!result.timeout);
    assert!(result.runtime >= 0.0);
}

#[tokio::test]
async fn captures_stdout_and_stderr_separately() {
    let engine = ExecutionEngine::default();
    let request = ExecutionRequest::new(
        "import sys\nprint('out')\nprint('err', file=sys.stderr)",
    );

    let result = engine.execute(request).await;

    assert_eq!(result.output, "out\n");
    assert_eq!(result.error, "err\n");
    assert!(!result.timeout);
}

#[tokio::test]
async fn exception_surfaces_as_stderr() {
    let engine = ExecutionEngine::default();
    let request = ExecutionRequest::new("raise ValueError(\"bad\")");

    let result = engine.execute(request).await;

    assert_eq!(result.output, "");
    assert!(result.error.contains("ValueError"));
    assert!(result.error.contains("bad"));
    assert!(!result.timeout);
}

#[tokio::test]
async fn busy_loop_hits_the_deadline() {
    let engine = ExecutionEngine::default();
    let request = ExecutionRequest::new("while True: pass").with_time_limit(1);

    let result = engine.execute(request).await;

    assert!(result.timeout);
    assert_eq!(result.output, "");
    assert_eq!(result.error, "Time limit exceeded");
    // Killed at limit + grace; runtime reports true elapsed time.
    assert!(result.runtime >= 1.0);
    assert!(result.runtime < 10.0);
}

#[tokio::test]
async fn runtime_tracks_wall_clock() {
    let engine = ExecutionEngine::default();
    let request = ExecutionRequest::new("import time\ntime.sleep(0.3)");

    let result = engine.execute(request).await;

    assert!(!result.timeout);
    assert!(result.runtime >= 0.3, "runtime was {}", result.runtime);
    assert!(result.runtime < 5.0, "runtime was {}", result.runtime);
}

#[tokio::test]
async fn workspace_is_removed_after_success() {
    let root = tempfile::tempdir().unwrap();
    let engine = engine_with_root(root.path());

    let result = engine.execute(ExecutionRequest::new("print(1)")).await;
    assert_eq!(result.output, "1\n");

    let leftover: Vec<_> = std::fs::read_dir(root.path()).unwrap().collect();
    assert!(leftover.is_empty(), "workspace survived: {:?}", leftover);
}

#[tokio::test]
async fn workspace_is_removed_after_timeout() {
    let root = tempfile::tempdir().unwrap();
    let engine = engine_with_root(root.path());

    let request = ExecutionRequest::new("while True: pass").with_time_limit(1);
    let result = engine.execute(request).await;
    assert!(result.timeout);

    let leftover: Vec<_> = std::fs::read_dir(root.path()).unwrap().collect();
    assert!(leftover.is_empty(), "workspace survived: {:?}", leftover);
}

#[tokio::test]
async fn workspace_is_removed_after_child_error() {
    let root = tempfile::tempdir().unwrap();
    let engine = engine_with_root(root.path());

    let result = engine.execute(ExecutionRequest::new("raise SystemExit(3)")).await;
    assert!(!result.timeout);

    let leftover: Vec<_> = std::fs::read_dir(root.path()).unwrap().collect();
    assert!(leftover.is_empty(), "workspace survived: {:?}", leftover);
}

#[tokio::test]
async fn concurrent_executions_stay_isolated() {
    let root = tempfile::tempdir().unwrap();
    let engine = engine_with_root(root.path());

    let futures: Vec<_> = (0..50)
        .map(|i| {
            let request = ExecutionRequest::new("print(int(input()) * 2)")
                .with_stdin(format!("{}", i))
                .with_time_limit(10);
            engine.execute(request)
        })
        .collect();

    let results = futures::future::join_all(futures).await;

    for (i, result) in results.iter().enumerate() {
        assert!(!result.timeout, "call {} timed out", i);
        assert_eq!(result.error, "", "call {} errored: {}", i, result.error);
        assert_eq!(result.output, format!("{}\n", i * 2));
    }

    let leftover: Vec<_> = std::fs::read_dir(root.path()).unwrap().collect();
    assert!(leftover.is_empty(), "workspaces survived: {:?}", leftover);
}

#[tokio::test]
async fn cancellation_aborts_a_running_child() {
    let root = tempfile::tempdir().unwrap();
    let engine = engine_with_root(root.path());
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        trigger.cancel();
    });

    let request = ExecutionRequest::new("import time\ntime.sleep(30)").with_time_limit(30);
    let result = engine.execute_cancellable(request, cancel).await;

    assert!(!result.timeout);
    assert_eq!(result.output, "");
    assert_eq!(result.error, "Execution cancelled");
    assert!(result.runtime < 5.0);

    let leftover: Vec<_> = std::fs::read_dir(root.path()).unwrap().collect();
    assert!(leftover.is_empty(), "workspace survived: {:?}", leftover);
}

#[tokio::test]
async fn extreme_time_limit_still_completes() {
    let engine = ExecutionEngine::default();
    let request = ExecutionRequest::new("print('ok')").with_time_limit(u64::MAX);

    let result = engine.execute(request).await;

    assert_eq!(result.output, "ok\n");
    assert_eq!(result.error, "");
    assert!(!result.timeout);
}

#[tokio::test]
async fn zero_limit_falls_back_to_configured_default() {
    let engine = ExecutionEngine::default();
    let request = ExecutionRequest::new("print('ok')").with_time_limit(0);

    let result = engine.execute(request).await;

    assert_eq!(result.output, "ok\n");
    assert!(!result.timeout);
}
