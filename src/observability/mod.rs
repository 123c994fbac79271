// src/observability/mod.rs
//! Tracing and logging setup
//!
//! The engine emits structured events through `tracing`: lifecycle at
//! `debug`, timeouts and engine failures at `warn`. Hosts call
//! [`init_tracing`] once at startup; library embedders that already own a
//! subscriber can skip it.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Honors `RUST_LOG`, defaulting to `info` when unset. Returns an error if
/// a global subscriber is already installed.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    Ok(())
}
