//! Shared fixtures for integration tests.

#![allow(dead_code)]

pub mod fixtures;

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; output goes through the test harness capture.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
