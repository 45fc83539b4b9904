//! Tests for the tracing setup.

use std::sync::Mutex;

use outlier_core::tracing::setup::init_tracing;

/// Serializes tests that touch `OUTLIER_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_outlier_log_debug() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("OUTLIER_LOG", "debug");
    init_tracing();
    std::env::remove_var("OUTLIER_LOG");
}

#[test]
fn test_per_crate_filtering() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("OUTLIER_LOG", "outlier_analysis=debug,outlier_cli=warn");
    init_tracing();
    std::env::remove_var("OUTLIER_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_outlier_log_fallback() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("OUTLIER_LOG", "this_is_garbage=not_a_level[");
    init_tracing();
    std::env::remove_var("OUTLIER_LOG");
}
