//! Tests for the deduplicated warning system.

use std::sync::{Mutex, MutexGuard, PoisonError};

use sprig_common::warning::{clear_warnings, has_warned, warn_once};

/// The warning set is global; `clear_warnings` must not race the other tests.
static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
}

#[test]
fn test_warn_once_records_message() {
    let _guard = serial();
    warn_once("test-record", "first message");
    assert!(has_warned("test-record", "first message"));
    assert!(!has_warned("test-record", "never emitted"));
}

#[test]
fn test_warnings_are_scoped_by_component() {
    let _guard = serial();
    warn_once("test-scope-a", "shared text");
    assert!(has_warned("test-scope-a", "shared text"));
    assert!(!has_warned("test-scope-b", "shared text"));
}

#[test]
fn test_repeated_warning_is_idempotent() {
    let _guard = serial();
    warn_once("test-repeat", "same");
    warn_once("test-repeat", "same");
    assert!(has_warned("test-repeat", "same"));
}

#[test]
fn test_clear_warnings_forgets_messages() {
    let _guard = serial();
    warn_once("test-clear", "to be forgotten");
    clear_warnings();
    assert!(!has_warned("test-clear", "to be forgotten"));

    // Clearing does not disable future warnings
    warn_once("test-clear", "to be forgotten");
    assert!(has_warned("test-clear", "to be forgotten"));
}
