//! Tracing setup tests
//!
//! Runs as its own test binary because the subscriber is process-global.

use royal_butler_cli::{RunMode, init_tracing};
use std::fs;

#[test]
fn test_second_init_leaves_log_files_alone() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.log");
    let second = dir.path().join("second.log");

    init_tracing(RunMode::Tui, Some(&first)).unwrap();
    fs::write(&first, "earlier session\n").unwrap();

    init_tracing(RunMode::Tui, Some(&first)).unwrap();
    init_tracing(RunMode::Ask, Some(&second)).unwrap();

    assert_eq!(fs::read_to_string(&first).unwrap(), "earlier session\n");
    assert!(!second.exists());
}
