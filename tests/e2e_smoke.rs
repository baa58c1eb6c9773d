//! E2E smoke tests for the biblia-tui binary
//!
//! These tests verify basic end-to-end functionality by executing the compiled binary.
//! They are gated behind the `e2e-tests` feature flag.
//!
//! Run with: `cargo test --features e2e-tests`

#![cfg(feature = "e2e-tests")]

use std::path::PathBuf;
use std::time::Duration;

use expectrl::{spawn, ControlCode, Eof, Regex};

/// Helper to find the biblia-tui binary in target directory
fn find_binary() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    // Try debug first (most common during testing)
    let debug_binary = manifest_dir.join("target/debug/biblia-tui");
    if debug_binary.exists() {
        return debug_binary;
    }

    // Fall back to release
    let release_binary = manifest_dir.join("target/release/biblia-tui");
    if release_binary.exists() {
        return release_binary;
    }

    panic!("biblia-tui binary not found - run `cargo build` first");
}

#[test]
fn smoke_help_flag() {
    let binary = find_binary();

    let mut session =
        spawn(format!("{} --help", binary.display())).expect("Failed to spawn biblia-tui");

    // Should see description first
    let _ = session
        .expect(Regex("Terminal reader for the Bible in Portuguese"))
        .expect("Failed to find description");

    // Should see usage after description
    let _ = session
        .expect(Regex("Usage:"))
        .expect("Failed to find help output");

    // Should exit cleanly
    let _ = session.expect(Eof).expect("Process should exit");
}

#[test]
fn smoke_version_flag() {
    let binary = find_binary();

    let mut session =
        spawn(format!("{} --version", binary.display())).expect("Failed to spawn biblia-tui");

    // Should see version output
    let _ = session
        .expect(Regex(r"biblia-tui \d+\.\d+\.\d+"))
        .expect("Failed to find version output");

    // Should exit cleanly
    let _ = session.expect(Eof).expect("Process should exit");
}

/// Smoke test: App starts and quits cleanly
///
/// Validates that the application can launch over the embedded datasets,
/// initialize its TUI, and cleanly exit when sent the quit command.
#[test]
fn smoke_app_starts_and_quits() {
    let binary = find_binary();

    let mut session = spawn(binary.display().to_string()).expect("Failed to spawn biblia-tui");

    // Give TUI time to initialize and render
    std::thread::sleep(Duration::from_millis(500));

    // Should be running (not crashed)
    let is_alive = session.is_alive().expect("Failed to check process status");
    assert!(is_alive, "Process should be running after startup");

    // Send quit command (q)
    session.send("q").expect("Failed to send quit command");

    // Should exit cleanly
    let _ = session.expect(Eof).expect("Process should exit");
}

/// Smoke test: Navigating into a chapter doesn't crash the application
///
/// Walks the startup sidebar into the first chapter and steps through a
/// handful of verses before quitting.
#[test]
fn smoke_navigation_does_not_crash() {
    let binary = find_binary();

    let mut session = spawn(binary.display().to_string()).expect("Failed to spawn biblia-tui");

    // Give TUI time to initialize
    std::thread::sleep(Duration::from_millis(500));

    // Expand the first book and open its first chapter
    session
        .send(ControlCode::CarriageReturn)
        .expect("Failed to expand book");
    std::thread::sleep(Duration::from_millis(100));
    session.send("j").expect("Failed to move to chapter row");
    std::thread::sleep(Duration::from_millis(100));
    session
        .send(ControlCode::CarriageReturn)
        .expect("Failed to open chapter");
    std::thread::sleep(Duration::from_millis(100));

    // Step through verses
    for _ in 0..10 {
        session.send("j").expect("Failed to send verse step");
        std::thread::sleep(Duration::from_millis(50));
    }
    for _ in 0..5 {
        session.send("k").expect("Failed to send verse step back");
        std::thread::sleep(Duration::from_millis(50));
    }

    // Verify app is still alive after navigating
    let is_alive = session.is_alive().expect("Failed to check process status");
    assert!(is_alive, "Process should be running after navigation");

    // Send quit command (q)
    session.send("q").expect("Failed to send quit command");

    // Should exit cleanly
    let _ = session.expect(Eof).expect("Process should exit");
}

/// Smoke test: Search functionality works end-to-end
///
/// Validates that the application can open search, accept input,
/// submit the search, and continue operating normally. This ensures
/// the search state machine works in the real application.
#[test]
fn smoke_search_works() {
    let binary = find_binary();

    let mut session = spawn(binary.display().to_string()).expect("Failed to spawn biblia-tui");

    // Give TUI time to initialize
    std::thread::sleep(Duration::from_millis(500));

    // Verify app started successfully
    let is_alive = session.is_alive().expect("Failed to check process status");
    assert!(is_alive, "Process should be running after startup");

    // Send '/' to open search
    session.send("/").expect("Failed to send search command");

    std::thread::sleep(Duration::from_millis(100));

    // Type a search term
    session.send("deus").expect("Failed to send search term");

    std::thread::sleep(Duration::from_millis(100));

    // Send Enter to submit search
    session
        .send(ControlCode::CarriageReturn)
        .expect("Failed to send Enter");

    std::thread::sleep(Duration::from_millis(100));

    // Verify app is still alive after search
    let is_alive = session.is_alive().expect("Failed to check process status");
    assert!(is_alive, "Process should be running after search");

    // Send Escape twice: close the results overlay, then clear the search
    session
        .send(ControlCode::Escape)
        .expect("Failed to send Escape");
    std::thread::sleep(Duration::from_millis(100));
    session
        .send(ControlCode::Escape)
        .expect("Failed to send Escape");
    std::thread::sleep(Duration::from_millis(100));

    // Verify app is still alive
    let is_alive = session.is_alive().expect("Failed to check process status");
    assert!(is_alive, "Process should be running after closing search");

    // Send quit command (q)
    session.send("q").expect("Failed to send quit command");

    // Should exit cleanly
    let _ = session.expect(Eof).expect("Process should exit");
}
