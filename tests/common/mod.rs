//! Shared test helpers

use assert_cmd::Command;
use tempfile::TempDir;

/// Build a command for the tqt binary
pub fn tqt() -> Command {
    Command::cargo_bin("tqt").expect("tqt binary builds")
}

/// Create a temporary directory with an initialized, seeded project
pub fn setup_test_project() -> TempDir {
    let tmp = tempfile::tempdir().expect("create temp dir");
    tqt()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();
    tmp
}
