//! CLI integration tests for petfinder
//!
//! Tests the CLI end-to-end using assert_cmd, with the config directory
//! pointed at a temp dir so nothing touches the real credential store.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a command isolated from the user's config
fn petfinder_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("petfinder").unwrap();
    cmd.env("PETFINDER_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn test_help_lists_commands() {
    let temp_dir = TempDir::new().unwrap();

    petfinder_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("pets"))
        .stdout(predicate::str::contains("adoptions"));
}

#[test]
fn test_unknown_command_fails() {
    let temp_dir = TempDir::new().unwrap();

    petfinder_cmd(&temp_dir)
        .arg("does-not-exist")
        .assert()
        .failure();
}

#[test]
fn test_whoami_without_login() {
    let temp_dir = TempDir::new().unwrap();

    petfinder_cmd(&temp_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_logout_without_login_succeeds() {
    let temp_dir = TempDir::new().unwrap();

    petfinder_cmd(&temp_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));
}

#[test]
fn test_admin_commands_require_login() {
    let temp_dir = TempDir::new().unwrap();

    petfinder_cmd(&temp_dir)
        .args(["users", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ADMIN"));
}

#[test]
fn test_pet_edit_requires_login() {
    let temp_dir = TempDir::new().unwrap();

    petfinder_cmd(&temp_dir)
        .args(["pets", "edit", "1", "Rex", "dog", "--age", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ADMIN"));
}

#[test]
fn test_user_show_and_edit_require_login() {
    let temp_dir = TempDir::new().unwrap();

    petfinder_cmd(&temp_dir)
        .args(["users", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ADMIN"));

    petfinder_cmd(&temp_dir)
        .args(["users", "edit", "1", "Ana", "ana@b.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ADMIN"));
}

#[test]
fn test_adoption_request_requires_login() {
    let temp_dir = TempDir::new().unwrap();

    petfinder_cmd(&temp_dir)
        .args(["adoptions", "request", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}
