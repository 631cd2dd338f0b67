//! Integration tests for the linkaudit CLI
//!
//! These tests run the real binary against documentation trees on disk and
//! check the printed report and the exit status.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a linkaudit command
fn linkaudit() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("linkaudit"));
    cmd.arg("--no-color");
    cmd
}

/// Helper to write a file, creating parent directories
fn write(root: &Path, path: &str, content: &[u8]) {
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

// =============================================================================
// BASIC CLI TESTS
// =============================================================================

#[test]
fn test_version() {
    linkaudit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("linkaudit"));
}

#[test]
fn test_help() {
    linkaudit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit the internal links"));
}

// =============================================================================
// AUDIT TESTS
// =============================================================================

#[test]
fn test_clean_project_exits_zero() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "README.md", b"[Guide](docs/guide.md)\n");
    write(temp.path(), "docs/guide.md", b"# Guide\n[Home](../README.md)\n");

    linkaudit()
        .current_dir(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Files scanned: 2"))
        .stdout(predicate::str::contains("Links checked: 2"))
        .stdout(predicate::str::contains("Broken links: 0"))
        .stdout(predicate::str::contains("All links are valid!"));
}

#[test]
fn test_broken_link_exits_one() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "docs/a.md", b"[Missing](missing.md)\n");

    linkaudit()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("BROKEN LINKS FOUND"))
        .stdout(predicate::str::contains("File: docs/a.md"))
        .stdout(predicate::str::contains("Link: [Missing](missing.md)"))
        .stdout(predicate::str::contains("Expected: docs/missing.md"))
        .stdout(predicate::str::contains("Found 1 broken link(s)"));
}

#[test]
fn test_root_flag() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "project/docs/a.md", b"[Root link](/docs/b.md)\n");
    write(temp.path(), "project/docs/b.md", b"# b\n");

    linkaudit()
        .arg("--root")
        .arg(temp.path().join("project"))
        .current_dir(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Links checked: 1"));
}

#[test]
fn test_unreadable_file_is_warned_and_skipped() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "docs/bad.md", b"[x](gone.md) \xff\n");
    write(temp.path(), "docs/good.md", b"[ok](good.md)\n");

    linkaudit()
        .current_dir(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Could not read docs/bad.md"))
        .stdout(predicate::str::contains("Files scanned: 1"));
}

#[test]
fn test_external_and_anchor_links_ignored() {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "README.md",
        b"[a](https://example.com) [b](mailto:x@y.z) [c](#top)\n",
    );

    linkaudit()
        .current_dir(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Links checked: 0"));
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "docs/a.md", b"[Missing](missing.md)\n");

    let output = linkaudit()
        .arg("--json")
        .current_dir(temp.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["broken_count"], 1);
    assert_eq!(json["broken_links"][0]["link"], "missing.md");
}

#[test]
fn test_exclude_flag() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "docs/archive/old.md", b"[gone](gone.md)\n");

    linkaudit()
        .args(["--exclude", "docs/archive/**"])
        .current_dir(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Files scanned: 0"));
}

#[test]
fn test_config_file_is_used() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "notes/todo.md", b"[gone](gone.md)\n");
    write(temp.path(), ".linkaudit.toml", b"[scan]\ninclude = [\"notes/*.md\"]\n");

    linkaudit()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("File: notes/todo.md"));
}

// =============================================================================
// ERROR TESTS
// =============================================================================

#[test]
fn test_missing_root_exits_two() {
    linkaudit()
        .args(["--root", "/nonexistent/linkaudit/root"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("root path does not exist"));
}

#[test]
fn test_bad_config_exits_two() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), ".linkaudit.toml", b"[scan]\nunknown = 1\n");

    linkaudit()
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_unresolvable_link_exits_two() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "README.md", b"[bad](bad\0name.md)\n");

    linkaudit()
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot resolve"));
}
