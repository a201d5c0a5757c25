//! End-to-end tests for the `pc` binary
//!
//! Each test builds a throwaway fragment tree and points the binary at it.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_fragment(temp.path(), "sql", "schema-design", "design text");
    write_fragment(temp.path(), "sql", "indexing", "index text");
    write_fragment(temp.path(), "rust", "errors", "use thiserror\nfor libraries");
    temp
}

fn write_fragment(base: &Path, category: &str, name: &str, text: &str) {
    let dir = base.join(category);
    fs::create_dir_all(&dir).expect("Failed to create category dir");
    fs::write(dir.join(format!("{}.md", name)), text).expect("Failed to write fragment");
}

/// The binary with its user config directory redirected under `home`
fn isolated(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pc").expect("Failed to find pc binary");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn pc(base: &Path) -> Command {
    let mut cmd = isolated(base);
    cmd.arg("--base-dir").arg(base);
    cmd
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn test_compose_two_fragments() {
    let temp = fixture();
    pc(temp.path())
        .arg("sql/schema-design+indexing")
        .assert()
        .success()
        .stdout("design text\\nindex text\n")
        .stderr("");
}

#[test]
fn test_compose_across_topics_preserves_order() {
    let temp = fixture();
    pc(temp.path())
        .args(["rust/errors", "sql/indexing"])
        .assert()
        .success()
        .stdout("use thiserror\nfor libraries\\nindex text\n");
}

#[test]
fn test_compose_repeated_fragment_is_not_deduplicated() {
    let temp = fixture();
    pc(temp.path())
        .arg("sql/indexing+indexing")
        .assert()
        .success()
        .stdout("index text\\nindex text\n");
}

#[test]
fn test_custom_separator() {
    let temp = fixture();
    pc(temp.path())
        .args(["--separator", "---", "sql/schema-design+indexing"])
        .assert()
        .success()
        .stdout("design text---index text\n");
}

#[test]
fn test_separator_from_config_file() {
    let temp = fixture();
    let config = temp.path().join("promptcat.yml");
    fs::write(&config, "separator: \"\\n\\n\"\n").expect("Failed to write config");

    pc(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("sql/schema-design+indexing")
        .assert()
        .success()
        .stdout("design text\n\nindex text\n");
}

#[test]
fn test_base_dir_from_config_file() {
    let temp = fixture();
    let config = temp.path().join("promptcat.yml");
    fs::write(&config, format!("base_dir: {}\n", temp.path().display())).expect("Failed to write config");

    isolated(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("sql/indexing")
        .assert()
        .success()
        .stdout("index text\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_read_from_config_home() {
    let temp = fixture();
    let user_dir = temp.path().join(".config").join("promptcat");
    fs::create_dir_all(&user_dir).expect("Failed to create config dir");
    fs::write(user_dir.join("promptcat.yml"), "separator: \" | \"\n").expect("Failed to write config");

    pc(temp.path())
        .arg("sql/schema-design+indexing")
        .assert()
        .success()
        .stdout("design text | index text\n");
}

#[test]
fn test_independent_of_working_directory() {
    let temp = fixture();
    let elsewhere = TempDir::new().expect("Failed to create temp dir");
    pc(temp.path())
        .current_dir(elsewhere.path())
        .arg("sql/indexing")
        .assert()
        .success()
        .stdout("index text\n");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_malformed_specifier() {
    let temp = fixture();
    pc(temp.path())
        .args(["sql/indexing", "sql"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Malformed topic specifier 'sql'"));
}

#[test]
fn test_unknown_category() {
    let temp = fixture();
    pc(temp.path())
        .args(["sql/indexing", "unknowncat/x"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("unknowncat"))
        .stderr(predicate::str::contains("'x'").not());
}

#[test]
fn test_unknown_fragment_lists_available() {
    let temp = fixture();
    pc(temp.path())
        .arg("sql/missing")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("'missing'"))
        .stderr(predicate::str::contains("indexing, schema-design"));
}

#[test]
fn test_absolute_fragment_name_stays_in_category() {
    let temp = fixture();
    let outside = TempDir::new().expect("Failed to create temp dir");
    fs::write(outside.path().join("secret.md"), "OUTSIDE").expect("Failed to write file");

    pc(temp.path())
        .arg(format!("sql/{}", outside.path().join("secret").display()))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("indexing, schema-design"));
}

#[test]
fn test_invalid_utf8_fragment_fails() {
    let temp = fixture();
    fs::write(temp.path().join("sql").join("binary.md"), [0x66, 0xff, 0xfe]).expect("Failed to write file");

    pc(temp.path())
        .arg("sql/indexing+binary")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("binary.md"));
}

#[test]
fn test_extension_flag_rejected() {
    let temp = fixture();
    pc(temp.path())
        .args(["--extension", "txt", "sql/indexing"])
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn test_no_arguments_is_usage_error() {
    let temp = fixture();
    pc(temp.path()).assert().code(1).stdout("");
}

#[test]
fn test_help_succeeds() {
    let temp = fixture();
    isolated(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("category/fragment"));
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_list_all() {
    let temp = fixture();
    pc(temp.path())
        .arg("--list")
        .assert()
        .success()
        .stdout("rust\n  errors\nsql\n  indexing\n  schema-design\n");
}

#[test]
fn test_list_one_category() {
    let temp = fixture();
    pc(temp.path())
        .args(["--list", "sql"])
        .assert()
        .success()
        .stdout("sql\n  indexing\n  schema-design\n");
}

#[test]
fn test_list_unknown_category() {
    let temp = fixture();
    pc(temp.path())
        .args(["--list", "nope"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Category not found: nope"));
}
