#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Each test points `XDG_CONFIG_HOME` at a fresh temp directory so the
//! user's real configuration is never read.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn convo(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("convo").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1");
    cmd
}

fn write_config(config_home: &TempDir, contents: &str) {
    let dir = config_home.path().join("convo");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    convo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chat with an LLM"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("languages"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    convo(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    convo(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("Spanish"))
        .stdout(predicate::str::contains("zh-cn"))
        .stdout(predicate::str::contains("Hindi"));
}

#[test]
fn test_providers_list_without_config() {
    let home = TempDir::new().unwrap();
    convo(&home)
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers configured"));
}

#[test]
fn test_providers_list_with_config() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"
        [convo]
        provider = "ollama"
        model = "gemma3:12b"

        [providers.ollama]
        endpoint = "http://localhost:11434"
        models = ["gemma3:12b"]
        "#,
    );

    convo(&home)
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("ollama"))
        .stdout(predicate::str::contains("(default)"))
        .stdout(predicate::str::contains("http://localhost:11434"));
}

#[test]
fn test_ask_rejects_blank_question() {
    let home = TempDir::new().unwrap();
    convo(&home)
        .arg("ask")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a question"));
}

#[test]
fn test_ask_without_config_reports_missing_provider() {
    let home = TempDir::new().unwrap();
    convo(&home)
        .args(["ask", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required configuration: 'provider'"));
}

#[test]
fn test_ask_rejects_unsupported_language() {
    let home = TempDir::new().unwrap();
    write_config(
        &home,
        r#"
        [convo]
        provider = "ollama"
        model = "gemma3:12b"

        [providers.ollama]
        endpoint = "http://localhost:11434"
        "#,
    );

    convo(&home)
        .args(["ask", "--lang", "klingon", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language"));
}

#[test]
fn test_chat_help() {
    let home = TempDir::new().unwrap();
    convo(&home)
        .args(["chat", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--lang"))
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("--model"));
}
