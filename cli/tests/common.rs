//! # VELOS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files: a handle on the compiled
//! `velos` binary and fixtures that write knowledge bases and config files
//! into temporary directories.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Knowledge base used by most CLI tests.
pub const SAMPLE_KNOWLEDGE: &str = r#"[
  {
    "Query": "Greetings",
    "Conversation": [
      { "Question": "hi", "Answer": "hello there" }
    ]
  },
  {
    "Query": "Programming",
    "Conversation": [
      { "Question": "What is Rust?", "Answer": "Rust is a systems programming language" },
      { "Question": "What is a compiler?", "Answer": "A compiler translates source code" },
      { "Question": "Do you write code?", "Answer": "I am made of code" }
    ]
  }
]"#;

/// # Get VELOS Command (`velos_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `velos` binary with the
/// host environment shut out: `VELOS_KNOWLEDGE` and `RUST_LOG` are cleared,
/// and `HOME`/`XDG_CONFIG_HOME` point at a directory that holds no
/// `velos/config.toml`, so the user configuration of whoever runs the tests
/// is never merged in.
///
/// ## Panics
/// Panics if the `velos` binary cannot be found via `Command::cargo_bin`.
pub fn velos_cmd() -> Command {
    let mut cmd = Command::cargo_bin("velos").expect("Failed to find velos binary for testing");
    let home = isolated_home();
    cmd.env_remove("VELOS_KNOWLEDGE")
        .env_remove("RUST_LOG")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// Never created, so no user configuration can exist below it.
pub fn isolated_home() -> PathBuf {
    std::env::temp_dir().join(format!("velos-test-home-{}", std::process::id()))
}

/// Writes `content` as the user configuration below `config_home`, laid out
/// the way `XDG_CONFIG_HOME` is read on Linux.
pub fn write_user_config(config_home: &Path, content: &str) -> PathBuf {
    let dir = config_home.join("velos");
    fs::create_dir_all(&dir).expect("Failed to create user config directory");
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("Failed to write user config fixture");
    path
}

/// Writes `content` as `context.json` inside `dir` and returns its path.
pub fn write_knowledge(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("context.json");
    fs::write(&path, content).expect("Failed to write knowledge base fixture");
    path
}

/// Writes `content` as `velos.toml` inside `dir` and returns its path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("velos.toml");
    fs::write(&path, content).expect("Failed to write config fixture");
    path
}
