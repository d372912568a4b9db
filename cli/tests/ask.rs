//! # VELOS CLI Ask/Explain Integration Tests
//!
//! File: cli/tests/ask.rs
//!
//! ## Overview
//!
//! Integration tests for the one-shot commands `velos ask` and
//! `velos explain`, including knowledge base and configuration resolution.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_ask_greeting() {
    let dir = tempdir().unwrap();
    let kb = write_knowledge(dir.path(), SAMPLE_KNOWLEDGE);

    velos_cmd()
        .args(["--knowledge", kb.to_str().unwrap(), "ask", "Hello!"])
        .assert()
        .success()
        .stdout("VELOS: hello there.\n");
}

#[test]
fn test_ask_distant_question_gets_a_reply() {
    let dir = tempdir().unwrap();
    let kb = write_knowledge(dir.path(), SAMPLE_KNOWLEDGE);

    // Too far from every stored question: a random pair from the context answers.
    velos_cmd()
        .args(["-k", kb.to_str().unwrap(), "ask", "tell", "me", "about", "programming:", "what", "is", "a", "compiler?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("VELOS: "));

    velos_cmd()
        .args(["-k", kb.to_str().unwrap(), "ask", "programming?"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(".\n"));
}

#[test]
fn test_ask_reads_knowledge_from_env() {
    let dir = tempdir().unwrap();
    let kb = write_knowledge(dir.path(), SAMPLE_KNOWLEDGE);

    velos_cmd()
        .env("VELOS_KNOWLEDGE", &kb)
        .args(["ask", "hi"])
        .assert()
        .success()
        .stdout("VELOS: hello there.\n");
}

#[test]
fn test_ask_uses_context_json_in_working_directory() {
    let dir = tempdir().unwrap();
    write_knowledge(dir.path(), SAMPLE_KNOWLEDGE);
    // Stop the project config search at the temp dir.
    std::fs::create_dir(dir.path().join(".git")).unwrap();

    velos_cmd()
        .current_dir(dir.path())
        .args(["ask", "hey"])
        .assert()
        .success()
        .stdout("VELOS: hello there.\n");
}

#[test]
fn test_ask_missing_knowledge_base_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    velos_cmd()
        .args(["-k", missing.to_str().unwrap(), "ask", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Knowledge base unavailable"));
}

#[test]
fn test_ask_invalid_knowledge_base_fails() {
    let dir = tempdir().unwrap();
    let kb = write_knowledge(dir.path(), "{ \"Query\": ");

    velos_cmd()
        .args(["-k", kb.to_str().unwrap(), "ask", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid knowledge base document"));
}

#[test]
fn test_ask_empty_knowledge_base_fails() {
    let dir = tempdir().unwrap();
    let kb = write_knowledge(dir.path(), "[]");

    velos_cmd()
        .args(["-k", kb.to_str().unwrap(), "ask", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("knowledge base is empty"));
}

#[test]
fn test_config_file_sets_label_and_knowledge() {
    let dir = tempdir().unwrap();
    let kb = write_knowledge(dir.path(), SAMPLE_KNOWLEDGE);
    let config = write_config(
        dir.path(),
        &format!(
            "[knowledge]\npath = {:?}\n\n[chat]\nlabel = \"BOT\"\n",
            kb.to_str().unwrap()
        ),
    );

    velos_cmd()
        .args(["--config", config.to_str().unwrap(), "ask", "hi"])
        .assert()
        .success()
        .stdout("BOT: hello there.\n");

    // Command-line label beats the file.
    velos_cmd()
        .args(["--config", config.to_str().unwrap(), "--label", "CLI", "ask", "hi"])
        .assert()
        .success()
        .stdout("CLI: hello there.\n");
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "[matching]\ncontext_threshold = 2.0\n");

    velos_cmd()
        .args(["--config", config.to_str().unwrap(), "ask", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("context_threshold"));
}

#[test]
fn test_seeded_replies_are_reproducible() {
    let dir = tempdir().unwrap();
    let kb = write_knowledge(
        dir.path(),
        r#"[{"Query": "Cats", "Conversation": [
            {"Question": "q1", "Answer": "the cat saw the dog and the dog saw the cat"},
            {"Question": "q2", "Answer": "one cat two cat red cat blue cat"}
        ]}]"#,
    );

    let run = || {
        velos_cmd()
            .args(["-k", kb.to_str().unwrap(), "--seed", "42", "ask", "cats"])
            .output()
            .expect("Failed to run velos")
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_explain_prints_trace() {
    let dir = tempdir().unwrap();
    let kb = write_knowledge(dir.path(), SAMPLE_KNOWLEDGE);

    velos_cmd()
        .args(["-k", kb.to_str().unwrap(), "explain", "What", "is", "Rust?"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Input:       What is Rust?")
                .and(predicate::str::contains("Context:     Programming (fallback (largest conversation)"))
                .and(predicate::str::contains("(nearest question, distance 0)"))
                .and(predicate::str::contains("Reply:       Rust is a systems programming language.")),
        );
}

#[test]
fn test_host_user_config_is_ignored() {
    let dir = tempdir().unwrap();
    let kb = write_knowledge(dir.path(), SAMPLE_KNOWLEDGE);
    assert!(!isolated_home().join(".config/velos/config.toml").exists());

    velos_cmd()
        .args(["-k", kb.to_str().unwrap(), "ask", "hi"])
        .assert()
        .success()
        .stdout("VELOS: hello there.\n");
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_config_sets_label() {
    let dir = tempdir().unwrap();
    let kb = write_knowledge(dir.path(), SAMPLE_KNOWLEDGE);
    let config_home = dir.path().join("config-home");
    write_user_config(&config_home, "[chat]\nlabel = \"USER\"\n");

    velos_cmd()
        .env("XDG_CONFIG_HOME", &config_home)
        .args(["-k", kb.to_str().unwrap(), "ask", "hi"])
        .assert()
        .success()
        .stdout("USER: hello there.\n");
}
