//! End-to-end CLI tests for chatcorpus.
//!
//! These tests run the actual binary against small exports and check the
//! written corpus.
//!
//! # Test Categories
//!
//! - **Basic functionality**: Each source works via CLI
//! - **Output formats**: text, JSONL and CSV generation
//! - **Windows and thresholds**: date filters, first-quote window, gap
//! - **Error handling**: Proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with test fixtures for all sources.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    // Two threads, one quote, one bot
    let discord = r#"{
  "guild": {"id": "123", "name": "Test Server"},
  "channel": {"id": "456", "name": "general"},
  "messages": [
    {"id": "1", "type": "Default", "timestamp": "2024-01-15T10:00:00+00:00", "content": "Ahoj!", "author": {"id": "10", "name": "alice", "isBot": false}},
    {"id": "2", "type": "Default", "timestamp": "2024-01-15T10:05:00+00:00", "content": "cau", "author": {"id": "20", "name": "bob", "isBot": false}},
    {"id": "3", "type": "Default", "timestamp": "2024-01-15T10:06:00+00:00", "content": "> cau", "author": {"id": "10", "name": "alice", "isBot": false}},
    {"id": "4", "type": "Default", "timestamp": "2024-01-15T10:07:00+00:00", "content": "beep", "author": {"id": "99", "name": "botty", "isBot": true}},
    {"id": "5", "type": "Default", "timestamp": "2024-01-15T12:00:00+00:00", "content": "jak je", "author": {"id": "20", "name": "bob", "isBot": false}},
    {"id": "6", "type": "Default", "timestamp": "2024-01-15T12:10:00+00:00", "content": "dobre", "author": {"id": "10", "name": "alice", "isBot": false}}
  ]
}"#;
    fs::write(dir.path().join("discord.json"), discord).unwrap();

    let jsonl = r#"{"id":1,"timestamp":"2024-01-15T10:00:00Z","author_id":"a","author_name":"alice","author_is_bot":false,"content":"Hey bob :doubt:"}
{"id":2,"timestamp":"2024-01-15T10:01:00Z","author_id":"b","author_name":"bob","author_is_bot":false,"content":"Čau 😂"}
"#;
    fs::write(dir.path().join("messages.jsonl"), jsonl).unwrap();

    let empty = r#"{"guild": {"id": "1", "name": "x"}, "channel": {"id": "2", "name": "y"}, "messages": []}"#;
    fs::write(dir.path().join("empty.json"), empty).unwrap();

    let missing_content = r#"{"messages": [
    {"id": "1", "timestamp": "2024-01-15T10:00:00+00:00", "author": {"id": "10", "name": "alice", "isBot": false}}
  ]}"#;
    fs::write(dir.path().join("missing_content.json"), missing_content).unwrap();

    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    dir
}

fn chatcorpus_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatcorpus"));
    Command::from_std(cmd)
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Basic Functionality Tests
// ============================================================================

mod basic_functionality {
    use super::*;

    #[test]
    fn test_discord_basic() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");
        let output = output_path(&fixtures, "out.txt");

        chatcorpus_cmd()
            .args([
                "discord",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Done"))
            .stdout(predicate::str::contains("Pairs:      2"));

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "cau\nahoj !\ndobre\njak je\n");
    }

    #[test]
    fn test_discord_alias() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");
        let output = output_path(&fixtures, "out.txt");

        chatcorpus_cmd()
            .args(["dc", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        assert!(output.exists());
    }

    #[test]
    fn test_jsonl_basic() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("messages.jsonl");
        let output = output_path(&fixtures, "out.txt");

        chatcorpus_cmd()
            .args([
                "jsonl",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ])
            .assert()
            .success();

        // "bob" is in the roster and is stripped as a mention
        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "cau  ¤joy¤\nhey   ¤doubt¤\n");
    }

    #[test]
    fn test_empty_export_writes_empty_corpus() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("empty.json");
        let output = output_path(&fixtures, "out.txt");

        chatcorpus_cmd()
            .args(["discord", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 0 messages"));

        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }
}

// ============================================================================
// Output Format Tests
// ============================================================================

mod output_formats {
    use super::*;

    #[test]
    fn test_jsonl_output() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");
        let output = output_path(&fixtures, "out.jsonl");

        chatcorpus_cmd()
            .args([
                "discord",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-f",
                "jsonl",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("reply").is_some());
            assert!(value.get("parent").is_some());
            assert!(value.get("reply_id").is_none());
        }
    }

    #[test]
    fn test_jsonl_with_ids() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");
        let output = output_path(&fixtures, "out.jsonl");

        chatcorpus_cmd()
            .args([
                "discord",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-f",
                "jsonl",
                "--ids",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        let first: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
        assert_eq!(first["reply_id"], 2);
        assert_eq!(first["parent_id"], 1);
        assert_eq!(first["reply"], "cau");
    }

    #[test]
    fn test_csv_output() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");
        let output = output_path(&fixtures, "out.csv");

        chatcorpus_cmd()
            .args([
                "discord",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-f",
                "csv",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Reply;Parent\n"));
        assert!(content.contains("cau;ahoj !"));
    }

    #[test]
    fn test_default_output_follows_format() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");

        chatcorpus_cmd()
            .current_dir(fixtures.path())
            .args(["discord", input.to_str().unwrap(), "-f", "jsonl"])
            .assert()
            .success()
            .stdout(predicate::str::contains("corpus.jsonl"));

        assert!(fixtures.path().join("corpus.jsonl").exists());
    }
}

// ============================================================================
// Window and Threshold Tests
// ============================================================================

mod windows {
    use super::*;

    #[test]
    fn test_gap_override_merges_threads() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");
        let output = output_path(&fixtures, "out.txt");

        chatcorpus_cmd()
            .args([
                "discord",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--gap",
                "180",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Gap:     180 min"));

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "cau ¤newmsg¤ jak je\nahoj !\ndobre\ncau ¤newmsg¤ jak je\n"
        );
    }

    #[test]
    fn test_since_first_quote() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");
        let output = output_path(&fixtures, "out.txt");

        chatcorpus_cmd()
            .args([
                "discord",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--since-first-quote",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("since first quote"));

        assert_eq!(fs::read_to_string(&output).unwrap(), "dobre\njak je\n");
    }

    #[test]
    fn test_after_filter_excludes_everything() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");
        let output = output_path(&fixtures, "out.txt");

        chatcorpus_cmd()
            .args([
                "discord",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--after",
                "2024-01-16",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("In window:  0"));

        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_extra_tag_is_stripped() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");
        let output = output_path(&fixtures, "out.txt");

        chatcorpus_cmd()
            .args([
                "discord",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--tag",
                "dobre",
            ])
            .assert()
            .success();

        // The reply becomes empty, the message is dropped and the pair with it
        assert_eq!(fs::read_to_string(&output).unwrap(), "cau\nahoj !\n");
    }

    #[test]
    fn test_dump_config() {
        chatcorpus_cmd()
            .args(["--dump-config", "--gap", "45"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"thread_gap_minutes\": 45"))
            .stdout(predicate::str::contains("\"boundary_token\": \"newmsg\""));
    }

    #[test]
    fn test_config_file() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");
        let output = output_path(&fixtures, "out.txt");
        let config = fixtures.path().join("corpus.json");
        fs::write(&config, r#"{"thread_gap_minutes": 180, "boundary_token": "sep"}"#).unwrap();

        chatcorpus_cmd()
            .args([
                "discord",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-c",
                config.to_str().unwrap(),
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("cau ¤sep¤ jak je\n"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod error_handling {
    use super::*;

    #[test]
    fn test_missing_input_file() {
        chatcorpus_cmd()
            .args(["discord", "/nonexistent/file.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error"));
    }

    #[test]
    fn test_invalid_json() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("broken.json");

        chatcorpus_cmd()
            .args(["discord", input.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse"));
    }

    #[test]
    fn test_missing_field() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("missing_content.json");
        let output = output_path(&fixtures, "out.txt");

        chatcorpus_cmd()
            .args(["discord", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing required field 'content'"));

        assert!(!output.exists());
    }

    #[test]
    fn test_invalid_date() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");

        chatcorpus_cmd()
            .args(["discord", input.to_str().unwrap(), "--after", "15-01-2024"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid date"));
    }

    #[test]
    fn test_invalid_config_file() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("discord.json");
        let config = fixtures.path().join("bad.json");
        fs::write(&config, r#"{"boundary_token": ""}"#).unwrap();

        chatcorpus_cmd()
            .args(["discord", input.to_str().unwrap(), "-c", config.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn test_unknown_source() {
        chatcorpus_cmd()
            .args(["slack", "file.json"])
            .assert()
            .failure();
    }

    #[test]
    fn test_missing_arguments() {
        chatcorpus_cmd().assert().failure();
    }
}
