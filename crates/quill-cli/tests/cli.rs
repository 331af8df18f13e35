use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quill(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quill").unwrap();
    cmd.arg("--config")
        .arg(dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_exec_filters_authors() {
    let dir = TempDir::new().unwrap();
    quill(&dir)
        .args([
            "exec",
            r#"{"selection":[{"field":"authors","arguments":{"query":"and"},"selection":[{"field":"name"}]}]}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Andrew"))
        .stdout(predicate::str::contains("Sarah").not());
}

#[test]
fn test_exec_compact_format() {
    let dir = TempDir::new().unwrap();
    quill(&dir)
        .args([
            "--format",
            "compact",
            "exec",
            r#"{"selection":[{"field":"me","selection":[{"field":"id"}]}]}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"data\":{\"me\":{\"id\":\"123098\"}}}\n"));
}

#[test]
fn test_exec_reports_field_errors() {
    let dir = TempDir::new().unwrap();
    quill(&dir)
        .args([
            "exec",
            r#"{"operation":"mutation","selection":[{"field":"createAuthor","arguments":{"name":"Dup","email":"andrew@example.com"},"selection":[{"field":"id"}]}]}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("EMAIL_TAKEN"));
}

#[test]
fn test_exec_strict_fails_on_field_error() {
    let dir = TempDir::new().unwrap();
    quill(&dir)
        .args([
            "exec",
            "--strict",
            r#"{"selection":[{"field":"authors","selection":[{"field":"friends"}]}]}"#,
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("UNKNOWN_FIELD"));
}

#[test]
fn test_exec_from_file() {
    let dir = TempDir::new().unwrap();
    let request = dir.path().join("request.json");
    std::fs::write(
        &request,
        r#"{"selection":[{"field":"contents","arguments":{"query":"music"},"selection":[{"field":"title"}]}]}"#,
    )
    .unwrap();

    quill(&dir)
        .arg("exec")
        .arg("--file")
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("Programming Music"));
}

#[test]
fn test_exec_invalid_json() {
    let dir = TempDir::new().unwrap();
    quill(&dir)
        .args(["exec", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid request"));
}

#[test]
fn test_empty_store() {
    let dir = TempDir::new().unwrap();
    quill(&dir)
        .args([
            "--empty",
            "--format",
            "compact",
            "exec",
            r#"{"selection":[{"field":"authors","selection":[{"field":"id"}]}]}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"data":{"authors":[]}}"#));
}

#[test]
fn test_config_disables_seed_data() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "seed_demo_data = false\noutput_format = \"compact\"\n",
    )
    .unwrap();

    quill(&dir)
        .args([
            "exec",
            r#"{"selection":[{"field":"contents","selection":[{"field":"id"}]}]}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"data":{"contents":[]}}"#));
}

#[test]
fn test_schema_command() {
    let dir = TempDir::new().unwrap();
    quill(&dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Query {"))
        .stdout(predicate::str::contains("createAnnotation("));
}

#[test]
fn test_serve_answers_ping() {
    let dir = TempDir::new().unwrap();
    quill(&dir)
        .arg("serve")
        .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":1"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    quill(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quill"));
}

#[test]
fn test_completions_to_file() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("quill.zsh");
    quill(&dir)
        .args(["completions", "zsh", "--output"])
        .arg(&script)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&script).unwrap();
    assert!(contents.contains("#compdef quill"));
}
