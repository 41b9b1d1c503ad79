//! Integration tests for the `jot` CLI.
//!
//! Each test creates a temp data directory, runs `jot` as a subprocess
//! with `JOT_DIR` pointing at it, and verifies stdout and/or storage
//! contents.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Get the path to the built `jot` binary.
fn jot_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("jot");
    path
}

fn jot(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(jot_bin())
        .args(args)
        .env("JOT_DIR", dir)
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn add_then_list_shows_the_task() {
    let dir = TempDir::new().unwrap();
    let added = jot(dir.path(), &["add", "  Buy milk  "]);
    assert!(added.status.success());
    assert!(stdout(&added).starts_with("added "));

    let listed = jot(dir.path(), &["list"]);
    let out = stdout(&listed);
    assert!(out.contains("[ ]"));
    assert!(out.contains("Buy milk"));

    // The stored text is trimmed; check the value itself, not the padded
    // column rendering
    let payload: serde_json::Value =
        serde_json::from_str(&stdout(&jot(dir.path(), &["list", "--json"]))).unwrap();
    assert_eq!(payload["tasks"][0]["text"], "Buy milk");
}

#[test]
fn whitespace_only_add_is_a_noop() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "   "]);
    let listed = jot(dir.path(), &["list", "--json"]);
    let payload: serde_json::Value = serde_json::from_str(&stdout(&listed)).unwrap();
    assert_eq!(payload["tasks"].as_array().unwrap().len(), 0);
}

#[test]
fn tasks_survive_across_invocations() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "first"]);
    jot(dir.path(), &["add", "second"]);

    let listed = jot(dir.path(), &["list", "--json"]);
    let payload: serde_json::Value = serde_json::from_str(&stdout(&listed)).unwrap();
    let tasks = payload["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    // Newest first
    assert_eq!(tasks[0]["text"], "second");
    assert_eq!(tasks[1]["text"], "first");
}

#[test]
fn done_toggles_and_items_left_uses_slovak_plurals() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "a"]);
    jot(dir.path(), &["add", "b"]);
    jot(dir.path(), &["add", "c"]);

    let listed = jot(dir.path(), &["list"]);
    assert!(stdout(&listed).contains("Zostávajú 3 úlohy"));

    let payload: serde_json::Value =
        serde_json::from_str(&stdout(&jot(dir.path(), &["list", "--json"]))).unwrap();
    let id = payload["tasks"][0]["id"].as_str().unwrap().to_string();

    let toggled = jot(dir.path(), &["done", &id]);
    assert!(stdout(&toggled).contains("done"));

    let listed = jot(dir.path(), &["list"]);
    let out = stdout(&listed);
    assert!(out.contains("[x]"));
    assert!(out.contains("Zostávajú 2 úlohy"));

    // Toggle back
    jot(dir.path(), &["done", &id]);
    let listed = jot(dir.path(), &["list"]);
    assert!(stdout(&listed).contains("Zostávajú 3 úlohy"));
}

#[test]
fn items_left_singular_form() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "only"]);
    let listed = jot(dir.path(), &["list"]);
    assert!(stdout(&listed).contains("Zostáva 1 úloha"));
}

#[test]
fn locale_override_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "locale = \"en\"\n").unwrap();
    jot(dir.path(), &["add", "only"]);
    let listed = jot(dir.path(), &["list"]);
    assert!(stdout(&listed).contains("1 item left"));
}

#[test]
fn edit_replaces_text() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "original"]);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout(&jot(dir.path(), &["list", "--json"]))).unwrap();
    let id = payload["tasks"][0]["id"].as_str().unwrap().to_string();

    jot(dir.path(), &["edit", &id, "  renamed  "]);
    let listed = jot(dir.path(), &["list"]);
    let out = stdout(&listed);
    assert!(out.contains("renamed"));
    assert!(!out.contains("original"));
}

#[test]
fn rm_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "victim"]);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout(&jot(dir.path(), &["list", "--json"]))).unwrap();
    let id = payload["tasks"][0]["id"].as_str().unwrap().to_string();

    // stdin is /dev/null → prompt reads EOF → cancelled
    jot(dir.path(), &["rm", &id]);
    let listed = jot(dir.path(), &["list"]);
    assert!(stdout(&listed).contains("victim"));

    jot(dir.path(), &["rm", &id, "--yes"]);
    let listed = jot(dir.path(), &["list"]);
    assert!(!stdout(&listed).contains("victim"));
}

#[test]
fn rm_unknown_id_is_a_noop() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "keep"]);
    let output = jot(dir.path(), &["rm", "999", "--yes"]);
    assert!(output.status.success());
    let listed = jot(dir.path(), &["list"]);
    assert!(stdout(&listed).contains("keep"));
}

#[test]
fn clear_done_removes_only_completed() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "stays"]);
    jot(dir.path(), &["add", "goes"]);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout(&jot(dir.path(), &["list", "--json"]))).unwrap();
    let id = payload["tasks"][0]["id"].as_str().unwrap().to_string();
    jot(dir.path(), &["done", &id]);

    let cleared = jot(dir.path(), &["clear-done", "--yes"]);
    assert!(stdout(&cleared).contains("removed 1"));

    let listed = jot(dir.path(), &["list"]);
    let out = stdout(&listed);
    assert!(out.contains("stays"));
    assert!(!out.contains("goes"));

    // Second run finds nothing and skips the prompt
    let again = jot(dir.path(), &["clear-done"]);
    assert!(stdout(&again).contains("no completed tasks"));
}

#[test]
fn clear_all_purges_the_stored_key() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "anything"]);
    jot(dir.path(), &["clear-all", "--yes"]);

    let dumped = jot(dir.path(), &["dump", "--json"]);
    let payload: serde_json::Value = serde_json::from_str(&stdout(&dumped)).unwrap();
    let entries = payload["entries"].as_array().unwrap();
    assert!(entries.iter().all(|e| e["key"] != "TASKS"));
}

#[test]
fn due_date_filters() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "ancient", "--due", "2000-01-01"]);
    jot(dir.path(), &["add", "for today", "--due", "today"]);
    jot(dir.path(), &["add", "undated"]);

    let overdue = stdout(&jot(dir.path(), &["list", "--due", "overdue"]));
    assert!(overdue.contains("ancient"));
    assert!(!overdue.contains("for today"));
    assert!(!overdue.contains("undated"));

    let today = stdout(&jot(dir.path(), &["list", "--due", "today"]));
    assert!(today.contains("for today"));
    assert!(!today.contains("ancient"));
    assert!(!today.contains("undated"));
}

#[test]
fn dated_tasks_sort_before_undated() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "undated"]);
    jot(dir.path(), &["add", "later", "--due", "2099-12-31"]);
    jot(dir.path(), &["add", "sooner", "--due", "2000-01-01"]);

    let payload: serde_json::Value =
        serde_json::from_str(&stdout(&jot(dir.path(), &["list", "--json"]))).unwrap();
    let texts: Vec<&str> = payload["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["sooner", "later", "undated"]);
}

#[test]
fn search_is_literal_and_case_insensitive() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "Buy Milk today"]);
    jot(dir.path(), &["add", "a.b"]);
    jot(dir.path(), &["add", "axb"]);

    let milk = stdout(&jot(dir.path(), &["list", "--search", "milk"]));
    assert!(milk.contains("Buy Milk today"));
    assert!(!milk.contains("axb"));

    let literal = stdout(&jot(dir.path(), &["list", "--search", "a.b"]));
    assert!(literal.contains("a.b"));
    assert!(!literal.contains("axb"));
}

#[test]
fn status_filters() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "open task"]);
    jot(dir.path(), &["add", "closed task"]);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout(&jot(dir.path(), &["list", "--json"]))).unwrap();
    // Newest first, so tasks[0] is "closed task"
    let id = payload["tasks"][0]["id"].as_str().unwrap().to_string();
    jot(dir.path(), &["done", &id]);

    let active = stdout(&jot(dir.path(), &["list", "--status", "active"]));
    assert!(active.contains("open task"));
    assert!(!active.contains("closed task"));

    let done = stdout(&jot(dir.path(), &["list", "--status", "done"]));
    assert!(done.contains("closed task"));
    assert!(!done.contains("open task"));
}

#[test]
fn dump_shows_the_tasks_key() {
    let dir = TempDir::new().unwrap();
    jot(dir.path(), &["add", "anything"]);
    let dumped = stdout(&jot(dir.path(), &["dump"]));
    assert!(dumped.contains("TASKS"));
    assert!(dumped.contains("anything"));
}

#[test]
fn corrupt_snapshot_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("TASKS.kv"), "not json {{{").unwrap();
    let listed = jot(dir.path(), &["list", "--json"]);
    assert!(listed.status.success());
    let payload: serde_json::Value = serde_json::from_str(&stdout(&listed)).unwrap();
    assert_eq!(payload["tasks"].as_array().unwrap().len(), 0);
}
