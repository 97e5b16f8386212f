use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;

fn ontime(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ontime"))
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("NO_COLOR", "1")
        .env_remove("ONTIME_LOG")
        .arg("--data-dir")
        .arg(home.join("data"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("run ontime")
}

fn json_ok(home: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--format", "json", "--yes"];
    full.extend_from_slice(args);
    let output = ontime(home, &full);
    assert!(
        output.status.success(),
        "{args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("record id").to_string()
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[test]
fn subjects_and_tasks_survive_restarts() {
    let home = TempDir::new().unwrap();
    let home = home.path();

    let subject = json_ok(home, &["subject", "add", "Biology", "--priority", "high"]);
    assert_eq!(subject["name"], "Biology");
    assert_eq!(subject["priority"], "high");
    let subject_id = id_of(&subject);

    let task = json_ok(
        home,
        &["task", "add", "Essay", "--subject", &subject_id, "--type", "exam"],
    );
    assert_eq!(task["status"], "pending");
    assert_eq!(task["type"], "exam");
    let task_id = id_of(&task);

    let tasks = json_ok(home, &["task", "list"]);
    assert_eq!(tasks.as_array().map(Vec::len), Some(1));
    assert_eq!(tasks[0]["subject"], "Biology");

    let toggled = json_ok(home, &["task", "toggle", &task_id]);
    assert_eq!(toggled["status"], "completed");

    let dashboard = json_ok(home, &["dashboard"]);
    assert_eq!(dashboard["subjectCount"], 1);
    assert_eq!(dashboard["pendingCount"], 0);
    assert_eq!(dashboard["completionRate"], 100);
}

#[test]
fn export_reset_import_restores_everything() {
    let home = TempDir::new().unwrap();
    let home = home.path();
    let subject_id = id_of(&json_ok(home, &["subject", "add", "Chemistry"]));
    json_ok(home, &["task", "add", "Lab report", "--subject", &subject_id]);

    let backup = home.join("backup.json");
    let written = json_ok(home, &["export", "--output", backup.to_str().unwrap()]);
    assert_eq!(written["subjects"], 1);
    assert_eq!(written["tasks"], 1);
    assert!(backup.exists());

    let counts = json_ok(home, &["reset"]);
    assert_eq!(counts, json!({"subjects": 0, "tasks": 0, "schedule": 0}));
    assert_eq!(json_ok(home, &["subject", "list"]), json!([]));

    let counts = json_ok(home, &["import", backup.to_str().unwrap()]);
    assert_eq!(counts, json!({"subjects": 1, "tasks": 1, "schedule": 0}));
    assert_eq!(json_ok(home, &["subject", "list"])[0]["name"], "Chemistry");
}

#[test]
fn rejected_input_exits_non_zero_with_a_notice() {
    let home = TempDir::new().unwrap();
    let home = home.path();
    let subject_id = id_of(&json_ok(home, &["subject", "add", "Physics"]));

    let output = ontime(
        home,
        &["session", "add", &subject_id, "--start", "11", "--end", "9"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("End time must be after start time"), "{stderr}");
    assert!(!stderr.contains("ontime error"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn settings_set_without_flags_changes_nothing() {
    let home = TempDir::new().unwrap();
    let home = home.path();

    let output = ontime(home, &["settings", "set"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nothing to change"), "{stderr}");
    assert!(!home.join("data").join("ontime_settings.json").exists());

    let settings = json_ok(home, &["settings", "show"]);
    assert_eq!(settings["accent"], "teal");
    assert_eq!(settings["darkMode"], false);
}

#[test]
fn export_defaults_to_a_dated_file_in_the_working_directory() {
    let home = TempDir::new().unwrap();
    let home = home.path();
    json_ok(home, &["subject", "add", "Geography"]);

    let written = json_ok(home, &["export"]);
    let path = written["path"].as_str().unwrap();
    assert!(path.starts_with("ontime-backup-"), "{path}");
    assert!(path.ends_with(".json"), "{path}");
    assert_eq!(path.len(), "ontime-backup-YYYY-MM-DD.json".len());
    assert!(home.join(path).exists());
}

#[test]
fn list_limit_flags_cap_rows() {
    let home = TempDir::new().unwrap();
    let home = home.path();
    for name in ["Art", "Music", "Drama"] {
        json_ok(home, &["subject", "add", name]);
    }

    assert_eq!(json_ok(home, &["subject", "list"]).as_array().map(Vec::len), Some(3));
    assert_eq!(
        json_ok(home, &["--limit", "2", "subject", "list"]).as_array().map(Vec::len),
        Some(2)
    );
    assert_eq!(
        json_ok(home, &["--limit", "2", "subject", "list", "--limit", "1"])
            .as_array()
            .map(Vec::len),
        Some(1)
    );
}

#[test]
fn deletes_need_confirmation_without_a_terminal() {
    let home = TempDir::new().unwrap();
    let home = home.path();
    let subject_id = id_of(&json_ok(home, &["subject", "add", "History"]));

    let output = ontime(home, &["subject", "delete", &subject_id]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--yes"));
    assert_eq!(json_ok(home, &["subject", "list"]).as_array().map(Vec::len), Some(1));
}

#[test]
fn schema_lists_registered_names() {
    let home = TempDir::new().unwrap();
    let output = ontime(home.path(), &["--format", "json", "schema"]);
    assert!(output.status.success());
    let listing: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names = listing["schemas"].as_array().unwrap();
    assert!(names.iter().any(|name| name == "export_document"));
}

// ---------------------------------------------------------------------------
// IPC
// ---------------------------------------------------------------------------

#[test]
fn ipc_answers_line_by_line() {
    let home = TempDir::new().unwrap();
    let home = home.path();
    let mut child = Command::new(env!("CARGO_BIN_EXE_ontime"))
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .arg("--data-dir")
        .arg(home.join("data"))
        .arg("ipc")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn ontime ipc");
    let mut stdin = child.stdin.take().unwrap();
    let mut reader = BufReader::new(child.stdout.take().unwrap());

    let mut call = |request: Value| -> Value {
        writeln!(stdin, "{request}").unwrap();
        stdin.flush().unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        serde_json::from_str(line.trim()).unwrap()
    };

    let created = call(json!({"id": "1", "method": "subject.create", "params": {"name": "Art"}}));
    assert_eq!(created["id"], "1");
    assert_eq!(created["ok"], true);
    assert_eq!(created["result"]["name"], "Art");
    assert_eq!(created["notifications"][0]["message"], "Subject added");

    let missing = call(json!({"id": "2", "method": "task.toggle", "params": {"id": "nope"}}));
    assert_eq!(missing["ok"], false);
    assert_eq!(missing["error"]["code"], "not_found");

    let unknown = call(json!({"id": 3, "method": "subject.rename"}));
    assert_eq!(unknown["id"], 3);
    assert_eq!(unknown["error"]["code"], "unknown_method");

    drop(stdin);
    assert!(child.wait().unwrap().success());
}
