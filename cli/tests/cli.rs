use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn duetodo(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("duetodo"));
    cmd.current_dir(dir.path())
        .env_remove("DUETODO_FILE")
        .env_remove("DUETODO_LOCK")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn stored(dir: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(dir.path().join("todos.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_full_workflow_in_working_directory() {
    let temp = TempDir::new().unwrap();

    // 1. Nothing yet
    duetodo(&temp)
        .arg("view")
        .assert()
        .success()
        .stdout("No todos found.\n");
    assert!(!temp.path().join("todos.json").exists());

    // 2. Add three todos
    duetodo(&temp)
        .args(["add", "Buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo added: Buy milk (ID: 1)"));
    duetodo(&temp)
        .args(["add", "Pay", "rent", "--due", "2020-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 2)"));
    duetodo(&temp)
        .args(["add", "Dentist", "-d", "2020-01-01T09:00:00+00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 3)"));

    let todos = stored(&temp);
    assert_eq!(todos.as_array().unwrap().len(), 3);
    assert_eq!(todos[1]["title"], "Pay rent");
    assert_eq!(todos[1]["status"], "pending");

    // 3. View is sorted by due date
    let output = duetodo(&temp).arg("view").assert().success().get_output().stdout.clone();
    let output = String::from_utf8(output).unwrap();
    let rent = output.find("Pay rent").unwrap();
    let dentist = output.find("Dentist").unwrap();
    let milk = output.find("Buy milk").unwrap();
    assert!(rent < dentist && dentist < milk, "{}", output);

    // 4. Update status
    duetodo(&temp)
        .args(["update", "3", "in-progress"])
        .assert()
        .success()
        .stdout("Todo status updated successfully.\n");
    duetodo(&temp)
        .args(["get", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: in-progress"));

    // 5. Delete keeps the order of the rest
    duetodo(&temp)
        .args(["remove", "2"])
        .assert()
        .success()
        .stdout("Todo deleted successfully.\n");
    let ids: Vec<u64> = stored(&temp)
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    duetodo(&temp)
        .args(["get", "2"])
        .assert()
        .success()
        .stdout("Todo not found.\n");

    // 6. Ids keep counting from the highest one
    duetodo(&temp)
        .args(["add", "Walk dog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 4)"));
}

#[test]
fn test_bad_input_is_reported_without_failing() {
    let temp = TempDir::new().unwrap();
    duetodo(&temp).args(["add", "Buy milk"]).assert().success();
    let before = fs::read_to_string(temp.path().join("todos.json")).unwrap();

    duetodo(&temp)
        .args(["get", "abc"])
        .assert()
        .success()
        .stdout("Invalid ID.\n");
    duetodo(&temp)
        .args(["delete", "-1"])
        .assert()
        .success()
        .stdout("Invalid ID.\n");
    duetodo(&temp)
        .args(["update", "1", "done"])
        .assert()
        .success()
        .stdout("Invalid status. Use 'pending', 'in-progress', or 'completed'.\n");
    duetodo(&temp)
        .args(["update", "8", "completed"])
        .assert()
        .success()
        .stdout("Todo not found.\n");

    let after = fs::read_to_string(temp.path().join("todos.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_unknown_command_fails() {
    let temp = TempDir::new().unwrap();
    duetodo(&temp).arg("frobnicate").assert().failure();
}

#[test]
fn test_file_option_and_env() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("lists").join("work.json");

    duetodo(&temp)
        .args(["add", "Ship release", "--file"])
        .arg(&custom)
        .assert()
        .success();
    assert!(custom.exists());
    assert!(!temp.path().join("todos.json").exists());

    duetodo(&temp)
        .env("DUETODO_FILE", &custom)
        .args(["view", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Ship release\""));
}

#[test]
fn test_lock_option() {
    let temp = TempDir::new().unwrap();
    duetodo(&temp)
        .args(["--lock", "add", "Locked write"])
        .assert()
        .success();
    assert!(temp.path().join("todos.json.lock").exists());

    duetodo(&temp)
        .env("DUETODO_LOCK", "1")
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Locked write"));

    // A falsey value switches the lock off instead of failing the command.
    duetodo(&temp)
        .env("DUETODO_LOCK", "0")
        .args(["update", "1", "completed"])
        .assert()
        .success()
        .stdout("Todo status updated successfully.\n");
}

#[test]
fn test_corrupt_store_fails_and_is_preserved() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("todos.json"), "not json").unwrap();

    duetodo(&temp)
        .args(["add", "Buy milk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid todo list"));
    assert_eq!(
        fs::read_to_string(temp.path().join("todos.json")).unwrap(),
        "not json"
    );
}
