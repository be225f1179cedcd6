use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inkgate(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("inkgate").unwrap();
    cmd.arg("--root").arg(dir.path());
    cmd
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    inkgate(&dir)
        .args(["init", "--name", "night-owl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized"));
    inkgate(&dir)
        .args(["init", "--name", "night-owl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn gate_blocks_color_request_for_blackwork_artist() {
    let dir = TempDir::new().unwrap();
    inkgate(&dir).args(["init", "--name", "night-owl"]).assert().success();
    inkgate(&dir)
        .args(["artist", "create", "sam", "Sam Rivera"])
        .assert()
        .success();
    inkgate(&dir)
        .args(["artist", "set", "sam", "color-work", "false"])
        .assert()
        .success();

    inkgate(&dir)
        .args(["gate", "run", "--artist", "sam", "--answers", "yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("blocked (color_requested)"));
}

#[test]
fn gate_pass_creates_booking() {
    let dir = TempDir::new().unwrap();
    inkgate(&dir).args(["init", "--name", "night-owl"]).assert().success();

    inkgate(&dir)
        .args([
            "gate",
            "run",
            "--answers",
            "no,no,no,no,no,yes",
            "--client",
            "Ana",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outcome: passed"))
        .stdout(predicate::str::contains("Booking request"));

    inkgate(&dir)
        .args(["booking", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana"))
        .stdout(predicate::str::contains("received"));
}

#[test]
fn underage_always_blocked() {
    let dir = TempDir::new().unwrap();
    inkgate(&dir).args(["init", "--name", "night-owl"]).assert().success();

    inkgate(&dir)
        .args(["gate", "run", "--answers", "no,no,no,no,no,no"])
        .assert()
        .success()
        .stdout(predicate::str::contains("age_verification_required"));
}

#[test]
fn gate_questions_lists_defaults() {
    let dir = TempDir::new().unwrap();
    inkgate(&dir).args(["init", "--name", "night-owl"]).assert().success();

    inkgate(&dir)
        .args(["gate", "questions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wantsColor"))
        .stdout(predicate::str::contains("is18Plus"));
}

#[test]
fn config_validate_reports_ok() {
    let dir = TempDir::new().unwrap();
    inkgate(&dir).args(["init", "--name", "night-owl"]).assert().success();

    inkgate(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration OK"));
}

#[test]
fn uninitialized_config_show_fails() {
    let dir = TempDir::new().unwrap();
    inkgate(&dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}
