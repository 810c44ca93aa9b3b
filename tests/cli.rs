use assert_cmd::Command;
use predicates::str::{contains, is_match};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn mylogger(workdir: &Path) -> Command {
    let binary = assert_cmd::cargo::cargo_bin!("mylogger");
    let mut cmd = Command::new(binary);
    cmd.current_dir(workdir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn fresh_environment_end_to_end() {
    let temp = tempdir().unwrap();
    let workdir = temp.path();

    mylogger(workdir)
        .arg("start")
        .assert()
        .success()
        .stdout("Logging start\n");

    let contents = fs::read_to_string(workdir.join("my_log.txt")).unwrap();
    assert_eq!(contents, "\nstart");
}

#[test]
fn runs_append_to_existing_file() {
    let temp = tempdir().unwrap();
    let workdir = temp.path();
    fs::write(workdir.join("my_log.txt"), "existing").unwrap();

    mylogger(workdir).arg("hello").assert().success();
    mylogger(workdir).arg("again").assert().success();

    let contents = fs::read_to_string(workdir.join("my_log.txt")).unwrap();
    assert_eq!(contents, "existing\nhello\nagain");
}

#[test]
fn messages_keep_their_order() {
    let temp = tempdir().unwrap();
    let workdir = temp.path();

    mylogger(workdir)
        .args(["a", "b", "c"])
        .assert()
        .success()
        .stdout("Logging a\nLogging b\nLogging c\n");

    let contents = fs::read_to_string(workdir.join("my_log.txt")).unwrap();
    assert!(contents.ends_with("\na\nb\nc"));
}

#[test]
fn threaded_run_writes_every_message_once() {
    let temp = tempdir().unwrap();
    let workdir = temp.path();
    let messages: Vec<String> = (0..64).map(|i| format!("message-{}", i)).collect();

    let output = mylogger(workdir)
        .arg("--threads")
        .arg("8")
        .args(&messages)
        .output()
        .unwrap();
    assert!(output.status.success());

    let contents = fs::read_to_string(workdir.join("my_log.txt")).unwrap();
    let lines: Vec<&str> = contents.split('\n').skip(1).collect();
    assert_eq!(lines.len(), messages.len());
    for message in &messages {
        assert_eq!(lines.iter().filter(|l| **l == message.as_str()).count(), 1);
    }

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), messages.len());
    for message in &messages {
        let expected = format!("Logging {}", message);
        assert!(stdout.lines().any(|l| l == expected));
    }
}

#[test]
fn config_file_selects_log_path() {
    let temp = tempdir().unwrap();
    let workdir = temp.path();
    fs::write(workdir.join("mylogger.toml"), "log_file = \"app.log\"\n").unwrap();

    mylogger(workdir).arg("configured").assert().success();

    assert_eq!(
        fs::read_to_string(workdir.join("app.log")).unwrap(),
        "\nconfigured"
    );
    assert!(!workdir.join("my_log.txt").exists());
}

#[test]
fn cli_log_file_overrides_config() {
    let temp = tempdir().unwrap();
    let workdir = temp.path();
    fs::write(workdir.join("mylogger.toml"), "log_file = \"app.log\"\n").unwrap();

    mylogger(workdir)
        .arg("--log-file")
        .arg("cli.log")
        .arg("override")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(workdir.join("cli.log")).unwrap(),
        "\noverride"
    );
    assert!(!workdir.join("app.log").exists());
}

#[test]
fn timestamp_prefixes_message() {
    let temp = tempdir().unwrap();
    let workdir = temp.path();

    mylogger(workdir)
        .arg("--timestamp")
        .arg("stamped")
        .assert()
        .success()
        .stdout(is_match(r"^Logging \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} stamped\n$").unwrap());
}

#[test]
fn unopenable_log_file_fails_loudly() {
    let temp = tempdir().unwrap();
    let workdir = temp.path();

    mylogger(workdir)
        .arg("--log-file")
        .arg("missing/dir/my_log.txt")
        .arg("never")
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("log file unavailable"));
}

// Relies on advisory `flock` semantics: an unlocked run may still append.
#[cfg(unix)]
#[test]
fn locked_log_file_is_unavailable() {
    use mylogger::{LogHandle, Settings};
    use std::io;

    let temp = tempdir().unwrap();
    let workdir = temp.path();
    let settings = Settings {
        path: workdir.join("my_log.txt"),
        lock: true,
    };
    let holder = LogHandle::with_console(&settings, Box::new(io::sink())).unwrap();

    mylogger(workdir)
        .arg("blocked")
        .assert()
        .failure()
        .stderr(contains("locked by another handle"));

    mylogger(workdir)
        .arg("--no-lock")
        .arg("shared")
        .assert()
        .success();

    drop(holder);

    mylogger(workdir).arg("released").assert().success();

    assert_eq!(
        fs::read_to_string(workdir.join("my_log.txt")).unwrap(),
        "\nshared\nreleased"
    );
}

#[test]
fn invalid_config_is_reported() {
    let temp = tempdir().unwrap();
    let workdir = temp.path();
    fs::write(workdir.join("mylogger.toml"), "threads = \"many\"\n").unwrap();

    mylogger(workdir)
        .arg("x")
        .assert()
        .failure()
        .stderr(contains("Failed to parse config file"));
}
