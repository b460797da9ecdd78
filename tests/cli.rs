// Drives the compiled binary without a terminal: argument validation must
// fail before any terminal setup, and a non-tty stdin is refused.

use assert_cmd::Command;
use tempfile::TempDir;

fn typer(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("typer").unwrap();
    cmd.arg("--config")
        .arg(config_dir.path().join("config.json"))
        .write_stdin("");
    cmd
}

fn stderr_of(cmd: &mut Command) -> (Option<i32>, String) {
    let output = cmd.output().unwrap();
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn rejects_num_words_out_of_range() {
    let dir = TempDir::new().unwrap();

    for n in ["4", "101", "0"] {
        let (code, stderr) = stderr_of(typer(&dir).args(["-n", n]));
        assert_eq!(code, Some(2), "-n {n}");
        assert!(
            stderr.contains("number of words must be from 5 to 100"),
            "{stderr}"
        );
    }
}

#[test]
fn rejects_max_word_length_out_of_range() {
    let dir = TempDir::new().unwrap();

    for m in ["0", "101"] {
        let (code, stderr) = stderr_of(typer(&dir).args(["--max-word-length", m]));
        assert_eq!(code, Some(2), "-m {m}");
        assert!(
            stderr.contains("maximum word length must be from 1 to 100"),
            "{stderr}"
        );
    }
}

#[test]
fn rejects_non_integer_values() {
    let dir = TempDir::new().unwrap();

    let (code, stderr) = stderr_of(typer(&dir).args(["-n", "ten"]));
    assert_eq!(code, Some(2));
    assert!(stderr.contains("number of words must be integer"), "{stderr}");

    let (code, stderr) = stderr_of(typer(&dir).args(["-m", "2.5"]));
    assert_eq!(code, Some(2));
    assert!(stderr.contains("maximum word length must be integer"), "{stderr}");
}

#[test]
fn refuses_non_tty_stdin() {
    let dir = TempDir::new().unwrap();

    let (code, stderr) = stderr_of(typer(&dir).args(["-n", "5", "-m", "3"]));

    assert_ne!(code, Some(0));
    assert!(stderr.contains("stdin must be a tty"), "{stderr}");
    // nothing was typed, so nothing is saved either
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn help_lists_flags() {
    let output = Command::cargo_bin("typer")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--num-words"));
    assert!(stdout.contains("--max-word-length"));
}
