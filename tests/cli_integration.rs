use std::io::Write;
use std::process::{Command, Output, Stdio};

// Every path exercised here short-circuits before any network call.

fn run_with_stdin(input: &str) -> Output {
    let binary_path = assert_cmd::cargo::cargo_bin!("chainsweep");
    let mut child = Command::new(binary_path)
        .arg("--no-spinner")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary spawns");

    child
        .stdin
        .as_mut()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("stdin accepts input");

    child.wait_with_output().expect("binary exits")
}

#[test]
fn zero_input_exits_with_status_zero() {
    let output = run_with_stdin("0\n");
    assert!(output.status.success(), "exit status: {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    assert!(stdout.contains("Enter wallet address"));
    assert!(stdout.contains("Bye."));
}

#[test]
fn unrecognized_address_prints_message_and_loops() {
    let output = run_with_stdin("definitely-not-an-address\n0\n");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    assert!(stdout.contains("Unrecognized address"));
    // prompted again after the bad input
    assert_eq!(stdout.matches("Enter wallet address").count(), 2);
    assert!(stdout.contains("Bye."));
}

#[test]
fn blank_lines_are_ignored() {
    let output = run_with_stdin("\n\n0\n");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    assert!(!stdout.contains("Unrecognized address"));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let output = run_with_stdin("");
    assert!(output.status.success());
}

#[test]
fn single_shot_mode_handles_unrecognized_address() {
    let binary_path = assert_cmd::cargo::cargo_bin!("chainsweep");
    let output = Command::new(binary_path)
        .args(["--address", "nope", "--no-spinner"])
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
    assert!(stdout.contains("Unrecognized address"));
    // single-shot mode never shows the interactive prompt
    assert!(!stdout.contains("Enter wallet address"));
}
