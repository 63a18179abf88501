use std::io::Write;
use std::process::{Command, Output, Stdio};

const PICK: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "lotto-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn lotto() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lotto"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = lotto()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for cli")
}

#[test]
fn full_pool_wins_in_the_first_week() {
    // Drawing 7 from a pool of 7 always matches every number.
    let output = lotto()
        .args(PICK)
        .args(["--pool-size", "7", "--show-draws", "no", "--seed", "1"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "Got 7 right! Took 0 years\nYou won.\n");
}

#[test]
fn show_draws_prints_both_sets() {
    let output = lotto()
        .args(PICK)
        .args(["--pool-size", "7", "--show-draws", "yes"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("User lotto:   [01, 02, 03, 04, 05, 06, 07]"));
    assert!(stdout.contains("Random lotto: [01, 02, 03, 04, 05, 06, 07]"));
}

#[test]
fn invalid_configuration_is_fatal() {
    let output = lotto()
        .args(PICK)
        .args(["--pool-size", "5", "--show-draws", "no"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pool size 5 is smaller than draw size 7"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let args = [
        "2", "5", "--draw-size", "2", "--pool-size", "6", "--seed", "7", "--show-draws", "yes",
    ];
    let first = lotto().args(args).output().expect("run cli");
    let second = lotto().args(args).output().expect("run cli");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(stdout.contains("Got 2 right!"));
    assert!(stdout.ends_with("You won.\n"));
}

#[test]
fn interactive_prompts_retry_until_valid() {
    let output = run_with_stdin(
        &["--pool-size", "7"],
        "abc\n0\n1\n1\n2\n3\n4\n5\n6\n7\nmaybe\nn\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please give a unique number between [1, 7]"));
    assert!(stdout.contains("Please give a number\n"));
    assert!(stdout.contains("Not a unique number!"));
    assert_eq!(
        stdout
            .matches("Do you want to see the lottery numbers for each round? [Y, N]")
            .count(),
        2
    );
    assert!(stdout.ends_with("Got 7 right! Took 0 years\nYou won.\n"));
}

#[test]
fn invalid_argument_numbers_fall_back_to_prompt() {
    let output = run_with_stdin(
        &["1", "1", "2", "3", "4", "5", "6", "--pool-size", "7", "--show-draws", "no"],
        "1\n2\n3\n4\n5\n6\n7\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Please give a unique number between [1, 7]"));
    assert!(stdout.ends_with("You won.\n"));
}

#[test]
fn closed_stdin_reports_error() {
    let output = run_with_stdin(&["--pool-size", "7"], "1\n2\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input closed"));
}

#[test]
fn json_report_written_to_file() {
    let output_path = temp_path("report");
    let status = lotto()
        .args(PICK)
        .args([
            "--pool-size",
            "7",
            "--show-draws",
            "no",
            "--seed",
            "3",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read report");
    let report: serde_json::Value = serde_json::from_str(&content).expect("parse report");
    assert_eq!(report["seed"], 3);
    assert_eq!(report["attempts"], 1);
    assert_eq!(report["final_rounds"], 1);
    assert_eq!(report["random_calls"], 7);
    assert_eq!(report["milestones"][0]["matches"], 7);
}

#[test]
fn config_file_drives_the_game() {
    let config_path = temp_path("config");
    std::fs::write(
        &config_path,
        r#"{ "draw_size": 3, "pool_size": 3, "show_draws": true }"#,
    )
    .expect("write config");
    let output = lotto()
        .args(["3", "1", "2", "--config"])
        .arg(&config_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "User lotto:   [01, 02, 03]\nRandom lotto: [01, 02, 03]\nGot 3 right! Took 0 years\nYou won.\n"
    );
}
