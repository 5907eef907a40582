use std::process::{Command, Output};

fn dont_press(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dont-press"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to launch dont-press")
}

#[test]
fn json_simulation_prints_one_line_per_press() {
    let output = dont_press(&["--seed", "7", "simulate", "--presses", "31", "--json"]);
    assert!(output.status.success(), "simulate should succeed");

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
    let reports: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is a JSON report"))
        .collect();

    assert_eq!(reports.len(), 31);
    assert_eq!(reports[0]["count"], 1);
    assert_eq!(reports[14]["sound"], true);
    assert_eq!(reports[29]["final_stage"], true);
    assert!(reports[29]["message"].is_null());
    assert_eq!(reports[30]["count"], 31);
}

#[test]
fn seeded_runs_print_identical_reports() {
    let args = ["--seed", "11", "simulate", "--presses", "20"];
    assert_eq!(dont_press(&args).stdout, dont_press(&args).stdout);
}

#[test]
fn zero_interval_is_refused() {
    let output = dont_press(&["--interval-ms", "0", "simulate", "--presses", "1"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
