//! Runs the `cellplace` binary end to end on small inputs.

use std::fs;
use std::process::{Command, Stdio};

const NETLIST: &str = "\
5 3 2 3
2 0 1
3 1 2 3
2 3 4
";

fn cellplace(dir: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cellplace"))
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn json_report_for_valid_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cps.txt"), NETLIST).unwrap();

    let out = cellplace(
        dir.path(),
        &["cps.txt", "--seed", "4", "--format", "json", "-m", "2", "-f", "1e-3"],
    );
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["seed"], 4);
    assert_eq!(report["columns"], 3);
    assert_eq!(report["rows"], 2);
    assert_eq!(report["locations"].as_array().unwrap().len(), 5);
    let initial = report["anneal"]["initial_cost"].as_u64().unwrap();
    let final_cost = report["anneal"]["final_cost"].as_u64().unwrap();
    assert!(final_cost <= initial);
}

#[test]
fn text_output_with_progress() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cps.txt"), NETLIST).unwrap();

    let out = cellplace(
        dir.path(),
        &["cps.txt", "--seed", "4", "-r", "1", "--color", "never"],
    );
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stdout.contains("Placed cps.txt: 5 cells, 3 nets on a 3x2 grid (seed 4)"));
    assert!(stderr.contains("- Current temperature: "));
    assert!(stderr.contains("- Finished with final cost: "));
    assert!(stderr.contains("note[N401]"));
    assert!(stderr.contains("   Result: 0 error(s), 0 warning(s)"));
}

#[test]
fn parse_error_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.txt"), "4 1 2 2\n3 0 1\n").unwrap();

    let out = cellplace(dir.path(), &["bad.txt", "--color", "never"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("error[E101]"));
    assert!(stderr.contains("--> bad.txt:2"));
    assert!(stderr.contains("   Result: 1 error(s), 0 warning(s)"));
}

#[test]
fn bad_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cps.txt"), NETLIST).unwrap();
    fs::write(dir.path().join("cellplace.toml"), "[anneal]\ncooling_rate = 3.0\n").unwrap();

    let out = cellplace(dir.path(), &["cps.txt", "--color", "never"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("error[E201]: validation error: anneal.cooling_rate"));
}

#[test]
fn bad_config_is_json_in_json_mode() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cps.txt"), NETLIST).unwrap();
    fs::write(dir.path().join("cellplace.toml"), "[anneal]\ncooling_rate = 3.0\n").unwrap();

    let out = cellplace(dir.path(), &["cps.txt", "--format", "json"]);
    assert_eq!(out.status.code(), Some(1));
    let diagnostics: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let diagnostics = diagnostics.as_array().unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0]["severity"], "Error");
    assert!(diagnostics[0]["message"]
        .as_str()
        .unwrap()
        .contains("anneal.cooling_rate"));
}

#[test]
fn step_with_closed_stdin_runs_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cps.txt"), NETLIST).unwrap();

    let out = cellplace(dir.path(), &["cps.txt", "--seed", "1", "--step", "-r", "1"]);
    assert!(out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert_eq!(stderr.matches("[Enter/p, <n>, all, q] > ").count(), 1);
}
