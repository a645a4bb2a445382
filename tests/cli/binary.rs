// Integration tests for the `deltabench` binary.
//
// Invokes the compiled executable via `std::process::Command`; Cargo sets
// `CARGO_BIN_EXE_deltabench` when building integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn deltabench_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_deltabench"))
}

/// Runs the binary with a small trial count and `dir` as output directory.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(deltabench_bin())
        .args(["--samples", "2", "--output-dir"])
        .arg(dir)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("spawn deltabench")
}

fn csv_files(dir: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    found.sort();
    found
}

// ─────────────────────────────────────────────────────────────────────────────
// Smoke tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_exits_zero() {
    let status = Command::new(deltabench_bin())
        .arg("--help")
        .stdout(Stdio::null())
        .status()
        .expect("spawn deltabench --help");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn version_flag_prints_crate_version() {
    let out = Command::new(deltabench_bin())
        .arg("--version")
        .output()
        .expect("spawn deltabench --version");
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains(env!("CARGO_PKG_VERSION")));
}

// ─────────────────────────────────────────────────────────────────────────────
// Argument validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn malformed_value_count_fails_without_output() {
    let dir = TempDir::new().unwrap();
    for bad in ["12x", "-3", "", "1.5"] {
        let out = run_in(dir.path(), &["rand-delta", bad]);
        assert!(!out.status.success(), "accepted {bad:?}");
    }
    assert!(csv_files(dir.path()).is_empty());
}

#[test]
fn missing_subcommand_fails() {
    let dir = TempDir::new().unwrap();
    assert!(!run_in(dir.path(), &[]).status.success());
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn rand_delta_writes_both_sinks() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &["--bounds", "100", "rand-delta", "1000"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    assert_eq!(
        csv_files(dir.path()),
        vec![
            dir.path().join("RandDelta_Decode_TestData.csv"),
            dir.path().join("RandDelta_Encode_TestData.csv"),
        ]
    );
    let encode = fs::read_to_string(dir.path().join("RandDelta_Encode_TestData.csv")).unwrap();
    assert!(encode.starts_with("1000,"));
    assert_eq!(encode.lines().count(), 1);
}

#[test]
fn report_goes_to_stdout_unless_quiet() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &["--bounds", "1", "const-delta", "64"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("64 values"));
    assert!(stdout.contains("Encoding took"));

    let out = run_in(dir.path(), &["-qq", "--bounds", "1", "const-delta", "64"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn repeated_runs_accumulate_lines() {
    let dir = TempDir::new().unwrap();
    for _ in 0..2 {
        let out = run_in(dir.path(), &["-q", "--bounds", "1,2", "memcpy", "32"]);
        assert!(out.status.success());
    }
    assert_eq!(csv_files(dir.path()), vec![dir.path().join("Memcopy_TestData.csv")]);
    let content = fs::read_to_string(dir.path().join("Memcopy_TestData.csv")).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn file_scenario_on_exported_sequence() {
    let dir = TempDir::new().unwrap();
    let parquet = dir.path().join("seq.parquet");
    let parquet_arg = parquet.to_str().unwrap();

    let out = run_in(dir.path(), &["export", parquet_arg, "777", "--pattern", "constant"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let out = run_in(dir.path(), &["-q", "file", parquet_arg]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let encode = fs::read_to_string(dir.path().join("File_Encode_TestData.csv")).unwrap();
    assert!(encode.starts_with("777,"));
}

#[test]
fn missing_input_file_reports_error_chain() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.parquet");
    let out = run_in(dir.path(), &["file", missing.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("deltabench: cannot load values from"));
    assert!(csv_files(dir.path()).is_empty());
}
