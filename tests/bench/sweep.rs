// Integration tests for bench::sweep: records, sinks and append semantics.

use std::fs;

use deltabench::bench::{
    persist, run_delta_sweep, run_sequence_sample, BenchConfig, DeltaPattern, Scenario,
};
use deltabench::codec::DeltaBinaryPacked;

fn quiet(samples: usize) -> BenchConfig {
    let mut cfg = BenchConfig::default();
    cfg.set_sample_repeat(samples).set_notification_level(0);
    cfg
}

#[test]
fn random_sweep_of_one_bound_records_one_positive_figure() {
    let cfg = quiet(10);
    let mut codec = DeltaBinaryPacked::<i32>::new();
    let outcome =
        run_delta_sweep(DeltaPattern::BoundedRandom, 1_000, &[100], &mut codec, &cfg).unwrap();

    let fields = outcome.encode.fields();
    assert_eq!(fields[0], "1000");
    assert_eq!(fields.len(), 2);
    assert!(fields[1].parse::<f64>().unwrap() > 0.0);
}

#[test]
fn two_runs_append_two_lines() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = quiet(2);
    let mut codec = DeltaBinaryPacked::<i64>::new();

    let first = run_delta_sweep(DeltaPattern::Constant, 100, &[1, 2], &mut codec, &cfg).unwrap();
    let paths = persist(&first, Scenario::ConstDelta, dir.path()).unwrap();
    let encode_after_first = fs::read_to_string(&paths[0]).unwrap();

    let second = run_delta_sweep(DeltaPattern::Constant, 200, &[1, 2], &mut codec, &cfg).unwrap();
    persist(&second, Scenario::ConstDelta, dir.path()).unwrap();

    for path in &paths {
        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("100,"));
        assert!(lines[1].starts_with("200,"));
        assert_eq!(lines[0].split(',').count(), 3);
    }
    assert!(fs::read_to_string(&paths[0]).unwrap().starts_with(&encode_after_first));
}

#[test]
fn sink_files_are_named_per_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = quiet(1);
    let values: Vec<i64> = (0..300).map(|i| i * 11).collect();
    let mut codec = DeltaBinaryPacked::<i64>::new();
    let outcome = run_sequence_sample(&values, "from file fixture", &mut codec, &cfg).unwrap();

    let written = persist(&outcome, Scenario::File, dir.path()).unwrap();
    assert_eq!(
        written,
        vec![
            dir.path().join("File_Encode_TestData.csv"),
            dir.path().join("File_Decode_TestData.csv"),
        ]
    );
}
