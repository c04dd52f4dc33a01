use super::*;

fn record(name: &str, minutes: f64, pctl_bpm: f64, age: f64) -> StatRecord {
    let mut r = StatRecord::for_tests(name, "F");
    r.minutes = Some(minutes);
    r.pctl_bpm = Some(pctl_bpm);
    r.age = Some(age);
    r.height_in = Some(78.0);
    r
}

#[test]
fn test_board_ranks_by_ceiling_desc() {
    let records = vec![
        record("Mid Prospect", 800.0, 60.0, 20.0),
        record("Top Prospect", 800.0, 95.0, 19.0),
        record("Low Prospect", 800.0, 20.0, 22.0),
    ];
    let board = build(&records, "ceiling", 60, 100.0, false);
    assert_eq!(board.len(), 3);
    assert_eq!(board[0].name, "Top Prospect");
    assert_eq!(board[0].rank, 1);
    assert_eq!(board[2].name, "Low Prospect");
    assert!(board[0].ceiling >= board[1].ceiling);
}

#[test]
fn test_board_skips_tiny_samples() {
    let records = vec![
        record("Real Sample", 600.0, 50.0, 20.0),
        record("Ten Minutes", 10.0, 99.0, 19.0),
    ];
    let board = build(&records, "ceiling", 60, 100.0, false);
    assert_eq!(board.len(), 1, "sub-100-minute records are dropped");
    assert_eq!(board[0].name, "Real Sample");
}

#[test]
fn test_board_all_flag_keeps_tiny_samples() {
    let records = vec![
        record("Real Sample", 600.0, 50.0, 20.0),
        record("Ten Minutes", 10.0, 99.0, 19.0),
    ];
    let board = build(&records, "ceiling", 60, 100.0, true);
    assert_eq!(board.len(), 2);
}

#[test]
fn test_board_marks_limited_samples() {
    let records = vec![record("Short Stint", 250.0, 50.0, 20.0)];
    let board = build(&records, "ceiling", 60, 100.0, false);
    assert!(board[0].limited_sample);
}

#[test]
fn test_board_truncates_to_top() {
    let records: Vec<StatRecord> = (0..10)
        .map(|i| record(&format!("Prospect {i}"), 600.0, 50.0 + i as f64, 20.0))
        .collect();
    let board = build(&records, "ceiling", 3, 100.0, false);
    assert_eq!(board.len(), 3);
    assert_eq!(board.last().unwrap().rank, 3);
}

#[test]
fn test_board_skips_invalid_records() {
    let mut bad = StatRecord::for_tests("", "F");
    bad.minutes = Some(600.0);
    let records = vec![record("Valid Entry", 600.0, 50.0, 20.0), bad];
    let board = build(&records, "ceiling", 60, 100.0, false);
    assert_eq!(board.len(), 1, "invalid identity is warned and skipped");
}

#[test]
fn test_board_risk_sort_is_ascending() {
    let mut risky = record("Risky Volume", 800.0, 70.0, 23.0);
    risky.usg = Some(30.0);
    risky.ts = Some(48.0);
    risky.bpm = Some(3.0);
    let safe = record("Safe Hands", 800.0, 70.0, 19.5);
    let board = build(&[risky, safe], "risk", 60, 100.0, false);
    assert_eq!(board[0].name, "Safe Hands");
    assert!(board[0].risk_score <= board[1].risk_score);
}

#[test]
fn test_board_unknown_sort_falls_back_to_ceiling() {
    let records = vec![
        record("Mid Prospect", 800.0, 60.0, 20.0),
        record("Top Prospect", 800.0, 95.0, 19.0),
    ];
    let board = build(&records, "nonsense", 60, 100.0, false);
    assert_eq!(board[0].name, "Top Prospect");
}

#[test]
fn test_run_on_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("a.json"),
        r#"{"name":"Dir Player A","pos":"G","minutes":700,"pctl_bpm":80}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("b.json"),
        r#"[{"name":"Dir Player B","pos":"F","minutes":650,"pctl_bpm":40}]"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a record").unwrap();
    let opts = BoardOpts {
        path: dir.path().to_path_buf(),
        json: true,
        top: None,
        sort: None,
        exclude: vec![],
        include_all: false,
    };
    assert!(run(&opts, &Config::default()).is_ok());
}

#[test]
fn test_run_empty_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = BoardOpts {
        path: dir.path().to_path_buf(),
        json: false,
        top: None,
        sort: None,
        exclude: vec![],
        include_all: false,
    };
    let err = run(&opts, &Config::default()).unwrap_err();
    assert!(
        err.to_string().contains("no records"),
        "should report the empty input, got: {err}"
    );
}

#[test]
fn test_run_respects_exclude_glob() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("keep.json"),
        r#"{"name":"Kept Player","pos":"G","minutes":700}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("skip_draft.json"),
        r#"{"name":"Skipped Player","pos":"G","minutes":700}"#,
    )
    .unwrap();
    let opts = BoardOpts {
        path: dir.path().to_path_buf(),
        json: true,
        top: None,
        sort: None,
        exclude: vec!["skip_*.json".to_string()],
        include_all: false,
    };
    assert!(run(&opts, &Config::default()).is_ok());
}
