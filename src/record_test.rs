use super::*;

#[test]
fn test_validate_requires_name() {
    let r = StatRecord {
        name: "  ".to_string(),
        pos: "G".to_string(),
        ..StatRecord::default()
    };
    let err = r.validate().unwrap_err();
    assert!(
        err.to_string().contains("name"),
        "should mention the missing name, got: {err}"
    );
}

#[test]
fn test_validate_requires_position() {
    let r = StatRecord {
        name: "No Position".to_string(),
        pos: String::new(),
        ..StatRecord::default()
    };
    let err = r.validate().unwrap_err();
    assert!(
        err.to_string().contains("position"),
        "should mention the missing position, got: {err}"
    );
}

#[test]
fn test_validate_accepts_identity_only() {
    let r = StatRecord::for_tests("Identity Only", "F");
    assert!(r.validate().is_ok(), "statistics are optional");
}

#[test]
fn test_confidence_tiers() {
    let mut r = StatRecord::for_tests("Sample Size", "G");
    assert_eq!(r.confidence(), Confidence::VeryLow, "no minutes = very_low");
    r.minutes = Some(99.0);
    assert_eq!(r.confidence(), Confidence::VeryLow);
    r.minutes = Some(100.0);
    assert_eq!(r.confidence(), Confidence::Limited);
    r.minutes = Some(500.0);
    assert_eq!(r.confidence(), Confidence::Full);
}

#[test]
fn test_deserialize_missing_stats_as_none() {
    let r: StatRecord =
        serde_json::from_str(r#"{"name":"Sparse Line","pos":"C","usg":24.5}"#).unwrap();
    assert_eq!(r.name, "Sparse Line");
    assert!((r.usg.unwrap() - 24.5).abs() < 1e-9);
    assert!(r.bpm.is_none());
    assert!(r.pctl_bpm.is_none());
}

#[test]
fn test_deserialize_null_stat_as_none() {
    let r: StatRecord =
        serde_json::from_str(r#"{"name":"Null Line","pos":"C","bpm":null}"#).unwrap();
    assert!(r.bpm.is_none());
}

#[test]
fn test_deserialize_missing_name_is_an_error() {
    let err = serde_json::from_str::<StatRecord>(r#"{"pos":"G"}"#).unwrap_err();
    assert!(
        err.to_string().contains("name"),
        "missing identity should fail deserialization, got: {err}"
    );
}

#[test]
fn test_load_many_accepts_single_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("one.json");
    std::fs::write(&path, r#"{"name":"Single Object","pos":"G"}"#).unwrap();
    let records = load_many(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Single Object");
}

#[test]
fn test_load_many_accepts_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("class.json");
    std::fs::write(
        &path,
        r#"[{"name":"First Pick","pos":"G"},{"name":"Second Pick","pos":"F"}]"#,
    )
    .unwrap();
    let records = load_many(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "Second Pick");
}

#[test]
fn test_load_missing_file_names_the_path() {
    let err = load(Path::new("no/such/record.json")).unwrap_err();
    assert!(
        err.to_string().contains("record.json"),
        "error should name the path, got: {err}"
    );
}
