use super::*;

#[test]
fn test_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = load(dir.path()).unwrap();
    assert!(config.board.top.is_none());
    assert!(config.board.sort.is_none());
}

#[test]
fn test_loads_board_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE),
        "[board]\ntop = 100\nsort = \"overall\"\nmin_minutes = 150\n",
    )
    .unwrap();
    let config = load(dir.path()).unwrap();
    assert_eq!(config.board.top, Some(100));
    assert_eq!(config.board.sort.as_deref(), Some("overall"));
    assert_eq!(config.board.min_minutes, Some(150.0));
}

#[test]
fn test_partial_config_is_fine() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE), "[board]\ntop = 30\n").unwrap();
    let config = load(dir.path()).unwrap();
    assert_eq!(config.board.top, Some(30));
    assert!(config.board.min_minutes.is_none());
}

#[test]
fn test_malformed_file_is_a_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE), "[board\ntop = ").unwrap();
    let err = load(dir.path()).unwrap_err();
    assert!(
        err.to_string().contains(".bigboard.toml"),
        "error should name the file, got: {err}"
    );
}

#[test]
fn test_unknown_keys_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILE), "[board]\ntpo = 30\n").unwrap();
    assert!(load(dir.path()).is_err(), "typos should not be silently ignored");
}
