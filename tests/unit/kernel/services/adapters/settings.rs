use super::*;
use tempfile::tempdir;

#[test]
fn ensure_settings_file_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap(), Settings::default());

    std::fs::write(&path, r#"{"api": {"baseUrl": "http://10.0.0.5:3000", "timeoutMs": 500}}"#)
        .unwrap();
    ensure_settings_file_at(&path).unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.api.base_url, "http://10.0.0.5:3000");
    assert_eq!(settings.api.timeout_ms, 500);
}

#[test]
fn malformed_settings_are_invalid_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = load_settings_from(&path).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn settings_and_logs_share_app_dir() {
    let (Some(settings), Some(logs)) = (get_settings_path(), get_log_dir()) else {
        return;
    };
    assert_eq!(settings.parent(), logs.parent());
    assert!(settings.ends_with(".neli-hr/settings.json"));
}
