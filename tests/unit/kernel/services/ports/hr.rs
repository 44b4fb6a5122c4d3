use super::*;
use crate::models::{HrDetails, HrKind, Rating};
use chrono::NaiveDate;
use serde_json::json;

#[test]
fn query_params_skip_unset_filters() {
    assert!(HrQuery::default().params().is_empty());

    let query = HrQuery {
        kind: Some(HrKind::Evaluation),
        employee_id: Some("e1".to_string()),
    };
    assert_eq!(
        query.params(),
        vec![("type", "evaluation".to_string()), ("employeeId", "e1".to_string())]
    );

    let blank = HrQuery {
        kind: None,
        employee_id: Some(String::new()),
    };
    assert!(blank.params().is_empty());
}

#[test]
fn payload_serializes_flat_wire_shape() {
    let payload = HrRecordPayload {
        employee_id: "e1".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        details: HrDetails::compose(HrKind::Evaluation, Some("Pendiente"), Rating::new(2)).unwrap(),
        notes: String::new(),
        data: json!({}),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "employeeId": "e1",
            "date": "2024-06-30",
            "type": "evaluation",
            "status": "Pendiente",
            "rating": 2,
            "notes": "",
            "data": {},
        })
    );
}

#[test]
fn api_errors_render_for_the_status_line() {
    let err = ApiError::Status {
        status: 404,
        message: "HR record not found".to_string(),
    };
    assert_eq!(err.to_string(), "el servidor respondió 404: HR record not found");

    let err = ApiError::Unreachable {
        message: "connection refused".to_string(),
    };
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn settings_fill_missing_sections_with_defaults() {
    let settings: Settings =
        serde_json::from_value(json!({"api": {"baseUrl": "http://hr.local:8080"}})).unwrap();
    assert_eq!(settings.api.base_url, "http://hr.local:8080");
    assert_eq!(settings.api.timeout_ms, settings::DEFAULT_TIMEOUT_MS);
    assert_eq!(settings.theme, ThemeSettings::default());

    let empty: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, Settings::default());
    assert_eq!(empty.api.base_url, "http://localhost:3000");
}

#[test]
fn theme_overrides_keep_other_defaults() {
    let theme: ThemeSettings =
        serde_json::from_value(json!({"focusBorder": "magenta"})).unwrap();
    assert_eq!(theme.focus_border.as_deref(), Some("magenta"));
    assert_eq!(theme.error_fg.as_deref(), Some("red"));
}
