use super::*;
use crate::models::Employee;
use serde_json::json;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn employees() -> EmployeeDirectory {
    EmployeeDirectory::new(
        ["e1", "e2", "e3"]
            .into_iter()
            .map(|id| Employee {
                id: id.to_string(),
                ..Employee::default()
            })
            .collect(),
    )
}

#[test]
fn new_draft_defaults() {
    let draft = HrDraft::new(today());
    assert_eq!(draft.employee_id, "");
    assert_eq!(draft.kind, HrKind::Attendance);
    assert_eq!(draft.date, "2024-03-01");
    assert_eq!(draft.status, None);
    assert_eq!(draft.notes, "");
    assert_eq!(draft.rating, Rating::new(5).unwrap());
    assert_eq!(draft.data, json!({}));
}

#[test]
fn status_options_follow_kind() {
    let mut draft = HrDraft::new(today());
    assert_eq!(
        draft.status_options(),
        &["Presente", "Ausente", "Tardanza", "Permiso"]
    );
    draft.set_kind(HrKind::Vacation);
    assert_eq!(
        draft.status_options(),
        &["Solicitado", "Aprobado", "Rechazado", "En curso"]
    );
    draft.set_kind(HrKind::Evaluation);
    assert_eq!(draft.status_options(), &["Completada", "Pendiente"]);
    draft.set_kind(HrKind::Event);
    assert_eq!(
        draft.status_options(),
        &["Programado", "Completado", "Cancelado"]
    );
}

#[test]
fn set_kind_clears_status_even_when_unchanged() {
    let mut draft = HrDraft::new(today());
    assert!(draft.set_status(Some("Ausente")));
    assert!(draft.set_kind(HrKind::Attendance));
    assert_eq!(draft.status, None);
    assert!(!draft.set_kind(HrKind::Attendance));
}

#[test]
fn cycle_status_passes_through_none() {
    let mut draft = HrDraft::new(today());
    draft.set_kind(HrKind::Evaluation);
    draft.cycle_status(1);
    assert_eq!(draft.status, Some("Completada"));
    draft.cycle_status(1);
    assert_eq!(draft.status, Some("Pendiente"));
    draft.cycle_status(1);
    assert_eq!(draft.status, None);
    draft.cycle_status(-1);
    assert_eq!(draft.status, Some("Pendiente"));
}

#[test]
fn rating_only_editable_for_evaluations() {
    let mut draft = HrDraft::new(today());
    assert!(!draft.cycle_rating(1));
    assert!(!draft.visible_fields().contains(&DraftField::Rating));

    draft.set_kind(HrKind::Evaluation);
    assert!(draft.visible_fields().contains(&DraftField::Rating));
    assert!(draft.cycle_rating(1));
    assert_eq!(draft.rating.get(), 1);
    assert!(draft.cycle_rating(-1));
    assert_eq!(draft.rating.get(), 5);
}

#[test]
fn cycle_employee_wraps_and_starts_from_ends() {
    let employees = employees();
    let mut draft = HrDraft::new(today());
    draft.cycle_employee(&employees, -1);
    assert_eq!(draft.employee_id, "e3");
    draft.cycle_employee(&employees, 1);
    assert_eq!(draft.employee_id, "e1");

    let empty = EmployeeDirectory::default();
    assert!(!draft.cycle_employee(&empty, 1));
}

#[test]
fn text_fields_are_date_and_notes() {
    let mut draft = HrDraft::new(today());
    assert!(draft.text_mut(DraftField::Employee).is_none());
    draft.text_mut(DraftField::Notes).unwrap().push_str("x");
    assert_eq!(draft.notes, "x");
    assert!(DraftField::Date.is_text());
    assert!(!DraftField::Status.is_text());
}

#[test]
fn payload_requires_employee_and_valid_date() {
    let mut draft = HrDraft::new(today());
    assert_eq!(draft.to_payload(), Err(DraftError::MissingEmployee));

    draft.employee_id = "e1".to_string();
    draft.date = "31/12/2024".to_string();
    assert!(matches!(
        draft.to_payload(),
        Err(DraftError::InvalidDate(value)) if value == "31/12/2024"
    ));
}

#[test]
fn payload_omits_rating_outside_evaluations() {
    let mut draft = HrDraft::new(today());
    draft.employee_id = "e1".to_string();
    draft.set_status(Some("Presente"));
    draft.notes = "llegó temprano".to_string();

    let payload = draft.to_payload().unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({
            "employeeId": "e1",
            "date": "2024-03-01",
            "type": "attendance",
            "status": "Presente",
            "notes": "llegó temprano",
            "data": {},
        })
    );
}

#[test]
fn evaluation_payload_carries_rating() {
    let mut draft = HrDraft::new(today());
    draft.employee_id = "e1".to_string();
    draft.set_kind(HrKind::Evaluation);
    draft.set_rating(Rating::new(3).unwrap());

    let value = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
    assert_eq!(value["type"], "evaluation");
    assert_eq!(value["rating"], 3);
    assert!(value.get("status").is_none());
}

#[test]
fn draft_from_record_keeps_opaque_data() {
    let record: HrRecord = serde_json::from_value(json!({
        "_id": "r1",
        "employeeId": {"_id": "e2", "firstName": "Ana", "lastName": "Pérez"},
        "type": "vacation",
        "date": "2024-07-01T00:00:00.000Z",
        "status": "En curso",
        "data": {"days": 5},
    }))
    .unwrap();

    let draft = HrDraft::from_record(&record);
    assert_eq!(draft.employee_id, "e2");
    assert_eq!(draft.kind, HrKind::Vacation);
    assert_eq!(draft.date, "2024-07-01");
    assert_eq!(draft.status, Some("En curso"));
    assert_eq!(draft.notes, "");
    assert_eq!(draft.data, json!({"days": 5}));
    assert_eq!(draft.to_payload().unwrap().data, json!({"days": 5}));
}

#[test]
fn draft_from_record_without_employee_needs_one_before_saving() {
    let record: HrRecord = serde_json::from_value(json!({
        "_id": "r1",
        "employeeId": null,
        "type": "attendance",
        "date": "2024-03-01",
    }))
    .unwrap();

    let mut draft = HrDraft::from_record(&record);
    assert_eq!(draft.employee_id, "");
    assert_eq!(draft.to_payload(), Err(DraftError::MissingEmployee));

    assert!(draft.cycle_employee(&employees(), 1));
    assert!(draft.to_payload().is_ok());
}
