use super::*;
use crate::models::{EmbeddedEmployee, Employee};

fn directory() -> EmployeeDirectory {
    EmployeeDirectory::new(vec![Employee {
        id: "e1".to_string(),
        employee_id: "EMP001".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Pérez".to_string(),
        ..Employee::default()
    }])
}

#[test]
fn badges_per_type() {
    let cases = [
        (HrKind::Attendance, BadgeVariant::Default, BadgeIcon::Clock, "Asistencia"),
        (HrKind::Evaluation, BadgeVariant::Secondary, BadgeIcon::Star, "Evaluación"),
        (HrKind::Vacation, BadgeVariant::Outline, BadgeIcon::Calendar, "Vacaciones"),
        (HrKind::Event, BadgeVariant::Destructive, BadgeIcon::Users, "Evento"),
    ];
    for (kind, variant, icon, label) in cases {
        assert_eq!(type_badge(kind), TypeBadge { variant, icon, label });
    }
}

#[test]
fn employee_name_prefers_embedded_names() {
    let embedded = EmployeeRef::Embedded(EmbeddedEmployee {
        id: "zz".to_string(),
        employee_id: None,
        first_name: Some("Luis".to_string()),
        last_name: Some("Gómez".to_string()),
    });
    assert_eq!(employee_name(&embedded, &directory()), "Luis Gómez");
}

#[test]
fn employee_name_looks_up_ids() {
    let dir = directory();
    assert_eq!(employee_name(&EmployeeRef::Id("e1".to_string()), &dir), "Ana Pérez");
    assert_eq!(employee_name(&EmployeeRef::Id("e9".to_string()), &dir), "N/A");

    let nameless = EmployeeRef::Embedded(EmbeddedEmployee {
        id: "e1".to_string(),
        ..EmbeddedEmployee::default()
    });
    assert_eq!(employee_name(&nameless, &dir), "Ana Pérez");
}

#[test]
fn summary_cards_keep_fixed_order() {
    let stats = HrStatistics {
        attendance: 3,
        evaluation: 1,
        vacation: 0,
        event: 2,
    };
    let cards = summary_cards(&stats);
    let values: Vec<u64> = cards.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![3, 1, 0, 2]);
    assert_eq!(cards[0].0, "Registros de Asistencia");
    assert_eq!(cards[3].0, "Eventos");
}

#[test]
fn filter_labels() {
    let dir = directory();
    assert_eq!(type_filter_label(None), "Todos los tipos");
    assert_eq!(type_filter_label(Some(HrKind::Event)), "Evento");
    assert_eq!(employee_filter_label(None, &dir), "Todos los empleados");
    assert_eq!(employee_filter_label(Some("e1"), &dir), "Ana Pérez");
    assert_eq!(employee_filter_label(Some("e7"), &dir), "e7");
}

#[test]
fn employee_name_for_deleted_employee_is_missing() {
    assert_eq!(employee_name(&EmployeeRef::Missing, &directory()), "N/A");
}
