//! Pure lookups behind the table cells and summary cards.

use crate::models::{EmployeeDirectory, EmployeeRef, HrKind, HrStatistics};

pub const MISSING_EMPLOYEE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeIcon {
    Clock,
    Star,
    Calendar,
    Users,
}

impl BadgeIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            BadgeIcon::Clock => "◷",
            BadgeIcon::Star => "★",
            BadgeIcon::Calendar => "▦",
            BadgeIcon::Users => "☻",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeBadge {
    pub variant: BadgeVariant,
    pub icon: BadgeIcon,
    pub label: &'static str,
}

pub fn type_badge(kind: HrKind) -> TypeBadge {
    let (variant, icon) = match kind {
        HrKind::Attendance => (BadgeVariant::Default, BadgeIcon::Clock),
        HrKind::Evaluation => (BadgeVariant::Secondary, BadgeIcon::Star),
        HrKind::Vacation => (BadgeVariant::Outline, BadgeIcon::Calendar),
        HrKind::Event => (BadgeVariant::Destructive, BadgeIcon::Users),
    };
    TypeBadge {
        variant,
        icon,
        label: kind.label(),
    }
}

/// Embedded names win; otherwise the id is looked up in the fetched
/// employees.
pub fn employee_name(employee: &EmployeeRef, directory: &EmployeeDirectory) -> String {
    match employee {
        EmployeeRef::Missing => return MISSING_EMPLOYEE.to_string(),
        EmployeeRef::Embedded(embedded) => {
            if let Some(first) = embedded.first_name.as_deref().filter(|s| !s.is_empty()) {
                return format!("{} {}", first, embedded.last_name.as_deref().unwrap_or(""));
            }
        }
        EmployeeRef::Id(_) => {}
    }
    directory
        .get(employee.id())
        .map(|e| e.full_name())
        .unwrap_or_else(|| MISSING_EMPLOYEE.to_string())
}

pub fn summary_cards(statistics: &HrStatistics) -> [(&'static str, u64); 4] {
    [
        ("Registros de Asistencia", statistics.attendance),
        ("Evaluaciones", statistics.evaluation),
        ("Vacaciones", statistics.vacation),
        ("Eventos", statistics.event),
    ]
}

pub fn type_filter_label(kind: Option<HrKind>) -> &'static str {
    kind.map(HrKind::label).unwrap_or("Todos los tipos")
}

pub fn employee_filter_label(employee_id: Option<&str>, directory: &EmployeeDirectory) -> String {
    match employee_id {
        None => "Todos los empleados".to_string(),
        Some(id) => directory
            .get(id)
            .map(|e| e.full_name())
            .unwrap_or_else(|| id.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/display.rs"]
mod tests;
