//! Record form: the draft behind the create/edit dialog.

use chrono::NaiveDate;
use serde_json::Value;

use crate::kernel::services::ports::HrRecordPayload;
use crate::models::date::{format_date, parse_date};
use crate::models::{EmployeeDirectory, HrDetails, HrKind, HrRecord, Rating, UnknownStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Employee,
    Kind,
    Date,
    Status,
    Rating,
    Notes,
}

const FIELDS_WITH_RATING: &[DraftField] = &[
    DraftField::Employee,
    DraftField::Kind,
    DraftField::Date,
    DraftField::Status,
    DraftField::Rating,
    DraftField::Notes,
];

const FIELDS_WITHOUT_RATING: &[DraftField] = &[
    DraftField::Employee,
    DraftField::Kind,
    DraftField::Date,
    DraftField::Status,
    DraftField::Notes,
];

impl DraftField {
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Employee => "Empleado",
            DraftField::Kind => "Tipo",
            DraftField::Date => "Fecha",
            DraftField::Status => "Estado",
            DraftField::Rating => "Calificación (1-5)",
            DraftField::Notes => "Notas",
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, DraftField::Date | DraftField::Notes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Seleccione un empleado")]
    MissingEmployee,
    #[error("Fecha inválida: `{0}` (use AAAA-MM-DD)")]
    InvalidDate(String),
    #[error(transparent)]
    InvalidStatus(#[from] UnknownStatus),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HrDraft {
    pub employee_id: String,
    pub kind: HrKind,
    pub date: String,
    pub status: Option<&'static str>,
    pub notes: String,
    pub rating: Rating,
    pub data: Value,
}

impl HrDraft {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employee_id: String::new(),
            kind: HrKind::Attendance,
            date: format_date(today),
            status: None,
            notes: String::new(),
            rating: Rating::default(),
            data: Value::Object(Default::default()),
        }
    }

    pub fn from_record(record: &HrRecord) -> Self {
        Self {
            employee_id: record.employee.id().to_string(),
            kind: record.kind(),
            date: format_date(record.date),
            status: record.status_label(),
            notes: record.notes.clone().unwrap_or_default(),
            rating: record.rating().unwrap_or_default(),
            data: record
                .data
                .clone()
                .unwrap_or_else(|| Value::Object(Default::default())),
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Changing the type always clears the status: the vocabularies differ.
    pub fn set_kind(&mut self, kind: HrKind) -> bool {
        let changed = self.kind != kind || self.status.is_some();
        self.kind = kind;
        self.status = None;
        changed
    }

    pub fn cycle_kind(&mut self, delta: isize) -> bool {
        self.set_kind(self.kind.cycle(delta))
    }

    pub fn status_options(&self) -> &'static [&'static str] {
        self.kind.status_options()
    }

    /// Accepts only labels offered for the current type.
    pub fn set_status(&mut self, label: Option<&str>) -> bool {
        let next = match label {
            None => None,
            Some(label) => match self.status_options().iter().find(|opt| **opt == label) {
                Some(opt) => Some(*opt),
                None => return false,
            },
        };
        let changed = next != self.status;
        self.status = next;
        changed
    }

    /// Cycles through `[none, option 1, .., option n]`.
    pub fn cycle_status(&mut self, delta: isize) -> bool {
        let options = self.status_options();
        let current = self
            .status
            .and_then(|s| options.iter().position(|opt| *opt == s))
            .map(|ix| ix + 1)
            .unwrap_or(0);
        let len = options.len() as isize + 1;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        let label = if next == 0 { None } else { Some(options[next - 1]) };
        self.set_status(label)
    }

    pub fn shows_rating(&self) -> bool {
        self.kind.has_rating()
    }

    pub fn set_rating(&mut self, rating: Rating) -> bool {
        if !self.shows_rating() {
            return false;
        }
        let changed = self.rating != rating;
        self.rating = rating;
        changed
    }

    pub fn cycle_rating(&mut self, delta: isize) -> bool {
        self.set_rating(self.rating.cycle(delta))
    }

    pub fn cycle_employee(&mut self, employees: &EmployeeDirectory, delta: isize) -> bool {
        if employees.is_empty() {
            return false;
        }
        let len = employees.len() as isize;
        let next = match employees.position(&self.employee_id) {
            Some(ix) => (ix as isize + delta).rem_euclid(len),
            None if delta < 0 => len - 1,
            None => 0,
        };
        let Some(employee) = employees.at(next as usize) else {
            return false;
        };
        let changed = employee.id != self.employee_id;
        self.employee_id = employee.id.clone();
        changed
    }

    pub fn visible_fields(&self) -> &'static [DraftField] {
        if self.shows_rating() {
            FIELDS_WITH_RATING
        } else {
            FIELDS_WITHOUT_RATING
        }
    }

    pub fn text(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Date => Some(&self.date),
            DraftField::Notes => Some(&self.notes),
            _ => None,
        }
    }

    pub fn text_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::Date => Some(&mut self.date),
            DraftField::Notes => Some(&mut self.notes),
            _ => None,
        }
    }

    pub fn to_payload(&self) -> Result<HrRecordPayload, DraftError> {
        let employee_id = self.employee_id.trim();
        if employee_id.is_empty() {
            return Err(DraftError::MissingEmployee);
        }
        let date =
            parse_date(&self.date).ok_or_else(|| DraftError::InvalidDate(self.date.clone()))?;
        let rating = self.shows_rating().then_some(self.rating);
        let details = HrDetails::compose(self.kind, self.status, rating)?;

        Ok(HrRecordPayload {
            employee_id: employee_id.to_string(),
            date,
            details,
            notes: self.notes.clone(),
            data: self.data.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/draft.rs"]
mod tests;
