use chrono::{DateTime, NaiveDate, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Discriminant of an HR record (`type` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HrKind {
    Attendance,
    Evaluation,
    Vacation,
    Event,
}

impl HrKind {
    pub const ALL: [HrKind; 4] = [
        HrKind::Attendance,
        HrKind::Evaluation,
        HrKind::Vacation,
        HrKind::Event,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HrKind::Attendance => "attendance",
            HrKind::Evaluation => "evaluation",
            HrKind::Vacation => "vacation",
            HrKind::Event => "event",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HrKind::Attendance => "Asistencia",
            HrKind::Evaluation => "Evaluación",
            HrKind::Vacation => "Vacaciones",
            HrKind::Event => "Evento",
        }
    }

    pub fn status_options(self) -> &'static [&'static str] {
        match self {
            HrKind::Attendance => AttendanceStatus::LABELS,
            HrKind::Evaluation => EvaluationStatus::LABELS,
            HrKind::Vacation => VacationStatus::LABELS,
            HrKind::Event => EventStatus::LABELS,
        }
    }

    pub fn has_rating(self) -> bool {
        matches!(self, HrKind::Evaluation)
    }

    pub fn index(self) -> usize {
        match self {
            HrKind::Attendance => 0,
            HrKind::Evaluation => 1,
            HrKind::Vacation => 2,
            HrKind::Event => 3,
        }
    }

    pub fn cycle(self, delta: isize) -> HrKind {
        let len = Self::ALL.len() as isize;
        let ix = (self.index() as isize + delta).rem_euclid(len);
        Self::ALL[ix as usize]
    }
}

/// Status vocabularies share this contract so decoding can be generic.
pub trait StatusLabel: Sized + Copy {
    const LABELS: &'static [&'static str];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self>;
}

macro_rules! status_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant,)+
        }

        impl StatusLabel for $name {
            const LABELS: &'static [&'static str] = &[$($label),+];

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

status_enum!(AttendanceStatus {
    Present => "Presente",
    Absent => "Ausente",
    Late => "Tardanza",
    Leave => "Permiso",
});

status_enum!(VacationStatus {
    Requested => "Solicitado",
    Approved => "Aprobado",
    Rejected => "Rechazado",
    InProgress => "En curso",
});

status_enum!(EvaluationStatus {
    Completed => "Completada",
    Pending => "Pendiente",
});

status_enum!(EventStatus {
    Scheduled => "Programado",
    Completed => "Completado",
    Cancelled => "Cancelado",
});

/// Absent, `null` and `""` all mean "no status"; anything else must belong
/// to the vocabulary of the record's type.
fn deserialize_status<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: StatusLabel,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => T::from_label(label)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("unknown status `{label}`"))),
    }
}

/// Evaluation score, 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Deficiente",
            2 => "Regular",
            3 => "Bueno",
            4 => "Muy Bueno",
            _ => "Excelente",
        }
    }

    /// Five stars, filled up to the rating.
    pub fn stars(self) -> String {
        (Self::MIN..=Self::MAX)
            .map(|star| if star <= self.0 { '★' } else { '☆' })
            .collect()
    }

    pub fn cycle(self, delta: isize) -> Rating {
        let span = (Self::MAX - Self::MIN + 1) as isize;
        let offset = (self.0 - Self::MIN) as isize;
        let next = (offset + delta).rem_euclid(span) as u8 + Self::MIN;
        Rating(next)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating(Self::MAX)
    }
}

impl TryFrom<i64> for Rating {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Rating::new)
            .ok_or_else(|| format!("rating {value} outside 1-5"))
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Per-type fields of a record. `type`, `status` and `rating` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HrDetails {
    Attendance {
        #[serde(
            default,
            deserialize_with = "deserialize_status",
            skip_serializing_if = "Option::is_none"
        )]
        status: Option<AttendanceStatus>,
    },
    Evaluation {
        #[serde(
            default,
            deserialize_with = "deserialize_status",
            skip_serializing_if = "Option::is_none"
        )]
        status: Option<EvaluationStatus>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rating: Option<Rating>,
    },
    Vacation {
        #[serde(
            default,
            deserialize_with = "deserialize_status",
            skip_serializing_if = "Option::is_none"
        )]
        status: Option<VacationStatus>,
    },
    Event {
        #[serde(
            default,
            deserialize_with = "deserialize_status",
            skip_serializing_if = "Option::is_none"
        )]
        status: Option<EventStatus>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{status}` is not a valid status for {kind:?} records")]
pub struct UnknownStatus {
    pub kind: HrKind,
    pub status: String,
}

impl HrDetails {
    /// Builds the variant for `kind`. The rating is dropped for types that
    /// have none.
    pub fn compose(
        kind: HrKind,
        status: Option<&str>,
        rating: Option<Rating>,
    ) -> Result<HrDetails, UnknownStatus> {
        fn pick<T: StatusLabel>(kind: HrKind, status: Option<&str>) -> Result<Option<T>, UnknownStatus> {
            match status.map(str::trim).filter(|s| !s.is_empty()) {
                None => Ok(None),
                Some(label) => T::from_label(label).map(Some).ok_or_else(|| UnknownStatus {
                    kind,
                    status: label.to_string(),
                }),
            }
        }

        Ok(match kind {
            HrKind::Attendance => HrDetails::Attendance {
                status: pick(kind, status)?,
            },
            HrKind::Evaluation => HrDetails::Evaluation {
                status: pick(kind, status)?,
                rating,
            },
            HrKind::Vacation => HrDetails::Vacation {
                status: pick(kind, status)?,
            },
            HrKind::Event => HrDetails::Event {
                status: pick(kind, status)?,
            },
        })
    }

    pub fn kind(&self) -> HrKind {
        match self {
            HrDetails::Attendance { .. } => HrKind::Attendance,
            HrDetails::Evaluation { .. } => HrKind::Evaluation,
            HrDetails::Vacation { .. } => HrKind::Vacation,
            HrDetails::Event { .. } => HrKind::Event,
        }
    }

    pub fn status_label(&self) -> Option<&'static str> {
        match self {
            HrDetails::Attendance { status } => status.map(StatusLabel::label),
            HrDetails::Evaluation { status, .. } => status.map(StatusLabel::label),
            HrDetails::Vacation { status } => status.map(StatusLabel::label),
            HrDetails::Event { status } => status.map(StatusLabel::label),
        }
    }

    pub fn rating(&self) -> Option<Rating> {
        match self {
            HrDetails::Evaluation { rating, .. } => *rating,
            _ => None,
        }
    }
}

/// Embedded (populated) employee document inside a record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbeddedEmployee {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// `employeeId` on the wire. The backend sends `null` once the employee
/// has been deleted; such records still load and show as `N/A`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmployeeRef {
    Id(String),
    Embedded(EmbeddedEmployee),
    #[default]
    Missing,
}

impl EmployeeRef {
    /// Empty for a missing employee.
    pub fn id(&self) -> &str {
        match self {
            EmployeeRef::Id(id) => id,
            EmployeeRef::Embedded(embedded) => &embedded.id,
            EmployeeRef::Missing => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "employeeId", default)]
    pub employee: EmployeeRef,
    #[serde(with = "super::date")]
    pub date: NaiveDate,
    #[serde(flatten)]
    pub details: HrDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Opaque passthrough; never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl HrRecord {
    pub fn kind(&self) -> HrKind {
        self.details.kind()
    }

    pub fn status_label(&self) -> Option<&'static str> {
        self.details.status_label()
    }

    pub fn rating(&self) -> Option<Rating> {
        self.details.rating()
    }
}

/// Per-type record counts returned next to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HrStatistics {
    pub attendance: u64,
    pub evaluation: u64,
    pub vacation: u64,
    pub event: u64,
}

impl HrStatistics {
    pub fn count(&self, kind: HrKind) -> u64 {
        match kind {
            HrKind::Attendance => self.attendance,
            HrKind::Evaluation => self.evaluation,
            HrKind::Vacation => self.vacation,
            HrKind::Event => self.event,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/hr_record.rs"]
mod tests;
