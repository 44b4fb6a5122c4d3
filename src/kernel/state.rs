use chrono::NaiveDate;

use crate::kernel::draft::{DraftField, HrDraft};
use crate::kernel::services::ports::HrQuery;
use crate::models::{EmployeeDirectory, HrKind, HrRecord, HrStatistics};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub kind: Option<HrKind>,
    pub employee_id: Option<String>,
}

impl FilterState {
    pub fn query(&self) -> HrQuery {
        HrQuery {
            kind: self.kind,
            employee_id: self.employee_id.clone(),
        }
    }

    /// `None -> attendance -> .. -> event -> None`.
    pub fn cycle_kind(&mut self, delta: isize) {
        let slots = HrKind::ALL.len() as isize + 1;
        let current = self.kind.map(|k| k.index() as isize + 1).unwrap_or(0);
        let next = (current + delta).rem_euclid(slots);
        self.kind = if next == 0 {
            None
        } else {
            Some(HrKind::ALL[next as usize - 1])
        };
    }

    /// `None -> first employee -> .. -> last employee -> None`.
    pub fn cycle_employee(&mut self, employees: &EmployeeDirectory, delta: isize) {
        let slots = employees.len() as isize + 1;
        let current = self
            .employee_id
            .as_deref()
            .and_then(|id| employees.position(id))
            .map(|ix| ix as isize + 1)
            .unwrap_or(0);
        let next = (current + delta).rem_euclid(slots);
        self.employee_id = if next == 0 {
            None
        } else {
            employees.at(next as usize - 1).map(|e| e.id.clone())
        };
    }
}

#[derive(Debug, Default)]
pub struct RecordsState {
    pub items: Vec<HrRecord>,
    pub statistics: HrStatistics,
    pub employees: EmployeeDirectory,
    pub loading: bool,
    pub selected: usize,
    pub skipped: usize,
    generation: u64,
}

impl RecordsState {
    /// Starts a new refresh; responses for older generations are ignored.
    pub fn begin_refresh(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn selected_record(&self) -> Option<&HrRecord> {
        self.items.get(self.selected)
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let max = self.items.len() as isize - 1;
        let next = (self.selected as isize + delta).clamp(0, max) as usize;
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordDialogState {
    pub visible: bool,
    /// Id of the record being edited; `None` while creating.
    pub editing: Option<String>,
    pub draft: HrDraft,
    pub focus: DraftField,
    pub error: Option<String>,
    pub submitting: bool,
    /// Token of the latest submit; results carrying an older one belong to
    /// a dialog that has since been cancelled or reopened.
    pub save_token: u64,
    /// Date a fresh draft starts from.
    pub today: NaiveDate,
}

impl RecordDialogState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            visible: false,
            editing: None,
            draft: HrDraft::new(today),
            focus: DraftField::Employee,
            error: None,
            submitting: false,
            save_token: 0,
            today,
        }
    }

    /// Hides the dialog and starts the next draft from scratch.
    pub fn close(&mut self) {
        self.visible = false;
        self.editing = None;
        self.error = None;
        self.submitting = false;
        self.focus = DraftField::Employee;
        self.draft.reset(self.today);
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Editar Registro"
        } else {
            "Nuevo Registro de RRHH"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Actualizar Registro"
        } else {
            "Crear Registro"
        }
    }

    /// Moves focus within the fields visible for the current type.
    pub fn move_focus(&mut self, delta: isize) -> bool {
        let fields = self.draft.visible_fields();
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = fields[(current + delta).rem_euclid(fields.len() as isize) as usize];
        let changed = next != self.focus;
        self.focus = next;
        changed
    }

    /// Keeps focus on a visible field after the type changed.
    pub fn fix_focus(&mut self) {
        if !self.draft.visible_fields().contains(&self.focus) {
            self.focus = DraftField::Status;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteRecord { id: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// What raised a notice. A refresh only replaces or clears its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSource {
    Refresh,
    Operation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub source: NoticeSource,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            source: NoticeSource::Operation,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            source: NoticeSource::Operation,
        }
    }

    pub fn from_refresh(self) -> Self {
        Self {
            source: NoticeSource::Refresh,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub record_dialog: RecordDialogState,
    pub confirm_dialog: ConfirmDialogState,
    pub notice: Option<Notice>,
    pub log_panel_visible: bool,
    pub should_quit: bool,
}

impl UiState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            record_dialog: RecordDialogState::new(today),
            confirm_dialog: ConfirmDialogState::default(),
            notice: None,
            log_panel_visible: false,
            should_quit: false,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub filters: FilterState,
    pub records: RecordsState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            filters: FilterState::default(),
            records: RecordsState::default(),
            ui: UiState::new(today),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
