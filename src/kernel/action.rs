use chrono::NaiveDate;

use crate::kernel::services::ports::{ApiError, HrListPage};
use crate::models::{Employee, HrKind};

#[derive(Debug, Clone)]
pub enum Action {
    Refresh,
    Refreshed {
        generation: u64,
        records: Result<HrListPage, ApiError>,
        employees: Result<Vec<Employee>, ApiError>,
    },
    SetTypeFilter(Option<HrKind>),
    CycleTypeFilter {
        delta: isize,
    },
    SetEmployeeFilter(Option<String>),
    CycleEmployeeFilter {
        delta: isize,
    },
    MoveSelection {
        delta: isize,
    },
    OpenCreateDialog {
        today: NaiveDate,
    },
    OpenEditSelected,
    DialogFocus {
        delta: isize,
    },
    /// Steps the focused select field (employee, type, status, rating).
    DialogCycle {
        delta: isize,
    },
    DialogAppend(char),
    DialogBackspace,
    DialogSetKind(HrKind),
    DialogSetStatus(Option<String>),
    DialogSubmit,
    DialogCancel,
    SaveFinished {
        id: Option<String>,
        token: u64,
        result: Result<(), ApiError>,
    },
    RequestDeleteSelected,
    ConfirmAccept,
    ConfirmCancel,
    DeleteFinished {
        id: String,
        result: Result<(), ApiError>,
    },
    ToggleLogPanel,
    DismissNotice,
    Quit,
}
