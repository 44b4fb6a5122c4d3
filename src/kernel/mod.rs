//! Headless application core (state/action/effect).

pub mod action;
pub mod display;
pub mod draft;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use draft::{DraftError, DraftField, HrDraft};
pub use effect::Effect;
pub use state::{
    AppState, ConfirmDialogState, FilterState, Notice, NoticeLevel, NoticeSource, PendingAction,
    RecordDialogState, RecordsState, UiState,
};
pub use store::{DispatchResult, Store};
