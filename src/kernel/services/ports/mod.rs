//! Service ports: traits + data contracts.

pub mod hr;
pub mod settings;

pub use hr::{ApiError, ApiFuture, ApiResult, HrBackend, HrListPage, HrQuery, HrRecordPayload};
pub use settings::{ApiSettings, Settings, ThemeSettings};

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/hr.rs"]
mod tests;
