use crate::kernel::services::ports::{ApiError, HrListPage};
use crate::models::Employee;

pub enum AppMessage {
    Refreshed {
        generation: u64,
        records: Result<HrListPage, ApiError>,
        employees: Result<Vec<Employee>, ApiError>,
    },
    RecordSaved {
        id: Option<String>,
        token: u64,
        result: Result<(), ApiError>,
    },
    RecordDeleted {
        id: String,
        result: Result<(), ApiError>,
    },
}
