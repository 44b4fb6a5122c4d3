use crate::kernel::services::ports::{HrQuery, HrRecordPayload};

#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch records (filtered) and employees together.
    Refresh { generation: u64, query: HrQuery },
    /// `id = None` creates, `Some` updates.
    SaveRecord {
        id: Option<String>,
        token: u64,
        payload: HrRecordPayload,
    },
    DeleteRecord { id: String },
}
