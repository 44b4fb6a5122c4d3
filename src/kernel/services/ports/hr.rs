use std::future::Future;
use std::pin::Pin;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::models::{Employee, HrDetails, HrKind, HrRecord, HrStatistics};

/// Failures of a backend call, as the user gets to see them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("servidor no disponible: {message}")]
    Unreachable { message: String },
    #[error("el servidor respondió {status}: {message}")]
    Status { status: u16, message: String },
    #[error("respuesta inválida: {message}")]
    Decode { message: String },
    #[error("no se pudo preparar la solicitud: {message}")]
    Encode { message: String },
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = ApiResult<T>> + Send + 'a>>;

/// Optional list filters; unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HrQuery {
    pub kind: Option<HrKind>,
    pub employee_id: Option<String>,
}

impl HrQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(kind) = self.kind {
            params.push(("type", kind.as_str().to_string()));
        }
        if let Some(employee_id) = self.employee_id.as_deref().filter(|id| !id.is_empty()) {
            params.push(("employeeId", employee_id.to_string()));
        }
        params
    }
}

/// One page of `GET /api/hr`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HrListPage {
    pub records: Vec<HrRecord>,
    pub statistics: HrStatistics,
    /// Records the server returned that could not be decoded.
    pub skipped: usize,
}

/// Body of `POST /api/hr` and `PUT /api/hr/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HrRecordPayload {
    pub employee_id: String,
    #[serde(with = "crate::models::date")]
    pub date: NaiveDate,
    #[serde(flatten)]
    pub details: HrDetails,
    pub notes: String,
    pub data: Value,
}

pub trait HrBackend: Send + Sync + 'static {
    fn list_records<'a>(&'a self, query: &'a HrQuery) -> ApiFuture<'a, HrListPage>;

    fn list_employees(&self) -> ApiFuture<'_, Vec<Employee>>;

    fn create_record<'a>(&'a self, payload: &'a HrRecordPayload) -> ApiFuture<'a, ()>;

    fn update_record<'a>(&'a self, id: &'a str, payload: &'a HrRecordPayload)
        -> ApiFuture<'a, ()>;

    fn delete_record<'a>(&'a self, id: &'a str) -> ApiFuture<'a, ()>;
}
