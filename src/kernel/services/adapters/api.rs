//! HTTP adapter for the HR backend (`/api/hr`, `/api/employees`).

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::kernel::services::ports::{
    ApiError, ApiFuture, ApiResult, ApiSettings, HrBackend, HrListPage, HrQuery, HrRecordPayload,
};
use crate::models::{Employee, HrRecord, HrStatistics};

const MAX_ERROR_BODY: usize = 200;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    hr_records: Vec<Value>,
    #[serde(default)]
    statistics: HrStatistics,
}

#[derive(Debug, Deserialize)]
struct EmployeesResponse {
    #[serde(default)]
    employees: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct HttpHrApi {
    client: Client,
    base_url: String,
}

impl HttpHrApi {
    pub fn new(settings: &ApiSettings) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.timeout_ms.max(1)))
            .build()
            .map_err(|e| ApiError::Unreachable {
                message: e.to_string(),
            })?;
        Ok(Self::with_client(client, &settings.base_url))
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn record_url(&self, id: &str) -> String {
        self.url(&format!("/api/hr/{id}"))
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(|e| ApiError::Unreachable {
            message: e.to_string(),
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await.map_err(|e| ApiError::Unreachable {
            message: e.to_string(),
        })?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })
    }

    async fn write_record(&self, request: RequestBuilder, payload: &HrRecordPayload) -> ApiResult<()> {
        let body = serde_json::to_vec(payload).map_err(|e| ApiError::Encode {
            message: e.to_string(),
        })?;
        let request = request
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        self.send(request).await.map(|_| ())
    }
}

impl HrBackend for HttpHrApi {
    fn list_records<'a>(&'a self, query: &'a HrQuery) -> ApiFuture<'a, HrListPage> {
        Box::pin(async move {
            tracing::debug!(?query, "GET /api/hr");
            let request = self.client.get(self.url("/api/hr")).query(&query.params());
            let body: ListResponse = self.fetch_json(request).await?;
            let (records, skipped) = decode_records(body.hr_records);
            Ok(HrListPage {
                records,
                statistics: body.statistics,
                skipped,
            })
        })
    }

    fn list_employees(&self) -> ApiFuture<'_, Vec<Employee>> {
        Box::pin(async move {
            tracing::debug!("GET /api/employees");
            let request = self.client.get(self.url("/api/employees"));
            let body: EmployeesResponse = self.fetch_json(request).await?;
            Ok(body.employees)
        })
    }

    fn create_record<'a>(&'a self, payload: &'a HrRecordPayload) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            tracing::debug!(kind = ?payload.details.kind(), "POST /api/hr");
            let request = self.client.post(self.url("/api/hr"));
            self.write_record(request, payload).await
        })
    }

    fn update_record<'a>(
        &'a self,
        id: &'a str,
        payload: &'a HrRecordPayload,
    ) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            tracing::debug!(id, "PUT /api/hr/{{id}}");
            let request = self.client.put(self.record_url(id));
            self.write_record(request, payload).await
        })
    }

    fn delete_record<'a>(&'a self, id: &'a str) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            tracing::debug!(id, "DELETE /api/hr/{{id}}");
            let request = self.client.delete(self.record_url(id));
            self.send(request).await.map(|_| ())
        })
    }
}

/// Decodes records one at a time; records that violate the type/status
/// contract are skipped and counted.
pub fn decode_records(values: Vec<Value>) -> (Vec<HrRecord>, usize) {
    let mut records = Vec::with_capacity(values.len());
    let mut skipped = 0;
    for value in values {
        let id = value
            .get("_id")
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_string();
        match serde_json::from_value::<HrRecord>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                tracing::warn!(id = %id, error = %e, "skipping undecodable hr record");
            }
        }
    }
    (records, skipped)
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("sin detalle")
            .to_string();
    }
    let mut end = body.len().min(MAX_ERROR_BODY);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
