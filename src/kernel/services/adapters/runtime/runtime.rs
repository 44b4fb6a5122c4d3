use super::message::AppMessage;
use crate::kernel::services::ports::{HrBackend, HrQuery, HrRecordPayload};
use crate::kernel::Effect;
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    backend: Arc<dyn HrBackend>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>, backend: Arc<dyn HrBackend>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            backend,
        })
    }

    pub fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::Refresh { generation, query } => self.refresh(generation, query),
            Effect::SaveRecord { id, token, payload } => self.save_record(id, token, payload),
            Effect::DeleteRecord { id } => self.delete_record(id),
        }
    }

    /// Records and employees are fetched together and reported as one message.
    pub fn refresh(&self, generation: u64, query: HrQuery) {
        let tx = self.tx.clone();
        let backend = Arc::clone(&self.backend);
        self.runtime.spawn(async move {
            let (records, employees) =
                tokio::join!(backend.list_records(&query), backend.list_employees());
            if let Err(e) = &records {
                tracing::warn!(generation, error = %e, "fetch hr records failed");
            }
            if let Err(e) = &employees {
                tracing::warn!(generation, error = %e, "fetch employees failed");
            }
            let _ = tx.send(AppMessage::Refreshed {
                generation,
                records,
                employees,
            });
        });
    }

    pub fn save_record(&self, id: Option<String>, token: u64, payload: HrRecordPayload) {
        let tx = self.tx.clone();
        let backend = Arc::clone(&self.backend);
        self.runtime.spawn(async move {
            let result = match id.as_deref() {
                Some(id) => backend.update_record(id, &payload).await,
                None => backend.create_record(&payload).await,
            };
            if let Err(e) = &result {
                tracing::warn!(id = ?id, error = %e, "save hr record failed");
            }
            let _ = tx.send(AppMessage::RecordSaved { id, token, result });
        });
    }

    pub fn delete_record(&self, id: String) {
        let tx = self.tx.clone();
        let backend = Arc::clone(&self.backend);
        self.runtime.spawn(async move {
            let result = backend.delete_record(&id).await;
            if let Err(e) = &result {
                tracing::warn!(id = %id, error = %e, "delete hr record failed");
            }
            let _ = tx.send(AppMessage::RecordDeleted { id, result });
        });
    }
}
