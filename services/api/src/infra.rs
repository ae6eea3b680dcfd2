use aps_positioning::error::AppError;
use aps_positioning::results::{ResultRow, ResultStore, StoreError};
use aps_positioning::survey::SurveySubmission;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Result store that lives for the duration of the process.
#[derive(Default, Clone)]
pub(crate) struct InMemoryResultStore {
    rows: Arc<Mutex<Vec<ResultRow>>>,
}

impl ResultStore for InMemoryResultStore {
    fn append(&self, row: &ResultRow) -> Result<(), StoreError> {
        let mut guard = self.rows.lock().map_err(|_| StoreError::Poisoned)?;
        guard.push(row.clone());
        Ok(())
    }

    fn load(&self) -> Result<Vec<ResultRow>, StoreError> {
        let guard = self.rows.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard.clone())
    }
}

/// Reads a questionnaire answers file in the JSON shape accepted by the API.
pub(crate) fn read_submission(path: &Path) -> Result<SurveySubmission, AppError> {
    let raw = fs::read_to_string(path)?;
    let submission = serde_json::from_str(&raw)?;
    Ok(submission)
}
