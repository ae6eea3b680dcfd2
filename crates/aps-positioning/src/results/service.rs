use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use super::row::{export_csv, export_file_name, ResultRow};
use super::store::{ResultStore, StoreError};
use super::summary::{AdminSummary, SummaryFilter};
use crate::scoring::{AssessmentReport, ScoringEngine};
use crate::survey::{SubmissionError, SurveySubmission};

/// Scored submission together with the flat row that gets persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentOutcome {
    pub report: AssessmentReport,
    pub row: ResultRow,
}

/// Single-row CSV download for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Service composing intake validation, the scoring engine and the result store.
pub struct AssessmentService<S> {
    engine: Arc<ScoringEngine>,
    store: Arc<S>,
}

impl<S> AssessmentService<S>
where
    S: ResultStore + 'static,
{
    pub fn new(engine: ScoringEngine, store: Arc<S>) -> Self {
        Self {
            engine: Arc::new(engine),
            store,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Validate and score a submission without persisting it.
    pub fn assess(&self, submission: SurveySubmission) -> Result<AssessmentOutcome, ServiceError> {
        self.assess_at(submission, Local::now().naive_local())
    }

    pub fn assess_at(
        &self,
        submission: SurveySubmission,
        recorded_at: NaiveDateTime,
    ) -> Result<AssessmentOutcome, ServiceError> {
        let record = submission.into_record()?;
        let report = self.engine.assess(&record);
        let row = ResultRow::new(
            &record,
            &report.sub_scores,
            report.global_score,
            recorded_at,
        );

        tracing::info!(
            establishment = %record.establishment.name,
            global = report.global_score.value(),
            on_target = report.domains_on_target,
            to_strengthen = report.domains_to_strengthen,
            "submission scored"
        );

        Ok(AssessmentOutcome { report, row })
    }

    /// Score a submission and append its row to the store.
    pub fn submit(&self, submission: SurveySubmission) -> Result<AssessmentOutcome, ServiceError> {
        let outcome = self.assess(submission)?;
        self.record(&outcome)?;
        Ok(outcome)
    }

    pub fn record(&self, outcome: &AssessmentOutcome) -> Result<(), ServiceError> {
        self.store.append(&outcome.row)?;
        tracing::info!(
            establishment = %outcome.row.establishment,
            "result row persisted"
        );
        Ok(())
    }

    pub fn export(&self, submission: SurveySubmission) -> Result<CsvExport, ServiceError> {
        let outcome = self.assess(submission)?;
        Self::export_outcome(&outcome)
    }

    pub fn export_outcome(outcome: &AssessmentOutcome) -> Result<CsvExport, ServiceError> {
        Ok(CsvExport {
            file_name: export_file_name(&outcome.row.establishment),
            content: export_csv(&outcome.row)?,
        })
    }

    pub fn summary(&self, filter: SummaryFilter) -> Result<AdminSummary, ServiceError> {
        let rows = self.store.load()?;
        let summary = AdminSummary::from_rows(&rows, filter);
        tracing::debug!(
            total = summary.total_rows,
            matching = summary.matching_rows,
            "admin summary computed"
        );
        Ok(summary)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("csv export failed: {0}")]
    Export(#[from] csv::Error),
}
