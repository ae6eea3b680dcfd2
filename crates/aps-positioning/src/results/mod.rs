//! Result rows, their CSV store, the admin summary and the HTTP surface that
//! ties intake, scoring and persistence together.

pub mod router;
pub mod row;
pub mod service;
pub mod store;
pub mod summary;

#[cfg(test)]
mod tests;

pub use router::assessment_router;
pub use row::{
    export_csv, export_file_name, indicator_column, write_csv, ResultRow, RESULT_COLUMNS,
};
pub use service::{AssessmentOutcome, AssessmentService, CsvExport, ServiceError};
pub use store::{CsvResultStore, ResultStore, StoreError};
pub use summary::{AdminSummary, FilterOptions, SummaryFilter, SUMMARY_CHART_TITLE};
