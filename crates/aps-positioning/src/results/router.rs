use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::service::{AssessmentService, ServiceError};
use super::store::ResultStore;
use super::summary::SummaryFilter;
use crate::survey::{SubmissionError, SurveySubmission};

/// Router builder exposing scoring, export and the admin summary.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: ResultStore + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<S>))
        .route("/api/v1/assessments/export", post(export_handler::<S>))
        .route("/api/v1/assessments/summary", get(summary_handler::<S>))
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    payload: Result<axum::Json<SurveySubmission>, JsonRejection>,
) -> Response
where
    S: ResultStore + 'static,
{
    let submission = match payload {
        Ok(axum::Json(submission)) => submission,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.submit(submission) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn export_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    payload: Result<axum::Json<SurveySubmission>, JsonRejection>,
) -> Response
where
    S: ResultStore + 'static,
{
    let submission = match payload {
        Ok(axum::Json(submission)) => submission,
        Err(rejection) => return rejection_response(rejection),
    };

    match service.export(submission) {
        Ok(export) => {
            let disposition = format!(
                "attachment; filename=\"{}\"",
                header_safe(&export.file_name)
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                export.content,
            )
                .into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn summary_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Query(filter): Query<SummaryFilter>,
) -> Response
where
    S: ResultStore + 'static,
{
    match service.summary(filter) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Header values must stay visible ASCII; accented names are flattened.
fn header_safe(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' { c } else { '_' })
        .collect()
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
}

fn error_response(error: ServiceError) -> Response {
    match error {
        ServiceError::Submission(SubmissionError::Incomplete { missing }) => {
            let payload = json!({
                "error": "missing required answers",
                "missing": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        ServiceError::Submission(SubmissionError::Input(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        other => {
            tracing::warn!(error = %other, "assessment request failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
