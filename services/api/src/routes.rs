use crate::infra::AppState;
use aps_positioning::results::{assessment_router, AssessmentService, ResultStore};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_assessment_routes<S>(service: Arc<AssessmentService<S>>) -> axum::Router
where
    S: ResultStore + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryResultStore;
    use aps_positioning::scoring::ScoringEngine;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    const ANSWERS: &str = r#"{
        "name": "EEAP Les Lucioles",
        "department": "02 - Aisne",
        "kind": "EEAP",
        "age_range": "Enfants",
        "places": 20,
        "referent": "Oui",
        "referent_trained": "Non",
        "regular_activity": "Oui, 1 fois par semaine",
        "user_share": "20-30%",
        "weekly_duration": "30 min",
        "occasional_activity": "Non",
        "supervisors": ["Aucun professionnel"],
        "institutional_project": "Oui"
    }"#;

    fn app(ready: bool) -> (axum::Router, Arc<InMemoryResultStore>) {
        let recorder = PrometheusBuilder::new().build_recorder();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        };
        let store = Arc::new(InMemoryResultStore::default());
        let service = Arc::new(AssessmentService::new(
            ScoringEngine::default(),
            store.clone(),
        ));
        (with_assessment_routes(service).layer(Extension(state)), store)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let (router, _) = app(false);
        let response = router
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let (router, _) = app(true);
        let response = router
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ready");
    }

    #[tokio::test]
    async fn metrics_are_plain_text() {
        let (router, _) = app(true);
        let response = router
            .oneshot(Request::get("/metrics").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn submitted_answers_feed_the_summary() {
        let (router, store) = app(true);

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/assessments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(ANSWERS))
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["report"]["sub_scores"]["Referent"], 60.0);
        assert_eq!(body["report"]["sub_scores"]["Encadrement"], 0.0);
        assert_eq!(store.load().expect("rows").len(), 1);

        let response = router
            .oneshot(
                Request::get("/api/v1/assessments/summary?departement=02%20-%20Aisne")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let summary = body_json(response).await;
        assert_eq!(summary["matching_rows"], 1);
        assert_eq!(summary["domain_means"]["Projet"], 100.0);
        assert_eq!(summary["options"]["departements"][0], "02 - Aisne");
    }

    #[tokio::test]
    async fn incomplete_answers_are_unprocessable() {
        let (router, store) = app(true);

        let response = router
            .oneshot(
                Request::post("/api/v1/assessments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name": "ESAT Horizon"}"#))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["missing"].as_array().map(Vec::len), Some(12));
        assert!(store.load().expect("rows").is_empty());
    }
}
