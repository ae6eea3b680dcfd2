use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryResultStore};
use crate::routes::with_assessment_routes;
use aps_positioning::config::{AppConfig, ResultsConfig};
use aps_positioning::error::AppError;
use aps_positioning::results::{AssessmentService, CsvResultStore};
use aps_positioning::scoring::{ScoringConfig, ScoringEngine};
use aps_positioning::telemetry;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Assessment routes backed by the CSV results file, or by process memory
/// when `ephemeral` is set.
fn assessment_routes(results: &ResultsConfig, ephemeral: bool) -> Router {
    let engine = ScoringEngine::new(ScoringConfig::standard());

    if ephemeral {
        info!("results kept in memory for this process");
        let store = Arc::new(InMemoryResultStore::default());
        return with_assessment_routes(Arc::new(AssessmentService::new(engine, store)));
    }

    info!(path = %results.path.display(), "results appended to csv file");
    let store = Arc::new(CsvResultStore::new(results.path.clone()));
    with_assessment_routes(Arc::new(AssessmentService::new(engine, store)))
}

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let ServeArgs {
        host,
        port,
        ephemeral,
    } = args;

    let mut config = AppConfig::load()?;
    config.server.host = host.unwrap_or(config.server.host);
    config.server.port = port.unwrap_or(config.server.port);

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = assessment_routes(&config.results, ephemeral)
        .layer(Extension(state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness.store(true, Ordering::Release);

    info!(
        environment = config.environment.label(),
        %addr,
        "aps self-positioning service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
