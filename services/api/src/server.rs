use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_sermon_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use sermon_bench::config::AppConfig;
use sermon_bench::error::AppError;
use sermon_bench::submission::{SimulatedAnalysisGateway, SubmissionService};
use sermon_bench::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(delay_ms) = args.delay_ms.take() {
        config.analysis.delay = Duration::from_millis(delay_ms);
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(load_catalog(&config.catalog)?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        catalog: catalog.clone(),
    };

    let gateway = Arc::new(SimulatedAnalysisGateway::from_config(&config.analysis));
    let submission_service = Arc::new(SubmissionService::new(catalog.clone(), gateway));

    let app = with_sermon_routes(submission_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        profiles = catalog.len(),
        analysis_delay_ms = config.analysis.delay.as_millis() as u64,
        "sermon benchmark service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
