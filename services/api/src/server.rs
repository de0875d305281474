use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLoanRepository, InMemoryWorkflowRepository};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use greenledger::config::AppConfig;
use greenledger::error::AppError;
use greenledger::telemetry;
use greenledger::verification::VerificationService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let loans = Arc::new(InMemoryLoanRepository::seeded());
    let verification_service = Arc::new(VerificationService::new(
        Arc::new(InMemoryWorkflowRepository::default()),
        config.green_tag.policy(),
    ));

    let app = with_service_routes(loans, verification_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        verifier = %config.green_tag.verified_by,
        "green loan ledger ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
