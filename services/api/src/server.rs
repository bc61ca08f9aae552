use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryFeedbackRepository};
use crate::routes::{cors_layer, with_homecoming_routes};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use homecoming::config::AppConfig;
use homecoming::error::AppError;
use homecoming::feedback::FeedbackService;
use homecoming::telemetry;
use std::sync::atomic::Ordering;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryFeedbackRepository::default());
    let feedback_service = Arc::new(FeedbackService::new(repository));

    let app = with_homecoming_routes(feedback_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(cors_layer());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        legacy_rerolls = config.scoring.legacy_rerolls,
        "homecoming api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
