use crate::cli::ServeArgs;
use crate::infra::{
    default_eligibility_config, AppState, InMemoryNoticePublisher, InMemoryReservationRepository,
    InMemorySalonRepository,
};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use salon_unlimited::config::AppConfig;
use salon_unlimited::error::AppError;
use salon_unlimited::telemetry;
use salon_unlimited::workflows::booking::ReservationDeskService;
use salon_unlimited::workflows::salon::SalonDirectoryService;
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

    let reservations = Arc::new(InMemoryReservationRepository::default());
    let salons = Arc::new(InMemorySalonRepository::default());
    let notices = Arc::new(InMemoryNoticePublisher::default());

    let directory_service = Arc::new(SalonDirectoryService::new(salons.clone()));
    let desk_service = Arc::new(ReservationDeskService::new(
        reservations,
        salons,
        notices,
        default_eligibility_config(),
    ));

    let app = with_service_routes(desk_service, directory_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "salon reservation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
