use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryItemStore};
use crate::routes::with_outfit_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use wardrobe::config::AppConfig;
use wardrobe::error::AppError;
use wardrobe::outfits::{OutfitService, OutfitServiceError, WardrobeImporter};
use wardrobe::telemetry;

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

    let items = match args.items.take() {
        Some(path) => WardrobeImporter::from_path(path)?,
        None => Vec::new(),
    };
    let seeded = items.len();
    let store = InMemoryItemStore::with_items(items).map_err(OutfitServiceError::from)?;
    let outfit_service = Arc::new(OutfitService::new(
        Arc::new(store),
        config.composer.clone(),
    ));

    let app = with_outfit_routes(outfit_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, seeded_items = seeded, "outfit service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
