use anyhow::Result;
use arc_swap::ArcSwap;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, calculate::AppState},
    metrics,
    pricing::{ProviderId, ServiceKind},
    signals::setup_signal_handlers,
};

/// Start the pricing server
///
/// This function:
/// 1. Initializes metrics
/// 2. Sets up signal handlers for graceful shutdown and config reload
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    // Initialize metrics
    info!("Initializing Prometheus metrics...");
    let metrics_handle = Arc::new(metrics::init_metrics());

    // Wrap config in ArcSwap for atomic reload support
    let config_swap = Arc::new(ArcSwap::from_pointee(config.clone()));

    // Setup signal handlers (SIGTERM, SIGINT for shutdown; SIGHUP for reload)
    let (shutdown_tx, signal_handle) = setup_signal_handlers(config_swap.clone(), config_path);
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app_state = AppState {
        config: config_swap,
    };

    // Build the Axum router
    let app = create_router(app_state, metrics_handle);

    // Create socket address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting pricing service on {}", addr);
    info!(
        "Rate table loaded: {} providers x {} services",
        ProviderId::ALL.len(),
        ServiceKind::ALL.len()
    );

    // Bind to address
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            // Wait for shutdown signal
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    // Wait for signal handler task to complete
    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(
    app_state: AppState,
    metrics_handle: Arc<metrics_exporter_prometheus::PrometheusHandle>,
) -> Router {
    // Endpoint registration follows the config loaded at startup; a SIGHUP
    // reload changes rates, not routes.
    let metrics_config = app_state.config.load().metrics.clone();

    let api_routes = Router::new()
        .route("/api/calculate", post(handlers::calculate::handle_calculate))
        .route("/api/services", get(handlers::catalog::list_services))
        .route("/api/providers", get(handlers::catalog::list_providers))
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(app_state);

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(api_routes);

    if metrics_config.enabled {
        router = router.merge(
            Router::new()
                .route(
                    &metrics_config.endpoint,
                    get(handlers::metrics_handler::export_metrics),
                )
                .with_state(metrics_handle),
        );
    }

    router
        // Calculation payloads are tiny; anything bigger is not a calculation
        .layer(DefaultBodyLimit::max(64 * 1024))
        // Callers are browser frontends on other origins
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
