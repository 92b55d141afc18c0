use std::sync::Arc;
use std::time::Instant;

use arc_swap::ArcSwap;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::AppError;
use crate::metrics;
use crate::pricing::{self, ServiceKind};

/// Shared state for the API handlers. The config sits behind ArcSwap so a
/// SIGHUP reload swaps the rate table without touching in-flight requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ArcSwap<Config>>,
}

#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    pub service: String,
    pub quantity: Option<f64>,
    #[serde(default)]
    pub region: Option<String>,
}

/// Handle POST /api/calculate
///
/// Validates the request, runs the pricing engine once against the current
/// rate table, and returns the full comparison. The engine itself is total;
/// every rejection happens here, before it runs.
pub async fn handle_calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let started = Instant::now();

    let service = ServiceKind::parse(&request.service).ok_or_else(|| {
        metrics::record_validation_error("unknown_service");
        AppError::UnknownService(request.service.clone())
    })?;

    let quantity = request.quantity.ok_or_else(|| {
        metrics::record_validation_error("missing_quantity");
        AppError::InvalidQuantity("quantity is required".to_string())
    })?;

    if !quantity.is_finite() || quantity <= 0.0 {
        metrics::record_validation_error("non_positive_quantity");
        return Err(AppError::InvalidQuantity(format!(
            "quantity must be a positive number, got {}",
            quantity
        )));
    }

    if let Some(region) = &request.region {
        debug!("Region '{}' requested; rates are region-independent", region);
    }

    let config = state.config.load();
    let result = pricing::compare(&config.pricing, service, quantity);

    let best_provider = result
        .quotes
        .iter()
        .find(|q| q.is_best_price)
        .map(|q| q.provider.as_str())
        .unwrap_or("none");
    metrics::record_calculation(service.as_str(), best_provider, started.elapsed());

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MetricsConfig, ServerConfig};
    use crate::pricing::{ProviderRates, RateTable};
    use axum::http::StatusCode;

    fn create_test_state() -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                log_level: "info".to_string(),
                log_format: "json".to_string(),
            },
            pricing: RateTable {
                aws: ProviderRates {
                    compute: 0.023,
                    storage: 0.025,
                    database: 0.045,
                },
                gcp: ProviderRates {
                    compute: 0.020,
                    storage: 0.023,
                    database: 0.042,
                },
                azure: ProviderRates {
                    compute: 0.024,
                    storage: 0.026,
                    database: 0.046,
                },
            },
            metrics: MetricsConfig {
                enabled: true,
                endpoint: "/metrics".to_string(),
            },
        };

        AppState {
            config: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    fn request(service: &str, quantity: Option<f64>, region: Option<&str>) -> CalculateRequest {
        CalculateRequest {
            service: service.to_string(),
            quantity,
            region: region.map(|r| r.to_string()),
        }
    }

    #[tokio::test]
    async fn test_valid_request_returns_ok() {
        let state = create_test_state();

        let response = handle_calculate(State(state), Json(request("compute", Some(100.0), None)))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_service_is_rejected() {
        let state = create_test_state();

        let result =
            handle_calculate(State(state), Json(request("networking", Some(10.0), None))).await;

        assert!(matches!(result, Err(AppError::UnknownService(_))));
    }

    #[tokio::test]
    async fn test_missing_quantity_is_rejected() {
        let state = create_test_state();

        let result = handle_calculate(State(state), Json(request("storage", None, None))).await;

        assert!(matches!(result, Err(AppError::InvalidQuantity(_))));
    }

    #[tokio::test]
    async fn test_non_positive_quantity_is_rejected() {
        let state = create_test_state();

        let result =
            handle_calculate(State(state.clone()), Json(request("storage", Some(0.0), None))).await;
        assert!(matches!(result, Err(AppError::InvalidQuantity(_))));

        let result =
            handle_calculate(State(state), Json(request("storage", Some(-5.0), None))).await;
        assert!(matches!(result, Err(AppError::InvalidQuantity(_))));
    }

    #[tokio::test]
    async fn test_region_is_accepted_and_ignored() {
        let state = create_test_state();

        let response = handle_calculate(
            State(state),
            Json(request("database", Some(24.0), Some("eu-west"))),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
