use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::handlers::calculate::AppState;
use crate::pricing::{ProviderId, ServiceKind};

/// Liveness endpoint. Answers as long as the process is up.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "multicloud-pricing",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness endpoint. Re-checks the rate table currently serving requests
/// and answers 503 if it is unusable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config.load();

    match config.pricing.validate() {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "service": "multicloud-pricing",
                "providers": ProviderId::ALL.len(),
                "services": ServiceKind::ALL.len(),
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": e.to_string(),
            })),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, MetricsConfig, ServerConfig};
    use crate::pricing::{ProviderRates, RateTable};
    use arc_swap::ArcSwap;
    use std::sync::Arc;

    fn state_with_rates(rates: RateTable) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                log_level: "info".to_string(),
                log_format: "json".to_string(),
            },
            pricing: rates,
            metrics: MetricsConfig {
                enabled: true,
                endpoint: "/metrics".to_string(),
            },
        };

        AppState {
            config: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    fn sample_rates() -> RateTable {
        RateTable {
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
        }
    }

    #[tokio::test]
    async fn test_health_check_returns_ok() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_check_with_valid_table() {
        let response = readiness_check(State(state_with_rates(sample_rates())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_check_with_corrupt_table() {
        let mut rates = sample_rates();
        rates.gcp.compute = f64::NAN;

        let response = readiness_check(State(state_with_rates(rates)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
