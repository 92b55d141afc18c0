use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;

use crate::handlers::calculate::AppState;
use crate::pricing::{ProviderId, ProviderRates, ServiceKind};

#[derive(Debug, Serialize)]
pub struct ServiceEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
}

/// Handle GET /api/services
/// Returns the fixed catalog of priceable services.
pub async fn list_services() -> impl IntoResponse {
    let services: Vec<ServiceEntry> = ServiceKind::ALL
        .iter()
        .map(|&service| ServiceEntry {
            id: service.as_str(),
            label: service.label(),
            unit: service.unit(),
        })
        .collect();

    Json(json!({ "services": services }))
}

#[derive(Debug, Serialize)]
pub struct ProviderEntry {
    pub id: &'static str,
    pub display_name: &'static str,
    pub rates: ProviderRates,
}

/// Handle GET /api/providers
/// Returns the fixed provider set with the currently loaded unit rates.
pub async fn list_providers(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config.load();

    let providers: Vec<ProviderEntry> = ProviderId::ALL
        .iter()
        .map(|&provider| ProviderEntry {
            id: provider.as_str(),
            display_name: provider.display_name(),
            rates: config.pricing.provider_rates(provider).clone(),
        })
        .collect();

    Json(json!({ "providers": providers }))
}
