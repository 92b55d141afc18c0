use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Prometheus exposition endpoint. Renders whatever the installed recorder
/// has accumulated; the path it is mounted on comes from `metrics.endpoint`.
pub async fn export_metrics(State(handle): State<Arc<PrometheusHandle>>) -> impl IntoResponse {
    let body = handle.render();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
}
