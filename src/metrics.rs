use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> PrometheusHandle {
    let builder = PrometheusBuilder::new();

    let handle = builder
        .install_recorder()
        .expect("Failed to install Prometheus recorder");

    init_metric_descriptions();

    handle
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "pricing_calculations_total",
        "Total number of completed price comparisons"
    );
    describe_histogram!(
        "pricing_calculation_duration_seconds",
        "Comparison duration in seconds"
    );
    describe_counter!(
        "pricing_validation_errors_total",
        "Total number of rejected calculation requests"
    );
    describe_gauge!(
        "pricing_service_info",
        "Service version and build information"
    );

    gauge!("pricing_service_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a completed comparison
pub fn record_calculation(service: &str, best_provider: &str, duration: Duration) {
    counter!(
        "pricing_calculations_total",
        "service" => service.to_string(),
        "best_provider" => best_provider.to_string(),
    )
    .increment(1);

    histogram!(
        "pricing_calculation_duration_seconds",
        "service" => service.to_string(),
    )
    .record(duration.as_secs_f64());
}

/// Record a rejected request
pub fn record_validation_error(reason: &str) {
    counter!(
        "pricing_validation_errors_total",
        "reason" => reason.to_string(),
    )
    .increment(1);
}
