use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use multicloud_pricing::config;
use multicloud_pricing::pricing::{self, ChartPoint, ComparisonResult, ServiceKind};

const CHART_WIDTH: usize = 40;

/// Execute the quote command
///
/// Validates the input, runs the pricing engine once against the configured
/// rate table, and renders the comparison table plus a cost chart.
pub fn execute(
    config_path: &Path,
    service: &str,
    quantity: f64,
    region: Option<&str>,
) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    let Some(service) = ServiceKind::parse(service) else {
        bail!(
            "Unknown service '{}'. Expected one of: compute, storage, database",
            service
        );
    };

    if !quantity.is_finite() || quantity <= 0.0 {
        bail!("Quantity must be a positive number, got {}", quantity);
    }

    if let Some(region) = region {
        println!(
            "{}",
            format!("Note: rates are region-independent; ignoring region '{}'", region).yellow()
        );
    }

    let result = pricing::compare(&cfg.pricing, service, quantity);
    print_comparison(&result);

    Ok(())
}

fn print_comparison(result: &ComparisonResult) {
    println!();
    println!(
        "{}",
        format!(
            "Comparing {} prices for {} {}",
            result.service.label(),
            result.quantity,
            result.service.unit()
        )
        .bold()
    );
    println!();
    println!(
        "  {:<24} {:>12} {:>12} {:>12}",
        "PROVIDER", "UNIT PRICE", "QUANTITY", "TOTAL COST"
    );

    for quote in &result.quotes {
        let line = format!(
            "  {:<24} {:>12} {:>12} {:>12}",
            quote.display_name,
            format!("${:.4}", quote.unit_rate),
            quote.quantity,
            format!("${:.2}", quote.total_cost),
        );

        if quote.is_best_price {
            println!("{} {}", line.green(), "◀ best price".green().bold());
        } else {
            println!("{}", line);
        }
    }

    println!();
    let max = max_value(&result.chart_series);
    for point in &result.chart_series {
        println!(
            "  {:<10} {} ${:.2}",
            point.label,
            cost_bar(point.value, max),
            point.value
        );
    }
    println!();
}

fn max_value(series: &[ChartPoint]) -> f64 {
    series.iter().map(|p| p.value).fold(0.0, f64::max)
}

fn cost_bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }

    let width = ((value / max) * CHART_WIDTH as f64).round() as usize;
    "█".repeat(width.max(1))
}
