use serde::Serialize;

use crate::pricing::rates::{ProviderId, RateTable, ServiceKind};

/// One provider's computed cost for a given service and quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub provider: ProviderId,
    pub display_name: &'static str,
    pub unit_rate: f64,
    pub quantity: f64,
    pub total_cost: f64,
    pub is_best_price: bool,
}

/// A single point of the cost chart: provider short name plus total cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: f64,
}

/// Result of one comparison. Built fresh per request and replaced wholesale
/// by the next one; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub service: ServiceKind,
    pub quantity: f64,
    pub quotes: Vec<Quote>,
    pub chart_series: Vec<ChartPoint>,
}

/// Compare `quantity` units of `service` across all providers.
///
/// Pure and synchronous; callers must ensure `quantity` is finite and
/// positive before invoking. Totals are kept as raw floats, rounding happens
/// only when a caller renders them. Every quote whose total equals the
/// minimum is flagged best price, so ties are all marked.
pub fn compare(rates: &RateTable, service: ServiceKind, quantity: f64) -> ComparisonResult {
    let mut quotes: Vec<Quote> = ProviderId::ALL
        .iter()
        .map(|&provider| {
            let unit_rate = rates.unit_rate(provider, service);
            Quote {
                provider,
                display_name: provider.display_name(),
                unit_rate,
                quantity,
                total_cost: unit_rate * quantity,
                is_best_price: false,
            }
        })
        .collect();

    let min_cost = quotes
        .iter()
        .map(|q| q.total_cost)
        .fold(f64::INFINITY, f64::min);

    for quote in &mut quotes {
        quote.is_best_price = quote.total_cost == min_cost;
    }

    let chart_series = quotes
        .iter()
        .map(|q| ChartPoint {
            label: q.provider.short_name(),
            value: q.total_cost,
        })
        .collect();

    ComparisonResult {
        service,
        quantity,
        quotes,
        chart_series,
    }
}
