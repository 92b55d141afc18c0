pub mod engine;
pub mod rates;

pub use engine::{compare, ChartPoint, ComparisonResult, Quote};
pub use rates::{ProviderId, ProviderRates, RateTable, ServiceKind};
