use serde::{Deserialize, Serialize};
use std::fmt;

/// The three cloud vendors every comparison quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Aws,
    Gcp,
    Azure,
}

impl ProviderId {
    /// Fixed quoting order. Every comparison lists providers in this order,
    /// never sorted by price.
    pub const ALL: [ProviderId; 3] = [ProviderId::Aws, ProviderId::Gcp, ProviderId::Azure];

    pub fn as_str(self) -> &'static str {
        match self {
            ProviderId::Aws => "aws",
            ProviderId::Gcp => "gcp",
            ProviderId::Azure => "azure",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ProviderId::Aws => "Amazon Web Services",
            ProviderId::Gcp => "Google Cloud Platform",
            ProviderId::Azure => "Microsoft Azure",
        }
    }

    /// Shortened vendor name used as the chart label.
    pub fn short_name(self) -> &'static str {
        match self {
            ProviderId::Aws => "Amazon",
            ProviderId::Gcp => "Google",
            ProviderId::Azure => "Microsoft",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of cloud resource being priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Compute,
    Storage,
    Database,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::Compute,
        ServiceKind::Storage,
        ServiceKind::Database,
    ];

    /// Parse the wire representation. Returns None for anything outside the
    /// supported set; callers turn that into a validation error.
    pub fn parse(s: &str) -> Option<ServiceKind> {
        match s {
            "compute" => Some(ServiceKind::Compute),
            "storage" => Some(ServiceKind::Storage),
            "database" => Some(ServiceKind::Database),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::Compute => "compute",
            ServiceKind::Storage => "storage",
            ServiceKind::Database => "database",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::Compute => "Compute",
            ServiceKind::Storage => "Storage",
            ServiceKind::Database => "Database",
        }
    }

    /// Billing unit for quantities of this service.
    pub fn unit(self) -> &'static str {
        match self {
            ServiceKind::Compute | ServiceKind::Database => "hours",
            ServiceKind::Storage => "GB",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit rates for one provider, one cell per service in scope.
///
/// Deserialization fails on a missing cell, so a loaded table is always
/// complete. A provider that cannot quote a service must not silently quote
/// zero and win every comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRates {
    pub compute: f64,
    pub storage: f64,
    pub database: f64,
}

impl ProviderRates {
    fn rate(&self, service: ServiceKind) -> f64 {
        match service {
            ServiceKind::Compute => self.compute,
            ServiceKind::Storage => self.storage,
            ServiceKind::Database => self.database,
        }
    }
}

/// Static per-provider, per-service unit prices, loaded once from
/// configuration and swapped atomically on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub aws: ProviderRates,
    pub gcp: ProviderRates,
    pub azure: ProviderRates,
}

impl RateTable {
    pub fn provider_rates(&self, provider: ProviderId) -> &ProviderRates {
        match provider {
            ProviderId::Aws => &self.aws,
            ProviderId::Gcp => &self.gcp,
            ProviderId::Azure => &self.azure,
        }
    }

    /// Look up the unit rate for a (provider, service) pair. Total over both
    /// enums once a table exists.
    pub fn unit_rate(&self, provider: ProviderId, service: ServiceKind) -> f64 {
        self.provider_rates(provider).rate(service)
    }

    /// Reject tables with non-finite or negative cells. Zero is allowed but
    /// unusual; missing cells are already a deserialization error.
    pub fn validate(&self) -> anyhow::Result<()> {
        for provider in ProviderId::ALL {
            for service in ServiceKind::ALL {
                let rate = self.unit_rate(provider, service);
                if !rate.is_finite() || rate < 0.0 {
                    anyhow::bail!(
                        "Invalid unit rate for {}/{}: {}",
                        provider,
                        service,
                        rate
                    );
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RateTable {
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

    #[test]
    fn test_service_parse() {
        assert_eq!(ServiceKind::parse("compute"), Some(ServiceKind::Compute));
        assert_eq!(ServiceKind::parse("storage"), Some(ServiceKind::Storage));
        assert_eq!(ServiceKind::parse("database"), Some(ServiceKind::Database));

        assert_eq!(ServiceKind::parse("network"), None);
        assert_eq!(ServiceKind::parse("Compute"), None);
        assert_eq!(ServiceKind::parse(""), None);
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(ProviderId::Aws.display_name(), "Amazon Web Services");
        assert_eq!(ProviderId::Gcp.display_name(), "Google Cloud Platform");
        assert_eq!(ProviderId::Azure.display_name(), "Microsoft Azure");

        assert_eq!(ProviderId::Aws.short_name(), "Amazon");
        assert_eq!(ProviderId::Gcp.short_name(), "Google");
        assert_eq!(ProviderId::Azure.short_name(), "Microsoft");
    }

    #[test]
    fn test_service_units() {
        assert_eq!(ServiceKind::Compute.unit(), "hours");
        assert_eq!(ServiceKind::Database.unit(), "hours");
        assert_eq!(ServiceKind::Storage.unit(), "GB");
    }

    #[test]
    fn test_wire_format_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProviderId::Aws).unwrap(),
            "\"aws\""
        );
        assert_eq!(
            serde_json::to_string(&ServiceKind::Database).unwrap(),
            "\"database\""
        );
    }

    #[test]
    fn test_unit_rate_lookup() {
        let table = sample_table();
        assert_eq!(table.unit_rate(ProviderId::Aws, ServiceKind::Compute), 0.023);
        assert_eq!(table.unit_rate(ProviderId::Gcp, ServiceKind::Storage), 0.023);
        assert_eq!(
            table.unit_rate(ProviderId::Azure, ServiceKind::Database),
            0.046
        );
    }

    #[test]
    fn test_missing_cell_is_a_deserialization_error() {
        let result: Result<ProviderRates, _> =
            toml::from_str("compute = 0.023\nstorage = 0.025\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("database"));
    }

    #[test]
    fn test_validate_accepts_sample_table() {
        assert!(sample_table().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut table = sample_table();
        table.gcp.storage = -0.01;

        let result = table.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("gcp/storage"));
    }

    #[test]
    fn test_validate_rejects_non_finite_rate() {
        let mut table = sample_table();
        table.aws.compute = f64::NAN;
        assert!(table.validate().is_err());

        table.aws.compute = f64::INFINITY;
        assert!(table.validate().is_err());
    }
}
