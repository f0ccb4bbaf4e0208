//! Service configuration.

use serde::{Deserialize, Serialize};

/// Default exclusive lower bound for a "large" population.
pub const DEFAULT_POPULATION_THRESHOLD: u64 = 1_000_000;
/// Value returned when a name cannot be capitalized.
pub const NOT_AVAILABLE: &str = "[NOT AVAILABLE]";
/// Currency emitted when no country matches a lookup.
pub const DEFAULT_CURRENCY: &str = "USD (default)";

/// Configuration for the country query service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Populations strictly above this count as large.
    pub population_threshold: u64,
    /// Fallback for `name_in_capitals`.
    pub not_available: String,
    /// Fallback for `currency_or_default`.
    pub default_currency: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            population_threshold: DEFAULT_POPULATION_THRESHOLD,
            not_available: NOT_AVAILABLE.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Builder for service configuration.
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
        }
    }

    pub fn population_threshold(mut self, threshold: u64) -> Self {
        self.config.population_threshold = threshold;
        self
    }

    pub fn not_available(mut self, fallback: impl Into<String>) -> Self {
        self.config.not_available = fallback.into();
        self
    }

    pub fn default_currency(mut self, currency: impl Into<String>) -> Self {
        self.config.default_currency = currency.into();
        self
    }

    pub fn build(self) -> ServiceConfig {
        self.config
    }
}

impl Default for ServiceConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
