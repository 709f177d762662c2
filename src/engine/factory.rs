// ============================================================================
// Money Service Factory
// Creates money services with validated configuration
// ============================================================================

use crate::domain::config::{MoneyConfig, DEFAULT_FLAT_SHIPPING_RATE};
use crate::engine::MoneyService;
use crate::interfaces::{MoneyObserver, NoOpObserver};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a money service from configuration
///
/// # Arguments
/// * `config` - Money service configuration
/// * `observer` - Observer for operation events
///
/// # Returns
/// * `Result<MoneyService, String>` - Configured money service or error
///
/// # Example
/// ```
/// use boutique_money::prelude::*;
/// use std::sync::Arc;
///
/// let config = MoneyConfig::usd("checkout".to_string());
/// let service = create_from_config(config, Arc::new(NoOpObserver)).unwrap();
/// assert_eq!(service.zero(), MoneyValue::zero("USD"));
/// ```
pub fn create_from_config(
    config: MoneyConfig,
    observer: Arc<dyn MoneyObserver>,
) -> Result<MoneyService, String> {
    config.validate()?;

    tracing::debug!(
        service = %config.service_name,
        currency = %config.currency_code,
        instrumentation = config.instrumentation_enabled,
        "money service created"
    );

    Ok(MoneyService::new(config, observer))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating money services with fluent API
///
/// # Example
/// ```
/// use boutique_money::prelude::*;
/// use std::sync::Arc;
///
/// let service = MoneyServiceBuilder::new("checkout")
///     .currency("EUR")
///     .flat_shipping_rate(4.99)
///     .build(Arc::new(TracingObserver))
///     .unwrap();
///
/// assert_eq!(service.shipping_quote(3), Quote::new(4, 99));
/// ```
pub struct MoneyServiceBuilder {
    config: MoneyConfig,
}

impl MoneyServiceBuilder {
    /// Create a new builder for the specified service, priced in USD
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            config: MoneyConfig::usd(service_name.into()),
        }
    }

    /// Set the currency code
    pub fn currency(mut self, currency_code: impl Into<String>) -> Self {
        self.config.currency_code = currency_code.into();
        self
    }

    /// Set the flat shipping rate
    pub fn flat_shipping_rate(mut self, rate: f64) -> Self {
        self.config.flat_shipping_rate = rate;
        self
    }

    /// Restore the default flat shipping rate
    pub fn default_shipping_rate(self) -> Self {
        self.flat_shipping_rate(DEFAULT_FLAT_SHIPPING_RATE)
    }

    /// Enable or disable observer notifications
    pub fn instrumentation(mut self, enabled: bool) -> Self {
        self.config.instrumentation_enabled = enabled;
        self
    }

    /// Get the current configuration (for inspection)
    pub fn config(&self) -> &MoneyConfig {
        &self.config
    }

    /// Build the money service
    pub fn build(self, observer: Arc<dyn MoneyObserver>) -> Result<MoneyService, String> {
        create_from_config(self.config, observer)
    }

    /// Build the money service with the no-op observer
    pub fn build_untraced(self) -> Result<MoneyService, String> {
        self.build(Arc::new(NoOpObserver))
    }
}
