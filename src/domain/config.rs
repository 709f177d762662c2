// ============================================================================
// Money Service Configuration
// Currency, shipping rate and instrumentation settings
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flat shipping rate used by the presets.
pub const DEFAULT_FLAT_SHIPPING_RATE: f64 = 8.99;

/// Configuration for a [`MoneyService`](crate::engine::MoneyService)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyConfig {
    /// Name reported with every observer event (e.g., "checkoutservice")
    pub service_name: String,

    /// Currency used for shipping quotes and zero totals (e.g., "USD")
    pub currency_code: String,

    /// Flat shipping price, independent of item count
    pub flat_shipping_rate: f64,

    /// When false, operations run without notifying the observer
    pub instrumentation_enabled: bool,
}

impl MoneyConfig {
    /// Create a new configuration with required parameters
    pub fn new(service_name: String, currency_code: String) -> Self {
        Self {
            service_name,
            currency_code,
            flat_shipping_rate: DEFAULT_FLAT_SHIPPING_RATE,
            instrumentation_enabled: true,
        }
    }

    /// Builder method: Set the flat shipping rate
    pub fn with_flat_shipping_rate(mut self, rate: f64) -> Self {
        self.flat_shipping_rate = rate;
        self
    }

    /// Builder method: Enable or disable observer notifications
    pub fn with_instrumentation(mut self, enabled: bool) -> Self {
        self.instrumentation_enabled = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.service_name.is_empty() {
            return Err("Service name cannot be empty".to_string());
        }

        // Three upper-case ASCII letters, ISO-4217 style
        let code = self.currency_code.as_bytes();
        if code.len() != 3 || !code.iter().all(u8::is_ascii_uppercase) {
            return Err(format!(
                "Currency code must be three upper-case letters, got {:?}",
                self.currency_code
            ));
        }

        if !self.flat_shipping_rate.is_finite() || self.flat_shipping_rate < 0.0 {
            return Err("Flat shipping rate must be a finite, non-negative number".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl MoneyConfig {
    /// US dollar configuration with the default flat shipping rate
    pub fn usd(service_name: String) -> Self {
        Self::new(service_name, "USD".to_string())
    }

    /// Euro configuration with the default flat shipping rate
    pub fn eur(service_name: String) -> Self {
        Self::new(service_name, "EUR".to_string())
    }
}
