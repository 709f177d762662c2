// ============================================================================
// Boutique Money Library
// Fixed-point money values with validated, currency-safe arithmetic
// ============================================================================

//! # Boutique Money
//!
//! Money as a currency code plus whole `units` and sub-unit `nanos`
//! (10^-9 of a unit), with the arithmetic a checkout needs.
//!
//! ## Features
//!
//! - **Validated arithmetic**: every operation checks the sign/range invariants
//! - **Carry/borrow normalisation** keeps `units` and `nanos` sign-consistent
//! - **Currency safety**: adding different currencies is an error, not a bug
//! - **Pluggable observers** for tracing, with a no-op default
//! - **Shipping quotes** converted from float prices by truncation
//!
//! ## Example
//!
//! ```rust
//! use boutique_money::prelude::*;
//! use std::sync::Arc;
//!
//! let service = MoneyServiceBuilder::new("checkout")
//!     .currency("USD")
//!     .build(Arc::new(TracingObserver))
//!     .unwrap();
//!
//! let item = MoneyValue::new("USD", 1, 500_000_000);
//! let line = service.multiply_slow(&item, 3);
//! assert_eq!(line, MoneyValue::new("USD", 4, 500_000_000));
//!
//! let shipping = service.shipping_cost(3);
//! let total = service.sum(&line, &shipping).unwrap();
//! println!("Total: {}", total);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{MoneyConfig, Quote};
    pub use crate::engine::{create_from_config, MoneyService, MoneyServiceBuilder};
    pub use crate::interfaces::{
        MoneyEvent, MoneyObserver, MoneyOperation, NoOpObserver, RecordingObserver,
        TracingObserver,
    };
    pub use crate::numeric::{
        are_equal, are_same_currency, must, MoneyError, MoneyResult, MoneyValue,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_checkout() {
        let observer = Arc::new(RecordingObserver::new());
        let service = MoneyServiceBuilder::new("checkoutservice")
            .currency("USD")
            .build(observer.clone())
            .unwrap();

        // Two items, one ordered three times
        let hoodie = MoneyValue::new("USD", 1, 500_000_000);
        let mug = MoneyValue::new("USD", 0, 990_000_000);
        let hoodies = service.multiply_slow(&hoodie, 3);
        assert_eq!(hoodies, MoneyValue::new("USD", 4, 500_000_000));

        let shipping = service.shipping_cost(4);
        let total = service.total(&[hoodies, mug, shipping]).unwrap();
        assert_eq!(total, MoneyValue::new("USD", 14, 480_000_000));
        assert!(total.is_positive());

        // multiply_slow + quote + three additions
        let events = observer.events();
        assert_eq!(events.len(), 5);
        assert!(events.iter().all(|e| !e.operation.is_failure()));
        assert!(events.windows(2).all(|w| w[0].sequence < w[1].sequence));
    }

    #[test]
    fn test_refund_nets_to_zero() {
        let service = MoneyServiceBuilder::new("paymentservice")
            .build_untraced()
            .unwrap();

        let charge = MoneyValue::new("USD", 25, 990_000_000);
        let refund = service.negate(&charge);
        assert!(refund.is_negative());

        let net = service.sum(&charge, &refund).unwrap();
        assert!(net.is_zero());
        assert!(!net.is_positive() && !net.is_negative());
    }

    #[test]
    fn test_foreign_item_is_rejected_without_side_effects() {
        let observer = Arc::new(RecordingObserver::new());
        let config = MoneyConfig::usd("checkoutservice".to_string());
        let service = create_from_config(config, observer.clone()).unwrap();

        let usd = MoneyValue::new("USD", 10, 0);
        let eur = MoneyValue::new("EUR", 10, 0);

        assert_eq!(service.sum(&usd, &eur), Err(MoneyError::MismatchingCurrency));
        // Inputs are untouched
        assert_eq!(usd, MoneyValue::new("USD", 10, 0));
        assert!(!are_same_currency(&usd, &eur));
        assert!(observer.events()[0].operation.is_failure());
    }
}
