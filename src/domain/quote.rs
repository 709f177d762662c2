// ============================================================================
// Shipping Quote
// Dollars-and-cents quote converted from a floating-point price
// ============================================================================

use crate::numeric::{MoneyValue, NANOS_MOD};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Nanos in one cent.
const NANOS_PER_CENT: i32 = NANOS_MOD / 100;

/// A price split into whole dollars and cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quote {
    pub dollars: u32,
    pub cents: u32,
}

impl Quote {
    pub const fn new(dollars: u32, cents: u32) -> Self {
        Self { dollars, cents }
    }

    /// Build a quote from a float price by truncation.
    ///
    /// Both the whole part and the cents are truncated toward zero, so `8.999`
    /// quotes as `8.99`. Negative and NaN inputs saturate to zero and values
    /// above `u32::MAX` saturate to `u32::MAX` dollars.
    pub fn from_float(value: f64) -> Self {
        let units = value.trunc();
        let fraction = value - units;
        Self {
            dollars: units as u32,
            cents: (fraction * 100.0).trunc() as u32,
        }
    }

    /// Flat-rate quote for a number of items.
    ///
    /// The item count does not change the price.
    pub fn from_count(_count: u32, flat_rate: f64) -> Self {
        Self::from_float(flat_rate)
    }

    /// Convert to a money value in the given currency.
    ///
    /// Cents above 99 carry into whole units.
    pub fn to_money(&self, currency_code: impl Into<String>) -> MoneyValue {
        let cents = i64::from(self.cents);
        let units = i64::from(self.dollars) + cents / 100;
        let nanos = (cents % 100) as i32 * NANOS_PER_CENT;
        MoneyValue::new(currency_code, units, nanos)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars, self.cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_float() {
        assert_eq!(Quote::from_float(8.99), Quote::new(8, 99));
        assert_eq!(Quote::from_float(12.0), Quote::new(12, 0));
        assert_eq!(Quote::from_float(0.5), Quote::new(0, 50));
    }

    #[test]
    fn test_from_float_truncates() {
        assert_eq!(Quote::from_float(1.999), Quote::new(1, 99));
        assert_eq!(Quote::from_float(3.005), Quote::new(3, 0));
    }

    #[test]
    fn test_from_float_saturates() {
        assert_eq!(Quote::from_float(-4.25), Quote::new(0, 0));
        assert_eq!(Quote::from_float(f64::NAN), Quote::new(0, 0));
        assert_eq!(Quote::from_float(1e12).dollars, u32::MAX);
    }

    #[test]
    fn test_from_count_is_flat() {
        assert_eq!(Quote::from_count(1, 8.99), Quote::from_count(5, 8.99));
        assert_eq!(Quote::from_count(0, 8.99), Quote::new(8, 99));
    }

    #[test]
    fn test_display() {
        assert_eq!(Quote::new(8, 99).to_string(), "8.99");
        assert_eq!(Quote::new(3, 5).to_string(), "3.05");
    }

    #[test]
    fn test_to_money() {
        let m = Quote::new(8, 99).to_money("USD");
        assert_eq!(m, MoneyValue::new("USD", 8, 990_000_000));
        assert!(m.is_valid());

        let carried = Quote::new(1, 250).to_money("USD");
        assert_eq!(carried, MoneyValue::new("USD", 3, 500_000_000));
    }
}
