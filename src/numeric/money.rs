// ============================================================================
// Money Value
// Two-field fixed-point money (whole units + nanos) with validated arithmetic
// ============================================================================

use super::errors::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of nanos in one whole unit (10^9).
pub const NANOS_MOD: i32 = 1_000_000_000;

/// Smallest valid nanos value.
pub const NANOS_MIN: i32 = -999_999_999;

/// Largest valid nanos value.
pub const NANOS_MAX: i32 = 999_999_999;

/// An amount of money in a given currency.
///
/// The amount is split into whole `units` and a sub-unit fraction `nanos`
/// scaled by 10^9, so `-1.75` is stored as `units = -1, nanos = -750_000_000`.
///
/// # Validity
/// A value is valid when:
/// - `units` and `nanos` do not have opposite signs (either may be zero)
/// - `nanos` lies in `[-999_999_999, 999_999_999]`
///
/// Construction through [`MoneyValue::new`] does not enforce this; the
/// arithmetic operations check it and reject invalid operands.
///
/// # Currency
/// An empty currency code means "unspecified". [`are_same_currency`] never
/// treats two empty codes as the same currency, while [`MoneyValue::sum`]
/// accepts them because it only compares the codes for equality.
///
/// # Example
/// ```
/// use boutique_money::numeric::MoneyValue;
///
/// let a = MoneyValue::new("USD", 0, 900_000_000);
/// let b = MoneyValue::new("USD", 0, 200_000_000);
/// let total = a.sum(&b).unwrap();
/// assert_eq!(total, MoneyValue::new("USD", 1, 100_000_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyValue {
    currency_code: String,
    units: i64,
    nanos: i32,
}

impl MoneyValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a value from its raw fields without validation.
    #[inline]
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> Self {
        Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    /// Create a value, rejecting mixed signs and out-of-range nanos.
    ///
    /// # Errors
    /// Returns `InvalidValue` if the fields break the validity invariants.
    pub fn try_new(currency_code: impl Into<String>, units: i64, nanos: i32) -> MoneyResult<Self> {
        let value = Self::new(currency_code, units, nanos);
        if value.is_valid() {
            Ok(value)
        } else {
            Err(MoneyError::InvalidValue)
        }
    }

    /// Zero in the given currency.
    #[inline]
    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self::new(currency_code, 0, 0)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    #[inline]
    pub const fn units(&self) -> i64 {
        self.units
    }

    #[inline]
    pub const fn nanos(&self) -> i32 {
        self.nanos
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    /// Check the sign and range invariants.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        let signs_agree =
            (self.units >= 0 && self.nanos >= 0) || (self.units <= 0 && self.nanos <= 0);
        signs_agree && self.nanos >= NANOS_MIN && self.nanos <= NANOS_MAX
    }

    /// Check if both fields are zero. Does not require validity.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// Check if the value is valid and greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.is_valid() && (self.units > 0 || (self.units == 0 && self.nanos > 0))
    }

    /// Check if the value is valid and less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.is_valid() && (self.units < 0 || (self.units == 0 && self.nanos < 0))
    }

    /// Check if both values carry the same, non-empty currency code.
    #[inline]
    pub fn is_same_currency(&self, other: &Self) -> bool {
        !self.currency_code.is_empty() && self.currency_code == other.currency_code
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Negate both fields, keeping the currency code.
    ///
    /// No validity check: an invalid value negates to an equally invalid one.
    /// Negation wraps at the integer minimum so it stays an involution.
    #[inline]
    pub fn negate(&self) -> Self {
        Self {
            currency_code: self.currency_code.clone(),
            units: self.units.wrapping_neg(),
            nanos: self.nanos.wrapping_neg(),
        }
    }

    /// Add two values of the same currency.
    ///
    /// The result is always valid: nanos carried past a whole unit move into
    /// `units`, and a sign disagreement between the summed fields borrows
    /// one unit across.
    ///
    /// # Errors
    /// - `InvalidValue` if either operand is invalid
    /// - `MismatchingCurrency` if the currency codes differ (two empty codes match)
    /// - `Overflow` if `units` leaves the i64 range
    pub fn sum(&self, other: &Self) -> MoneyResult<Self> {
        if !self.is_valid() || !other.is_valid() {
            return Err(MoneyError::InvalidValue);
        }
        if self.currency_code != other.currency_code {
            return Err(MoneyError::MismatchingCurrency);
        }

        let units = self
            .units
            .checked_add(other.units)
            .ok_or(MoneyError::Overflow)?;
        // Both operands are within +-999_999_999, the sum fits an i32.
        let nanos = self.nanos + other.nanos;
        let (units, nanos) = normalize(units, nanos)?;

        Ok(Self {
            currency_code: self.currency_code.clone(),
            units,
            nanos,
        })
    }

    /// Add two values, panicking on any error.
    ///
    /// Only for call sites that already know both operands are valid and share
    /// a currency.
    ///
    /// # Panics
    /// Panics if [`MoneyValue::sum`] fails.
    #[inline]
    #[track_caller]
    pub fn must_sum(&self, other: &Self) -> Self {
        must(self.sum(other))
    }

    /// Subtract `other` from `self`.
    ///
    /// # Errors
    /// Same as [`MoneyValue::sum`]; `Overflow` if `other.units` is `i64::MIN`.
    pub fn checked_sub(&self, other: &Self) -> MoneyResult<Self> {
        if other.units == i64::MIN {
            return Err(MoneyError::Overflow);
        }
        self.sum(&other.negate())
    }

    /// Add the value to itself until it has been counted `n` times.
    ///
    /// `n == 1` and `n == 0` both return the value unchanged.
    ///
    /// # Panics
    /// Panics if `self` is invalid or the running total overflows.
    #[track_caller]
    pub fn multiply_slow(&self, n: u32) -> Self {
        let mut out = self.clone();
        for _ in 1..n {
            out = must(out.sum(self));
        }
        out
    }

    /// Exact multiplication by an integer factor.
    ///
    /// Agrees with [`MoneyValue::multiply_slow`] for positive factors without
    /// the repeated additions.
    ///
    /// # Errors
    /// - `InvalidValue` if `self` is invalid
    /// - `Overflow` if the product does not fit
    pub fn checked_mul(&self, factor: i64) -> MoneyResult<Self> {
        if !self.is_valid() {
            return Err(MoneyError::InvalidValue);
        }

        let scale = i128::from(NANOS_MOD);
        let total = (i128::from(self.units) * scale + i128::from(self.nanos))
            .checked_mul(i128::from(factor))
            .ok_or(MoneyError::Overflow)?;

        let units = i64::try_from(total / scale).map_err(|_| MoneyError::Overflow)?;
        // Truncating remainder: same sign as `total`, magnitude below NANOS_MOD.
        let nanos = (total % scale) as i32;

        Ok(Self {
            currency_code: self.currency_code.clone(),
            units,
            nanos,
        })
    }

    // ========================================================================
    // Conversion from rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to a `rust_decimal::Decimal` with 9 decimal places.
    ///
    /// # Errors
    /// Returns `InvalidValue` if `self` is invalid.
    pub fn to_decimal(&self) -> MoneyResult<Decimal> {
        if !self.is_valid() {
            return Err(MoneyError::InvalidValue);
        }
        let total = i128::from(self.units) * i128::from(NANOS_MOD) + i128::from(self.nanos);
        Decimal::try_from_i128_with_scale(total, 9).map_err(|_| MoneyError::Overflow)
    }

    /// Convert from a `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the decimal has digits below one nano
    /// - `Overflow` if the whole part does not fit an i64
    pub fn from_decimal(currency_code: impl Into<String>, d: Decimal) -> MoneyResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let scaled = d
            .checked_mul(Decimal::from(NANOS_MOD))
            .ok_or(MoneyError::Overflow)?;
        if !scaled.fract().is_zero() {
            return Err(MoneyError::PrecisionLoss);
        }

        let total = scaled.to_i128().ok_or(MoneyError::Overflow)?;
        let scale = i128::from(NANOS_MOD);
        let units = i64::try_from(total / scale).map_err(|_| MoneyError::Overflow)?;
        let nanos = (total % scale) as i32;

        Ok(Self::new(currency_code, units, nanos))
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Carry whole units out of `nanos` and realign mismatched signs.
///
/// `nanos` may be anything up to twice [`NANOS_MOD`] in magnitude, which is
/// what adding two valid values produces.
pub(crate) fn normalize(units: i64, nanos: i32) -> MoneyResult<(i64, i32)> {
    let sign_consistent = (units >= 0 && nanos >= 0) || (units <= 0 && nanos <= 0);

    if sign_consistent {
        let units = units
            .checked_add(i64::from(nanos / NANOS_MOD))
            .ok_or(MoneyError::Overflow)?;
        Ok((units, nanos % NANOS_MOD))
    } else if units > 0 {
        Ok((units - 1, nanos + NANOS_MOD))
    } else {
        Ok((units + 1, nanos - NANOS_MOD))
    }
}

/// Unwrap a money result, panicking on error.
///
/// # Panics
/// Panics with the error message if `result` is an `Err`.
#[inline]
#[track_caller]
pub fn must<T>(result: MoneyResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("money operation failed: {}", err),
    }
}

/// Check if both values carry the same, non-empty currency code.
#[inline]
pub fn are_same_currency(l: &MoneyValue, r: &MoneyValue) -> bool {
    l.is_same_currency(r)
}

/// Field-wise equality of currency code, units and nanos.
#[inline]
pub fn are_equal(l: &MoneyValue, r: &MoneyValue) -> bool {
    l == r
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for MoneyValue {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// Infallible Add/Sub for ergonomics (panics on error - use sum/checked_sub in production)
impl Add for MoneyValue {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn add(self, rhs: Self) -> Self::Output {
        self.must_sum(&rhs)
    }
}

impl Sub for MoneyValue {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn sub(self, rhs: Self) -> Self::Output {
        must(self.checked_sub(&rhs))
    }
}

impl fmt::Display for MoneyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units < 0 || self.nanos < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:09}",
            sign,
            self.units.unsigned_abs(),
            self.nanos.unsigned_abs()
        )?;
        if !self.currency_code.is_empty() {
            write!(f, " {}", self.currency_code)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
