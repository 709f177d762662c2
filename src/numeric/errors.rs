// ============================================================================
// Money Errors
// Error types for money arithmetic operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during money arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoneyError {
    /// An operand has mixed-sign units/nanos or nanos out of range
    InvalidValue,
    /// Operands carry different currency codes
    MismatchingCurrency,
    /// Whole units exceeded the i64 range
    Overflow,
    /// Conversion would drop digits below one nano
    PrecisionLoss,
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::InvalidValue => write!(
                f,
                "one of the specified money values is invalid"
            ),
            MoneyError::MismatchingCurrency => {
                write!(f, "mismatching currency codes")
            },
            MoneyError::Overflow => {
                write!(f, "arithmetic overflow: units exceeded maximum value")
            },
            MoneyError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose sub-nano digits"
            ),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
