// ============================================================================
// Numeric Module
// Fixed-point money arithmetic
// ============================================================================
//
// This module provides:
// - MoneyValue: currency code + whole units + nanos (10^-9 units)
// - MoneyError: Error types for money operations
// - must/are_same_currency/are_equal free functions
//
// Design principles:
// - No floating-point operations
// - Fallible arithmetic returns Result; panicking variants are named must_*
// - Operands are validated on every operation, results are always valid
// - Pure functions over immutable values

mod errors;
mod money;

pub use errors::{MoneyError, MoneyResult};
pub use money::{
    are_equal, are_same_currency, must, MoneyValue, NANOS_MAX, NANOS_MIN, NANOS_MOD,
};
