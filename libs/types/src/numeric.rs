//! Fixed-point numeric types for prices and quantities
//!
//! Prices use rust_decimal for deterministic arithmetic (no floating-point
//! errors). Quantities are whole units, so conservation checks are exact
//! integer sums.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tradeable units
///
/// Orders and trades always carry whole units; fills subtract without
/// rounding.
pub type Quantity = u64;

/// A limit or execution price
///
/// Thin wrapper over `Decimal` so prices sort correctly as ordered-map keys
/// and cannot be confused with other decimal values. `Decimal` equality is
/// scale-insensitive, so `100` and `100.00` land on the same price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal value
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a price from a whole number
    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
