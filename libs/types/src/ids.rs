//! Unique identifier types for simulator entities
//!
//! Identifiers are plain integers assigned by the caller (the harness numbers
//! orders in submission order), so a run is reproducible from its seed alone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an order
///
/// Assigned by whoever submits the order, never generated internally.
/// The harness hands out consecutive integers in submission order, which
/// keeps ids stable across replays of the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Create an OrderId from a raw integer
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
