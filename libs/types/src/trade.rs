//! Trade execution records
//!
//! A trade is the atomic exchange produced when an incoming taker crosses a
//! resting maker. Records are immutable once written.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single execution between a taker and a maker
///
/// `price` is always the maker's resting price, and `timestamp` is the
/// taker's arrival time. `sequence` is assigned by the engine in execution
/// order, so consumers can reference trades without consulting timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub sequence: u64, // Monotonic execution order
    pub price: Price,
    pub quantity: Quantity,
    pub taker_order_id: OrderId,
    pub maker_order_id: OrderId,
    pub timestamp: i64,        // Taker arrival, Unix nanos
    pub taker_latency_ns: i64, // Taker submission-to-arrival delay
}

impl Trade {
    /// Create a new trade record
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sequence: u64,
        price: Price,
        quantity: Quantity,
        taker_order_id: OrderId,
        maker_order_id: OrderId,
        timestamp: i64,
        taker_latency_ns: i64,
    ) -> Self {
        Self {
            sequence,
            price,
            quantity,
            taker_order_id,
            maker_order_id,
            timestamp,
            taker_latency_ns,
        }
    }

    /// Notional value (price × quantity)
    pub fn notional(&self) -> Decimal {
        self.price.as_decimal() * Decimal::from(self.quantity)
    }
}
