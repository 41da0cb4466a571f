//! Order types and shape validation
//!
//! An order is stamped twice: once when the trader submits it and once when
//! it reaches the engine. Both timestamps are supplied by the caller, never
//! read from a clock here, so construction stays deterministic.

use crate::errors::OrderError;
use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Execution policy for an incoming order
///
/// All three types match the same way (price-time priority against the
/// opposing side); they differ only in what happens to an unmatched
/// remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Match what crosses, rest the remainder on the book
    Limit,
    /// Match at any price, discard the remainder
    Market,
    /// Immediate-or-cancel: match within the limit, discard the remainder
    Ioc,
}

impl OrderType {
    /// Whether this order type must carry a limit price
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit | OrderType::Ioc)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Limit => write!(f, "limit"),
            OrderType::Market => write!(f, "market"),
            OrderType::Ioc => write!(f, "ioc"),
        }
    }
}

/// A single order
///
/// `quantity` is the remaining open quantity: fills decrement it in place,
/// and an order with `quantity == 0` is completely filled. Market orders
/// carry no price; the engine ranges over the opposing book instead of
/// pricing them with a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Option<Price>,
    pub quantity: Quantity,
    pub submission_time: i64, // Unix nanos at the trader
    pub arrival_time: i64,    // Unix nanos at the engine
}

impl Order {
    /// Create a limit order
    pub fn limit(
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        submission_time: i64,
        arrival_time: i64,
    ) -> Self {
        Self {
            order_id,
            side,
            order_type: OrderType::Limit,
            price: Some(price),
            quantity,
            submission_time,
            arrival_time,
        }
    }

    /// Create a market order
    ///
    /// Market orders never carry a price, by construction.
    pub fn market(
        order_id: OrderId,
        side: Side,
        quantity: Quantity,
        submission_time: i64,
        arrival_time: i64,
    ) -> Self {
        Self {
            order_id,
            side,
            order_type: OrderType::Market,
            price: None,
            quantity,
            submission_time,
            arrival_time,
        }
    }

    /// Create an immediate-or-cancel order
    pub fn ioc(
        order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        submission_time: i64,
        arrival_time: i64,
    ) -> Self {
        Self {
            order_id,
            side,
            order_type: OrderType::Ioc,
            price: Some(price),
            quantity,
            submission_time,
            arrival_time,
        }
    }

    /// Submission-to-arrival latency in nanoseconds
    pub fn latency_ns(&self) -> i64 {
        self.arrival_time - self.submission_time
    }

    /// Check the order's shape before it touches the book
    ///
    /// Rejects empty orders and priced types without a price. A market order
    /// carrying a stray price is not an error; matching ignores it.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.quantity == 0 {
            return Err(OrderError::ZeroQuantity {
                order_id: self.order_id,
            });
        }
        if self.order_type.requires_price() && self.price.is_none() {
            return Err(OrderError::MissingPrice {
                order_id: self.order_id,
                order_type: self.order_type,
            });
        }
        Ok(())
    }

    /// Reduce the remaining quantity after a fill
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity
    pub fn fill(&mut self, fill_quantity: Quantity) {
        assert!(
            fill_quantity <= self.quantity,
            "Fill would exceed remaining quantity"
        );
        self.quantity -= fill_quantity;
    }

    /// Check if the order is completely filled
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }
}
