//! Error types for the matching engine
//!
//! Only caller mistakes are errors. Internal invariant breaches (a crossed
//! book, a double-consumed quantity) are defects and panic via assertions
//! rather than surfacing here.

use crate::ids::OrderId;
use crate::order::OrderType;
use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Order rejected: {0}")]
    InvalidOrder(#[from] OrderError),
}

/// Order shape errors, raised before any engine state changes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order {order_id} has zero quantity")]
    ZeroQuantity { order_id: OrderId },

    #[error("Order {order_id} is a {order_type} order without a price")]
    MissingPrice {
        order_id: OrderId,
        order_type: OrderType,
    },
}
