//! Order book infrastructure module
//!
//! Contains the price level queue, the generic book side, and the two-sided
//! `OrderBook` facade.

pub mod price_level;
pub mod side;

pub use price_level::PriceLevel;
pub use side::{AskSide, BidSide, BookSide};

use rust_decimal::Decimal;
use std::fmt;
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderType, Side};

/// Two-sided limit order book for a single instrument
///
/// Bids sort price-descending, asks price-ascending, and every level keeps
/// FIFO arrival order. Only limit orders rest here; market and IOC
/// remainders never reach the book.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    bids: BidSide,
    asks: AskSide,
}

impl OrderBook {
    /// Create a new empty order book
    pub fn new() -> Self {
        Self {
            bids: BidSide::new(),
            asks: AskSide::new(),
        }
    }

    /// Rest a limit order on its side of the book
    ///
    /// # Panics
    /// Panics if the order carries no price. Callers must also uphold that
    /// the order is a limit with positive remaining quantity, checked via
    /// debug assertions.
    pub fn add_order(&mut self, order: Order) {
        debug_assert!(order.quantity > 0, "resting order must have quantity");
        debug_assert_eq!(
            order.order_type,
            OrderType::Limit,
            "only limit orders rest on the book"
        );
        let price = order.price.expect("resting order must carry a price");
        match order.side {
            Side::Buy => self.bids.insert(price, order),
            Side::Sell => self.asks.insert(price, order),
        }
    }

    /// Get the highest bid price
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Get the lowest ask price
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Best-ask minus best-bid, when both sides are populated
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.as_decimal() - bid.as_decimal()),
            _ => None,
        }
    }

    /// Get bid levels as (price, quantity), highest price first
    pub fn bid_levels(&self) -> Vec<(Price, Quantity)> {
        self.bids.levels()
    }

    /// Get ask levels as (price, quantity), lowest price first
    pub fn ask_levels(&self) -> Vec<(Price, Quantity)> {
        self.asks.levels()
    }

    /// Total quantity resting on the bid side
    pub fn bid_depth(&self) -> Quantity {
        self.bids.depth()
    }

    /// Total quantity resting on the ask side
    pub fn ask_depth(&self) -> Quantity {
        self.asks.depth()
    }

    /// Total number of resting orders
    pub fn order_count(&self) -> usize {
        self.bids.order_count() + self.asks.order_count()
    }

    /// Check if both sides are empty
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Check whether the best bid meets or exceeds the best ask
    ///
    /// A correctly matched book is never crossed between operations.
    pub fn is_crossed(&self) -> bool {
        matches!(
            (self.best_bid(), self.best_ask()),
            (Some(bid), Some(ask)) if bid >= ask
        )
    }

    pub(crate) fn bids_mut(&mut self) -> &mut BidSide {
        &mut self.bids
    }

    pub(crate) fn asks_mut(&mut self) -> &mut AskSide {
        &mut self.asks
    }
}

/// Ladder rendering: asks from highest to lowest, then bids from highest to
/// lowest, so the inside of the market sits in the middle.
impl fmt::Display for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Order Book ---")?;
        writeln!(f, "Asks (sell orders):")?;
        for (price, quantity) in self.asks.levels().into_iter().rev() {
            writeln!(f, "  Price: {price}, Qty: {quantity}")?;
        }
        writeln!(f, "Bids (buy orders):")?;
        for (price, quantity) in self.bids.levels() {
            writeln!(f, "  Price: {price}, Qty: {quantity}")?;
        }
        write!(f, "------------------")
    }
}
