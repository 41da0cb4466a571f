//! Price level implementation with FIFO queue
//!
//! A price level holds every resting order at one price point. Orders are
//! kept in arrival order to enforce time priority within the level.

use std::collections::VecDeque;
use types::numeric::Quantity;
use types::order::Order;

/// A price level containing the resting orders at a specific price
///
/// Maintains strict FIFO ordering for time-priority matching and caches the
/// aggregate quantity so depth queries never walk the queue.
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    /// Queue of orders at this price level (FIFO order)
    orders: VecDeque<Order>,
    /// Total quantity resting at this level
    total_quantity: Quantity,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
            total_quantity: 0,
        }
    }

    /// Append an order at the back of the queue (time priority)
    pub fn push_back(&mut self, order: Order) {
        debug_assert!(order.quantity > 0, "resting order must have quantity");
        self.total_quantity += order.quantity;
        self.orders.push_back(order);
    }

    /// Peek at the front order without removing it
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Fill the front order in place
    ///
    /// Removes the order once its remaining quantity reaches zero, so the
    /// queue never holds an exhausted order.
    ///
    /// # Panics
    /// Panics if the level is empty or the fill exceeds the front order's
    /// remaining quantity
    pub fn fill_front(&mut self, fill_quantity: Quantity) {
        let front = self
            .orders
            .front_mut()
            .expect("fill_front on empty price level");
        front.fill(fill_quantity);
        self.total_quantity -= fill_quantity;

        if front.is_filled() {
            self.orders.pop_front();
        }
    }

    /// Iterate the resting orders in time priority
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the total quantity at this price level
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}
