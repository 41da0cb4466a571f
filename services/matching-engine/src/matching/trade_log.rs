//! Trade recording
//!
//! Collects executions in order with an engine-assigned monotonic sequence.
//! The log is append-only; nothing downstream mutates a recorded trade.

use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Order;
use types::trade::Trade;

/// Append-only log of executed trades
#[derive(Debug, Clone)]
pub struct TradeLog {
    trades: Vec<Trade>,
    sequence_counter: u64,
}

impl TradeLog {
    /// Create an empty log; the first trade takes sequence 1
    pub fn new() -> Self {
        Self {
            trades: Vec::new(),
            sequence_counter: 1,
        }
    }

    /// Get the next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Record an execution between an incoming taker and a resting maker
    ///
    /// The trade is priced at the maker's resting level and stamped with the
    /// taker's arrival time.
    pub(crate) fn record(
        &mut self,
        taker: &Order,
        maker_order_id: OrderId,
        price: Price,
        quantity: Quantity,
    ) {
        debug_assert!(quantity > 0, "trade must carry quantity");
        let sequence = self.next_sequence();
        self.trades.push(Trade::new(
            sequence,
            price,
            quantity,
            taker.order_id,
            maker_order_id,
            taker.arrival_time,
            taker.latency_ns(),
        ));
    }

    /// All trades in execution order
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Number of recorded trades
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    /// Check if no trades have been recorded
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

impl Default for TradeLog {
    fn default() -> Self {
        Self::new()
    }
}
