//! Matching engine core
//!
//! Single entry point `process_order`: validate the order, match it with
//! price-time priority against the opposing side, then apply the order
//! type's residual policy. A call either rejects before touching anything
//! or leaves the book and trade log mutually consistent.

use types::errors::EngineError;
use types::numeric::Quantity;
use types::order::{Order, OrderType, Side};
use types::trade::Trade;

use crate::book::side::PriceKey;
use crate::book::{BookSide, OrderBook};
use crate::matching::{crossing, TradeLog};

/// Result of processing an order
///
/// Accounts for the order's entire original quantity: filled plus rested
/// plus discarded always equals what came in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    /// No fill; the full quantity rests on the book (limit only)
    Rested { quantity: Quantity },
    /// Some fill; the remainder rests on the book (limit only)
    PartiallyFilled { filled: Quantity, rested: Quantity },
    /// The entire quantity matched immediately
    Filled { quantity: Quantity },
    /// Some fill; the remainder was discarded (market and IOC)
    PartiallyFilledDiscarded { filled: Quantity, discarded: Quantity },
    /// No fill; the entire quantity was discarded (market and IOC)
    Discarded { quantity: Quantity },
}

impl OrderOutcome {
    /// Quantity that matched immediately
    pub fn filled_quantity(&self) -> Quantity {
        match self {
            OrderOutcome::Rested { .. } | OrderOutcome::Discarded { .. } => 0,
            OrderOutcome::PartiallyFilled { filled, .. } => *filled,
            OrderOutcome::Filled { quantity } => *quantity,
            OrderOutcome::PartiallyFilledDiscarded { filled, .. } => *filled,
        }
    }

    /// Quantity left resting on the book
    pub fn rested_quantity(&self) -> Quantity {
        match self {
            OrderOutcome::Rested { quantity } => *quantity,
            OrderOutcome::PartiallyFilled { rested, .. } => *rested,
            _ => 0,
        }
    }

    /// Quantity dropped without executing
    pub fn discarded_quantity(&self) -> Quantity {
        match self {
            OrderOutcome::Discarded { quantity } => *quantity,
            OrderOutcome::PartiallyFilledDiscarded { discarded, .. } => *discarded,
            _ => 0,
        }
    }
}

/// Price-time priority matching engine for a single instrument
///
/// Owns the book it was constructed with and an append-only trade log.
/// Orders are identity-agnostic: nothing prevents an id from trading with
/// itself.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    book: OrderBook,
    trade_log: TradeLog,
}

impl MatchingEngine {
    /// Create an engine bound to a book
    ///
    /// The book may already hold resting orders; matching picks up from
    /// whatever state it is in.
    pub fn new(book: OrderBook) -> Self {
        Self {
            book,
            trade_log: TradeLog::new(),
        }
    }

    /// Process an incoming order
    ///
    /// Validation failures reject the order before any state changes. All
    /// three order types match identically; they differ only in where an
    /// unmatched remainder goes: limit rests it, market and IOC discard it.
    pub fn process_order(&mut self, mut order: Order) -> Result<OrderOutcome, EngineError> {
        order.validate()?;

        let original_quantity = order.quantity;
        self.match_incoming(&mut order);
        let filled = original_quantity - order.quantity;

        let outcome = match order.order_type {
            OrderType::Limit => {
                if order.is_filled() {
                    OrderOutcome::Filled {
                        quantity: original_quantity,
                    }
                } else {
                    let rested = order.quantity;
                    self.book.add_order(order);
                    if filled == 0 {
                        OrderOutcome::Rested { quantity: rested }
                    } else {
                        OrderOutcome::PartiallyFilled { filled, rested }
                    }
                }
            }
            OrderType::Market | OrderType::Ioc => {
                if order.is_filled() {
                    OrderOutcome::Filled {
                        quantity: original_quantity,
                    }
                } else if filled == 0 {
                    OrderOutcome::Discarded {
                        quantity: order.quantity,
                    }
                } else {
                    OrderOutcome::PartiallyFilledDiscarded {
                        filled,
                        discarded: order.quantity,
                    }
                }
            }
        };

        debug_assert!(!self.book.is_crossed(), "book crossed after matching");
        Ok(outcome)
    }

    /// Match the incoming order against the opposing side
    fn match_incoming(&mut self, order: &mut Order) {
        // Split borrows: the opposing side and the trade log move separately
        let Self { book, trade_log } = self;
        match order.side {
            Side::Buy => match_against(book.asks_mut(), order, trade_log),
            Side::Sell => match_against(book.bids_mut(), order, trade_log),
        }
    }

    /// The order book in its current state
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    /// All executed trades in sequence order
    pub fn trades(&self) -> &[Trade] {
        self.trade_log.trades()
    }
}

/// Match a taker against one side of the book
///
/// Walks levels best-price-first, consuming makers FIFO within each level,
/// until the taker is exhausted, the side empties, or the taker's limit
/// stops crossing. Exhausted levels are removed immediately so the book
/// never holds an empty level.
fn match_against<K: PriceKey>(
    side: &mut BookSide<K>,
    taker: &mut Order,
    trade_log: &mut TradeLog,
) {
    while let Some((level_price, level)) = side.best_level_mut() {
        if taker.is_filled() || !crossing::crosses(taker, level_price) {
            break;
        }

        while let Some(maker) = level.front() {
            if taker.is_filled() {
                break;
            }
            let maker_order_id = maker.order_id;
            let match_quantity = taker.quantity.min(maker.quantity);

            // Trades execute at the maker's resting price
            trade_log.record(taker, maker_order_id, level_price, match_quantity);
            taker.fill(match_quantity);
            level.fill_front(match_quantity);
        }

        if level.is_empty() {
            side.remove_level(level_price);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::OrderId;
    use types::numeric::Price;

    fn test_engine() -> MatchingEngine {
        MatchingEngine::new(OrderBook::new())
    }

    fn limit(id: u64, side: Side, price: i64, quantity: Quantity) -> Order {
        let submitted = id as i64 * 1_000;
        Order::limit(
            OrderId::new(id),
            side,
            Price::from_i64(price),
            quantity,
            submitted,
            submitted + 500,
        )
    }

    fn market(id: u64, side: Side, quantity: Quantity) -> Order {
        let submitted = id as i64 * 1_000;
        Order::market(OrderId::new(id), side, quantity, submitted, submitted + 500)
    }

    fn ioc(id: u64, side: Side, price: i64, quantity: Quantity) -> Order {
        let submitted = id as i64 * 1_000;
        Order::ioc(
            OrderId::new(id),
            side,
            Price::from_i64(price),
            quantity,
            submitted,
            submitted + 500,
        )
    }

    #[test]
    fn test_limit_rests_on_empty_book() {
        let mut engine = test_engine();

        let outcome = engine
            .process_order(limit(1, Side::Buy, 100, 10))
            .unwrap();

        assert_eq!(outcome, OrderOutcome::Rested { quantity: 10 });
        assert_eq!(engine.book().best_bid(), Some(Price::from_i64(100)));
        assert_eq!(engine.book().bid_depth(), 10);
        assert!(engine.trades().is_empty());
    }

    #[test]
    fn test_exact_cross_fills_both_sides() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Buy, 100, 10)).unwrap();

        let outcome = engine
            .process_order(limit(2, Side::Sell, 100, 10))
            .unwrap();

        assert_eq!(outcome, OrderOutcome::Filled { quantity: 10 });
        assert_eq!(engine.trades().len(), 1);
        assert_eq!(engine.trades()[0].price, Price::from_i64(100));
        assert_eq!(engine.trades()[0].quantity, 10);
        assert!(engine.book().is_empty());
    }

    #[test]
    fn test_partial_fill_leaves_maker_resting() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Buy, 100, 10)).unwrap();

        let outcome = engine.process_order(limit(2, Side::Sell, 100, 4)).unwrap();

        assert_eq!(outcome, OrderOutcome::Filled { quantity: 4 });
        assert_eq!(engine.book().bid_levels(), vec![(Price::from_i64(100), 6)]);
        assert!(engine.book().ask_levels().is_empty());
    }

    #[test]
    fn test_trade_executes_at_maker_price() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 101, 5)).unwrap();

        // Aggressive limit: willing to pay 103, pays the resting 101
        let outcome = engine.process_order(limit(2, Side::Buy, 103, 5)).unwrap();

        assert_eq!(outcome, OrderOutcome::Filled { quantity: 5 });
        assert_eq!(engine.trades()[0].price, Price::from_i64(101));
    }

    #[test]
    fn test_sell_below_best_bid_executes_at_bid() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Buy, 100, 10)).unwrap();

        // Willing to sell at 99, gets the resting bid's 100
        let outcome = engine.process_order(limit(2, Side::Sell, 99, 4)).unwrap();

        assert_eq!(outcome, OrderOutcome::Filled { quantity: 4 });
        let trade = &engine.trades()[0];
        assert_eq!(trade.price, Price::from_i64(100));
        assert_eq!(trade.maker_order_id, OrderId::new(1));
        assert_eq!(trade.taker_order_id, OrderId::new(2));
        assert_eq!(engine.book().bid_levels(), vec![(Price::from_i64(100), 6)]);
    }

    #[test]
    fn test_market_walks_levels_then_discards() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 101, 5)).unwrap();
        engine.process_order(limit(2, Side::Sell, 102, 5)).unwrap();

        let outcome = engine.process_order(market(3, Side::Buy, 12)).unwrap();

        assert_eq!(
            outcome,
            OrderOutcome::PartiallyFilledDiscarded {
                filled: 10,
                discarded: 2
            }
        );
        assert_eq!(engine.trades().len(), 2);
        assert_eq!(engine.trades()[0].price, Price::from_i64(101));
        assert_eq!(engine.trades()[1].price, Price::from_i64(102));
        // Nothing rests: the market remainder evaporates
        assert!(engine.book().is_empty());
    }

    #[test]
    fn test_market_on_empty_book_discards_everything() {
        let mut engine = test_engine();

        let outcome = engine.process_order(market(1, Side::Buy, 5)).unwrap();

        assert_eq!(outcome, OrderOutcome::Discarded { quantity: 5 });
        assert!(engine.trades().is_empty());
        assert!(engine.book().is_empty());
    }

    #[test]
    fn test_ioc_fills_within_limit_then_discards() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 101, 5)).unwrap();
        engine.process_order(limit(2, Side::Sell, 103, 5)).unwrap();

        // Limit 102 reaches the first level only; remainder is dropped
        let outcome = engine.process_order(ioc(3, Side::Buy, 102, 8)).unwrap();

        assert_eq!(
            outcome,
            OrderOutcome::PartiallyFilledDiscarded {
                filled: 5,
                discarded: 3
            }
        );
        assert_eq!(engine.trades().len(), 1);
        assert_eq!(engine.book().best_bid(), None);
        assert_eq!(engine.book().ask_levels(), vec![(Price::from_i64(103), 5)]);
    }

    #[test]
    fn test_ioc_zero_fill_discards_without_resting() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 105, 5)).unwrap();

        let outcome = engine.process_order(ioc(2, Side::Buy, 104, 3)).unwrap();

        assert_eq!(outcome, OrderOutcome::Discarded { quantity: 3 });
        assert!(engine.trades().is_empty());
        assert_eq!(engine.book().ask_depth(), 5);
        assert_eq!(engine.book().best_bid(), None);
    }

    #[test]
    fn test_limit_partial_rests_residual() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 101, 5)).unwrap();

        let outcome = engine.process_order(limit(2, Side::Buy, 101, 8)).unwrap();

        assert_eq!(
            outcome,
            OrderOutcome::PartiallyFilled {
                filled: 5,
                rested: 3
            }
        );
        assert_eq!(engine.book().bid_levels(), vec![(Price::from_i64(101), 3)]);
        assert!(engine.book().ask_levels().is_empty());
    }

    #[test]
    fn test_no_cross_leaves_both_resting() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 101, 5)).unwrap();

        let outcome = engine.process_order(limit(2, Side::Buy, 99, 5)).unwrap();

        assert_eq!(outcome, OrderOutcome::Rested { quantity: 5 });
        assert!(engine.trades().is_empty());
        assert_eq!(engine.book().order_count(), 2);
        assert!(!engine.book().is_crossed());
    }

    #[test]
    fn test_time_priority_within_level() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 100, 4)).unwrap();
        engine.process_order(limit(2, Side::Sell, 100, 4)).unwrap();

        engine.process_order(market(3, Side::Buy, 4)).unwrap();

        // The earlier arrival fills first; the later one still rests whole
        assert_eq!(engine.trades()[0].maker_order_id, OrderId::new(1));
        assert_eq!(engine.book().ask_levels(), vec![(Price::from_i64(100), 4)]);
    }

    #[test]
    fn test_market_consumes_fifo_and_splits_second_maker() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 101, 5)).unwrap();
        engine.process_order(limit(2, Side::Sell, 101, 3)).unwrap();

        let outcome = engine.process_order(market(3, Side::Buy, 6)).unwrap();

        assert_eq!(outcome, OrderOutcome::Filled { quantity: 6 });
        assert_eq!(engine.trades().len(), 2);
        assert_eq!(engine.trades()[0].maker_order_id, OrderId::new(1));
        assert_eq!(engine.trades()[0].quantity, 5);
        assert_eq!(engine.trades()[1].maker_order_id, OrderId::new(2));
        assert_eq!(engine.trades()[1].quantity, 1);
        // The later maker's remainder stays at the front of the level
        assert_eq!(engine.book().ask_levels(), vec![(Price::from_i64(101), 2)]);
    }

    #[test]
    fn test_ioc_on_empty_book_discards_everything() {
        let mut engine = test_engine();

        let outcome = engine.process_order(ioc(6, Side::Buy, 50, 10)).unwrap();

        assert_eq!(outcome, OrderOutcome::Discarded { quantity: 10 });
        assert!(engine.trades().is_empty());
        assert!(engine.book().is_empty());
    }

    #[test]
    fn test_price_priority_across_levels() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 102, 1)).unwrap();
        engine.process_order(limit(2, Side::Sell, 101, 1)).unwrap();

        engine.process_order(limit(3, Side::Buy, 102, 1)).unwrap();

        // The better-priced ask matches first despite arriving later
        assert_eq!(engine.trades()[0].maker_order_id, OrderId::new(2));
        assert_eq!(engine.trades()[0].price, Price::from_i64(101));
    }

    #[test]
    fn test_exhausted_levels_are_removed() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 101, 3)).unwrap();
        engine.process_order(limit(2, Side::Sell, 102, 3)).unwrap();

        engine.process_order(market(3, Side::Buy, 3)).unwrap();

        let ask_prices: Vec<Price> = engine.book().ask_levels().iter().map(|(p, _)| *p).collect();
        assert_eq!(ask_prices, vec![Price::from_i64(102)]);
    }

    #[test]
    fn test_zero_quantity_rejected_without_state_change() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 101, 5)).unwrap();

        let result = engine.process_order(limit(2, Side::Buy, 101, 0));

        assert!(matches!(
            result,
            Err(EngineError::InvalidOrder(
                types::errors::OrderError::ZeroQuantity { .. }
            ))
        ));
        assert!(engine.trades().is_empty());
        assert_eq!(engine.book().ask_depth(), 5);
    }

    #[test]
    fn test_priced_type_without_price_rejected() {
        let mut engine = test_engine();
        let mut order = ioc(1, Side::Buy, 100, 5);
        order.price = None;

        let result = engine.process_order(order);

        assert!(matches!(
            result,
            Err(EngineError::InvalidOrder(
                types::errors::OrderError::MissingPrice { .. }
            ))
        ));
        assert!(engine.book().is_empty());
    }

    #[test]
    fn test_market_ignores_stray_price() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 101, 5)).unwrap();

        // A market order carrying a price must match on its type tag alone
        let mut order = market(2, Side::Buy, 5);
        order.price = Some(Price::from_i64(1));

        let outcome = engine.process_order(order).unwrap();

        assert_eq!(outcome, OrderOutcome::Filled { quantity: 5 });
        assert_eq!(engine.trades()[0].price, Price::from_i64(101));
    }

    #[test]
    fn test_trade_stamped_with_taker_arrival_and_latency() {
        let mut engine = test_engine();
        let maker = Order::limit(
            OrderId::new(1),
            Side::Sell,
            Price::from_i64(100),
            5,
            1_000,
            1_200,
        );
        let taker = Order::limit(
            OrderId::new(2),
            Side::Buy,
            Price::from_i64(100),
            5,
            2_000,
            2_750,
        );

        engine.process_order(maker).unwrap();
        engine.process_order(taker).unwrap();

        let trade = &engine.trades()[0];
        assert_eq!(trade.timestamp, 2_750);
        assert_eq!(trade.taker_latency_ns, 750);
    }

    #[test]
    fn test_sequences_are_monotonic_from_one() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 101, 2)).unwrap();
        engine.process_order(limit(2, Side::Sell, 102, 2)).unwrap();
        engine.process_order(market(3, Side::Buy, 3)).unwrap();
        engine.process_order(limit(4, Side::Sell, 100, 1)).unwrap();
        engine.process_order(market(5, Side::Buy, 2)).unwrap();

        let sequences: Vec<u64> = engine.trades().iter().map(|t| t.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_quantity_conservation_across_mixed_flow() {
        let mut engine = test_engine();
        let orders = vec![
            limit(1, Side::Buy, 99, 10),
            limit(2, Side::Sell, 101, 8),
            limit(3, Side::Buy, 101, 5),
            market(4, Side::Sell, 7),
            ioc(5, Side::Buy, 102, 6),
            limit(6, Side::Sell, 99, 20),
            market(7, Side::Buy, 1),
        ];

        let submitted: Quantity = orders.iter().map(|o| o.quantity).sum();
        let mut filled: Quantity = 0;
        let mut rested: Quantity = 0;
        let mut discarded: Quantity = 0;
        for order in orders {
            let outcome = engine.process_order(order).unwrap();
            filled += outcome.filled_quantity();
            rested += outcome.rested_quantity();
            discarded += outcome.discarded_quantity();
        }

        // Every submitted unit is filled, resting, or discarded
        assert_eq!(filled + rested + discarded, submitted);

        // Taker fills equal traded volume; once-rested quantity later taken
        // as maker is what no longer sits on the book
        let traded: Quantity = engine.trades().iter().map(|t| t.quantity).sum();
        let on_book = engine.book().bid_depth() + engine.book().ask_depth();
        assert_eq!(filled, traded);
        assert_eq!(on_book, rested - traded);
        assert_eq!(submitted, on_book + 2 * traded + discarded);
    }

    #[test]
    fn test_deterministic_replay() {
        let run = || {
            let mut engine = test_engine();
            engine.process_order(limit(1, Side::Sell, 101, 5)).unwrap();
            engine.process_order(limit(2, Side::Sell, 102, 3)).unwrap();
            engine.process_order(limit(3, Side::Buy, 102, 6)).unwrap();
            engine.process_order(market(4, Side::Sell, 2)).unwrap();
            engine
        };

        let first = run();
        let second = run();

        assert_eq!(first.trades(), second.trades());
        assert_eq!(first.book().bid_levels(), second.book().bid_levels());
        assert_eq!(first.book().ask_levels(), second.book().ask_levels());
    }

    #[test]
    fn test_aggressive_limit_sweeps_then_rests_above_old_best() {
        let mut engine = test_engine();
        engine.process_order(limit(1, Side::Sell, 101, 2)).unwrap();
        engine.process_order(limit(2, Side::Sell, 102, 2)).unwrap();

        let outcome = engine.process_order(limit(3, Side::Buy, 103, 7)).unwrap();

        assert_eq!(
            outcome,
            OrderOutcome::PartiallyFilled {
                filled: 4,
                rested: 3
            }
        );
        assert_eq!(engine.book().best_bid(), Some(Price::from_i64(103)));
        assert!(engine.book().ask_levels().is_empty());
        assert!(!engine.book().is_crossed());
    }
}
