//! Simulation session driver
//!
//! Runs one full market session: generate a batch of random orders with
//! submission times, inject delivery latency, sort the batch into arrival
//! order, and feed it through a fresh matching engine one order at a time.

use matching_engine::{MatchingEngine, OrderBook, OrderOutcome};
use serde::{Deserialize, Serialize};
use types::errors::EngineError;
use types::ids::OrderId;
use types::order::Order;

use crate::generator::{GeneratorConfig, OrderGenerator};
use crate::latency::{LatencyConfig, LatencyModel};

/// Configuration for one simulated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of orders to generate
    pub order_count: usize,
    /// Master seed; the generator and latency RNG streams derive from it
    pub seed: u64,
    /// Session start, Unix nanos
    pub base_time_ns: i64,
    /// Gap between consecutive submissions in nanoseconds
    pub submission_interval_ns: i64,
    pub generator: GeneratorConfig,
    pub latency: LatencyConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            order_count: 1_000,
            seed: 42,
            base_time_ns: 1_700_000_000_000_000_000,
            submission_interval_ns: 1_000,
            generator: GeneratorConfig::default(),
            latency: LatencyConfig::default(),
        }
    }
}

/// Per-order bookkeeping kept after the order itself has moved into the
/// engine.
#[derive(Debug, Clone, Copy)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub latency_ns: i64,
    pub outcome: OrderOutcome,
}

/// Everything a finished session leaves behind.
#[derive(Debug)]
pub struct SessionResult {
    pub engine: MatchingEngine,
    pub records: Vec<OrderRecord>,
}

/// Run a complete session: generate, delay, sort, match.
///
/// Orders reach the engine in arrival-time order; equal arrivals keep
/// submission order via the stable sort.
pub fn run(config: &SessionConfig) -> Result<SessionResult, EngineError> {
    let mut generator = OrderGenerator::new(config.generator.clone(), config.seed);
    let mut latency = LatencyModel::new(config.latency.clone(), config.seed.wrapping_add(1));

    tracing::info!(
        "Generating {} orders with seed {}",
        config.order_count,
        config.seed
    );

    let mut orders: Vec<Order> = (0..config.order_count)
        .map(|i| {
            let order_id = OrderId::new(i as u64 + 1);
            let submission_time = config.base_time_ns + i as i64 * config.submission_interval_ns;
            let intent = generator.next_intent(order_id, submission_time);
            latency.deliver(intent)
        })
        .collect();

    orders.sort_by_key(|order| order.arrival_time);

    let mut engine = MatchingEngine::new(OrderBook::new());
    let mut records = Vec::with_capacity(orders.len());
    for order in orders {
        let order_id = order.order_id;
        let latency_ns = order.latency_ns();
        let outcome = engine.process_order(order)?;
        records.push(OrderRecord {
            order_id,
            latency_ns,
            outcome,
        });
    }

    tracing::info!(
        "Session complete: {} trades, {} orders resting",
        engine.trades().len(),
        engine.book().order_count()
    );

    Ok(SessionResult { engine, records })
}
