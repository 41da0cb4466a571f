//! Random order generation
//!
//! Produces randomized order flow with a deterministic seeded RNG: coin-flip
//! sides, weighted order types, Gaussian limit prices, and uniform sizes.
//! Identical seeds replay identical flow.

use rand::distributions::WeightedIndex;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderType, Side};

/// Configuration for the random order generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Mean of the Gaussian limit-price distribution
    pub mean_price: f64,
    /// Standard deviation of the limit-price distribution
    pub price_stddev: f64,
    /// Floor applied to generated prices
    pub min_price: Decimal,
    /// Minimum order size (inclusive)
    pub min_quantity: Quantity,
    /// Maximum order size (inclusive)
    pub max_quantity: Quantity,
    /// Relative weight of limit orders
    pub limit_weight: u32,
    /// Relative weight of market orders
    pub market_weight: u32,
    /// Relative weight of immediate-or-cancel orders
    pub ioc_weight: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mean_price: 100.0,
            price_stddev: 2.0,
            min_price: Decimal::from_str_exact("0.01").unwrap(),
            min_quantity: 1,
            max_quantity: 100,
            limit_weight: 70,
            market_weight: 15,
            ioc_weight: 15,
        }
    }
}

/// An order that has been submitted but not yet delivered.
///
/// Carries everything except the arrival time, which the latency stage
/// stamps once the order reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderIntent {
    pub order_id: OrderId,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Option<Price>,
    pub quantity: Quantity,
    pub submission_time: i64,
}

impl OrderIntent {
    /// Finalize into an engine order once delivery time is known.
    pub fn arrive(self, arrival_time: i64) -> Order {
        Order {
            order_id: self.order_id,
            side: self.side,
            order_type: self.order_type,
            price: self.price,
            quantity: self.quantity,
            submission_time: self.submission_time,
            arrival_time,
        }
    }
}

/// Random order generator with deterministic seeded RNG.
pub struct OrderGenerator {
    config: GeneratorConfig,
    rng: ChaCha8Rng,
    price_dist: Normal<f64>,
    type_dist: WeightedIndex<u32>,
}

impl OrderGenerator {
    /// Create a new generator with a deterministic seed.
    ///
    /// Panics if `price_stddev` is negative or all type weights are zero.
    pub fn new(config: GeneratorConfig, seed: u64) -> Self {
        let price_dist = Normal::new(config.mean_price, config.price_stddev)
            .expect("price stddev must be finite and non-negative");
        let type_dist =
            WeightedIndex::new([config.limit_weight, config.market_weight, config.ioc_weight])
                .expect("at least one order type weight must be positive");
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            price_dist,
            type_dist,
        }
    }

    /// Generate the next order intent.
    ///
    /// Market orders carry no price; limit and IOC orders draw one from the
    /// Gaussian price distribution.
    pub fn next_intent(&mut self, order_id: OrderId, submission_time: i64) -> OrderIntent {
        // Random side
        let side = if self.rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };

        // Weighted order type
        let order_type = match self.type_dist.sample(&mut self.rng) {
            0 => OrderType::Limit,
            1 => OrderType::Market,
            _ => OrderType::Ioc,
        };

        let price = match order_type {
            OrderType::Market => None,
            OrderType::Limit | OrderType::Ioc => Some(self.sample_price()),
        };

        // Random size within range
        let quantity = self
            .rng
            .gen_range(self.config.min_quantity..=self.config.max_quantity);

        OrderIntent {
            order_id,
            side,
            order_type,
            price,
            quantity,
            submission_time,
        }
    }

    /// Sample a limit price: Gaussian, rounded to cents, floored at `min_price`.
    fn sample_price(&mut self) -> Price {
        let raw: f64 = self.price_dist.sample(&mut self.rng);
        let price = Decimal::from_f64(raw)
            .unwrap_or(self.config.min_price)
            .round_dp(2);
        let price = if price < self.config.min_price {
            self.config.min_price
        } else {
            price
        };
        Price::new(price)
    }
}
