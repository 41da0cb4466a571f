//! Latency injection
//!
//! Models the network delay between a trader submitting an order and the
//! engine receiving it. Delays are drawn uniformly from a configured range
//! with a deterministic seeded RNG, so two orders submitted back to back
//! can arrive in the opposite order.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use types::order::Order;

use crate::generator::OrderIntent;

/// Configuration for the latency injection stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Minimum injected delay in nanoseconds (inclusive)
    pub min_delay_ns: i64,
    /// Maximum injected delay in nanoseconds (inclusive)
    pub max_delay_ns: i64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        // 1 microsecond to 5 milliseconds
        Self {
            min_delay_ns: 1_000,
            max_delay_ns: 5_000_000,
        }
    }
}

/// Uniform latency model with deterministic seeded RNG.
pub struct LatencyModel {
    config: LatencyConfig,
    rng: ChaCha8Rng,
}

impl LatencyModel {
    /// Create a new latency model with a deterministic seed.
    pub fn new(config: LatencyConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw one submission-to-arrival delay.
    pub fn sample_delay_ns(&mut self) -> i64 {
        self.rng
            .gen_range(self.config.min_delay_ns..=self.config.max_delay_ns)
    }

    /// Deliver an intent to the engine: draw a delay and stamp the arrival.
    pub fn deliver(&mut self, intent: OrderIntent) -> Order {
        let arrival_time = intent.submission_time + self.sample_delay_ns();
        intent.arrive(arrival_time)
    }
}
