//! Session summary statistics
//!
//! Reduces a finished session (trade log, per-order records, final book)
//! into the aggregate figures the session report carries: totals, VWAP,
//! fill rate, price range, final spread, latency histograms, and a full
//! book dump.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use types::numeric::{Price, Quantity};

use crate::session::SessionResult;

/// Latency histogram bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyBucket {
    pub label: String,
    pub lower_ns: u64,
    pub upper_ns: u64,
    pub count: u64,
}

/// Latency distribution for one partition of the order flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyProfile {
    pub count: u64,
    pub mean_ms: f64,
    pub buckets: Vec<LatencyBucket>,
}

impl LatencyProfile {
    /// Build a profile from raw nanosecond samples.
    pub fn from_samples(samples_ns: &[i64]) -> Self {
        let mut buckets = default_buckets();
        let mut total_ns: i128 = 0;
        for &ns in samples_ns {
            total_ns += ns as i128;
            record_latency(&mut buckets, ns.max(0) as u64);
        }

        let count = samples_ns.len() as u64;
        let mean_ms = if count == 0 {
            0.0
        } else {
            total_ns as f64 / count as f64 / 1_000_000.0
        };

        Self {
            count,
            mean_ms,
            buckets,
        }
    }
}

/// Latency analysis split by whether the order traded on arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyAnalysis {
    /// Orders that executed at least one trade as taker
    pub filled: LatencyProfile,
    /// Orders that arrived without trading
    pub unfilled: LatencyProfile,
}

/// Minimum and maximum trade prices over the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

/// One aggregated price level of the final book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: Price,
    pub quantity: Quantity,
}

/// Final book state per side, best price first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDump {
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

/// Aggregated statistics for one trading session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_orders: u64,
    pub total_trades: u64,
    /// Total quantity traded
    pub total_volume: Quantity,
    /// Share of orders that traded as taker, in percent
    pub fill_rate_pct: f64,
    /// Volume-weighted average trade price, None when nothing traded
    pub vwap: Option<Decimal>,
    pub price_range: Option<PriceRange>,
    pub best_bid: Option<Price>,
    pub best_ask: Option<Price>,
    /// Best ask minus best bid, None when either side is empty
    pub spread: Option<Decimal>,
    pub latency: LatencyAnalysis,
    pub book: BookDump,
}

impl Summary {
    /// Compute the summary from a finished session.
    pub fn from_session(result: &SessionResult) -> Self {
        let trades = result.engine.trades();
        let book = result.engine.book();

        let total_orders = result.records.len() as u64;
        let total_trades = trades.len() as u64;
        let total_volume: Quantity = trades.iter().map(|trade| trade.quantity).sum();

        let mut filled_ns = Vec::new();
        let mut unfilled_ns = Vec::new();
        for record in &result.records {
            if record.outcome.filled_quantity() > 0 {
                filled_ns.push(record.latency_ns);
            } else {
                unfilled_ns.push(record.latency_ns);
            }
        }

        let fill_rate_pct = if total_orders == 0 {
            0.0
        } else {
            round2(filled_ns.len() as f64 * 100.0 / total_orders as f64)
        };

        let vwap = if total_volume == 0 {
            None
        } else {
            let notional: Decimal = trades.iter().map(|trade| trade.notional()).sum();
            Some((notional / Decimal::from(total_volume)).round_dp(2))
        };

        let price_range = trades.iter().map(|trade| trade.price).fold(
            None,
            |range: Option<PriceRange>, price| {
                Some(match range {
                    None => PriceRange {
                        min: price,
                        max: price,
                    },
                    Some(r) => PriceRange {
                        min: r.min.min(price),
                        max: r.max.max(price),
                    },
                })
            },
        );

        let book_dump = BookDump {
            bids: book
                .bid_levels()
                .into_iter()
                .map(|(price, quantity)| BookLevel { price, quantity })
                .collect(),
            asks: book
                .ask_levels()
                .into_iter()
                .map(|(price, quantity)| BookLevel { price, quantity })
                .collect(),
        };

        Self {
            total_orders,
            total_trades,
            total_volume,
            fill_rate_pct,
            vwap,
            price_range,
            best_bid: book.best_bid(),
            best_ask: book.best_ask(),
            spread: book.spread(),
            latency: LatencyAnalysis {
                filled: LatencyProfile::from_samples(&filled_ns),
                unfilled: LatencyProfile::from_samples(&unfilled_ns),
            },
            book: book_dump,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Trading Session Summary ---")?;
        writeln!(f, "Total Orders Processed: {}", self.total_orders)?;
        writeln!(f, "Total Trades Executed: {}", self.total_trades)?;

        if self.total_trades == 0 {
            return write!(f, "No trades were executed.");
        }

        writeln!(f, "Total Volume Traded: {}", self.total_volume)?;
        if let Some(vwap) = self.vwap {
            writeln!(f, "VWAP: {vwap:.2}")?;
        }
        writeln!(f, "Fill Rate: {:.2}%", self.fill_rate_pct)?;

        if let (Some(spread), Some(bid), Some(ask)) = (self.spread, self.best_bid, self.best_ask) {
            writeln!(f, "Final Spread: {spread:.2} (Bid: {bid}, Ask: {ask})")?;
        }
        write!(f, "-----------------------------")
    }
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Record one latency sample into the histogram.
fn record_latency(buckets: &mut [LatencyBucket], latency_ns: u64) {
    for bucket in buckets.iter_mut() {
        if latency_ns >= bucket.lower_ns && latency_ns < bucket.upper_ns {
            bucket.count += 1;
            return;
        }
    }
    // Overflow bucket (last)
    if let Some(last) = buckets.last_mut() {
        last.count += 1;
    }
}

/// Default latency histogram buckets.
fn default_buckets() -> Vec<LatencyBucket> {
    vec![
        LatencyBucket { label: "<1μs".into(), lower_ns: 0, upper_ns: 1_000, count: 0 },
        LatencyBucket { label: "1-10μs".into(), lower_ns: 1_000, upper_ns: 10_000, count: 0 },
        LatencyBucket { label: "10-100μs".into(), lower_ns: 10_000, upper_ns: 100_000, count: 0 },
        LatencyBucket { label: "100-500μs".into(), lower_ns: 100_000, upper_ns: 500_000, count: 0 },
        LatencyBucket { label: "500μs-1ms".into(), lower_ns: 500_000, upper_ns: 1_000_000, count: 0 },
        LatencyBucket { label: "1-10ms".into(), lower_ns: 1_000_000, upper_ns: 10_000_000, count: 0 },
        LatencyBucket { label: ">10ms".into(), lower_ns: 10_000_000, upper_ns: u64::MAX, count: 0 },
    ]
}
