//! Matching Engine
//!
//! Order matching for a single instrument's continuous double auction,
//! implementing strict price-time priority.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced
//! - Deterministic matching (same inputs → same outputs)
//! - Conservation of quantity (filled + rested + discarded = submitted)
//! - The book never holds a crossed market or an empty price level

pub mod book;
pub mod engine;
pub mod matching;

pub use book::OrderBook;
pub use engine::{MatchingEngine, OrderOutcome};
