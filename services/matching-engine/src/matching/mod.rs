//! Matching logic module
//!
//! Crossing detection and trade recording for the price-time priority
//! matching loop.

pub mod crossing;
pub mod trade_log;

pub use crossing::crosses;
pub use trade_log::TradeLog;
