//! Market Session Simulation Harness
//!
//! Drives the matching engine with randomized order flow under injected
//! delivery latency, then reduces the run into summary statistics and a
//! JSON report. The whole pipeline is deterministic for a given seed.
//!
//! # Modules
//! - `generator` — Seeded random order generation
//! - `latency` — Submission-to-arrival delay injection
//! - `session` — End-to-end session driver
//! - `summary` — Post-session statistics
//! - `report` — JSON report export

pub mod generator;
pub mod latency;
pub mod report;
pub mod session;
pub mod summary;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
