//! Types library for the market simulator
//!
//! This library provides the core type definitions shared by the matching
//! engine and the simulation harness, ensuring type safety and deterministic
//! behavior.
//!
//! # Modules
//! - `ids`: Unique identifiers (OrderId)
//! - `numeric`: Fixed-point numeric types (Price, Quantity)
//! - `order`: Order types and validation
//! - `trade`: Trade execution records
//! - `errors`: Error taxonomy

// Public modules
pub mod errors;
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
}
