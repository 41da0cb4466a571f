//! Crossing detection logic
//!
//! Determines whether an incoming order can execute against a resting price
//! level. Market orders cross unconditionally via their type tag; there is no
//! sentinel price anywhere.

use types::numeric::Price;
use types::order::{Order, OrderType, Side};

/// Check if an incoming order can execute at a resting level's price
///
/// - A buy crosses when its limit is at or above the level price
/// - A sell crosses when its limit is at or below the level price
/// - A market order crosses any level on the opposing side
pub fn crosses(incoming: &Order, level_price: Price) -> bool {
    if incoming.order_type == OrderType::Market {
        return true;
    }
    match (incoming.price, incoming.side) {
        (Some(limit), Side::Buy) => limit >= level_price,
        (Some(limit), Side::Sell) => limit <= level_price,
        // A priced type without a price fails validation before matching
        (None, _) => false,
    }
}
