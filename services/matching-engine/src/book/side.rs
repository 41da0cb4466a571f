//! Generic book side with comparator-driven price ordering
//!
//! One container serves both sides of the book. Bids wrap their key in
//! `Reverse` so the BTreeMap's ascending iteration is best-price-first for
//! either side; matching and depth snapshots never branch on side.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};
use types::order::Order;

use super::price_level::PriceLevel;

/// Maps a price onto the side's map key
///
/// Ascending key order must equal best-price-first order for the side.
pub trait PriceKey {
    /// Ordered key type stored in the map
    type Key: Ord + Copy + std::fmt::Debug;

    /// Wrap a price into the side's key
    fn key(price: Price) -> Self::Key;

    /// Recover the price from a key
    fn price(key: &Self::Key) -> Price;
}

/// Key scheme for the buy side: highest price first
#[derive(Debug, Clone, Copy)]
pub struct BidKey;

impl PriceKey for BidKey {
    type Key = Reverse<Price>;

    fn key(price: Price) -> Self::Key {
        Reverse(price)
    }

    fn price(key: &Self::Key) -> Price {
        key.0
    }
}

/// Key scheme for the sell side: lowest price first
#[derive(Debug, Clone, Copy)]
pub struct AskKey;

impl PriceKey for AskKey {
    type Key = Price;

    fn key(price: Price) -> Self::Key {
        price
    }

    fn price(key: &Self::Key) -> Price {
        *key
    }
}

/// Buy side of the book
pub type BidSide = BookSide<BidKey>;

/// Sell side of the book
pub type AskSide = BookSide<AskKey>;

/// One side of the order book
///
/// Price levels sorted by the side's key scheme; BTreeMap keeps iteration
/// deterministic. Exhausted levels are removed by the matching loop, so an
/// existing level is never empty.
#[derive(Debug, Clone)]
pub struct BookSide<K: PriceKey> {
    levels: BTreeMap<K::Key, PriceLevel>,
}

impl<K: PriceKey> BookSide<K> {
    /// Create a new empty side
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Insert a resting order at its price level
    pub fn insert(&mut self, price: Price, order: Order) {
        self.levels
            .entry(K::key(price))
            .or_insert_with(PriceLevel::new)
            .push_back(order);
    }

    /// Get the best price on this side
    pub fn best_price(&self) -> Option<Price> {
        self.levels.keys().next().map(K::price)
    }

    /// Get the best price level with its price
    pub(crate) fn best_level_mut(&mut self) -> Option<(Price, &mut PriceLevel)> {
        self.levels
            .iter_mut()
            .next()
            .map(|(key, level)| (K::price(key), level))
    }

    /// Drop the level at `price` once matching has consumed it
    pub(crate) fn remove_level(&mut self, price: Price) {
        self.levels.remove(&K::key(price));
    }

    /// Get all levels as (price, total quantity), best price first
    pub fn levels(&self) -> Vec<(Price, Quantity)> {
        self.levels
            .iter()
            .map(|(key, level)| (K::price(key), level.total_quantity()))
            .collect()
    }

    /// Total quantity resting on this side
    pub fn depth(&self) -> Quantity {
        self.levels.values().map(|l| l.total_quantity()).sum()
    }

    /// Number of resting orders on this side
    pub fn order_count(&self) -> usize {
        self.levels.values().map(|l| l.order_count()).sum()
    }

    /// Iterate all resting orders, best level first, FIFO within each level
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.levels.values().flat_map(|l| l.iter())
    }

    /// Check if this side has no resting orders
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

impl<K: PriceKey> Default for BookSide<K> {
    fn default() -> Self {
        Self::new()
    }
}
