use serde::{Deserialize, Serialize};

use super::LimitOrder;
use crate::values::{Price, Timestamp};

/// Snapshot of resting liquidity, one limit order per price level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Absent when the venue does not stamp its snapshots
    pub timestamp: Option<Timestamp>,
    pub asks: Vec<LimitOrder>,
    pub bids: Vec<LimitOrder>,
}

impl OrderBook {
    pub fn new(timestamp: Option<Timestamp>, asks: Vec<LimitOrder>, bids: Vec<LimitOrder>) -> Self {
        Self {
            timestamp,
            asks,
            bids,
        }
    }

    /// Lowest ask price, if any
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.iter().map(|o| o.limit_price).min()
    }

    /// Highest bid price, if any
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.iter().map(|o| o.limit_price).max()
    }
}
