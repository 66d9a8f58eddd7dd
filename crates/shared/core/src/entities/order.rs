use serde::{Deserialize, Serialize};

use super::{OrderStatus, Side};
use crate::currency::CurrencyPair;
use crate::values::{Amount, Price, Timestamp};

/// Order resting at a fixed price
///
/// Order book levels are represented as limit orders without id or timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrder {
    pub side: Side,
    pub original_amount: Amount,
    pub currency_pair: CurrencyPair,
    pub id: Option<String>,
    pub timestamp: Option<Timestamp>,
    pub limit_price: Price,
}

impl LimitOrder {
    /// Anonymous price level (no id, no timestamp)
    pub fn level(
        side: Side,
        original_amount: Amount,
        currency_pair: CurrencyPair,
        limit_price: Price,
    ) -> Self {
        Self {
            side,
            original_amount,
            currency_pair,
            id: None,
            timestamp: None,
            limit_price,
        }
    }

    /// Returns the notional value of the order (price * amount), `None` on overflow
    pub fn notional(&self) -> Option<Price> {
        self.limit_price.checked_mul(self.original_amount)
    }
}

/// Limit order that activates once the market reaches `stop_price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopOrder {
    pub side: Side,
    pub original_amount: Amount,
    pub currency_pair: CurrencyPair,
    pub id: String,
    pub timestamp: Timestamp,
    /// Trigger price, as reported by the venue
    pub stop_price: Option<Price>,
    /// Price the order rests at once triggered
    pub limit_price: Price,
}

/// Order executed against the book at whatever price is available
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrder {
    pub side: Side,
    pub original_amount: Amount,
    /// Not every venue echoes the market in order detail responses
    pub currency_pair: Option<CurrencyPair>,
    pub id: String,
    pub timestamp: Timestamp,
    pub average_price: Option<Price>,
    /// Amount filled so far
    pub cumulative_amount: Amount,
    pub status: OrderStatus,
}

impl MarketOrder {
    /// Returns the amount still open, `None` on overflow
    pub fn remaining_amount(&self) -> Option<Amount> {
        self.original_amount.checked_sub(self.cumulative_amount)
    }
}

/// Any order kind an adapter can produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Order {
    Market(MarketOrder),
    Limit(LimitOrder),
    Stop(StopOrder),
}

impl Order {
    pub fn side(&self) -> Side {
        match self {
            Order::Market(o) => o.side,
            Order::Limit(o) => o.side,
            Order::Stop(o) => o.side,
        }
    }

    pub fn original_amount(&self) -> Amount {
        match self {
            Order::Market(o) => o.original_amount,
            Order::Limit(o) => o.original_amount,
            Order::Stop(o) => o.original_amount,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Order::Market(o) => Some(&o.id),
            Order::Limit(o) => o.id.as_deref(),
            Order::Stop(o) => Some(&o.id),
        }
    }
}

impl From<LimitOrder> for Order {
    fn from(order: LimitOrder) -> Self {
        Order::Limit(order)
    }
}

impl From<StopOrder> for Order {
    fn from(order: StopOrder) -> Self {
        Order::Stop(order)
    }
}

impl From<MarketOrder> for Order {
    fn from(order: MarketOrder) -> Self {
        Order::Market(order)
    }
}
