use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;
use crate::currency::{Currency, CurrencyPair};
use crate::values::{Amount, Price, Timestamp};

/// Ordering a trade collection claims to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TradeSortType {
    #[default]
    SortById,
    SortByTimestamp,
}

/// Public trade printed on the venue's tape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Aggressor side; `None` when the venue reports a type we cannot classify
    pub side: Option<Side>,
    pub original_amount: Amount,
    pub currency_pair: CurrencyPair,
    pub price: Price,
    pub timestamp: Timestamp,
    pub id: String,
}

impl Trade {
    /// Returns the notional value of the trade (price * amount), `None` on overflow
    pub fn notional(&self) -> Option<Decimal> {
        self.price.checked_mul(self.original_amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trades {
    pub trades: Vec<Trade>,
    pub sort_type: TradeSortType,
}

impl Trades {
    pub fn new(trades: Vec<Trade>, sort_type: TradeSortType) -> Self {
        Self { trades, sort_type }
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

/// Trade executed by the account owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrade {
    pub side: Option<Side>,
    pub original_amount: Amount,
    pub currency_pair: CurrencyPair,
    pub price: Price,
    pub timestamp: Timestamp,
    pub id: String,
    pub order_id: String,
    pub fee_amount: Decimal,
    pub fee_currency: Currency,
}

impl UserTrade {
    pub fn notional(&self) -> Option<Decimal> {
        self.price.checked_mul(self.original_amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrades {
    pub trades: Vec<UserTrade>,
    pub sort_type: TradeSortType,
}

impl UserTrades {
    pub fn new(trades: Vec<UserTrade>, sort_type: TradeSortType) -> Self {
        Self { trades, sort_type }
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    /// Sum of fees charged in `currency`, `None` on overflow
    pub fn total_fees(&self, currency: &Currency) -> Option<Decimal> {
        self.trades
            .iter()
            .filter(|t| &t.fee_currency == currency)
            .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(t.fee_amount))
    }
}
