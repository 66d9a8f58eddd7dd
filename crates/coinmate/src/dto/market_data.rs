//! Public market data payloads

use rust_decimal::Decimal;
use serde::Deserialize;

use super::CoinmateResponse;

pub type CoinmateTicker = CoinmateResponse<TickerData>;
pub type CoinmateOrderBook = CoinmateResponse<OrderBookData>;
pub type CoinmateTransactions = CoinmateResponse<Vec<TransactionsEntry>>;

/// `/ticker` payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TickerData {
    pub last: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    /// Traded volume in the base currency
    pub amount: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
    /// Percentage change over the last 24h
    pub change: Decimal,
    pub open: Decimal,
    /// Seconds since epoch
    pub timestamp: i64,
}

/// `/orderBook` payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderBookData {
    pub asks: Vec<OrderBookEntry>,
    pub bids: Vec<OrderBookEntry>,
}

/// Single price level
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderBookEntry {
    pub price: Decimal,
    pub amount: Decimal,
}

/// `/transactions` entry (public trade)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsEntry {
    /// Milliseconds since epoch
    pub timestamp: i64,
    pub transaction_id: String,
    pub price: Decimal,
    pub amount: Decimal,
    pub currency_pair: String,
    pub trade_type: String,
}
