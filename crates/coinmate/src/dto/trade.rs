//! Private trading payloads

use rust_decimal::Decimal;
use serde::Deserialize;

use super::CoinmateResponse;

pub type CoinmateTransactionHistory = CoinmateResponse<Vec<TransactionHistoryEntry>>;
pub type CoinmateTradeHistory = CoinmateResponse<Vec<TradeHistoryEntry>>;
pub type CoinmateOpenOrders = CoinmateResponse<Vec<OpenOrderEntry>>;
pub type CoinmateOrders = CoinmateResponse<OrderDetail>;

/// `/transactionHistory` entry
///
/// Covers trades as well as deposits, withdrawals, vouchers and rewards;
/// `transaction_type` tells them apart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryEntry {
    pub transaction_id: u64,
    /// Milliseconds since epoch
    pub timestamp: i64,
    pub transaction_type: String,
    pub amount: Decimal,
    pub amount_currency: String,
    pub price: Decimal,
    pub price_currency: String,
    pub fee: Decimal,
    pub fee_currency: String,
    /// Free text; deposits carry `"<CURRENCY>: <tx hash>"` here
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub order_id: u64,
}

/// `/tradeHistory` entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeHistoryEntry {
    pub transaction_id: u64,
    /// Milliseconds since epoch
    pub created_timestamp: i64,
    pub currency_pair: String,
    #[serde(rename = "type")]
    pub trade_type: String,
    #[serde(default)]
    pub order_type: Option<String>,
    pub order_id: u64,
    pub amount: Decimal,
    pub price: Decimal,
    pub fee: Decimal,
    /// MAKER or TAKER
    #[serde(default)]
    pub fee_type: Option<String>,
}

/// `/openOrders` entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenOrderEntry {
    pub id: u64,
    /// Milliseconds since epoch
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub order_type: String,
    pub currency_pair: String,
    pub price: Decimal,
    pub amount: Decimal,
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    /// LIMIT, LIMIT_STOP, ...
    pub order_trade_type: String,
}

/// `/orderById` payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: u64,
    /// Milliseconds since epoch
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    pub remaining_amount: Decimal,
    pub original_amount: Decimal,
    pub status: String,
    #[serde(default)]
    pub avg_price: Option<Decimal>,
    #[serde(default)]
    pub order_trade_type: Option<String>,
    #[serde(default)]
    pub stop_price: Option<Decimal>,
}
