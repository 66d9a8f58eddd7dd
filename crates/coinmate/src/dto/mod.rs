//! Coinmate wire types
//!
//! Shapes of the REST response payloads, decoded with serde. Field names
//! follow the exchange (camelCase); monetary values are `Decimal` so no
//! precision is lost between the wire and the normalized model.

pub mod account;
pub mod market_data;
pub mod response;
pub mod trade;

pub use account::{BalanceData, BalanceEntry, CoinmateBalance};
pub use market_data::{
    CoinmateOrderBook, CoinmateTicker, CoinmateTransactions, OrderBookData, OrderBookEntry,
    TickerData, TransactionsEntry,
};
pub use response::CoinmateResponse;
pub use trade::{
    CoinmateOpenOrders, CoinmateOrders, CoinmateTradeHistory, CoinmateTransactionHistory,
    OpenOrderEntry, OrderDetail, TradeHistoryEntry, TransactionHistoryEntry,
};
