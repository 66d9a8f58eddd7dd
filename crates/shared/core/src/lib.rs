//! Ferrox Core Domain
//!
//! Normalized, exchange-agnostic trading types. Exchange adapters convert
//! their wire responses into these records; downstream consumers never see
//! which venue produced them.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod currency;
pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use currency::{Currency, CurrencyPair, PairParseError};
pub use entities::{
    // Account
    Balance,
    // Funding
    FundingRecord,
    FundingStatus,
    FundingType,
    // Orders
    LimitOrder,
    MarketOrder,
    // Market data
    OrderBook,
    Order,
    OrderStatus,
    Side,
    StopOrder,
    Ticker,
    // Trades
    Trade,
    TradeSortType,
    Trades,
    UserTrade,
    UserTrades,
    Wallet,
};
pub use values::{Amount, Price, Timestamp};
