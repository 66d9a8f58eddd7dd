//! Coinmate Adapter Layer - converts wire payloads to the ferrox domain model
//!
//! Every function here is pure: it reads a decoded payload and builds fresh
//! normalized records. Two classification policies coexist:
//! - lenient (public/user trade side, funding status, order status): unknown
//!   tokens degrade to `None` / `Unknown` / `Failed`
//! - strict (open order side, single order side, sort direction): unknown
//!   tokens abort the whole conversion with an error

pub(crate) mod account;
mod classify;
pub(crate) mod market_data;
mod trade;

pub use account::{adapt_funding_history, adapt_wallet};
pub use classify::{
    funding_status, funding_type, order_status, stop_order_side, strict_side,
    type_to_side_or_none,
};
pub use market_data::{adapt_order_book, adapt_ticker, adapt_trade, adapt_trades, build_limit_orders};
pub use trade::{
    SortOrder, adapt_open_orders, adapt_orders, adapt_sort_order, adapt_stop_orders,
    adapt_trade_history, adapt_transaction_history,
};

use chrono::DateTime;
use ferrox_core::Timestamp;

use crate::error::{AdapterError, AdapterResult};

/// Convert a millisecond epoch value from the wire
pub(crate) fn timestamp_from_millis(millis: i64) -> AdapterResult<Timestamp> {
    DateTime::from_timestamp_millis(millis).ok_or(AdapterError::InvalidTimestamp(millis))
}

/// Convert a second epoch value from the wire
pub(crate) fn timestamp_from_secs(secs: i64) -> AdapterResult<Timestamp> {
    secs.checked_mul(1000)
        .ok_or(AdapterError::InvalidTimestamp(secs))
        .and_then(timestamp_from_millis)
}
