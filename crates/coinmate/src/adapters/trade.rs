//! Private trading adapters (user trades, open orders, order detail)

use ferrox_core::{
    Currency, LimitOrder, MarketOrder, Order, StopOrder, TradeSortType, UserTrade, UserTrades,
};
use std::fmt;
use std::str::FromStr;

use super::classify::{order_status, stop_order_side, strict_side, type_to_side_or_none};
use super::timestamp_from_millis;
use crate::dto::{OpenOrderEntry, OrderDetail, TradeHistoryEntry, TransactionHistoryEntry};
use crate::error::{AdapterError, AdapterResult};
use crate::pair::parse_pair;

const LIMIT_STOP: &str = "LIMIT_STOP";

/// Every row of the transaction history as a user trade
///
/// Funding rows come through too, with no side.
pub fn adapt_transaction_history(entries: &[TransactionHistoryEntry]) -> AdapterResult<UserTrades> {
    let trades = entries
        .iter()
        .map(|entry| {
            Ok(UserTrade {
                side: type_to_side_or_none(&entry.transaction_type),
                original_amount: entry.amount,
                currency_pair: parse_pair(&format!(
                    "{}_{}",
                    entry.amount_currency, entry.price_currency
                ))?,
                price: entry.price,
                timestamp: timestamp_from_millis(entry.timestamp)?,
                id: entry.transaction_id.to_string(),
                order_id: entry.order_id.to_string(),
                fee_amount: entry.fee,
                fee_currency: Currency::new(&entry.fee_currency),
            })
        })
        .collect::<AdapterResult<Vec<_>>>()?;

    Ok(UserTrades::new(trades, TradeSortType::SortByTimestamp))
}

/// Trade history rows as user trades
///
/// The payload does not name the fee currency; fees are assumed to be
/// charged in the counter currency of the pair.
pub fn adapt_trade_history(entries: &[TradeHistoryEntry]) -> AdapterResult<UserTrades> {
    let trades = entries
        .iter()
        .map(|entry| {
            let currency_pair = parse_pair(&entry.currency_pair)?;
            Ok(UserTrade {
                side: type_to_side_or_none(&entry.trade_type),
                original_amount: entry.amount,
                fee_currency: currency_pair.counter.clone(),
                currency_pair,
                price: entry.price,
                timestamp: timestamp_from_millis(entry.created_timestamp)?,
                id: entry.transaction_id.to_string(),
                order_id: entry.order_id.to_string(),
                fee_amount: entry.fee,
            })
        })
        .collect::<AdapterResult<Vec<_>>>()?;

    Ok(UserTrades::new(trades, TradeSortType::SortByTimestamp))
}

/// Open orders as limit orders; fails on the first order with an unknown type
pub fn adapt_open_orders(entries: &[OpenOrderEntry]) -> AdapterResult<Vec<LimitOrder>> {
    entries
        .iter()
        .map(|entry| {
            Ok(LimitOrder {
                side: strict_side(&entry.order_type)?,
                original_amount: entry.amount,
                currency_pair: parse_pair(&entry.currency_pair)?,
                id: Some(entry.id.to_string()),
                timestamp: Some(timestamp_from_millis(entry.timestamp)?),
                limit_price: entry.price,
            })
        })
        .collect()
}

/// The `LIMIT_STOP` subset of the open orders
pub fn adapt_stop_orders(entries: &[OpenOrderEntry]) -> AdapterResult<Vec<StopOrder>> {
    entries
        .iter()
        .filter(|entry| entry.order_trade_type == LIMIT_STOP)
        .map(|entry| {
            Ok(StopOrder {
                side: stop_order_side(&entry.order_type),
                original_amount: entry.amount,
                currency_pair: parse_pair(&entry.currency_pair)?,
                id: entry.id.to_string(),
                timestamp: timestamp_from_millis(entry.timestamp)?,
                stop_price: entry.stop_price,
                limit_price: entry.price,
            })
        })
        .collect()
}

/// Sort direction accepted by the history endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(AdapterError::InvalidArgument(format!(
                "sort order must be asc or desc, got {s:?}"
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(adapt_sort_order(*self))
    }
}

/// Request parameter value for a sort direction
pub fn adapt_sort_order(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

/// Order detail as a single market order
///
/// The filled amount is derived as original minus remaining.
// TODO: use `order_trade_type` to return limit and stop orders as such
pub fn adapt_orders(detail: &OrderDetail) -> AdapterResult<Vec<Order>> {
    let cumulative_amount = detail
        .original_amount
        .checked_sub(detail.remaining_amount)
        .ok_or_else(|| {
            AdapterError::Overflow(format!(
                "order {}: {} - {}",
                detail.id, detail.original_amount, detail.remaining_amount
            ))
        })?;

    let order = MarketOrder {
        side: strict_side(&detail.order_type)?,
        original_amount: detail.original_amount,
        currency_pair: None,
        id: detail.id.to_string(),
        timestamp: timestamp_from_millis(detail.timestamp)?,
        average_price: detail.avg_price,
        cumulative_amount,
        status: order_status(&detail.status),
    };

    Ok(vec![Order::Market(order)])
}
