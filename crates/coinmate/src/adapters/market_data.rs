//! Public market data adapters (ticker, order book, trades)

use ferrox_core::{CurrencyPair, LimitOrder, OrderBook, Side, Ticker, Trade, TradeSortType, Trades};

use super::classify::type_to_side_or_none;
use super::{timestamp_from_millis, timestamp_from_secs};
use crate::dto::{OrderBookData, OrderBookEntry, TickerData, TransactionsEntry};
use crate::error::AdapterResult;
use crate::pair::parse_pair;

/// Adapt a ticker payload for `pair`
///
/// Coinmate stamps tickers in seconds; the normalized timestamp is the same
/// instant at millisecond resolution.
pub fn adapt_ticker(data: &TickerData, pair: &CurrencyPair) -> AdapterResult<Ticker> {
    Ok(Ticker {
        currency_pair: pair.clone(),
        last: data.last,
        bid: data.bid,
        ask: data.ask,
        high: data.high,
        low: data.low,
        volume: data.amount,
        open: data.open,
        percentage_change: data.change,
        timestamp: timestamp_from_secs(data.timestamp)?,
    })
}

/// One anonymous limit order per book level, all on `side`
pub fn build_limit_orders(
    entries: &[OrderBookEntry],
    side: Side,
    pair: &CurrencyPair,
) -> Vec<LimitOrder> {
    entries
        .iter()
        .map(|entry| LimitOrder::level(side, entry.amount, pair.clone(), entry.price))
        .collect()
}

/// Adapt an order book payload; Coinmate books carry no timestamp
pub fn adapt_order_book(data: &OrderBookData, pair: &CurrencyPair) -> OrderBook {
    let asks = build_limit_orders(&data.asks, Side::Ask, pair);
    let bids = build_limit_orders(&data.bids, Side::Bid, pair);

    OrderBook::new(None, asks, bids)
}

pub fn adapt_trade(entry: &TransactionsEntry) -> AdapterResult<Trade> {
    Ok(Trade {
        side: type_to_side_or_none(&entry.trade_type),
        original_amount: entry.amount,
        currency_pair: parse_pair(&entry.currency_pair)?,
        price: entry.price,
        timestamp: timestamp_from_millis(entry.timestamp)?,
        id: entry.transaction_id.clone(),
    })
}

/// Adapt the public trade tape
///
/// The collection is tagged `SortById` but not reordered; whether the venue
/// really returns trades in id order is unconfirmed. Use
/// `CoinmateAdapter::trades` to tag with a configured sort type instead.
pub fn adapt_trades(entries: &[TransactionsEntry]) -> AdapterResult<Trades> {
    adapt_trades_tagged(entries, TradeSortType::SortById)
}

pub(crate) fn adapt_trades_tagged(
    entries: &[TransactionsEntry],
    sort_type: TradeSortType,
) -> AdapterResult<Trades> {
    let trades = entries
        .iter()
        .map(adapt_trade)
        .collect::<AdapterResult<Vec<_>>>()?;

    Ok(Trades::new(trades, sort_type))
}
