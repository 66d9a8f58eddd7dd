//! Private account payloads

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

use super::CoinmateResponse;

/// Balances keyed by lower-case currency code (`"btc"`, `"eur"`, ...)
pub type BalanceData = BTreeMap<String, BalanceEntry>;

pub type CoinmateBalance = CoinmateResponse<BalanceData>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalanceEntry {
    pub currency: String,
    pub balance: Decimal,
    pub reserved: Decimal,
    pub available: Decimal,
}
