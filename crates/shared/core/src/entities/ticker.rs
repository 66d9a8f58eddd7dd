use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyPair;
use crate::values::{Amount, Price, Timestamp};

/// 24h market summary for one currency pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub currency_pair: CurrencyPair,
    pub last: Price,
    pub bid: Price,
    pub ask: Price,
    pub high: Price,
    pub low: Price,
    /// Traded base amount over the window
    pub volume: Amount,
    pub open: Price,
    /// Price change over the window, in percent
    pub percentage_change: Decimal,
    pub timestamp: Timestamp,
}

impl Ticker {
    /// Mid price between best bid and best ask, `None` on overflow
    pub fn mid(&self) -> Option<Price> {
        self.bid
            .checked_add(self.ask)
            .and_then(|sum| sum.checked_div(Decimal::TWO))
    }

    /// Best ask minus best bid, `None` on overflow
    pub fn spread(&self) -> Option<Price> {
        self.ask.checked_sub(self.bid)
    }
}
