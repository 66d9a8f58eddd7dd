//! Configured adapter facade
//!
//! Wraps the free adapter functions with an `AdapterConfig`: the public trade
//! tape gets the configured sort tag, and currencies that reach the account
//! views are checked against the configured allow-list.

use ferrox_core::{FundingRecord, Trades, Wallet};
use log::debug;

use crate::adapters::{account, market_data};
use crate::config::AdapterConfig;
use crate::dto::{BalanceData, TransactionHistoryEntry, TransactionsEntry};
use crate::error::AdapterResult;

#[derive(Debug, Clone, Default)]
pub struct CoinmateAdapter {
    config: AdapterConfig,
}

impl CoinmateAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Public trade tape tagged with the configured sort type
    pub fn trades(&self, entries: &[TransactionsEntry]) -> AdapterResult<Trades> {
        debug!(
            "Adapting {} public trades as {:?}",
            entries.len(),
            self.config.public_trade_sort
        );
        market_data::adapt_trades_tagged(entries, self.config.public_trade_sort)
    }

    /// Wallet with every currency checked against the allow-list
    pub fn wallet(&self, data: &BalanceData) -> AdapterResult<Wallet> {
        account::adapt_wallet_with(data, |code| self.config.resolve_currency(code))
    }

    /// Funding history with every currency checked against the allow-list
    pub fn funding_history(
        &self,
        entries: &[TransactionHistoryEntry],
    ) -> AdapterResult<Vec<FundingRecord>> {
        account::adapt_funding_history_with(entries, |code| self.config.resolve_currency(code))
    }
}

impl From<AdapterConfig> for CoinmateAdapter {
    fn from(config: AdapterConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::BalanceEntry;
    use crate::error::AdapterError;
    use ferrox_core::{Currency, TradeSortType};
    use rust_decimal_macros::dec;

    fn balances(codes: &[&str]) -> BalanceData {
        codes
            .iter()
            .map(|code| {
                (
                    code.to_string(),
                    BalanceEntry {
                        currency: code.to_uppercase(),
                        balance: dec!(1),
                        reserved: dec!(0),
                        available: dec!(1),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_configured_trade_sort() {
        let adapter = CoinmateAdapter::new(AdapterConfig {
            public_trade_sort: TradeSortType::SortByTimestamp,
            ..Default::default()
        });
        let trades = adapter.trades(&[]).unwrap();
        assert_eq!(trades.sort_type, TradeSortType::SortByTimestamp);
    }

    #[test]
    fn test_default_adapter_matches_free_functions() {
        let adapter = CoinmateAdapter::default();
        let data = balances(&["btc", "eur"]);
        assert_eq!(adapter.wallet(&data).unwrap(), crate::adapters::adapt_wallet(&data));
    }

    #[test]
    fn test_wallet_allow_list() {
        let adapter = CoinmateAdapter::from(AdapterConfig {
            known_currencies: vec!["BTC".to_string(), "EUR".to_string()],
            ..Default::default()
        });

        let wallet = adapter.wallet(&balances(&["btc", "eur"])).unwrap();
        assert!(wallet.balance(&Currency::new("EUR")).is_some());

        assert_eq!(
            adapter.wallet(&balances(&["btc", "xyz"])),
            Err(AdapterError::UnknownCurrency("XYZ".to_string()))
        );
    }
}
