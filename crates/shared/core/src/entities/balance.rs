use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::currency::Currency;

/// Holdings of a single currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub currency: Currency,
    pub total: Decimal,
    /// Free to trade or withdraw
    pub available: Decimal,
    /// Locked in open orders or pending withdrawals
    pub reserved: Decimal,
}

impl Balance {
    pub fn new(currency: Currency, total: Decimal, available: Decimal, reserved: Decimal) -> Self {
        Self {
            currency,
            total,
            available,
            reserved,
        }
    }
}

/// Account balances keyed by currency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    balances: BTreeMap<Currency, Balance>,
}

impl Wallet {
    pub fn from_balances(balances: impl IntoIterator<Item = Balance>) -> Self {
        Self {
            balances: balances
                .into_iter()
                .map(|b| (b.currency.clone(), b))
                .collect(),
        }
    }

    pub fn balance(&self, currency: &Currency) -> Option<&Balance> {
        self.balances.get(currency)
    }

    pub fn balances(&self) -> impl Iterator<Item = &Balance> {
        self.balances.values()
    }

    pub fn currencies(&self) -> impl Iterator<Item = &Currency> {
        self.balances.keys()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
