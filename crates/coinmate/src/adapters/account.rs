//! Account adapters (wallet, funding history)

use ferrox_core::{Balance, Currency, FundingRecord, Wallet};
use log::debug;

use super::classify::{funding_status, funding_type};
use super::timestamp_from_millis;
use crate::dto::{BalanceData, BalanceEntry, TransactionHistoryEntry};
use crate::error::AdapterResult;

/// One balance per currency key, amounts copied verbatim
pub fn adapt_wallet(data: &BalanceData) -> Wallet {
    Wallet::from_balances(
        data.iter()
            .map(|(code, entry)| adapt_balance(Currency::new(code), entry)),
    )
}

/// Like `adapt_wallet`, with currency codes passed through `resolve`
pub(crate) fn adapt_wallet_with<F>(data: &BalanceData, resolve: F) -> AdapterResult<Wallet>
where
    F: Fn(&str) -> AdapterResult<Currency>,
{
    let balances = data
        .iter()
        .map(|(code, entry)| Ok(adapt_balance(resolve(code)?, entry)))
        .collect::<AdapterResult<Vec<_>>>()?;

    Ok(Wallet::from_balances(balances))
}

fn adapt_balance(currency: Currency, entry: &BalanceEntry) -> Balance {
    Balance::new(currency, entry.balance, entry.available, entry.reserved)
}

/// Extract deposits and withdrawals from the transaction history
///
/// Trading rows are skipped. For `DEPOSIT` rows the description is
/// `"<fee currency>: <tx hash>"`; the hash becomes the external id.
pub fn adapt_funding_history(
    entries: &[TransactionHistoryEntry],
) -> AdapterResult<Vec<FundingRecord>> {
    adapt_funding_history_with(entries, |code| Ok(Currency::new(code)))
}

pub(crate) fn adapt_funding_history_with<F>(
    entries: &[TransactionHistoryEntry],
    resolve: F,
) -> AdapterResult<Vec<FundingRecord>>
where
    F: Fn(&str) -> AdapterResult<Currency>,
{
    let mut records = Vec::new();

    for entry in entries {
        let Some(kind) = funding_type(&entry.transaction_type) else {
            debug!(
                "Skipping non-funding transaction {} ({})",
                entry.transaction_id, entry.transaction_type
            );
            continue;
        };

        records.push(FundingRecord {
            timestamp: timestamp_from_millis(entry.timestamp)?,
            currency: resolve(&entry.amount_currency)?,
            amount: entry.amount,
            internal_id: entry.transaction_id.to_string(),
            external_id: deposit_tx_hash(entry),
            kind,
            status: funding_status(&entry.status),
            fee: entry.fee,
            description: entry.description.clone(),
        });
    }

    Ok(records)
}

fn deposit_tx_hash(entry: &TransactionHistoryEntry) -> Option<String> {
    if entry.transaction_type != "DEPOSIT" {
        return None;
    }
    let prefix = format!("{}: ", entry.fee_currency);
    entry
        .description
        .as_deref()?
        .strip_prefix(prefix.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrox_core::{FundingStatus, FundingType};
    use rust_decimal_macros::dec;

    fn history_entry(
        transaction_type: &str,
        status: &str,
        description: Option<&str>,
    ) -> TransactionHistoryEntry {
        TransactionHistoryEntry {
            transaction_id: 1001,
            timestamp: 1_690_000_000_000,
            transaction_type: transaction_type.to_string(),
            amount: dec!(0.05),
            amount_currency: "BTC".to_string(),
            price: dec!(0),
            price_currency: "BTC".to_string(),
            fee: dec!(0.0005),
            fee_currency: "BTC".to_string(),
            description: description.map(str::to_string),
            status: status.to_string(),
            order_id: 0,
        }
    }

    #[test]
    fn test_adapt_wallet_uppercases_codes() {
        let mut data = BalanceData::new();
        data.insert(
            "btc".to_string(),
            BalanceEntry {
                currency: "BTC".to_string(),
                balance: dec!(1.25),
                reserved: dec!(0.25),
                available: dec!(1.0),
            },
        );
        data.insert(
            "czk".to_string(),
            BalanceEntry {
                currency: "CZK".to_string(),
                balance: dec!(0),
                reserved: dec!(0),
                available: dec!(0),
            },
        );

        let wallet = adapt_wallet(&data);

        assert_eq!(wallet.len(), 2);
        let btc = wallet.balance(&Currency::new("BTC")).unwrap();
        assert_eq!(btc.total, dec!(1.25));
        assert_eq!(btc.available, dec!(1.0));
        assert_eq!(btc.reserved, dec!(0.25));
        // zero balances are kept
        assert!(wallet.balance(&Currency::new("CZK")).is_some());
    }

    #[test]
    fn test_deposit_external_id() {
        let entry = history_entry("DEPOSIT", "OK", Some("BTC: abcd1234"));
        let records = adapt_funding_history(&[entry]).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].external_id.as_deref(), Some("abcd1234"));
        assert_eq!(records[0].kind, FundingType::Deposit);
        assert_eq!(records[0].status, FundingStatus::Complete);
        assert_eq!(records[0].internal_id, "1001");
        assert_eq!(records[0].description.as_deref(), Some("BTC: abcd1234"));
    }

    #[test]
    fn test_external_id_only_for_plain_deposits() {
        let voucher = history_entry("USED_VOUCHER", "OK", Some("BTC: abcd1234"));
        let other_prefix = history_entry("DEPOSIT", "OK", Some("LTC: abcd1234"));
        let no_description = history_entry("DEPOSIT", "OK", None);

        let records = adapt_funding_history(&[voucher, other_prefix, no_description]).unwrap();

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.external_id.is_none()));
        assert!(records.iter().all(|r| r.kind == FundingType::Deposit));
    }

    #[test]
    fn test_trading_rows_are_skipped() {
        let entries = vec![
            history_entry("TRADE", "OK", None),
            history_entry("BUY", "OK", None),
            history_entry("WITHDRAWAL", "pending", None),
        ];

        let records = adapt_funding_history(&entries).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, FundingType::Withdrawal);
        assert_eq!(records[0].status, FundingStatus::Processing);
    }

    #[test]
    fn test_unrecognized_status_is_failed() {
        let entry = history_entry("CREATE_VOUCHER", "REVERTED", None);
        let records = adapt_funding_history(&[entry]).unwrap();
        assert_eq!(records[0].status, FundingStatus::Failed);
        assert_eq!(records[0].kind, FundingType::Withdrawal);
    }
}
