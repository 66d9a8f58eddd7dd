//! Coinmate currency pair tokens (`BTC_EUR`)

use ferrox_core::CurrencyPair;

use crate::error::{AdapterError, AdapterResult};

/// Parse a Coinmate pair token such as `BTC_EUR` or `ltc_btc`
pub fn parse_pair(token: &str) -> AdapterResult<CurrencyPair> {
    match token.split_once('_') {
        Some((base, counter))
            if !base.trim().is_empty() && !counter.trim().is_empty() && !counter.contains('_') =>
        {
            Ok(CurrencyPair::new(base, counter))
        }
        _ => Err(AdapterError::InvalidPair(token.to_string())),
    }
}

/// Render a pair the way Coinmate expects it in request parameters
pub fn format_pair(pair: &CurrencyPair) -> String {
    format!("{}_{}", pair.base, pair.counter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrox_core::Currency;

    #[test]
    fn test_parse_pair() {
        let pair = parse_pair("BTC_EUR").unwrap();
        assert_eq!(pair.base, Currency::new("BTC"));
        assert_eq!(pair.counter, Currency::new("EUR"));

        assert_eq!(parse_pair("ltc_btc").unwrap(), CurrencyPair::new("LTC", "BTC"));
    }

    #[test]
    fn test_parse_pair_rejects_malformed_tokens() {
        for token in ["BTCEUR", "_EUR", "BTC_", "BTC_EUR_X", ""] {
            assert_eq!(
                parse_pair(token),
                Err(AdapterError::InvalidPair(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_format_pair() {
        assert_eq!(format_pair(&CurrencyPair::new("eth", "czk")), "ETH_CZK");
    }
}
