use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A currency identified by its upper-case code (e.g. BTC, EUR)
///
/// Construction normalizes the code, so `Currency::new("btc")` and
/// `Currency::new("BTC")` compare equal. There is no global registry; callers
/// that need to restrict the accepted codes validate against their own set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid currency pair: {0}")]
pub struct PairParseError(pub String);

/// A market identified by base/counter currencies (e.g. BTC/EUR)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Currency being bought or sold
    pub base: Currency,
    /// Currency the base is priced in
    pub counter: Currency,
}

impl CurrencyPair {
    pub fn new(base: impl Into<Currency>, counter: impl Into<Currency>) -> Self {
        Self {
            base: base.into(),
            counter: counter.into(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}

/// Parses the canonical `BASE/COUNTER` form produced by `Display`
impl FromStr for CurrencyPair {
    type Err = PairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((base, counter))
                if !base.trim().is_empty()
                    && !counter.trim().is_empty()
                    && !counter.contains('/') =>
            {
                Ok(Self::new(base, counter))
            }
            _ => Err(PairParseError(s.to_string())),
        }
    }
}
