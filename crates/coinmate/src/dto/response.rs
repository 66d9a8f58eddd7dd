use serde::Deserialize;

use crate::error::{AdapterError, AdapterResult};

/// Envelope wrapping every Coinmate REST response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinmateResponse<T> {
    pub error: bool,
    pub error_message: Option<String>,
    pub data: Option<T>,
}

impl<T> CoinmateResponse<T> {
    /// Unwrap the payload, surfacing an exchange-reported error
    pub fn into_data(self) -> AdapterResult<T> {
        if self.error {
            return Err(AdapterError::Exchange(
                self.error_message
                    .unwrap_or_else(|| "unspecified error".to_string()),
            ));
        }
        self.data.ok_or(AdapterError::MissingData)
    }
}
