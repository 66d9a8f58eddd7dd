use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::values::Timestamp;

/// Direction of a funding movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundingType {
    Deposit,
    Withdrawal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundingStatus {
    Complete,
    Processing,
    Failed,
}

impl FundingStatus {
    pub fn is_final(&self) -> bool {
        !matches!(self, FundingStatus::Processing)
    }
}

/// Deposit or withdrawal of funds, distinct from a trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRecord {
    pub timestamp: Timestamp,
    pub currency: Currency,
    pub amount: Decimal,
    /// Venue transaction id
    pub internal_id: String,
    /// On-chain transaction hash or similar reference, when known
    pub external_id: Option<String>,
    pub kind: FundingType,
    pub status: FundingStatus,
    pub fee: Decimal,
    pub description: Option<String>,
}
