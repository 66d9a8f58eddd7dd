//! Token classifiers shared by every adaptation path
//!
//! The lenient and strict side classifiers stay separate on purpose: their
//! error behavior differs and callers pick one explicitly.

use ferrox_core::{FundingStatus, FundingType, OrderStatus, Side};
use log::{debug, warn};

use crate::error::{AdapterError, AdapterResult};

/// Lenient side classifier for trade and history rows
///
/// `BUY`/`QUICK_BUY` are bids, `SELL`/`QUICK_SELL` are asks; anything else
/// (deposits, vouchers, ...) has no side.
pub fn type_to_side_or_none(token: &str) -> Option<Side> {
    match token {
        "BUY" | "QUICK_BUY" => Some(Side::Bid),
        "SELL" | "QUICK_SELL" => Some(Side::Ask),
        other => {
            debug!("No side for transaction type {}", other);
            None
        }
    }
}

/// Strict side classifier for order endpoints
pub fn strict_side(token: &str) -> AdapterResult<Side> {
    match token {
        "BUY" => Ok(Side::Bid),
        "SELL" => Ok(Side::Ask),
        other => {
            warn!("Rejecting order with unknown type {}", other);
            Err(AdapterError::UnknownOrderType(other.to_string()))
        }
    }
}

/// Stop orders: `SELL` is an ask, everything else is treated as a bid
pub fn stop_order_side(token: &str) -> Side {
    if token == "SELL" { Side::Ask } else { Side::Bid }
}

/// Order detail status; unrecognized values map to `Unknown`
pub fn order_status(token: &str) -> OrderStatus {
    match token {
        "CANCELLED" => OrderStatus::Canceled,
        "FILLED" => OrderStatus::Filled,
        "PARTIALLY_FILLED" => OrderStatus::PartiallyFilled,
        "OPEN" => OrderStatus::New,
        other => {
            debug!("Unrecognized order status {}", other);
            OrderStatus::Unknown
        }
    }
}

/// Funding direction of a transaction history row
///
/// `None` marks a trading row that is not a funding movement.
pub fn funding_type(token: &str) -> Option<FundingType> {
    match token {
        "WITHDRAWAL" | "CREATE_VOUCHER" => Some(FundingType::Withdrawal),
        "DEPOSIT" | "USED_VOUCHER" | "NEW_USER_REWARD" | "REFERRAL" => Some(FundingType::Deposit),
        _ => None,
    }
}

/// Funding status, matched case-insensitively; unrecognized values are failures
pub fn funding_status(token: &str) -> FundingStatus {
    match token.to_uppercase().as_str() {
        "OK" | "COMPLETED" => FundingStatus::Complete,
        "NEW" | "SENT" | "CREATED" | "WAITING" | "PENDING" => FundingStatus::Processing,
        other => {
            debug!("Treating funding status {} as failed", other);
            FundingStatus::Failed
        }
    }
}
