//! Ferrox Coinmate Adapter
//!
//! Normalizes Coinmate REST payloads into the `ferrox-core` domain model.
//! Provides:
//! - Wire types for the exchange responses (`dto`)
//! - Pure adapter functions from wire types to normalized records (`adapters`)
//! - A configured facade over those functions (`CoinmateAdapter`)
//!
//! ## Architecture
//!
//! ```text
//! HTTP / auth layer (external)
//!         │ decoded CoinmateResponse<T>
//!    ┌────▼─────┐
//!    │ Adapters │  dto::* ──► ferrox_core::*
//!    └────┬─────┘
//!         │ Ticker, OrderBook, Trades, Wallet, FundingRecord, Order...
//!    ┌────▼─────┐
//!    │Consumers │
//!    └──────────┘
//! ```
//!
//! Transport, signing and retries live outside this crate.

pub mod adapter;
pub mod adapters;
pub mod config;
pub mod dto;
pub mod error;
pub mod pair;

// Re-export commonly used types
pub use adapter::CoinmateAdapter;
pub use adapters::SortOrder;
pub use config::{AdapterConfig, ConfigError};
pub use error::{AdapterError, AdapterResult};
pub use pair::{format_pair, parse_pair};
