mod balance;
mod funding;
mod order;
mod order_book;
mod order_status;
mod side;
mod ticker;
mod trade;

pub use balance::{Balance, Wallet};
pub use funding::{FundingRecord, FundingStatus, FundingType};
pub use order::{LimitOrder, MarketOrder, Order, StopOrder};
pub use order_book::OrderBook;
pub use order_status::OrderStatus;
pub use side::Side;
pub use ticker::Ticker;
pub use trade::{Trade, TradeSortType, Trades, UserTrade, UserTrades};
