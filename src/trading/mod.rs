pub mod core;
pub mod plan;
pub mod quote;
pub mod status;

pub use self::core::params::{BuyParams, SellParams};
pub use self::core::traits::{OperationHandle, TransactionSender};
pub use plan::{BuyPlan, SellPlan, prepare_buy, prepare_sell};
pub use quote::{Quote, buy_quote, min_receive, sell_quote};
pub use status::{TransactionStatus, resolve_status};
