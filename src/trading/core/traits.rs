//! Submission seam.

use async_trait::async_trait;

use crate::common::address::TonAddress;
use crate::error::TradeError;
use crate::trading::core::params::{BuyParams, SellParams};

/// Handle returned by a sender after submission, usable for status polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationHandle {
    /// Event id / transaction hash under which the indexer will trace the
    /// operation.
    pub event_id: String,
}

/// Caller-supplied wallet boundary.
///
/// Implementations own message-cell construction, signing and submission;
/// the SDK only ever hands them fully computed parameters.
#[async_trait]
pub trait TransactionSender: Send + Sync {
    /// Submits a buy message to the coin contract.
    async fn send_buy(
        &self,
        coin: &TonAddress,
        params: &BuyParams,
    ) -> Result<OperationHandle, TradeError>;

    /// Submits a sell message to the owner's jetton wallet.
    async fn send_sell(
        &self,
        user_wallet: &TonAddress,
        params: &SellParams,
    ) -> Result<OperationHandle, TradeError>;
}
