//! Message parameters handed to the transaction sender.
//!
//! All amounts are nano-denominated, matching what the BCL contracts
//! expect on the wire.

use crate::common::address::TonAddress;

/// Parameters for a buy through the coin contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyParams {
    /// Nanotons spent on the buy.
    pub tons: u128,
    /// Lowest acceptable jetton output, in nano units.
    pub min_receive: u128,
    /// Optional fee-sharing referral. The SDK never sets one.
    pub referral: Option<TonAddress>,
}

/// Parameters for a sell through the user's jetton wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellParams {
    /// Jettons sold, in nano units.
    pub amount: u128,
    /// Lowest acceptable TON output, in nanotons.
    pub min_receive: u128,
    /// Optional fee-sharing referral. The SDK never sets one.
    pub referral: Option<TonAddress>,
    /// Query id echoed back by the wallet contract.
    pub query_id: u64,
}
