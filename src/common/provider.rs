//! Chain-read seam.
//!
//! Everything the SDK needs to read from the chain goes through
//! [`BclApiProvider`], so tests and alternative backends can swap the
//! tonapi HTTP client out without touching the trading logic.

use async_trait::async_trait;
use serde::Deserialize;

use crate::common::address::TonAddress;
use crate::error::TradeError;

/// Result of the `coins_for_tons` get method on a BCL coin contract.
///
/// Amounts are in nano units.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinsForTons {
    /// Jettons received for the given TON input.
    pub coins: u128,
    /// Platform fee charged, in nanotons.
    pub fees: u128,
}

/// Result of the `tons_for_coins` get method on a BCL coin contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct TonsForCoins {
    /// Nanotons received for the given jetton input.
    pub tons: u128,
    /// Platform fee charged, in nanotons.
    pub fees: u128,
}

/// An indexed trace of a transaction and everything it triggered.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub in_progress: bool,
    #[serde(default)]
    pub actions: Vec<EventAction>,
}

/// One action inside an indexed event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub status: String,
    #[serde(rename = "SmartContractExec")]
    pub smart_contract_exec: Option<SmartContractExec>,
}

/// Payload of a `SmartContractExec` action.
#[derive(Debug, Clone, Deserialize)]
pub struct SmartContractExec {
    pub contract: AccountRef,
}

/// Account reference as returned by the indexer (raw-form address string).
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRef {
    pub address: String,
}

/// Read-only chain access required by quoting and status resolution.
///
/// Every call is a single network round-trip; implementations own their
/// timeout behavior and must not retry.
#[async_trait]
pub trait BclApiProvider: Send + Sync {
    /// Jettons receivable for `tons` nanotons on the given coin.
    async fn coins_for_tons(&self, coin: &TonAddress, tons: u128) -> Result<CoinsForTons, TradeError>;

    /// Nanotons receivable for `coins` nano-jettons on the given coin.
    async fn tons_for_coins(&self, coin: &TonAddress, coins: u128) -> Result<TonsForCoins, TradeError>;

    /// Jetton wallet of `owner` for the given coin contract.
    async fn user_coin_wallet(
        &self,
        coin: &TonAddress,
        owner: &TonAddress,
    ) -> Result<TonAddress, TradeError>;

    /// Indexed event trace for a transaction hash / event id.
    async fn get_event(&self, event_id: &str) -> Result<Event, TradeError>;
}
