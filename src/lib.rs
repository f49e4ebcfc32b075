pub mod common;
pub mod constants;
pub mod error;
pub mod logger;
pub mod trading;
pub mod utils;

use std::sync::Arc;

use rust_decimal::Decimal;

pub use crate::common::address::TonAddress;
pub use crate::common::provider::{BclApiProvider, Event};
pub use crate::common::tonapi::{TonApiClient, TonApiConfig};
pub use crate::common::types::ClientConfig;
pub use crate::error::TradeError;
pub use crate::trading::core::params::{BuyParams, SellParams};
pub use crate::trading::core::traits::{OperationHandle, TransactionSender};
pub use crate::trading::plan::{BuyPlan, SellPlan};
pub use crate::trading::quote::Quote;
pub use crate::trading::status::TransactionStatus;

use crate::constants::trade::DEFAULT_SLIPPAGE_PERCENT;
use crate::trading::{plan, quote, status};

/// Client for trading on TON BCL (bonding curve launchpad) coins.
///
/// Explicitly constructed around an injectable [`BclApiProvider`]; holds no
/// mutable state, so it is cheap to clone and safe to share. Every method
/// is a single-shot async call with no internal retries.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use rust_decimal_macros::dec;
/// use ton_bcl_trade_sdk::{ClientConfig, TonApiClient, TonBclClient, TonAddress};
///
/// # async fn run() -> Result<(), ton_bcl_trade_sdk::TradeError> {
/// let config = ClientConfig::from_env()?;
/// let provider = Arc::new(TonApiClient::mainnet_default()?);
/// let client = TonBclClient::new(provider, config);
///
/// let coin = TonAddress::parse("EQAs87W4yJHlF8mt29ocA4agnMrLzzh5UnbViMH0noKW971d")?;
/// let plan = client.prepare_buy(&coin, dec!(1.5), None).await?;
/// println!("buying at least {} jettons", plan.quote.min_receive);
/// // plan.submit(&sender).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TonBclClient {
    provider: Arc<dyn BclApiProvider>,
    config: ClientConfig,
}

impl TonBclClient {
    /// Creates a client over the given provider.
    pub fn new(provider: Arc<dyn BclApiProvider>, config: ClientConfig) -> Self {
        Self { provider, config }
    }

    /// Creates a client backed by a tonapi HTTP provider built from `config`.
    pub fn with_tonapi(config: ClientConfig) -> Result<Self, TradeError> {
        let provider = TonApiClient::new(TonApiConfig {
            base_host: config.api_base.clone(),
            timeout_millis: config.timeout_millis,
        })?;
        Ok(Self::new(Arc::new(provider), config))
    }

    /// The BCL master contract this client was configured with.
    pub fn master_address(&self) -> &TonAddress {
        &self.config.master_address
    }

    /// Quotes a buy of `coin` for `ton_amount` TON.
    ///
    /// `slippage_percent` defaults to 20 when `None`.
    pub async fn buy_quote(
        &self,
        coin: &TonAddress,
        ton_amount: Decimal,
        slippage_percent: Option<u8>,
    ) -> Result<Quote, TradeError> {
        let slippage = slippage_percent.unwrap_or(DEFAULT_SLIPPAGE_PERCENT);
        quote::buy_quote(self.provider.as_ref(), coin, ton_amount, slippage).await
    }

    /// Quotes a sell of `jetton_amount` jettons of `coin`.
    pub async fn sell_quote(
        &self,
        coin: &TonAddress,
        jetton_amount: Decimal,
        slippage_percent: Option<u8>,
    ) -> Result<Quote, TradeError> {
        let slippage = slippage_percent.unwrap_or(DEFAULT_SLIPPAGE_PERCENT);
        quote::sell_quote(self.provider.as_ref(), coin, jetton_amount, slippage).await
    }

    /// Prepares a buy: quotes eagerly, returns a plan to submit later.
    pub async fn prepare_buy(
        &self,
        coin: &TonAddress,
        ton_amount: Decimal,
        slippage_percent: Option<u8>,
    ) -> Result<BuyPlan, TradeError> {
        let slippage = slippage_percent.unwrap_or(DEFAULT_SLIPPAGE_PERCENT);
        plan::prepare_buy(self.provider.as_ref(), coin, ton_amount, slippage).await
    }

    /// Prepares a sell: quotes and resolves the owner's jetton wallet
    /// eagerly, returns a plan to submit later.
    pub async fn prepare_sell(
        &self,
        coin: &TonAddress,
        owner: &TonAddress,
        jetton_amount: Decimal,
        slippage_percent: Option<u8>,
    ) -> Result<SellPlan, TradeError> {
        let slippage = slippage_percent.unwrap_or(DEFAULT_SLIPPAGE_PERCENT);
        plan::prepare_sell(self.provider.as_ref(), coin, owner, jetton_amount, slippage).await
    }

    /// Fetches the indexed event for `event_id` and resolves the operation
    /// status with respect to `coin`.
    ///
    /// `Pending` means the indexer is still tracing the event; poll again.
    /// The SDK never polls on the caller's behalf.
    pub async fn transaction_status(
        &self,
        event_id: &str,
        coin: &TonAddress,
    ) -> Result<TransactionStatus, TradeError> {
        let event = self.provider.get_event(event_id).await?;
        Ok(status::resolve_status(&event, coin))
    }
}
