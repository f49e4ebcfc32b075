//! Two-phase buy/sell operations.
//!
//! `prepare_*` does all the chain reads eagerly (quote, wallet resolution)
//! and returns a plan; `submit` later hands the computed parameters to a
//! caller-supplied [`TransactionSender`]. Nothing in between is cached or
//! refreshed, so a stale plan carries a stale quote.

use rust_decimal::Decimal;

use crate::common::address::TonAddress;
use crate::common::provider::BclApiProvider;
use crate::constants::trade::DEFAULT_QUERY_ID;
use crate::error::TradeError;
use crate::trading::core::params::{BuyParams, SellParams};
use crate::trading::core::traits::{OperationHandle, TransactionSender};
use crate::trading::quote::{self, Quote};
use crate::utils::calc::{decimal_to_nano, decimal_to_nano_floor};

/// A prepared buy: quote plus wire parameters, awaiting submission.
#[derive(Debug, Clone)]
pub struct BuyPlan {
    /// Coin contract the buy message targets.
    pub coin: TonAddress,
    /// Quote computed at preparation time.
    pub quote: Quote,
    /// Message parameters derived from the quote.
    pub params: BuyParams,
}

impl BuyPlan {
    /// Submits the buy through the given sender.
    pub async fn submit(&self, sender: &dyn TransactionSender) -> Result<OperationHandle, TradeError> {
        tracing::debug!(coin = %self.coin, tons = self.params.tons, "submitting buy");
        sender.send_buy(&self.coin, &self.params).await
    }
}

/// A prepared sell: quote, resolved jetton wallet and wire parameters.
#[derive(Debug, Clone)]
pub struct SellPlan {
    /// Coin contract the jettons belong to.
    pub coin: TonAddress,
    /// The owner's jetton wallet, resolved at preparation time.
    pub user_wallet: TonAddress,
    /// Quote computed at preparation time.
    pub quote: Quote,
    /// Message parameters derived from the quote.
    pub params: SellParams,
}

impl SellPlan {
    /// Submits the sell through the given sender.
    pub async fn submit(&self, sender: &dyn TransactionSender) -> Result<OperationHandle, TradeError> {
        tracing::debug!(coin = %self.coin, wallet = %self.user_wallet, amount = self.params.amount, "submitting sell");
        sender.send_sell(&self.user_wallet, &self.params).await
    }
}

/// Prepares a buy of `coin` for `ton_amount` TON.
pub async fn prepare_buy(
    provider: &dyn BclApiProvider,
    coin: &TonAddress,
    ton_amount: Decimal,
    slippage_percent: u8,
) -> Result<BuyPlan, TradeError> {
    let buy_quote = quote::buy_quote(provider, coin, ton_amount, slippage_percent).await?;
    let params = BuyParams {
        tons: decimal_to_nano(ton_amount)?,
        min_receive: decimal_to_nano_floor(buy_quote.min_receive)?,
        referral: None,
    };
    Ok(BuyPlan { coin: *coin, quote: buy_quote, params })
}

/// Prepares a sell of `jetton_amount` jettons owned by `owner`.
pub async fn prepare_sell(
    provider: &dyn BclApiProvider,
    coin: &TonAddress,
    owner: &TonAddress,
    jetton_amount: Decimal,
    slippage_percent: u8,
) -> Result<SellPlan, TradeError> {
    let sell_quote = quote::sell_quote(provider, coin, jetton_amount, slippage_percent).await?;
    let params = SellParams {
        amount: decimal_to_nano(jetton_amount)?,
        min_receive: decimal_to_nano_floor(sell_quote.min_receive)?,
        referral: None,
        query_id: DEFAULT_QUERY_ID,
    };
    let user_wallet = provider.user_coin_wallet(coin, owner).await?;
    Ok(SellPlan { coin: *coin, user_wallet, quote: sell_quote, params })
}
