//! Buy/sell quote computation.
//!
//! A quote is a snapshot of what the bonding curve returns for a given
//! input right now, with a slippage-derived lower bound the caller is
//! willing to accept at execution time.

use rust_decimal::Decimal;

use crate::common::address::TonAddress;
use crate::common::provider::BclApiProvider;
use crate::constants::trade::MAX_SLIPPAGE_PERCENT;
use crate::error::TradeError;
use crate::utils::calc::{decimal_to_nano, nano_to_decimal};

/// Quote for a buy or sell, in human-readable units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Lowest acceptable output after slippage.
    pub min_receive: Decimal,
    /// Output quoted by the curve right now.
    pub max_receive: Decimal,
    /// Platform fee charged by the BCL contract, in TON.
    pub platform_fee: Decimal,
}

/// Applies slippage tolerance: `amount * (100 - slippage) / 100`.
///
/// Exact decimal arithmetic; `0 <= result <= amount` holds for any
/// non-negative amount and slippage in `0..=100`.
pub fn min_receive(amount: Decimal, slippage_percent: u8) -> Result<Decimal, TradeError> {
    validate_slippage(slippage_percent)?;
    let keep = Decimal::from(100 - u32::from(slippage_percent));
    Ok(amount * keep / Decimal::from(100u32))
}

/// Rejects slippage tolerances above 100 percent.
pub fn validate_slippage(slippage_percent: u8) -> Result<(), TradeError> {
    if slippage_percent > MAX_SLIPPAGE_PERCENT {
        return Err(TradeError::InvalidSlippage(slippage_percent));
    }
    Ok(())
}

/// Quotes a buy: jettons receivable for `ton_amount` TON.
pub async fn buy_quote(
    provider: &dyn BclApiProvider,
    coin: &TonAddress,
    ton_amount: Decimal,
    slippage_percent: u8,
) -> Result<Quote, TradeError> {
    validate_slippage(slippage_percent)?;
    let tons = decimal_to_nano(ton_amount)?;
    let res = provider.coins_for_tons(coin, tons).await?;

    let max_receive = nano_to_decimal(res.coins)?;
    Ok(Quote {
        min_receive: min_receive(max_receive, slippage_percent)?,
        max_receive,
        platform_fee: nano_to_decimal(res.fees)?,
    })
}

/// Quotes a sell: TON receivable for `jetton_amount` jettons.
pub async fn sell_quote(
    provider: &dyn BclApiProvider,
    coin: &TonAddress,
    jetton_amount: Decimal,
    slippage_percent: u8,
) -> Result<Quote, TradeError> {
    validate_slippage(slippage_percent)?;
    let coins = decimal_to_nano(jetton_amount)?;
    let res = provider.tons_for_coins(coin, coins).await?;

    let max_receive = nano_to_decimal(res.tons)?;
    Ok(Quote {
        min_receive: min_receive(max_receive, slippage_percent)?,
        max_receive,
        platform_fee: nano_to_decimal(res.fees)?,
    })
}
