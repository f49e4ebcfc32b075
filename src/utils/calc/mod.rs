//! Unit conversions between human-readable amounts and nano units.
//!
//! Amounts crossing the wire are nano-denominated integers; everything the
//! caller sees is a [`Decimal`]. Conversions are exact: sub-nano dust and
//! overflow are errors rather than silent rounding.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::constants::decimals::{NANOS_PER_UNIT, TON_DECIMALS};
use crate::error::TradeError;

/// Converts a human-readable amount to nano units.
pub fn decimal_to_nano(amount: Decimal) -> Result<u128, TradeError> {
    if amount.is_sign_negative() {
        return Err(TradeError::AmountOutOfRange(format!("negative amount: {amount}")));
    }
    let scaled = amount
        .checked_mul(Decimal::from(NANOS_PER_UNIT))
        .ok_or_else(|| TradeError::AmountOutOfRange(amount.to_string()))?;
    if !scaled.fract().is_zero() {
        return Err(TradeError::PrecisionLoss(amount.to_string()));
    }
    scaled
        .trunc()
        .to_u128()
        .ok_or_else(|| TradeError::AmountOutOfRange(amount.to_string()))
}

/// Converts to nano units, flooring sub-nano digits.
///
/// Used for derived lower bounds (min receive), where rounding down is the
/// safe direction. Caller-supplied inputs go through [`decimal_to_nano`]
/// instead so dust is not silently dropped.
pub fn decimal_to_nano_floor(amount: Decimal) -> Result<u128, TradeError> {
    if amount.is_sign_negative() {
        return Err(TradeError::AmountOutOfRange(format!("negative amount: {amount}")));
    }
    let scaled = amount
        .checked_mul(Decimal::from(NANOS_PER_UNIT))
        .ok_or_else(|| TradeError::AmountOutOfRange(amount.to_string()))?;
    scaled
        .trunc()
        .to_u128()
        .ok_or_else(|| TradeError::AmountOutOfRange(amount.to_string()))
}

/// Converts nano units to a human-readable amount.
pub fn nano_to_decimal(nano: u128) -> Result<Decimal, TradeError> {
    let signed = i128::try_from(nano)
        .map_err(|_| TradeError::AmountOutOfRange(nano.to_string()))?;
    let amount = Decimal::try_from_i128_with_scale(signed, TON_DECIMALS)
        .map_err(|_| TradeError::AmountOutOfRange(nano.to_string()))?;
    Ok(amount.normalize())
}
