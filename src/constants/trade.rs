/// Slippage tolerance applied when the caller does not pass one, in percent.
pub const DEFAULT_SLIPPAGE_PERCENT: u8 = 20;

/// Upper bound for a valid slippage tolerance, in percent.
pub const MAX_SLIPPAGE_PERCENT: u8 = 100;

/// Query id attached to sell messages. The BCL wallet contract echoes it
/// back; the SDK has no correlation use for it.
pub const DEFAULT_QUERY_ID: u64 = 0;
