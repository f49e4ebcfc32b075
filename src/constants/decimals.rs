/// TON and BCL jettons both carry 9 decimal places.
pub const TON_DECIMALS: u32 = 9;

/// Nanotons per TON (and nano-jettons per jetton).
pub const NANOS_PER_UNIT: u64 = 1_000_000_000;
