pub mod decimals;
pub mod trade;

pub use decimals::*;
pub use trade::*;
