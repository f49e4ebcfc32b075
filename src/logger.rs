//! Console logging shim.
//!
//! Pass-through helpers with no state of their own; messages land on
//! whatever `tracing` subscriber the host application installed.

pub fn log(message: &str) {
    tracing::info!(target: "ton_bcl_trade_sdk", "{message}");
}

pub fn warn(message: &str) {
    tracing::warn!(target: "ton_bcl_trade_sdk", "{message}");
}

pub fn error(message: &str) {
    tracing::error!(target: "ton_bcl_trade_sdk", "{message}");
}
