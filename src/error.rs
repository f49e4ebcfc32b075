//! Error types shared across the SDK.

/// Errors surfaced by quote computation, plan preparation and status polling.
///
/// External failures (HTTP transport, provider responses) propagate through
/// `Http` / `Api` unmodified; nothing here retries.
#[derive(Debug, thiserror::Error)]
pub enum TradeError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("slippage must be in 0..=100, got {0}")]
    InvalidSlippage(u8),
    #[error("amount out of range: {0}")]
    AmountOutOfRange(String),
    #[error("amount has sub-nano precision: {0}")]
    PrecisionLoss(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Api(#[from] anyhow::Error),
    #[error("get method {method} failed with exit code {exit_code}")]
    GetMethodFailed { method: String, exit_code: i32 },
    #[error("unexpected api response: {0}")]
    UnexpectedResponse(String),
    #[error("sender error: {0}")]
    Sender(String),
}
