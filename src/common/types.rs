//! Client configuration.

use std::env;

use crate::common::address::TonAddress;
use crate::error::TradeError;

/// Mainnet tonapi base URL.
pub const DEFAULT_API_BASE: &str = "https://tonapi.io";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MILLIS: u64 = 10_000;

/// Configuration for a [`crate::TonBclClient`].
///
/// Construction is explicit; nothing reads the environment unless the caller
/// opts in through [`ClientConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Address of the BCL master contract that deploys the coins.
    pub master_address: TonAddress,
    /// Base URL of the tonapi-compatible HTTP API.
    pub api_base: String,
    /// Request timeout in milliseconds.
    pub timeout_millis: u64,
}

impl ClientConfig {
    pub fn new(master_address: TonAddress) -> Self {
        Self {
            master_address,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_millis: DEFAULT_TIMEOUT_MILLIS,
        }
    }

    /// Reads configuration from the environment:
    ///
    /// - `BCL_MASTER_ADDRESS` (required) - master contract address
    /// - `TONAPI_BASE_URL` (default: mainnet tonapi)
    /// - `TONAPI_TIMEOUT_MS` (default: 10000)
    pub fn from_env() -> Result<Self, TradeError> {
        let master = env::var("BCL_MASTER_ADDRESS")
            .map_err(|_| TradeError::Config("BCL_MASTER_ADDRESS is not set".to_string()))?;
        let master_address = TonAddress::parse(&master)?;
        let api_base =
            env::var("TONAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let timeout_millis = env::var("TONAPI_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MILLIS);
        Ok(Self { master_address, api_base, timeout_millis })
    }
}
