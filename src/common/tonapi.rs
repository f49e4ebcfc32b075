//! tonapi HTTP provider.
//!
//! REST-only client for a tonapi-compatible indexer: coin get methods are
//! executed through `/v2/blockchain/accounts/{account}/methods/{method}`,
//! event traces come from `/v2/events/{event_id}`. No transaction is ever
//! built or sent from here.

use std::{env, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Proxy};
use serde::Deserialize;

use crate::common::address::TonAddress;
use crate::common::provider::{BclApiProvider, CoinsForTons, Event, TonsForCoins};
use crate::common::types::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_MILLIS};
use crate::error::TradeError;

/// tonapi client configuration.
#[derive(Debug, Clone)]
pub struct TonApiConfig {
    /// Base URL, e.g. `https://tonapi.io`.
    pub base_host: String,
    /// Request timeout in milliseconds.
    pub timeout_millis: u64,
}

impl Default for TonApiConfig {
    fn default() -> Self {
        Self {
            base_host: DEFAULT_API_BASE.to_string(),
            timeout_millis: DEFAULT_TIMEOUT_MILLIS,
        }
    }
}

/// tonapi HTTP client.
#[derive(Clone)]
pub struct TonApiClient {
    http: Client,
    pub config: TonApiConfig,
}

/// Wire shape of a get-method invocation result.
#[derive(Debug, Deserialize)]
struct GetMethodResponse {
    success: bool,
    exit_code: i32,
    #[serde(default)]
    stack: Vec<StackEntry>,
    #[serde(default)]
    decoded: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct StackEntry {
    #[serde(rename = "type")]
    entry_type: String,
    num: Option<String>,
}

impl TonApiClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: TonApiConfig) -> Result<Self, TradeError> {
        let timeout = Duration::from_millis(config.timeout_millis);
        let mut builder = Client::builder()
            .pool_idle_timeout(Duration::from_secs(60))
            .tcp_nodelay(true)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5));

        // HTTPS_PROXY takes precedence over HTTP_PROXY
        if let Ok(https_proxy) = env::var("HTTPS_PROXY").or_else(|_| env::var("https_proxy")) {
            builder = builder.proxy(Proxy::https(&https_proxy)?);
        } else if let Ok(http_proxy) = env::var("HTTP_PROXY").or_else(|_| env::var("http_proxy")) {
            builder = builder.proxy(Proxy::http(&http_proxy)?);
        }

        let http = builder.build()?;
        Ok(Self { http, config })
    }

    /// Creates a client against mainnet tonapi with default timeouts.
    pub fn mainnet_default() -> Result<Self, TradeError> {
        Self::new(TonApiConfig::default())
    }

    #[inline]
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_host.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Runs a get method on `account`, with optional positional args.
    async fn run_get_method(
        &self,
        account: &TonAddress,
        method: &str,
        args: &[String],
    ) -> Result<GetMethodResponse, TradeError> {
        let url = self.endpoint(&format!(
            "/v2/blockchain/accounts/{}/methods/{}",
            account.to_raw(),
            method
        ));
        let query: Vec<(&str, &str)> = args.iter().map(|a| ("args", a.as_str())).collect();
        let resp = self
            .http
            .get(url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json::<GetMethodResponse>()
            .await?;

        if !resp.success {
            return Err(TradeError::GetMethodFailed {
                method: method.to_string(),
                exit_code: resp.exit_code,
            });
        }
        Ok(resp)
    }
}

/// Parses a stack number, `0x`-prefixed hex or plain decimal.
fn parse_stack_num(entry: &StackEntry) -> Result<u128, TradeError> {
    let raw = entry.num.as_deref().ok_or_else(|| {
        TradeError::UnexpectedResponse(format!("stack entry of type {} has no num", entry.entry_type))
    })?;
    let parsed = match raw.strip_prefix("0x") {
        Some(hex_digits) => u128::from_str_radix(hex_digits, 16),
        None => raw.parse::<u128>(),
    };
    parsed.map_err(|_| TradeError::UnexpectedResponse(format!("bad stack number: {raw}")))
}

/// Reads the two-entry `(fees, amount)` stack the BCL quote methods return.
fn read_fees_amount(method: &str, resp: &GetMethodResponse) -> Result<(u128, u128), TradeError> {
    if resp.stack.len() < 2 {
        return Err(TradeError::UnexpectedResponse(format!(
            "{method} returned {} stack entries, expected 2",
            resp.stack.len()
        )));
    }
    let fees = parse_stack_num(&resp.stack[0])?;
    let amount = parse_stack_num(&resp.stack[1])?;
    Ok((fees, amount))
}

#[async_trait]
impl BclApiProvider for TonApiClient {
    async fn coins_for_tons(&self, coin: &TonAddress, tons: u128) -> Result<CoinsForTons, TradeError> {
        let resp = self.run_get_method(coin, "coins_for_tons", &[tons.to_string()]).await?;
        let (fees, coins) = read_fees_amount("coins_for_tons", &resp)?;
        Ok(CoinsForTons { coins, fees })
    }

    async fn tons_for_coins(&self, coin: &TonAddress, coins: u128) -> Result<TonsForCoins, TradeError> {
        let resp = self.run_get_method(coin, "tons_for_coins", &[coins.to_string()]).await?;
        let (fees, tons) = read_fees_amount("tons_for_coins", &resp)?;
        Ok(TonsForCoins { tons, fees })
    }

    async fn user_coin_wallet(
        &self,
        coin: &TonAddress,
        owner: &TonAddress,
    ) -> Result<TonAddress, TradeError> {
        let resp = self
            .run_get_method(coin, "get_wallet_address", &[owner.to_raw()])
            .await?;
        let decoded = resp.decoded.as_ref().ok_or_else(|| {
            TradeError::UnexpectedResponse("get_wallet_address response has no decoded payload".to_string())
        })?;
        let address = decoded
            .get("jetton_wallet_address")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                TradeError::UnexpectedResponse("decoded payload has no jetton_wallet_address".to_string())
            })?;
        TonAddress::parse(address)
    }

    async fn get_event(&self, event_id: &str) -> Result<Event, TradeError> {
        let url = self.endpoint(&format!("/v2/events/{event_id}"));
        let event = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Event>()
            .await?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_slashes() {
        let client = TonApiClient::new(TonApiConfig {
            base_host: "https://tonapi.io/".to_string(),
            timeout_millis: 1_000,
        })
        .unwrap();
        assert_eq!(client.endpoint("/v2/events/abc"), "https://tonapi.io/v2/events/abc");
    }

    #[test]
    fn test_parse_stack_num_hex_and_decimal() {
        let hex = StackEntry { entry_type: "num".to_string(), num: Some("0x3b9aca00".to_string()) };
        assert_eq!(parse_stack_num(&hex).unwrap(), 1_000_000_000);
        let dec = StackEntry { entry_type: "num".to_string(), num: Some("42".to_string()) };
        assert_eq!(parse_stack_num(&dec).unwrap(), 42);
    }

    #[test]
    fn test_missing_stack_entries_rejected() {
        let resp = GetMethodResponse { success: true, exit_code: 0, stack: vec![], decoded: None };
        assert!(matches!(
            read_fees_amount("coins_for_tons", &resp),
            Err(TradeError::UnexpectedResponse(_))
        ));
    }
}
