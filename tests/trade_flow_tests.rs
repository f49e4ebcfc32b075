//! End-to-end flow against a mock provider: quote, prepare, submit, poll.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal_macros::dec;
use ton_bcl_trade_sdk::common::provider::{
    AccountRef, BclApiProvider, CoinsForTons, Event, EventAction, SmartContractExec, TonsForCoins,
};
use ton_bcl_trade_sdk::{
    BuyParams, ClientConfig, OperationHandle, SellParams, TonAddress, TonBclClient, TradeError,
    TransactionSender, TransactionStatus,
};

const MASTER: &str = "0:aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const COIN: &str = "0:2cf3b5b8c891e517c9addbda1c0386a09ccacbcf38795276d588c1f49e8296f7";
const OWNER: &str = "0:bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
const WALLET: &str = "0:cccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccc";

/// Fixed-rate curve: 2 jettons per TON (and back), flat 0.05 TON fee.
struct MockProvider {
    events: HashMap<String, Event>,
}

impl MockProvider {
    fn new() -> Self {
        Self { events: HashMap::new() }
    }

    fn with_event(mut self, event: Event) -> Self {
        self.events.insert(event.event_id.clone(), event);
        self
    }
}

#[async_trait]
impl BclApiProvider for MockProvider {
    async fn coins_for_tons(&self, _coin: &TonAddress, tons: u128) -> Result<CoinsForTons, TradeError> {
        Ok(CoinsForTons { coins: tons * 2, fees: 50_000_000 })
    }

    async fn tons_for_coins(&self, _coin: &TonAddress, coins: u128) -> Result<TonsForCoins, TradeError> {
        Ok(TonsForCoins { tons: coins / 2, fees: 50_000_000 })
    }

    async fn user_coin_wallet(
        &self,
        _coin: &TonAddress,
        _owner: &TonAddress,
    ) -> Result<TonAddress, TradeError> {
        TonAddress::parse(WALLET)
    }

    async fn get_event(&self, event_id: &str) -> Result<Event, TradeError> {
        self.events
            .get(event_id)
            .cloned()
            .ok_or_else(|| TradeError::UnexpectedResponse(format!("no event {event_id}")))
    }
}

#[derive(Default)]
struct RecordingSender {
    buys: Mutex<Vec<(TonAddress, BuyParams)>>,
    sells: Mutex<Vec<(TonAddress, SellParams)>>,
}

#[async_trait]
impl TransactionSender for RecordingSender {
    async fn send_buy(
        &self,
        coin: &TonAddress,
        params: &BuyParams,
    ) -> Result<OperationHandle, TradeError> {
        self.buys.lock().unwrap().push((*coin, *params));
        Ok(OperationHandle { event_id: "buy-event".to_string() })
    }

    async fn send_sell(
        &self,
        user_wallet: &TonAddress,
        params: &SellParams,
    ) -> Result<OperationHandle, TradeError> {
        self.sells.lock().unwrap().push((*user_wallet, *params));
        Ok(OperationHandle { event_id: "sell-event".to_string() })
    }
}

fn client(provider: MockProvider) -> TonBclClient {
    let config = ClientConfig::new(TonAddress::parse(MASTER).unwrap());
    TonBclClient::new(Arc::new(provider), config)
}

fn exec_action(address: &str, status: &str) -> EventAction {
    EventAction {
        action_type: "SmartContractExec".to_string(),
        status: status.to_string(),
        smart_contract_exec: Some(SmartContractExec {
            contract: AccountRef { address: address.to_string() },
        }),
    }
}

#[tokio::test]
async fn test_buy_quote_applies_default_slippage() {
    let client = client(MockProvider::new());
    let coin = TonAddress::parse(COIN).unwrap();

    // 1 TON in, curve pays 2 jettons; default slippage 20% floors at 1.6
    let quote = client.buy_quote(&coin, dec!(1), None).await.unwrap();
    assert_eq!(quote.max_receive, dec!(2));
    assert_eq!(quote.min_receive, dec!(1.6));
    assert_eq!(quote.platform_fee, dec!(0.05));
    assert!(quote.min_receive <= quote.max_receive);
}

#[tokio::test]
async fn test_sell_quote_with_explicit_slippage() {
    let client = client(MockProvider::new());
    let coin = TonAddress::parse(COIN).unwrap();

    let quote = client.sell_quote(&coin, dec!(4), Some(10)).await.unwrap();
    assert_eq!(quote.max_receive, dec!(2));
    assert_eq!(quote.min_receive, dec!(1.8));
}

#[tokio::test]
async fn test_out_of_range_slippage_rejected() {
    let client = client(MockProvider::new());
    let coin = TonAddress::parse(COIN).unwrap();

    let err = client.buy_quote(&coin, dec!(1), Some(101)).await.unwrap_err();
    assert!(matches!(err, TradeError::InvalidSlippage(101)));
}

#[tokio::test]
async fn test_prepare_and_submit_buy() {
    let client = client(MockProvider::new());
    let coin = TonAddress::parse(COIN).unwrap();

    let plan = client.prepare_buy(&coin, dec!(1.5), Some(20)).await.unwrap();
    assert_eq!(plan.params.tons, 1_500_000_000);
    assert_eq!(plan.params.min_receive, 2_400_000_000); // 3 jettons * 0.8
    assert!(plan.params.referral.is_none());

    let sender = RecordingSender::default();
    let handle = plan.submit(&sender).await.unwrap();
    assert_eq!(handle.event_id, "buy-event");

    let buys = sender.buys.lock().unwrap();
    assert_eq!(buys.len(), 1);
    assert_eq!(buys[0].0, coin);
    assert_eq!(buys[0].1, plan.params);
}

#[tokio::test]
async fn test_prepare_and_submit_sell() {
    let client = client(MockProvider::new());
    let coin = TonAddress::parse(COIN).unwrap();
    let owner = TonAddress::parse(OWNER).unwrap();

    let plan = client.prepare_sell(&coin, &owner, dec!(4), Some(25)).await.unwrap();
    assert_eq!(plan.user_wallet, TonAddress::parse(WALLET).unwrap());
    assert_eq!(plan.params.amount, 4_000_000_000);
    assert_eq!(plan.params.min_receive, 1_500_000_000); // 2 TON * 0.75
    assert_eq!(plan.params.query_id, 0);

    let sender = RecordingSender::default();
    plan.submit(&sender).await.unwrap();

    let sells = sender.sells.lock().unwrap();
    assert_eq!(sells.len(), 1);
    // sells go through the resolved jetton wallet, not the coin contract
    assert_eq!(sells[0].0, plan.user_wallet);
}

#[tokio::test]
async fn test_transaction_status_lifecycle() {
    let coin = TonAddress::parse(COIN).unwrap();
    let pending = Event {
        event_id: "pending".to_string(),
        in_progress: true,
        actions: vec![exec_action(COIN, "ok")],
    };
    let succeeded = Event {
        event_id: "succeeded".to_string(),
        in_progress: false,
        actions: vec![exec_action(COIN, "ok")],
    };
    let failed = Event {
        event_id: "failed".to_string(),
        in_progress: false,
        actions: vec![exec_action(COIN, "failed")],
    };
    let client = client(
        MockProvider::new().with_event(pending).with_event(succeeded).with_event(failed),
    );

    assert_eq!(
        client.transaction_status("pending", &coin).await.unwrap(),
        TransactionStatus::Pending
    );
    assert_eq!(
        client.transaction_status("succeeded", &coin).await.unwrap(),
        TransactionStatus::Succeeded
    );
    assert_eq!(
        client.transaction_status("failed", &coin).await.unwrap(),
        TransactionStatus::Failed
    );
}

#[tokio::test]
async fn test_provider_errors_propagate() {
    let client = client(MockProvider::new());
    let coin = TonAddress::parse(COIN).unwrap();

    let err = client.transaction_status("missing", &coin).await.unwrap_err();
    assert!(matches!(err, TradeError::UnexpectedResponse(_)));
}

#[test]
fn test_event_wire_format_deserializes() {
    let json = format!(
        r#"{{
            "event_id": "deadbeef",
            "in_progress": false,
            "actions": [
                {{
                    "type": "SmartContractExec",
                    "status": "ok",
                    "SmartContractExec": {{ "contract": {{ "address": "{COIN}" }} }}
                }},
                {{ "type": "TonTransfer", "status": "ok" }}
            ]
        }}"#
    );
    let event: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(event.event_id, "deadbeef");
    assert!(!event.in_progress);
    assert_eq!(event.actions.len(), 2);
    assert!(event.actions[0].smart_contract_exec.is_some());
    assert!(event.actions[1].smart_contract_exec.is_none());

    let target = TonAddress::parse(COIN).unwrap();
    assert_eq!(
        ton_bcl_trade_sdk::trading::status::resolve_status(&event, &target),
        TransactionStatus::Succeeded
    );
}
