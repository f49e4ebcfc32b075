//! Transaction status resolution.
//!
//! An operation is judged by the indexed event it produced: the contract
//! execution on the target coin must have succeeded, and so must every
//! other action the event triggered. A still-indexing event is `Pending`,
//! an ordinary condition the caller re-polls on; it is never an error.

use crate::common::address::TonAddress;
use crate::common::provider::Event;

/// Action type string the indexer uses for contract executions.
pub const ACTION_SMART_CONTRACT_EXEC: &str = "SmartContractExec";

/// Action status string for a successful action.
pub const ACTION_STATUS_OK: &str = "ok";

/// Outcome of a submitted operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// The event is still being traced; poll again later.
    Pending,
    /// The event settled but the operation did not fully succeed.
    Failed,
    /// The targeted contract execution and every other action succeeded.
    Succeeded,
}

impl TransactionStatus {
    pub fn is_final(&self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }
}

/// Resolves the status of an event with respect to `target`, the coin
/// contract the operation was sent to.
///
/// The first contract-execution action whose executed contract equals
/// `target` decides the match; addresses are compared parsed, so the
/// indexer's raw rendering matches a friendly-form target.
pub fn resolve_status(event: &Event, target: &TonAddress) -> TransactionStatus {
    if event.in_progress {
        return TransactionStatus::Pending;
    }

    let master_call = event.actions.iter().find(|action| {
        action.action_type == ACTION_SMART_CONTRACT_EXEC
            && action
                .smart_contract_exec
                .as_ref()
                .and_then(|exec| TonAddress::parse(&exec.contract.address).ok())
                .is_some_and(|address| address == *target)
    });

    let Some(master_call) = master_call else {
        return TransactionStatus::Failed;
    };
    if master_call.status != ACTION_STATUS_OK {
        return TransactionStatus::Failed;
    }
    if event.actions.iter().any(|action| action.status != ACTION_STATUS_OK) {
        return TransactionStatus::Failed;
    }

    TransactionStatus::Succeeded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::provider::{AccountRef, EventAction, SmartContractExec};

    const COIN: &str = "0:2cf3b5b8c891e517c9addbda1c0386a09ccacbcf38795276d588c1f49e8296f7";
    const OTHER: &str = "0:ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff";

    fn exec_action(address: &str, status: &str) -> EventAction {
        EventAction {
            action_type: ACTION_SMART_CONTRACT_EXEC.to_string(),
            status: status.to_string(),
            smart_contract_exec: Some(SmartContractExec {
                contract: AccountRef { address: address.to_string() },
            }),
        }
    }

    fn transfer_action(status: &str) -> EventAction {
        EventAction {
            action_type: "TonTransfer".to_string(),
            status: status.to_string(),
            smart_contract_exec: None,
        }
    }

    fn event(in_progress: bool, actions: Vec<EventAction>) -> Event {
        Event { event_id: "e1".to_string(), in_progress, actions }
    }

    #[test]
    fn test_single_successful_exec_succeeds() {
        let target = TonAddress::parse(COIN).unwrap();
        let ev = event(false, vec![exec_action(COIN, "ok")]);
        assert_eq!(resolve_status(&ev, &target), TransactionStatus::Succeeded);
    }

    #[test]
    fn test_in_progress_is_pending_regardless_of_actions() {
        let target = TonAddress::parse(COIN).unwrap();
        let ev = event(true, vec![exec_action(COIN, "ok")]);
        assert_eq!(resolve_status(&ev, &target), TransactionStatus::Pending);
        assert!(!resolve_status(&ev, &target).is_final());
    }

    #[test]
    fn test_no_matching_action_fails_even_if_others_succeeded() {
        let target = TonAddress::parse(COIN).unwrap();
        let ev = event(false, vec![exec_action(OTHER, "ok"), transfer_action("ok")]);
        assert_eq!(resolve_status(&ev, &target), TransactionStatus::Failed);
    }

    #[test]
    fn test_matching_action_failed() {
        let target = TonAddress::parse(COIN).unwrap();
        let ev = event(false, vec![exec_action(COIN, "failed")]);
        assert_eq!(resolve_status(&ev, &target), TransactionStatus::Failed);
    }

    #[test]
    fn test_unrelated_failed_action_fails_the_event() {
        let target = TonAddress::parse(COIN).unwrap();
        let ev = event(false, vec![exec_action(COIN, "ok"), transfer_action("failed")]);
        assert_eq!(resolve_status(&ev, &target), TransactionStatus::Failed);
    }

    #[test]
    fn test_friendly_target_matches_raw_action_address() {
        let target_raw = TonAddress::parse(COIN).unwrap();
        let friendly = target_raw.to_friendly(true, false);
        let target = TonAddress::parse(&friendly).unwrap();
        let ev = event(false, vec![exec_action(COIN, "ok")]);
        assert_eq!(resolve_status(&ev, &target), TransactionStatus::Succeeded);
    }

    #[test]
    fn test_first_matching_exec_decides() {
        let target = TonAddress::parse(COIN).unwrap();
        let ev = event(false, vec![exec_action(COIN, "failed"), exec_action(COIN, "ok")]);
        assert_eq!(resolve_status(&ev, &target), TransactionStatus::Failed);
    }

    #[test]
    fn test_empty_event_fails() {
        let target = TonAddress::parse(COIN).unwrap();
        let ev = event(false, vec![]);
        assert_eq!(resolve_status(&ev, &target), TransactionStatus::Failed);
    }
}
