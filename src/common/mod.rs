pub mod address;
pub mod provider;
pub mod tonapi;
pub mod types;

pub use address::TonAddress;
pub use provider::{AccountRef, BclApiProvider, CoinsForTons, Event, EventAction, SmartContractExec, TonsForCoins};
pub use tonapi::{TonApiClient, TonApiConfig};
pub use types::ClientConfig;
