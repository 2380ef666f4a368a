//! Platform REST API: wire models, errors, and the client trait

pub mod errors;
pub mod models;
pub mod traits;

pub use errors::ApiError;
pub use models::*;
pub use traits::*;

pub type ApiResult<T> = Result<T, ApiError>;

/// Default REST base URL
pub const DEFAULT_BASE_PATH: &str = "https://api.cdp.coinbase.com/platform";

/// Header carrying the caller's idempotency key
pub const IDEMPOTENCY_KEY_HEADER: &str = "X-Idempotency-Key";

/// Relative endpoint paths, joined onto the base path
pub mod paths {
	use crate::networks::NetworkId;

	pub fn token_balances(network: NetworkId, address: &str) -> String {
		format!("v2/data/evm/token-balances/{}/{}", network, address)
	}

	pub const FAUCET: &str = "v2/evm/faucet";

	pub fn send_transaction(address: &str) -> String {
		format!("v2/evm/accounts/{}/send/transaction", address)
	}

	pub fn spend_permissions(address: &str) -> String {
		format!("v2/evm/smart-accounts/{}/spend-permissions/list", address)
	}
}
