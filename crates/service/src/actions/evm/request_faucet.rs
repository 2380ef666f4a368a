//! Request testnet funds from the faucet

use serde::Serialize;
use tracing::info;

use cdp_types::{
	Address, ApiResult, FaucetToken, Hex, Method, NetworkId, PlatformApi, RequestFaucetBody,
};

use crate::actions::ensure_supported;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFaucetOptions {
	pub address: Address,
	pub network: NetworkId,
	pub token: FaucetToken,
	pub idempotency_key: Option<String>,
}

impl RequestFaucetOptions {
	pub fn new(address: impl Into<Address>, network: NetworkId, token: FaucetToken) -> Self {
		Self {
			address: address.into(),
			network,
			token,
			idempotency_key: None,
		}
	}

	pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
		self.idempotency_key = Some(key.into());
		self
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestFaucetResult {
	pub transaction_hash: Hex,
}

pub async fn request_faucet(
	api: &dyn PlatformApi,
	options: &RequestFaucetOptions,
) -> ApiResult<RequestFaucetResult> {
	ensure_supported(Method::RequestFaucet, options.network)?;

	let body = RequestFaucetBody {
		address: options.address.clone(),
		network: options.network.to_string(),
		token: options.token,
	};
	let response = api
		.request_evm_faucet(&body, options.idempotency_key.as_deref())
		.await?;

	info!(
		"Faucet sent {} to {} on {}: {}",
		options.token.as_str(),
		options.address,
		options.network,
		response.transaction_hash
	);

	Ok(RequestFaucetResult {
		transaction_hash: response.transaction_hash,
	})
}
