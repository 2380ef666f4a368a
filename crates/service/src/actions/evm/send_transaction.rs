//! Submit a transaction from an EVM account
//!
//! The platform signs and broadcasts. Structured EIP-1559 requests are
//! serialized with chain id 1; the platform re-targets the transaction to
//! the requested network.

use serde::Serialize;
use tracing::{debug, info};

use cdp_types::{
	Address, ApiError, ApiResult, Hex, Method, NetworkId, PlatformApi, SendTransactionBody,
	TransactionInput, TransactionSerializer,
};

use crate::actions::ensure_supported;

/// Chain id every structured transaction is serialized with
const SERIALIZATION_CHAIN_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTransactionOptions {
	pub address: Address,
	pub network: NetworkId,
	pub transaction: TransactionInput,
	pub idempotency_key: Option<String>,
}

impl SendTransactionOptions {
	pub fn new(
		address: impl Into<Address>,
		network: NetworkId,
		transaction: impl Into<TransactionInput>,
	) -> Self {
		Self {
			address: address.into(),
			network,
			transaction: transaction.into(),
			idempotency_key: None,
		}
	}

	pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
		self.idempotency_key = Some(key.into());
		self
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendTransactionResult {
	pub transaction_hash: Hex,
}

fn encode_transaction(
	serializer: &dyn TransactionSerializer,
	transaction: &TransactionInput,
) -> ApiResult<Hex> {
	match transaction {
		TransactionInput::Raw(raw) => Ok(raw.clone()),
		TransactionInput::Eip1559(request) => {
			let mut request = request.clone();
			request.chain_id = Some(SERIALIZATION_CHAIN_ID);
			serializer
				.serialize(&request)
				.map_err(|e| ApiError::TransactionSerialization(e.to_string()))
		},
	}
}

pub async fn send_transaction(
	api: &dyn PlatformApi,
	serializer: &dyn TransactionSerializer,
	options: &SendTransactionOptions,
) -> ApiResult<SendTransactionResult> {
	ensure_supported(Method::SendTransaction, options.network)?;

	let transaction = encode_transaction(serializer, &options.transaction)?;
	debug!(
		"Sending {} byte transaction from {} on {}",
		transaction.len().saturating_sub(2) / 2,
		options.address,
		options.network
	);

	let body = SendTransactionBody {
		transaction,
		network: options.network.to_string(),
	};
	let response = api
		.send_evm_transaction(&options.address, &body, options.idempotency_key.as_deref())
		.await?;

	info!(
		"Transaction {} submitted on {}",
		response.transaction_hash, options.network
	);

	Ok(SendTransactionResult {
		transaction_hash: response.transaction_hash,
	})
}
