//! Transaction inputs for `send_transaction` and the serializer seam

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Address, Hex};

/// Unsigned EIP-1559 (type 2) transaction fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip1559Request {
	/// `None` for contract creation
	pub to: Option<Address>,
	pub value: U256,
	/// Calldata, `0x`-prefixed; empty or `0x` for none
	pub data: Hex,
	pub nonce: u64,
	pub max_fee_per_gas: U256,
	pub max_priority_fee_per_gas: U256,
	pub gas: u64,
	pub chain_id: Option<u64>,
}

/// What the caller hands to `send_transaction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionInput {
	/// Already-serialized transaction, forwarded unchanged
	Raw(Hex),
	/// Fields to serialize before sending
	Eip1559(Eip1559Request),
}

impl From<Eip1559Request> for TransactionInput {
	fn from(request: Eip1559Request) -> Self {
		TransactionInput::Eip1559(request)
	}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
	#[error("Invalid hex in field '{field}': {reason}")]
	InvalidHex { field: &'static str, reason: String },

	#[error("Invalid address '{0}': expected 20 bytes")]
	InvalidAddress(String),
}

/// Turns transaction fields into the hex payload the platform expects
#[cfg_attr(test, mockall::automock)]
pub trait TransactionSerializer: Send + Sync + std::fmt::Debug {
	fn serialize(&self, request: &Eip1559Request) -> Result<Hex, SerializationError>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_request_converts_to_input() {
		let request = Eip1559Request {
			to: Some("0x1111111111111111111111111111111111111111".to_string()),
			gas: 21000,
			..Default::default()
		};
		assert_eq!(
			TransactionInput::from(request.clone()),
			TransactionInput::Eip1559(request)
		);
	}

	#[test]
	fn test_serializer_is_object_safe() {
		let mut serializer = MockTransactionSerializer::new();
		serializer
			.expect_serialize()
			.returning(|_| Err(SerializationError::InvalidAddress("0x12".to_string())));

		let serializer: &dyn TransactionSerializer = &serializer;
		let err = serializer.serialize(&Eip1559Request::default()).unwrap_err();
		assert_eq!(err.to_string(), "Invalid address '0x12': expected 20 bytes");
	}
}
