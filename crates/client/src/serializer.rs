//! Unsigned EIP-1559 transaction encoding
//!
//! Output is `0x02 || rlp([chainId, nonce, maxPriorityFeePerGas, maxFeePerGas,
//! gas, to, value, data, accessList])` as `0x`-prefixed hex. The access list is
//! always empty and no signature fields are appended; the platform signs.

use rlp::RlpStream;

use cdp_types::{Eip1559Request, Hex, SerializationError, TransactionSerializer};

const EIP1559_TX_TYPE: u8 = 0x02;
const ADDRESS_LEN: usize = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct Eip1559Serializer;

impl Eip1559Serializer {
	pub fn new() -> Self {
		Self
	}
}

fn decode_hex(field: &'static str, value: &str) -> Result<Vec<u8>, SerializationError> {
	let digits = value
		.strip_prefix("0x")
		.or_else(|| value.strip_prefix("0X"))
		.unwrap_or(value);
	hex::decode(digits).map_err(|e| SerializationError::InvalidHex {
		field,
		reason: e.to_string(),
	})
}

fn decode_address(value: &str) -> Result<Vec<u8>, SerializationError> {
	let bytes = decode_hex("to", value)?;
	if bytes.len() != ADDRESS_LEN {
		return Err(SerializationError::InvalidAddress(value.to_string()));
	}
	Ok(bytes)
}

impl TransactionSerializer for Eip1559Serializer {
	fn serialize(&self, request: &Eip1559Request) -> Result<Hex, SerializationError> {
		let data = decode_hex("data", &request.data)?;

		let mut stream = RlpStream::new_list(9);
		stream.append(&request.chain_id.unwrap_or(1));
		stream.append(&request.nonce);
		stream.append(&request.max_priority_fee_per_gas);
		stream.append(&request.max_fee_per_gas);
		stream.append(&request.gas);
		match &request.to {
			Some(to) => {
				stream.append(&decode_address(to)?);
			},
			None => {
				stream.append_empty_data();
			},
		}
		stream.append(&request.value);
		stream.append(&data);
		stream.begin_list(0);

		let mut encoded = vec![EIP1559_TX_TYPE];
		encoded.extend_from_slice(&stream.out());

		Ok(format!("0x{}", hex::encode(encoded)))
	}
}
