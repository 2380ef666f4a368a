//! Wire models of the platform REST API
//!
//! Field names follow the API's camelCase JSON. Integer fields stay decimal
//! strings here; conversion happens in the domain models.

use serde::{Deserialize, Serialize};

use crate::models::{Address, Hex};

/// Paging parameters shared by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page_size: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page_token: Option<String>,
}

impl PageRequest {
	pub fn new(page_size: Option<u32>, page_token: Option<String>) -> Self {
		Self {
			page_size,
			page_token,
		}
	}

	/// Query-string pairs for the set fields only
	pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = Vec::new();
		if let Some(page_size) = self.page_size {
			pairs.push(("pageSize", page_size.to_string()));
		}
		if let Some(page_token) = &self.page_token {
			pairs.push(("pageToken", page_token.clone()));
		}
		pairs
	}
}

/// `GET /v2/data/evm/token-balances/{network}/{address}` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTokenBalancesResponse {
	pub balances: Vec<ApiTokenBalance>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTokenBalance {
	pub amount: ApiTokenAmount,
	pub token: ApiToken,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTokenAmount {
	/// Integer amount in the token's smallest unit, as a decimal string
	pub amount: String,
	pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiToken {
	pub network: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub symbol: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	pub contract_address: Address,
}

/// Tokens the faucet can dispense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaucetToken {
	Eth,
	Usdc,
	Eurc,
	Cbbtc,
}

impl FaucetToken {
	pub const fn as_str(&self) -> &'static str {
		match self {
			FaucetToken::Eth => "eth",
			FaucetToken::Usdc => "usdc",
			FaucetToken::Eurc => "eurc",
			FaucetToken::Cbbtc => "cbbtc",
		}
	}
}

/// `POST /v2/evm/faucet` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestFaucetBody {
	pub address: Address,
	pub network: String,
	pub token: FaucetToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestFaucetResponse {
	pub transaction_hash: Hex,
}

/// `POST /v2/evm/accounts/{address}/send/transaction` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionBody {
	/// RLP-serialized transaction, `0x`-prefixed
	pub transaction: Hex,
	pub network: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionResponse {
	pub transaction_hash: Hex,
}

/// `GET /v2/evm/smart-accounts/{address}/spend-permissions/list` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSpendPermissionsResponse {
	pub spend_permissions: Vec<ApiSpendPermissionEntry>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpendPermissionEntry {
	pub permission_hash: Hex,
	pub permission: ApiSpendPermission,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub network: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub revoked: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_at: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_updated_at: Option<String>,
}

/// Spend permission as carried on the wire; every integer is a decimal string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpendPermission {
	pub account: Address,
	pub spender: Address,
	pub token: Address,
	pub allowance: String,
	pub period: String,
	pub start: String,
	pub end: String,
	pub salt: String,
	pub extra_data: Hex,
}

/// Error body returned by the platform on non-success statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
	#[serde(default)]
	pub error_type: Option<String>,
	#[serde(default)]
	pub error_message: Option<String>,
	#[serde(default)]
	pub correlation_id: Option<String>,
}
