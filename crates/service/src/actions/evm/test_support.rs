//! Recording platform API for action tests

use async_trait::async_trait;
use std::sync::Mutex;

use cdp_types::{
	ApiError, ApiResult, ListSpendPermissionsResponse, ListTokenBalancesResponse, NetworkId,
	PageRequest, PlatformApi, RequestFaucetBody, RequestFaucetResponse, SendTransactionBody,
	SendTransactionResponse,
};

/// One recorded call, with owned copies of its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
	ListTokenBalances {
		network: NetworkId,
		address: String,
		page: PageRequest,
	},
	RequestFaucet {
		body: RequestFaucetBody,
		idempotency_key: Option<String>,
	},
	SendTransaction {
		address: String,
		body: SendTransactionBody,
		idempotency_key: Option<String>,
	},
	ListSpendPermissions {
		address: String,
		page: PageRequest,
	},
}

/// Answers every call with the configured JSON, or a 500 when none is set
#[derive(Debug, Default)]
pub struct RecordingApi {
	pub response: Option<serde_json::Value>,
	pub calls: Mutex<Vec<ApiCall>>,
}

impl RecordingApi {
	pub fn responding(response: serde_json::Value) -> Self {
		Self {
			response: Some(response),
			calls: Mutex::new(Vec::new()),
		}
	}

	pub fn calls(&self) -> Vec<ApiCall> {
		self.calls.lock().unwrap().clone()
	}

	fn record<T: serde::de::DeserializeOwned>(&self, call: ApiCall) -> ApiResult<T> {
		self.calls.lock().unwrap().push(call);
		match &self.response {
			Some(response) => Ok(serde_json::from_value(response.clone())?),
			None => Err(ApiError::from_http_failure(500)),
		}
	}
}

#[async_trait]
impl PlatformApi for RecordingApi {
	async fn list_data_token_balances(
		&self,
		network: NetworkId,
		address: &str,
		page: &PageRequest,
	) -> ApiResult<ListTokenBalancesResponse> {
		self.record(ApiCall::ListTokenBalances {
			network,
			address: address.to_string(),
			page: page.clone(),
		})
	}

	async fn request_evm_faucet(
		&self,
		body: &RequestFaucetBody,
		idempotency_key: Option<&str>,
	) -> ApiResult<RequestFaucetResponse> {
		self.record(ApiCall::RequestFaucet {
			body: body.clone(),
			idempotency_key: idempotency_key.map(str::to_string),
		})
	}

	async fn send_evm_transaction(
		&self,
		address: &str,
		body: &SendTransactionBody,
		idempotency_key: Option<&str>,
	) -> ApiResult<SendTransactionResponse> {
		self.record(ApiCall::SendTransaction {
			address: address.to_string(),
			body: body.clone(),
			idempotency_key: idempotency_key.map(str::to_string),
		})
	}

	async fn list_spend_permissions(
		&self,
		address: &str,
		page: &PageRequest,
	) -> ApiResult<ListSpendPermissionsResponse> {
		self.record(ApiCall::ListSpendPermissions {
			address: address.to_string(),
			page: page.clone(),
		})
	}
}
