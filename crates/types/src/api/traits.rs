//! Platform API trait

use async_trait::async_trait;

use super::models::{
	ListSpendPermissionsResponse, ListTokenBalancesResponse, PageRequest, RequestFaucetBody,
	RequestFaucetResponse, SendTransactionBody, SendTransactionResponse,
};
use super::ApiResult;
use crate::networks::NetworkId;

/// Generated-client surface of the platform REST API used by the actions
///
/// Each call is one authenticated request. Implementations carry no state
/// between calls.
#[async_trait]
pub trait PlatformApi: Send + Sync + std::fmt::Debug {
	async fn list_data_token_balances(
		&self,
		network: NetworkId,
		address: &str,
		page: &PageRequest,
	) -> ApiResult<ListTokenBalancesResponse>;

	async fn request_evm_faucet(
		&self,
		body: &RequestFaucetBody,
		idempotency_key: Option<&str>,
	) -> ApiResult<RequestFaucetResponse>;

	async fn send_evm_transaction(
		&self,
		address: &str,
		body: &SendTransactionBody,
		idempotency_key: Option<&str>,
	) -> ApiResult<SendTransactionResponse>;

	async fn list_spend_permissions(
		&self,
		address: &str,
		page: &PageRequest,
	) -> ApiResult<ListSpendPermissionsResponse>;
}
