//! List the token balances of an EVM address

use tracing::debug;

use cdp_types::{
	Address, ApiResult, Method, NetworkId, PageRequest, PlatformApi, TokenBalancesPage,
};

use crate::actions::ensure_supported;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTokenBalancesOptions {
	pub address: Address,
	pub network: NetworkId,
	pub page_size: Option<u32>,
	pub page_token: Option<String>,
}

impl ListTokenBalancesOptions {
	pub fn new(address: impl Into<Address>, network: NetworkId) -> Self {
		Self {
			address: address.into(),
			network,
			page_size: None,
			page_token: None,
		}
	}

	pub fn with_page(mut self, page_size: Option<u32>, page_token: Option<String>) -> Self {
		self.page_size = page_size;
		self.page_token = page_token;
		self
	}
}

/// One page of balances with amounts as 256-bit integers
pub async fn list_token_balances(
	api: &dyn PlatformApi,
	options: &ListTokenBalancesOptions,
) -> ApiResult<TokenBalancesPage> {
	ensure_supported(Method::ListTokenBalances, options.network)?;

	let page = PageRequest::new(options.page_size, options.page_token.clone());
	let response = api
		.list_data_token_balances(options.network, &options.address, &page)
		.await?;

	debug!(
		"Listed {} token balances for {} on {}",
		response.balances.len(),
		options.address,
		options.network
	);

	Ok(TokenBalancesPage::try_from(response)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::actions::evm::test_support::{ApiCall, RecordingApi};
	use cdp_types::{ApiError, U256};
	use serde_json::json;

	const ADDRESS: &str = "0x1234567890123456789012345678901234567890";

	#[tokio::test]
	async fn test_lists_and_converts_balances() {
		let api = RecordingApi::responding(json!({
			"balances": [
				{
					"token": {
						"network": "base",
						"contractAddress": "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE",
						"symbol": "ETH",
						"name": "Ether"
					},
					"amount": { "amount": "1000000000000000000", "decimals": 18 }
				},
				{
					"token": {
						"network": "base",
						"contractAddress": "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
						"symbol": "USDC",
						"name": "USD Coin"
					},
					"amount": { "amount": "1000000", "decimals": 6 }
				}
			]
		}));

		let page = list_token_balances(&api, &ListTokenBalancesOptions::new(ADDRESS, NetworkId::Base))
			.await
			.unwrap();

		assert_eq!(
			api.calls(),
			vec![ApiCall::ListTokenBalances {
				network: NetworkId::Base,
				address: ADDRESS.to_string(),
				page: PageRequest::default(),
			}]
		);
		assert_eq!(page.balances.len(), 2);
		assert_eq!(page.balances[0].token.symbol.as_deref(), Some("ETH"));
		assert_eq!(
			page.balances[0].amount.amount,
			U256::from(1_000_000_000_000_000_000u64)
		);
		assert_eq!(page.balances[1].amount.amount, U256::from(1_000_000u64));
		assert_eq!(page.balances[1].amount.decimals, 6);
		assert!(page.next_page_token.is_none());
	}

	#[tokio::test]
	async fn test_forwards_paging_and_returns_next_token() {
		let api = RecordingApi::responding(json!({
			"balances": [],
			"nextPageToken": "next_page_token"
		}));

		let options = ListTokenBalancesOptions::new(ADDRESS, NetworkId::Ethereum)
			.with_page(Some(10), Some("current_token".to_string()));
		let page = list_token_balances(&api, &options).await.unwrap();

		assert_eq!(
			api.calls(),
			vec![ApiCall::ListTokenBalances {
				network: NetworkId::Ethereum,
				address: ADDRESS.to_string(),
				page: PageRequest::new(Some(10), Some("current_token".to_string())),
			}]
		);
		assert!(page.balances.is_empty());
		assert_eq!(page.next_page_token.as_deref(), Some("next_page_token"));
	}

	#[tokio::test]
	async fn test_large_amounts_and_missing_metadata() {
		let api = RecordingApi::responding(json!({
			"balances": [{
				"token": {
					"network": "base-sepolia",
					"contractAddress": "0xabcdef1234567890abcdef1234567890abcdef12"
				},
				"amount": { "amount": "999999999999999999999999", "decimals": 18 }
			}]
		}));

		let page = list_token_balances(
			&api,
			&ListTokenBalancesOptions::new(ADDRESS, NetworkId::BaseSepolia),
		)
		.await
		.unwrap();

		let balance = &page.balances[0];
		assert!(balance.token.symbol.is_none());
		assert!(balance.token.name.is_none());
		assert_eq!(
			balance.amount.amount,
			U256::from_dec_str("999999999999999999999999").unwrap()
		);
	}

	#[tokio::test]
	async fn test_unsupported_network_makes_no_call() {
		let api = RecordingApi::default();

		let err = list_token_balances(&api, &ListTokenBalancesOptions::new(ADDRESS, NetworkId::Polygon))
			.await
			.unwrap_err();

		assert!(err.is_unsupported_network());
		assert!(api.calls().is_empty());
	}

	#[tokio::test]
	async fn test_bad_amount_is_invalid_response() {
		let api = RecordingApi::responding(json!({
			"balances": [{
				"token": { "network": "base", "contractAddress": "0x00" },
				"amount": { "amount": "not-a-number", "decimals": 18 }
			}]
		}));

		let err = list_token_balances(&api, &ListTokenBalancesOptions::new(ADDRESS, NetworkId::Base))
			.await
			.unwrap_err();
		assert!(matches!(err, ApiError::InvalidResponse { .. }));
	}
}
