//! Mock collaborators for examples and testing
//!
//! Simple in-memory implementations of the signer, transport, platform API and
//! transaction serializer traits. Every mock records what it was asked to do
//! so tests can assert on it.

use std::sync::Mutex;

use async_trait::async_trait;

use cdp_types::{
	ApiError, ApiResult, ApiSpendPermission, ApiSpendPermissionEntry, ApiToken, ApiTokenAmount,
	ApiTokenBalance, AuthError, AuthResult, Eip1559Request, Hex, HttpRequest, HttpResponse,
	HttpTransport, JwtOptions, JwtSigner, ListSpendPermissionsResponse, ListTokenBalancesResponse,
	NetworkId, PageRequest, PlatformApi, RequestFaucetBody, RequestFaucetResponse,
	SendTransactionBody, SendTransactionResponse, SerializationError, TransactionSerializer,
	TransportError, TransportResult,
};

/// Token every [`MockJwtSigner`] hands out
pub const MOCK_JWT: &str = "mock.jwt.token";

/// Transaction hash returned by [`MockPlatformApi`] for faucet and send calls
pub const MOCK_TRANSACTION_HASH: &str =
	"0x9a2b1c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f9";

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Signer that returns [`MOCK_JWT`], or fails when built with [`MockJwtSigner::failing`]
#[derive(Debug, Default)]
pub struct MockJwtSigner {
	fail: bool,
	requests: Mutex<Vec<JwtOptions>>,
}

impl MockJwtSigner {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn failing() -> Self {
		Self {
			fail: true,
			..Self::default()
		}
	}

	/// Options of every token requested so far
	pub fn requests(&self) -> Vec<JwtOptions> {
		lock(&self.requests).clone()
	}
}

#[async_trait]
impl JwtSigner for MockJwtSigner {
	async fn generate_jwt(&self, options: &JwtOptions) -> AuthResult<String> {
		lock(&self.requests).push(options.clone());
		if self.fail {
			return Err(AuthError::Signing("mock signer failure".to_string()));
		}
		Ok(MOCK_JWT.to_string())
	}
}

/// Transport answering from a route table keyed by URL substring
///
/// Routes are checked in insertion order; an unmatched request gets a 404.
#[derive(Debug, Default)]
pub struct MockTransport {
	routes: Vec<(String, TransportResult<HttpResponse>)>,
	requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_response(mut self, url_contains: impl Into<String>, response: HttpResponse) -> Self {
		self.routes.push((url_contains.into(), Ok(response)));
		self
	}

	pub fn with_json(self, url_contains: impl Into<String>, body: serde_json::Value) -> Self {
		self.with_response(url_contains, HttpResponse::new(200, body.to_string()))
	}

	pub fn with_error(mut self, url_contains: impl Into<String>, error: TransportError) -> Self {
		self.routes.push((url_contains.into(), Err(error)));
		self
	}

	pub fn requests(&self) -> Vec<HttpRequest> {
		lock(&self.requests).clone()
	}
}

#[async_trait]
impl HttpTransport for MockTransport {
	async fn send(&self, request: HttpRequest) -> TransportResult<HttpResponse> {
		let route = self
			.routes
			.iter()
			.find(|(fragment, _)| request.url.contains(fragment.as_str()));
		let result = match route {
			Some((_, Ok(response))) => Ok(response.clone()),
			// TransportError holds a reqwest::Error and is not Clone
			Some((_, Err(error))) => Err(TransportError::Connection(error.to_string())),
			None => Ok(HttpResponse::new(404, "")),
		};
		lock(&self.requests).push(request);
		result
	}
}

/// Platform API returning fixed demo data
///
/// Every call is recorded by name. Built with [`MockPlatformApi::failing`],
/// every call returns the given HTTP status instead.
#[derive(Debug, Default)]
pub struct MockPlatformApi {
	fail_status: Option<u16>,
	calls: Mutex<Vec<String>>,
}

impl MockPlatformApi {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn failing(status_code: u16) -> Self {
		Self {
			fail_status: Some(status_code),
			..Self::default()
		}
	}

	/// Names of the API methods called so far, in order
	pub fn calls(&self) -> Vec<String> {
		lock(&self.calls).clone()
	}

	fn record(&self, call: &str) -> ApiResult<()> {
		lock(&self.calls).push(call.to_string());
		match self.fail_status {
			Some(status) => Err(ApiError::from_http_failure(status)),
			None => Ok(()),
		}
	}
}

#[async_trait]
impl PlatformApi for MockPlatformApi {
	async fn list_data_token_balances(
		&self,
		network: NetworkId,
		_address: &str,
		_page: &PageRequest,
	) -> ApiResult<ListTokenBalancesResponse> {
		self.record("list_data_token_balances")?;
		Ok(ListTokenBalancesResponse {
			balances: vec![ApiTokenBalance {
				amount: ApiTokenAmount {
					amount: "1000000000000000000".to_string(),
					decimals: 18,
				},
				token: ApiToken {
					network: network.as_str().to_string(),
					symbol: Some("ETH".to_string()),
					name: Some("Ether".to_string()),
					contract_address: "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE".to_string(),
				},
			}],
			next_page_token: None,
		})
	}

	async fn request_evm_faucet(
		&self,
		_body: &RequestFaucetBody,
		_idempotency_key: Option<&str>,
	) -> ApiResult<RequestFaucetResponse> {
		self.record("request_evm_faucet")?;
		Ok(RequestFaucetResponse {
			transaction_hash: MOCK_TRANSACTION_HASH.to_string(),
		})
	}

	async fn send_evm_transaction(
		&self,
		_address: &str,
		_body: &SendTransactionBody,
		_idempotency_key: Option<&str>,
	) -> ApiResult<SendTransactionResponse> {
		self.record("send_evm_transaction")?;
		Ok(SendTransactionResponse {
			transaction_hash: MOCK_TRANSACTION_HASH.to_string(),
		})
	}

	async fn list_spend_permissions(
		&self,
		address: &str,
		_page: &PageRequest,
	) -> ApiResult<ListSpendPermissionsResponse> {
		self.record("list_spend_permissions")?;
		Ok(ListSpendPermissionsResponse {
			spend_permissions: vec![ApiSpendPermissionEntry {
				permission_hash: "0xabc123".to_string(),
				permission: ApiSpendPermission {
					account: address.to_string(),
					spender: "0x9876543210987654321098765432109876543210".to_string(),
					token: "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE".to_string(),
					allowance: "1000000000000000000".to_string(),
					period: "86400".to_string(),
					start: "1700000000".to_string(),
					end: "1800000000".to_string(),
					salt: "1".to_string(),
					extra_data: "0x".to_string(),
				},
				network: Some("base".to_string()),
				revoked: Some(false),
				created_at: None,
				last_updated_at: None,
			}],
			next_page_token: None,
		})
	}
}

/// Serializer returning a fixed payload and recording each request
#[derive(Debug)]
pub struct MockSerializer {
	output: Hex,
	requests: Mutex<Vec<Eip1559Request>>,
}

impl MockSerializer {
	pub fn new(output: impl Into<Hex>) -> Self {
		Self {
			output: output.into(),
			requests: Mutex::new(Vec::new()),
		}
	}

	pub fn requests(&self) -> Vec<Eip1559Request> {
		lock(&self.requests).clone()
	}
}

impl Default for MockSerializer {
	fn default() -> Self {
		Self::new("0x02")
	}
}

impl TransactionSerializer for MockSerializer {
	fn serialize(&self, request: &Eip1559Request) -> Result<Hex, SerializationError> {
		lock(&self.requests).push(request.clone());
		Ok(self.output.clone())
	}
}
