//! Local stand-in for the platform REST API
//!
//! Serves the endpoints the SDK calls under `/platform` and records every
//! request it receives.

use std::sync::{Arc, Mutex};

use axum::{
	extract::State,
	http::{HeaderMap, Method, StatusCode, Uri},
	Json, Router,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;

/// What the server saw for one request
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
	pub method: String,
	pub path: String,
	pub query: Option<String>,
	pub authorization: Option<String>,
	pub idempotency_key: Option<String>,
	pub body: Option<Value>,
}

type Requests = Arc<Mutex<Vec<RecordedRequest>>>;

pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
	requests: Requests,
}

#[allow(dead_code)]
impl TestServer {
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let requests: Requests = Arc::default();
		let app = Router::new()
			.fallback(handle_request)
			.with_state(requests.clone());

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			// Ignore serve errors when the test aborts the task
			let _ = axum::serve(listener, app).await;
		});

		Ok(Self {
			base_url,
			handle,
			requests,
		})
	}

	/// Base path to configure the SDK with
	pub fn base_path(&self) -> String {
		format!("{}/platform", self.base_url)
	}

	/// `host:port` the SDK signs tokens for
	pub fn host(&self) -> &str {
		self.base_url.trim_start_matches("http://")
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().unwrap().clone()
	}
}

impl Drop for TestServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

async fn handle_request(
	State(requests): State<Requests>,
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	body: String,
) -> (StatusCode, Json<Value>) {
	let body: Option<Value> = serde_json::from_str(&body).ok();
	let header = |name: &str| {
		headers
			.get(name)
			.and_then(|value| value.to_str().ok())
			.map(str::to_string)
	};

	requests.lock().unwrap().push(RecordedRequest {
		method: method.to_string(),
		path: uri.path().to_string(),
		query: uri.query().map(str::to_string),
		authorization: header("authorization"),
		idempotency_key: header("x-idempotency-key"),
		body: body.clone(),
	});

	let path = uri.path().strip_prefix("/platform/").unwrap_or_default();
	let segments: Vec<&str> = path.split('/').collect();

	match (method.as_str(), segments.as_slice()) {
		("GET", ["v2", "data", "evm", "token-balances", network, _address]) => (
			StatusCode::OK,
			Json(json!({
				"balances": [
					{
						"token": {
							"network": network,
							"symbol": "USDC",
							"name": "USD Coin",
							"contractAddress": "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"
						},
						"amount": { "amount": "250000000", "decimals": 6 }
					},
					{
						"token": {
							"network": network,
							"contractAddress": "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE"
						},
						"amount": { "amount": "123456789012345678901234", "decimals": 18 }
					}
				],
				"nextPageToken": "page-2"
			})),
		),
		("POST", ["v2", "evm", "faucet"]) => {
			let address = body
				.as_ref()
				.and_then(|body| body["address"].as_str())
				.unwrap_or_default();
			if address == Fixtures::RATE_LIMITED_ADDRESS {
				(
					StatusCode::TOO_MANY_REQUESTS,
					Json(json!({
						"errorType": "faucet_limit_exceeded",
						"errorMessage": "Faucet limit reached for this address",
						"correlationId": "corr-123"
					})),
				)
			} else {
				(
					StatusCode::OK,
					Json(json!({ "transactionHash": Fixtures::TRANSACTION_HASH })),
				)
			}
		},
		("POST", ["v2", "evm", "accounts", _address, "send", "transaction"]) => (
			StatusCode::OK,
			Json(json!({ "transactionHash": Fixtures::TRANSACTION_HASH })),
		),
		("GET", ["v2", "evm", "smart-accounts", account, "spend-permissions", "list"]) => (
			StatusCode::OK,
			Json(json!({
				"spendPermissions": [{
					"permissionHash": "0xfeedface",
					"permission": {
						"account": account,
						"spender": "0x2222222222222222222222222222222222222222",
						"token": "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
						"allowance": "1000000",
						"period": "86400",
						"start": "1704067200",
						"end": "1735689600",
						"salt": "42",
						"extraData": "0x"
					},
					"network": "base",
					"revoked": false
				}]
			})),
		),
		_ => (
			StatusCode::NOT_FOUND,
			Json(json!({
				"errorType": "not_found",
				"errorMessage": "Route not found"
			})),
		),
	}
}
