//! HTTP implementation of the platform REST API
//!
//! Every call signs its own bearer token for the exact method, host and path
//! of the request, so nothing is cached between calls.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use cdp_types::api::{paths, ApiErrorBody};
use cdp_types::{
	ApiError, ApiResult, Credentials, HttpMethod, HttpRequest, HttpTransport, JwtSigner,
	ListSpendPermissionsResponse, ListTokenBalancesResponse, NetworkId, PageRequest,
	PlatformApi, RequestFaucetBody, RequestFaucetResponse, SendTransactionBody,
	SendTransactionResponse, IDEMPOTENCY_KEY_HEADER,
};

#[derive(Debug, Clone)]
pub struct HttpPlatformApi {
	credentials: Credentials,
	signer: Arc<dyn JwtSigner>,
	transport: Arc<dyn HttpTransport>,
}

impl HttpPlatformApi {
	pub fn new(
		credentials: Credentials,
		signer: Arc<dyn JwtSigner>,
		transport: Arc<dyn HttpTransport>,
	) -> Self {
		Self {
			credentials,
			signer,
			transport,
		}
	}

	pub fn base_path(&self) -> &str {
		&self.credentials.base_path
	}

	/// Join `path` onto the base path and append query pairs
	fn build_url(&self, path: &str, query: &[(&'static str, String)]) -> ApiResult<Url> {
		let base_path = &self.credentials.base_path;
		let mut base = Url::parse(base_path).map_err(|e| ApiError::Config {
			reason: format!("Invalid base URL '{}': {}", base_path, e),
		})?;

		// Treat the base URL as a directory so relative joins keep its path
		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}

		let mut joined = base.join(path).map_err(|e| ApiError::Config {
			reason: format!(
				"Failed to join URL path '{}' to base '{}': {}",
				path, base_path, e
			),
		})?;

		if !query.is_empty() {
			joined
				.query_pairs_mut()
				.extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
		}

		Ok(joined)
	}

	/// Host the token is scoped to; the port is kept when it is not the scheme default
	fn token_host(url: &Url) -> ApiResult<String> {
		let host = url.host_str().ok_or_else(|| ApiError::Config {
			reason: format!("URL '{}' has no host", url),
		})?;
		Ok(match url.port() {
			Some(port) => format!("{}:{}", host, port),
			None => host.to_string(),
		})
	}

	async fn execute<T: DeserializeOwned>(
		&self,
		method: HttpMethod,
		path: &str,
		query: &[(&'static str, String)],
		body: Option<serde_json::Value>,
		idempotency_key: Option<&str>,
	) -> ApiResult<T> {
		let url = self.build_url(path, query)?;
		let options = self.credentials.jwt_options(
			method.as_str(),
			&Self::token_host(&url)?,
			url.path(),
		);
		let jwt = self.signer.generate_jwt(&options).await?;

		let mut request = match body {
			Some(body) => HttpRequest::post(url.as_str(), body),
			None => HttpRequest::get(url.as_str()),
		};
		request.method = method;
		request = request
			.with_header("Authorization", format!("Bearer {}", jwt))
			.with_header("Content-Type", "application/json");
		if let Some(key) = idempotency_key {
			request = request.with_header(IDEMPOTENCY_KEY_HEADER, key);
		}

		debug!("Calling platform API {} {}", method, url.path());
		let response = self.transport.send(request).await?;

		if !response.is_success() {
			warn!(
				"Platform API {} {} returned status {}",
				method,
				url.path(),
				response.status
			);
			return Err(match response.json::<ApiErrorBody>() {
				Ok(ApiErrorBody {
					error_message: Some(message),
					..
				}) => ApiError::http_failure(response.status, message),
				_ => ApiError::from_http_failure(response.status),
			});
		}

		response.json::<T>().map_err(|e| ApiError::InvalidResponse {
			reason: format!("Failed to parse response from {}: {}", url.path(), e),
		})
	}

	fn to_json<B: serde::Serialize>(body: &B) -> ApiResult<serde_json::Value> {
		Ok(serde_json::to_value(body)?)
	}
}

#[async_trait]
impl PlatformApi for HttpPlatformApi {
	async fn list_data_token_balances(
		&self,
		network: NetworkId,
		address: &str,
		page: &PageRequest,
	) -> ApiResult<ListTokenBalancesResponse> {
		self.execute(
			HttpMethod::Get,
			&paths::token_balances(network, address),
			&page.query_pairs(),
			None,
			None,
		)
		.await
	}

	async fn request_evm_faucet(
		&self,
		body: &RequestFaucetBody,
		idempotency_key: Option<&str>,
	) -> ApiResult<RequestFaucetResponse> {
		self.execute(
			HttpMethod::Post,
			paths::FAUCET,
			&[],
			Some(Self::to_json(body)?),
			idempotency_key,
		)
		.await
	}

	async fn send_evm_transaction(
		&self,
		address: &str,
		body: &SendTransactionBody,
		idempotency_key: Option<&str>,
	) -> ApiResult<SendTransactionResponse> {
		self.execute(
			HttpMethod::Post,
			&paths::send_transaction(address),
			&[],
			Some(Self::to_json(body)?),
			idempotency_key,
		)
		.await
	}

	async fn list_spend_permissions(
		&self,
		address: &str,
		page: &PageRequest,
	) -> ApiResult<ListSpendPermissionsResponse> {
		self.execute(
			HttpMethod::Get,
			&paths::spend_permissions(address),
			&page.query_pairs(),
			None,
			None,
		)
		.await
	}
}
