//! Node RPC URL resolution
//!
//! Exchanges API key credentials for a session token at the token-issuance
//! endpoint and builds the network-scoped RPC URL from the token id. Every
//! call performs the full handshake; tokens are neither cached nor reused.

use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use cdp_types::rpc::{
	node_rpc_url, token_issuance_url, RpcUrlError, RpcUrlResult, TOKEN_ISSUANCE_HOST,
	TOKEN_ISSUANCE_PATH,
};
use cdp_types::{Credentials, HttpRequest, HttpTransport, JwtSigner, NetworkId};

#[derive(Debug, Deserialize)]
struct SessionTokenResponse {
	id: Option<serde_json::Value>,
}

impl SessionTokenResponse {
	/// Token id as it appears in the URL; numeric ids are written out as text
	fn token_id(self) -> RpcUrlResult<String> {
		match self.id {
			Some(serde_json::Value::String(id)) => Ok(id),
			Some(serde_json::Value::Number(id)) => Ok(id.to_string()),
			Some(other) => Err(RpcUrlError::DecodeFailed(format!(
				"unexpected 'id' value: {}",
				other
			))),
			None => Err(RpcUrlError::DecodeFailed(
				"response has no 'id' field".to_string(),
			)),
		}
	}
}

#[derive(Debug, Clone)]
pub struct NodeRpcUrlResolver {
	credentials: Option<Credentials>,
	signer: Arc<dyn JwtSigner>,
	transport: Arc<dyn HttpTransport>,
}

impl NodeRpcUrlResolver {
	pub fn new(
		credentials: Option<Credentials>,
		signer: Arc<dyn JwtSigner>,
		transport: Arc<dyn HttpTransport>,
	) -> Self {
		Self {
			credentials,
			signer,
			transport,
		}
	}

	/// Resolve the node RPC URL for `network`, reporting why it failed
	pub async fn try_get_base_node_rpc_url(&self, network: NetworkId) -> RpcUrlResult<String> {
		let credentials = self
			.credentials
			.as_ref()
			.ok_or(RpcUrlError::MissingCredentials)?;

		let options =
			credentials.jwt_options("GET", TOKEN_ISSUANCE_HOST, TOKEN_ISSUANCE_PATH);
		let jwt = self.signer.generate_jwt(&options).await?;

		let url = token_issuance_url();
		debug!("Requesting session token from {}", url);

		let request = HttpRequest::get(url)
			.with_header("Authorization", format!("Bearer {}", jwt))
			.with_header("Content-Type", "application/json");

		let response = self
			.transport
			.send(request)
			.await
			.map_err(|e| RpcUrlError::TransportFailed(e.to_string()))?;

		if !response.is_success() {
			return Err(RpcUrlError::TransportFailed(format!(
				"token endpoint returned status {}",
				response.status
			)));
		}

		let token: SessionTokenResponse = response
			.json()
			.map_err(|e| RpcUrlError::DecodeFailed(e.to_string()))?;
		let token_id = token.token_id()?;

		info!("Resolved node RPC URL for network {}", network);
		Ok(node_rpc_url(network.as_str(), &token_id))
	}

	/// Resolve the node RPC URL for `network`; every failure collapses to `None`
	pub async fn get_base_node_rpc_url(&self, network: NetworkId) -> Option<String> {
		match self.try_get_base_node_rpc_url(network).await {
			Ok(url) => Some(url),
			Err(RpcUrlError::MissingCredentials) => {
				debug!("No API key credentials configured; skipping node RPC URL");
				None
			},
			Err(e) => {
				warn!("Failed to resolve node RPC URL for {}: {}", network, e);
				None
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use cdp_types::{AuthError, HttpMethod, HttpResponse, JwtOptions, TransportError};
	use mockall::mock;

	mock! {
		pub Signer {}

		#[async_trait]
		impl JwtSigner for Signer {
			async fn generate_jwt(&self, options: &JwtOptions) -> cdp_types::AuthResult<String>;
		}
	}

	mock! {
		pub Transport {}

		#[async_trait]
		impl HttpTransport for Transport {
			async fn send(&self, request: HttpRequest) -> cdp_types::TransportResult<HttpResponse>;
		}
	}

	impl std::fmt::Debug for MockSigner {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			f.write_str("MockSigner")
		}
	}

	impl std::fmt::Debug for MockTransport {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			f.write_str("MockTransport")
		}
	}

	fn credentials() -> Credentials {
		Credentials::new("test-key-id", "test-key-secret")
			.with_base_path("https://custom.example.com/platform")
	}

	fn resolver(
		credentials: Option<Credentials>,
		signer: MockSigner,
		transport: MockTransport,
	) -> NodeRpcUrlResolver {
		NodeRpcUrlResolver::new(credentials, Arc::new(signer), Arc::new(transport))
	}

	fn signer_returning_token() -> MockSigner {
		let mut signer = MockSigner::new();
		signer
			.expect_generate_jwt()
			.times(1)
			.returning(|_| Ok("mock-jwt".to_string()));
		signer
	}

	fn transport_returning(status: u16, body: &'static str) -> MockTransport {
		let mut transport = MockTransport::new();
		transport
			.expect_send()
			.times(1)
			.returning(move |_| Ok(HttpResponse::new(status, body)));
		transport
	}

	#[tokio::test]
	async fn test_resolves_url_from_session_token() {
		let mut signer = MockSigner::new();
		signer
			.expect_generate_jwt()
			.withf(|options| {
				options.api_key_id == "test-key-id"
					&& options.api_key_secret.expose_secret() == "test-key-secret"
					&& options.request_method == "GET"
					&& options.request_host == "api.cdp.coinbase.com"
					&& options.request_path == "/apikeys/v1/tokens/active"
			})
			.times(1)
			.returning(|_| Ok("mock-jwt".to_string()));

		let mut transport = MockTransport::new();
		transport
			.expect_send()
			.withf(|request| {
				request.method == HttpMethod::Get
					&& request.url == "https://api.cdp.coinbase.com/apikeys/v1/tokens/active"
					&& request.header("Authorization") == Some("Bearer mock-jwt")
					&& request.header("Content-Type") == Some("application/json")
			})
			.times(1)
			.returning(|_| Ok(HttpResponse::new(200, r#"{"id":"T"}"#)));

		let url = resolver(Some(credentials()), signer, transport)
			.get_base_node_rpc_url(NetworkId::Base)
			.await;

		assert_eq!(url.as_deref(), Some("https://api.cdp.coinbase.com/rpc/v1/base/T"));
	}

	#[tokio::test]
	async fn test_network_is_embedded_in_url() {
		let url = resolver(
			Some(credentials()),
			signer_returning_token(),
			transport_returning(200, r#"{"id":"session-123","expiresAt":"2030-01-01"}"#),
		)
		.try_get_base_node_rpc_url(NetworkId::BaseSepolia)
		.await
		.unwrap();

		assert_eq!(
			url,
			"https://api.cdp.coinbase.com/rpc/v1/base-sepolia/session-123"
		);
	}

	#[tokio::test]
	async fn test_base_path_does_not_change_url() {
		for base_path in [
			"https://api.cdp.coinbase.com/platform",
			"https://api.cdp.coinbase.com/platform/",
			"https://custom.example.com",
			"https://custom.example.com/",
		] {
			let mut transport = MockTransport::new();
			transport
				.expect_send()
				.withf(|request| {
					request.url == "https://api.cdp.coinbase.com/apikeys/v1/tokens/active"
				})
				.times(1)
				.returning(|_| Ok(HttpResponse::new(200, r#"{"id":"T"}"#)));

			let credentials =
				Credentials::new("test-key-id", "test-key-secret").with_base_path(base_path);
			let url = resolver(Some(credentials), signer_returning_token(), transport)
				.try_get_base_node_rpc_url(NetworkId::Base)
				.await;

			assert_eq!(
				url.as_deref(),
				Ok("https://api.cdp.coinbase.com/rpc/v1/base/T"),
				"base path {}",
				base_path
			);
		}
	}

	#[tokio::test]
	async fn test_numeric_token_id_is_used_as_text() {
		let url = resolver(
			Some(credentials()),
			signer_returning_token(),
			transport_returning(200, r#"{"id":12345}"#),
		)
		.try_get_base_node_rpc_url(NetworkId::Base)
		.await
		.unwrap();

		assert_eq!(url, "https://api.cdp.coinbase.com/rpc/v1/base/12345");
	}

	#[tokio::test]
	async fn test_structured_token_id_is_decode_failure() {
		let err = resolver(
			Some(credentials()),
			signer_returning_token(),
			transport_returning(200, r#"{"id":{"value":"T"}}"#),
		)
		.try_get_base_node_rpc_url(NetworkId::Base)
		.await
		.unwrap_err();

		assert!(matches!(err, RpcUrlError::DecodeFailed(_)));
	}

	#[tokio::test]
	async fn test_missing_credentials_makes_no_calls() {
		let mut signer = MockSigner::new();
		signer.expect_generate_jwt().never();
		let mut transport = MockTransport::new();
		transport.expect_send().never();

		let resolver = resolver(None, signer, transport);
		assert_eq!(
			resolver.try_get_base_node_rpc_url(NetworkId::Base).await,
			Err(RpcUrlError::MissingCredentials)
		);
		assert_eq!(resolver.get_base_node_rpc_url(NetworkId::Base).await, None);
	}

	#[tokio::test]
	async fn test_signing_failure_skips_transport() {
		let mut signer = MockSigner::new();
		signer
			.expect_generate_jwt()
			.times(1)
			.returning(|_| Err(AuthError::InvalidKeyFormat("bad".to_string())));
		let mut transport = MockTransport::new();
		transport.expect_send().never();

		let err = resolver(Some(credentials()), signer, transport)
			.try_get_base_node_rpc_url(NetworkId::Base)
			.await
			.unwrap_err();

		assert_eq!(
			err,
			RpcUrlError::SigningFailed(AuthError::InvalidKeyFormat("bad".to_string()))
		);
	}

	#[tokio::test]
	async fn test_transport_failure() {
		let mut transport = MockTransport::new();
		transport
			.expect_send()
			.times(1)
			.returning(|_| Err(TransportError::Connection("connection refused".to_string())));

		let resolver = resolver(Some(credentials()), signer_returning_token(), transport);
		let err = resolver
			.try_get_base_node_rpc_url(NetworkId::Base)
			.await
			.unwrap_err();
		assert!(matches!(err, RpcUrlError::TransportFailed(_)));
	}

	#[tokio::test]
	async fn test_error_status_is_a_failure() {
		let err = resolver(
			Some(credentials()),
			signer_returning_token(),
			transport_returning(401, r#"{"id":"T"}"#),
		)
		.try_get_base_node_rpc_url(NetworkId::Base)
		.await
		.unwrap_err();

		assert!(matches!(err, RpcUrlError::TransportFailed(_)));
	}

	#[tokio::test]
	async fn test_malformed_body_is_decode_failure() {
		let err = resolver(
			Some(credentials()),
			signer_returning_token(),
			transport_returning(200, "not json"),
		)
		.try_get_base_node_rpc_url(NetworkId::Base)
		.await
		.unwrap_err();

		assert!(matches!(err, RpcUrlError::DecodeFailed(_)));
	}

	#[tokio::test]
	async fn test_missing_id_is_decode_failure() {
		let resolver = resolver(
			Some(credentials()),
			signer_returning_token(),
			transport_returning(200, r#"{"token":"T"}"#),
		);

		let err = resolver
			.try_get_base_node_rpc_url(NetworkId::Base)
			.await
			.unwrap_err();
		assert!(matches!(err, RpcUrlError::DecodeFailed(_)));
	}

	#[tokio::test]
	async fn test_shim_collapses_failures() {
		let url = resolver(
			Some(credentials()),
			signer_returning_token(),
			transport_returning(500, ""),
		)
		.get_base_node_rpc_url(NetworkId::Base)
		.await;

		assert_eq!(url, None);
	}
}
