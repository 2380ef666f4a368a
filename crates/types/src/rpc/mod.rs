//! Node RPC URL resolution types

use thiserror::Error;

use crate::auth::AuthError;

/// Scheme and host of the token-issuance endpoint and the RPC gateway
pub const CDP_API_ORIGIN: &str = "https://api.cdp.coinbase.com";

/// Host the issuance request is signed for
pub const TOKEN_ISSUANCE_HOST: &str = "api.cdp.coinbase.com";

/// Path the issuance request is signed for
pub const TOKEN_ISSUANCE_PATH: &str = "/apikeys/v1/tokens/active";

/// Why a node RPC URL could not be produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcUrlError {
	#[error("No API key credentials configured")]
	MissingCredentials,

	#[error("Failed to sign token request: {0}")]
	SigningFailed(#[from] AuthError),

	#[error("Token request failed: {0}")]
	TransportFailed(String),

	#[error("Token response could not be decoded: {0}")]
	DecodeFailed(String),
}

pub type RpcUrlResult<T> = Result<T, RpcUrlError>;

/// Absolute URL of the token-issuance endpoint
pub fn token_issuance_url() -> String {
	format!("{}{}", CDP_API_ORIGIN, TOKEN_ISSUANCE_PATH)
}

/// Scoped node RPC URL for `network` and a session token id
pub fn node_rpc_url(network: &str, token_id: &str) -> String {
	format!("{}/rpc/v1/{}/{}", CDP_API_ORIGIN, network, token_id)
}
