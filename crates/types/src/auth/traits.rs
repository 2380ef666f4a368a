//! Token signer trait

use async_trait::async_trait;

use super::{AuthResult, JwtOptions};

/// Produces short-lived bearer tokens bound to a single request
///
/// Implementations must be safe to share across concurrent requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JwtSigner: Send + Sync + std::fmt::Debug {
	/// Sign a token authorizing `options.request_method` on
	/// `options.request_host` + `options.request_path`
	async fn generate_jwt(&self, options: &JwtOptions) -> AuthResult<String>;
}
