//! API key credentials and per-request token options

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_PATH;
use crate::models::SecretString;

/// Lifetime of a request token when the caller does not choose one
pub const DEFAULT_JWT_EXPIRES_IN_SECS: u64 = 120;

/// API key pair used to authenticate against the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
	pub api_key_id: String,
	pub api_key_secret: SecretString,
	/// REST base URL; unused when resolving node RPC URLs
	#[serde(default = "default_base_path")]
	pub base_path: String,
}

impl Credentials {
	pub fn new(api_key_id: impl Into<String>, api_key_secret: impl Into<SecretString>) -> Self {
		Self {
			api_key_id: api_key_id.into(),
			api_key_secret: api_key_secret.into(),
			base_path: default_base_path(),
		}
	}

	pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
		self.base_path = base_path.into();
		self
	}

	/// Token options for one request made with these credentials
	pub fn jwt_options(&self, method: &str, host: &str, path: &str) -> JwtOptions {
		JwtOptions {
			api_key_id: self.api_key_id.clone(),
			api_key_secret: self.api_key_secret.clone(),
			request_method: method.to_string(),
			request_host: host.to_string(),
			request_path: path.to_string(),
			expires_in: DEFAULT_JWT_EXPIRES_IN_SECS,
		}
	}
}

fn default_base_path() -> String {
	DEFAULT_BASE_PATH.to_string()
}

/// Everything a signer needs to mint a token for one request
#[derive(Debug, Clone, PartialEq)]
pub struct JwtOptions {
	pub api_key_id: String,
	pub api_key_secret: SecretString,
	/// Upper-case HTTP method
	pub request_method: String,
	/// Host without scheme, with port when non-default
	pub request_host: String,
	/// Absolute path starting with `/`
	pub request_path: String,
	/// Token lifetime in seconds
	pub expires_in: u64,
}

impl JwtOptions {
	/// The `uris` claim value: `"{METHOD} {host}{path}"`
	pub fn request_uri(&self) -> String {
		format!(
			"{} {}{}",
			self.request_method, self.request_host, self.request_path
		)
	}
}
