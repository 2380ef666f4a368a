//! Configuration settings structures

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::configurable_value::{ConfigurableValue, ValueType};
use cdp_types::{Credentials, NetworkId, DEFAULT_BASE_PATH};

/// Environment variable read for the API key id when no other source is configured
pub const DEFAULT_API_KEY_ID_ENV: &str = "CDP_API_KEY_ID";

/// Environment variable read for the API key secret when no other source is configured
pub const DEFAULT_API_KEY_SECRET_ENV: &str = "CDP_API_KEY_SECRET";

/// Main SDK settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
	pub api: ApiSettings,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
	pub rpc: RpcSettings,
}

/// Platform API access
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
	pub api_key_id: Option<ConfigurableValue>,
	pub api_key_secret: Option<ConfigurableValue>,
	pub base_path: String,
}

/// HTTP timeouts in milliseconds
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Whole-request timeout for HTTP clients
	pub request_ms: u64,
	pub connect_ms: u64,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Node RPC URL resolution
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RpcSettings {
	/// Network the `cdp-rpc-url` binary resolves
	pub network: NetworkId,
}

impl Default for ApiSettings {
	fn default() -> Self {
		Self {
			api_key_id: Some(ConfigurableValue::from_env(DEFAULT_API_KEY_ID_ENV)),
			api_key_secret: Some(ConfigurableValue::from_env(DEFAULT_API_KEY_SECRET_ENV)),
			base_path: DEFAULT_BASE_PATH.to_string(),
		}
	}
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			request_ms: 30_000,
			connect_ms: 10_000,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Default for RpcSettings {
	fn default() -> Self {
		Self {
			network: NetworkId::Base,
		}
	}
}

impl Settings {
	/// API key credentials, if both halves are configured and resolvable
	///
	/// A key that references a missing environment variable is reported and
	/// treated as absent.
	pub fn credentials(&self) -> Option<Credentials> {
		let (Some(key_id), Some(key_secret)) = (&self.api.api_key_id, &self.api.api_key_secret)
		else {
			return None;
		};

		let api_key_id = match key_id.resolve() {
			Ok(value) => value,
			Err(e) => {
				warn!("API key id unavailable from {}: {}", key_id.description(), e);
				return None;
			},
		};
		let api_key_secret = match key_secret.resolve_for_secret() {
			Ok(value) => value,
			Err(e) => {
				warn!(
					"API key secret unavailable from {}: {}",
					key_secret.description(),
					e
				);
				return None;
			},
		};

		if key_secret.value_type == ValueType::Plain {
			debug!("API key secret is configured inline");
		}

		Some(Credentials::new(api_key_id, api_key_secret).with_base_path(self.api.base_path.clone()))
	}
}
