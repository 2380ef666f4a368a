//! Startup and shutdown logging for the SDK binaries

use std::env;
use tracing::info;

use crate::Settings;

fn timestamp() -> String {
	chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Where the API key comes from, never the key itself
fn credential_source(settings: &Settings) -> String {
	match (&settings.api.api_key_id, &settings.api.api_key_secret) {
		(Some(key_id), Some(key_secret)) => format!(
			"id from {}, secret from {}",
			key_id.description(),
			key_secret.description()
		),
		(Some(_), None) => "secret missing".to_string(),
		(None, Some(_)) => "key id missing".to_string(),
		(None, None) => "none".to_string(),
	}
}

/// Log the binary version and the effective non-secret settings
pub fn log_service_info(service_name: &str, settings: &Settings) {
	let log_level = env::var("RUST_LOG").unwrap_or_else(|_| settings.logging.level.clone());

	info!(
		service = service_name,
		version = env!("CARGO_PKG_VERSION"),
		platform = %format!("{}/{}", env::consts::OS, env::consts::ARCH),
		"{} starting at {}",
		service_name,
		timestamp()
	);
	info!(
		log_level = %log_level,
		base_path = %settings.api.base_path,
		credentials = %credential_source(settings),
		network = %settings.rpc.network,
		request_timeout_ms = settings.timeouts.request_ms,
		connect_timeout_ms = settings.timeouts.connect_ms,
		"Effective settings"
	);
}

pub fn log_service_shutdown(service_name: &str) {
	info!(service = service_name, "{} shutting down at {}", service_name, timestamp());
}
