//! Configuration loading utilities

use config::{Config, Environment, File};
use thiserror::Error;
use tracing::debug;

use crate::Settings;

/// Default configuration file, without extension
pub const DEFAULT_CONFIG_PATH: &str = "config/config";

/// Prefix of environment variable overrides (`CDP_API__BASE_PATH`)
pub const ENV_PREFIX: &str = "CDP";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
	#[error("Failed to load configuration: {0}")]
	Load(#[from] config::ConfigError),
}

/// Load settings from `config/config.*` (optional) and `CDP_*` environment variables
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from(DEFAULT_CONFIG_PATH, ENV_PREFIX)
}

/// Load settings from an optional file at `path` plus environment overrides under `env_prefix`
///
/// Nested keys are separated by a double underscore, so `{prefix}_API__BASE_PATH`
/// sets `api.base_path`.
pub fn load_config_from(path: &str, env_prefix: &str) -> Result<Settings, ConfigLoadError> {
	debug!("Loading configuration from '{}' and {}_* variables", path, env_prefix);

	let settings = Config::builder()
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(env_prefix)
				.prefix_separator("_")
				.separator("__"),
		)
		.build()?
		.try_deserialize()?;

	Ok(settings)
}
