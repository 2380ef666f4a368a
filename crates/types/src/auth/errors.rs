//! Authentication error types

use thiserror::Error;

/// Errors raised while producing a bearer token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
	#[error("Missing API key credentials")]
	MissingCredentials,

	#[error("Invalid key format: {0}")]
	InvalidKeyFormat(String),

	#[error("Token signing failed: {0}")]
	Signing(String),

	#[error("Configuration error: {0}")]
	ConfigurationError(String),
}
