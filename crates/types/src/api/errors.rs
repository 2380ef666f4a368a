//! Platform API error types

use thiserror::Error;

use crate::auth::AuthError;
use crate::models::NumericFieldError;
use crate::networks::{Method, NetworkId};
use crate::transport::TransportError;

/// Errors surfaced by platform API calls and the actions built on them
#[derive(Error, Debug)]
pub enum ApiError {
	#[error("Transport error: {0}")]
	Transport(#[from] TransportError),

	#[error("Authentication error: {0}")]
	Auth(#[from] AuthError),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatus { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Method {method} is not supported on network {network}")]
	UnsupportedNetwork { method: Method, network: NetworkId },

	#[error("Transaction serialization failed: {0}")]
	TransactionSerialization(String),

	#[error("Configuration error: {reason}")]
	Config { reason: String },
}

impl ApiError {
	/// Extract HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			ApiError::HttpStatus { status_code, .. } => Some(*status_code),
			ApiError::Transport(transport_error) => transport_error.status_code(),
			_ => None,
		}
	}

	pub fn http_failure(status_code: u16, reason: impl Into<String>) -> Self {
		Self::HttpStatus {
			status_code,
			reason: reason.into(),
		}
	}

	/// HTTP failure with a default reason phrase for the status
	pub fn from_http_failure(status_code: u16) -> Self {
		let reason = match status_code {
			400 => "Bad Request".to_string(),
			401 => "Unauthorized".to_string(),
			403 => "Forbidden".to_string(),
			404 => "Not Found".to_string(),
			409 => "Conflict".to_string(),
			422 => "Unprocessable Entity".to_string(),
			429 => "Too Many Requests".to_string(),
			500 => "Internal Server Error".to_string(),
			502 => "Bad Gateway".to_string(),
			503 => "Service Unavailable".to_string(),
			504 => "Gateway Timeout".to_string(),
			_ => format!("HTTP Error {}", status_code),
		};

		Self::HttpStatus {
			status_code,
			reason,
		}
	}

	pub fn unsupported_network(method: Method, network: NetworkId) -> Self {
		Self::UnsupportedNetwork { method, network }
	}

	pub fn is_unsupported_network(&self) -> bool {
		matches!(self, ApiError::UnsupportedNetwork { .. })
	}
}

impl From<NumericFieldError> for ApiError {
	fn from(err: NumericFieldError) -> Self {
		Self::InvalidResponse {
			reason: err.to_string(),
		}
	}
}
