//! HTTP transport error types

use thiserror::Error;

/// Failure to get any HTTP response back
///
/// A response with a non-success status is not a transport error; callers
/// inspect [`super::HttpResponse::status`] themselves.
#[derive(Error, Debug)]
pub enum TransportError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Timeout occurred after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("Connection error: {0}")]
	Connection(String),

	#[error("Invalid request: {0}")]
	InvalidRequest(String),
}

impl TransportError {
	/// Status code carried by the underlying client error, if any
	pub fn status_code(&self) -> Option<u16> {
		match self {
			TransportError::Http(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}
}
