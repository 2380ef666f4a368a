//! Minimal HTTP abstraction shared by the platform client and the RPC URL resolver

pub mod errors;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;

pub use errors::TransportError;

pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	Get,
	Post,
}

impl HttpMethod {
	pub const fn as_str(&self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}

impl fmt::Display for HttpMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Outgoing request; the URL is absolute and already carries its query string
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
	pub method: HttpMethod,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: Option<serde_json::Value>,
}

impl HttpRequest {
	pub fn get(url: impl Into<String>) -> Self {
		Self {
			method: HttpMethod::Get,
			url: url.into(),
			headers: Vec::new(),
			body: None,
		}
	}

	pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
		Self {
			method: HttpMethod::Post,
			url: url.into(),
			headers: Vec::new(),
			body: Some(body),
		}
	}

	pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	/// First header matching `name`, compared case-insensitively
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Status and raw body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
	pub status: u16,
	pub body: String,
}

impl HttpResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
		serde_json::from_str(&self.body)
	}
}

/// Sends one HTTP request and returns the response, whatever its status
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
	async fn send(&self, request: HttpRequest) -> TransportResult<HttpResponse>;
}
