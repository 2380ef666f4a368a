//! reqwest-backed HTTP transport
//!
//! One pooled `reqwest::Client` is shared by every request sent through the
//! transport; requests themselves carry no shared state.

use async_trait::async_trait;
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue},
	Client, ClientBuilder,
};
use std::time::Duration;
use tracing::debug;

use cdp_types::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError, TransportResult};

/// Connection settings for [`ReqwestTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
	/// Whole-request timeout
	pub request_timeout_ms: u64,
	pub connect_timeout_ms: u64,
	/// Maximum number of idle connections per host
	pub max_idle_per_host: usize,
	/// Connection keep-alive timeout
	pub keep_alive_timeout_ms: u64,
	pub user_agent: String,
}

impl Default for TransportConfig {
	fn default() -> Self {
		Self {
			request_timeout_ms: 30_000,
			connect_timeout_ms: 10_000,
			max_idle_per_host: 10,
			keep_alive_timeout_ms: 90_000,
			user_agent: format!("cdp-sdk-rust/{}", env!("CARGO_PKG_VERSION")),
		}
	}
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	client: Client,
	config: TransportConfig,
}

impl ReqwestTransport {
	pub fn new(config: TransportConfig) -> TransportResult<Self> {
		let client = ClientBuilder::new()
			.timeout(Duration::from_millis(config.request_timeout_ms))
			.connect_timeout(Duration::from_millis(config.connect_timeout_ms))
			// Connection pool
			.pool_max_idle_per_host(config.max_idle_per_host)
			.pool_idle_timeout(Duration::from_millis(config.keep_alive_timeout_ms))
			.tcp_keepalive(Duration::from_secs(60))
			.user_agent(config.user_agent.clone())
			.build()
			.map_err(TransportError::Http)?;

		Ok(Self { client, config })
	}

	/// Wrap an existing client, e.g. one shared with the rest of an application
	pub fn with_client(client: Client, config: TransportConfig) -> Self {
		Self { client, config }
	}

	pub fn config(&self) -> &TransportConfig {
		&self.config
	}

	fn header_map(headers: &[(String, String)]) -> TransportResult<HeaderMap> {
		let mut header_map = HeaderMap::new();
		for (key, value) in headers {
			let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
				TransportError::InvalidRequest(format!("Invalid header name '{}': {}", key, e))
			})?;
			let value = HeaderValue::from_str(value).map_err(|e| {
				TransportError::InvalidRequest(format!("Invalid value for header '{}': {}", key, e))
			})?;
			header_map.insert(name, value);
		}
		Ok(header_map)
	}

	fn map_send_error(&self, error: reqwest::Error) -> TransportError {
		if error.is_timeout() {
			TransportError::Timeout {
				timeout_ms: self.config.request_timeout_ms,
			}
		} else if error.is_connect() {
			TransportError::Connection(error.to_string())
		} else {
			TransportError::Http(error)
		}
	}
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
	async fn send(&self, request: HttpRequest) -> TransportResult<HttpResponse> {
		debug!("Sending {} {}", request.method, request.url);

		let mut builder = match request.method {
			HttpMethod::Get => self.client.get(&request.url),
			HttpMethod::Post => self.client.post(&request.url),
		};
		builder = builder.headers(Self::header_map(&request.headers)?);
		if let Some(body) = &request.body {
			builder = builder.json(body);
		}

		let response = builder
			.send()
			.await
			.map_err(|e| self.map_send_error(e))?;
		let status = response.status().as_u16();
		let body = response
			.text()
			.await
			.map_err(|e| self.map_send_error(e))?;

		debug!(
			"{} {} responded with status {} and {} bytes",
			request.method,
			request.url,
			status,
			body.len()
		);

		Ok(HttpResponse { status, body })
	}
}
