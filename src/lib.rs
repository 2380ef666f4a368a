//! CDP SDK
//!
//! Client SDK for the CDP platform API: EVM token balances, faucet requests,
//! transaction submission, spend permissions, the network capability table,
//! and node RPC URL resolution.
//!
//! ```rust,no_run
//! use cdp_sdk::{CdpClientBuilder, NetworkId};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = cdp_sdk::load_config()?;
//! let client = CdpClientBuilder::new().with_settings(settings).build()?;
//!
//! if let Some(url) = client.get_base_node_rpc_url(NetworkId::Base).await {
//! 	println!("{}", url);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use cdp_client::{
	CdpJwtSigner, Eip1559Serializer, HttpPlatformApi, NodeRpcUrlResolver, ReqwestTransport,
	TransportConfig,
};
use cdp_config::LogFormat;

// Core domain types
pub use cdp_types::{
	get_networks_supporting_method, is_method_supported_on_network, serde_json, Address,
	ApiError, ApiResult, AuthError, CapabilityFlags, Credentials, Eip1559Request, FaucetToken,
	Hex, HttpTransport, JwtSigner, Method, NetworkId, PlatformApi, RpcUrlError, SecretString,
	SpendPermission, SpendPermissionEntry, SpendPermissionsPage, TokenBalance, TokenBalancesPage,
	TransactionInput, TransactionSerializer, TransportError, U256,
};

// Actions
pub use cdp_service::{
	get_erc20_address, ListSpendPermissionsOptions, ListTokenBalancesOptions,
	RequestFaucetOptions, RequestFaucetResult, SendTransactionOptions, SendTransactionResult,
};

// Config
pub use cdp_config::{
	load_config, log_service_info, log_service_shutdown, ConfigLoadError, ConfigurableValue,
	Settings,
};

pub mod types {
	pub use cdp_types::*;
}

pub mod client {
	pub use cdp_client::*;
}

pub mod service {
	pub use cdp_service::*;
}

pub mod config {
	pub use cdp_config::*;
}

pub mod mocks;

// Re-export external dependencies for downstream implementations of the traits
pub use async_trait;
pub use reqwest;

#[derive(Debug, Error)]
pub enum ClientBuildError {
	#[error("Failed to create HTTP transport: {0}")]
	Transport(#[from] TransportError),

	#[error("Failed to initialize tracing: {0}")]
	Tracing(String),
}

/// Initialize the global tracing subscriber from logging settings
///
/// `RUST_LOG` takes precedence over `logging.level`. Fails if a global
/// subscriber is already installed.
pub fn init_tracing(settings: &Settings) -> Result<(), ClientBuildError> {
	let log_level = &settings.logging.level;
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	let result = match settings.logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
	};
	result.map_err(|e| ClientBuildError::Tracing(e.to_string()))?;

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		settings.logging.level, settings.logging.format, settings.logging.structured
	);

	Ok(())
}

/// Builder for [`CdpClient`]
///
/// Every collaborator has a default; any of them can be replaced, which is
/// how tests substitute mocks.
#[derive(Default)]
pub struct CdpClientBuilder {
	settings: Option<Settings>,
	credentials: Option<Credentials>,
	signer: Option<Arc<dyn JwtSigner>>,
	transport: Option<Arc<dyn HttpTransport>>,
	api: Option<Arc<dyn PlatformApi>>,
	serializer: Option<Arc<dyn TransactionSerializer>>,
}

impl CdpClientBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Use these credentials instead of the ones resolved from settings
	pub fn with_credentials(mut self, credentials: Credentials) -> Self {
		self.credentials = Some(credentials);
		self
	}

	pub fn with_signer(mut self, signer: Arc<dyn JwtSigner>) -> Self {
		self.signer = Some(signer);
		self
	}

	pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
		self.transport = Some(transport);
		self
	}

	/// Use this platform API instead of the HTTP client built from credentials
	pub fn with_api(mut self, api: Arc<dyn PlatformApi>) -> Self {
		self.api = Some(api);
		self
	}

	pub fn with_serializer(mut self, serializer: Arc<dyn TransactionSerializer>) -> Self {
		self.serializer = Some(serializer);
		self
	}

	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing from the builder's settings (or the defaults)
	pub fn init_tracing(&self) -> Result<(), ClientBuildError> {
		init_tracing(&self.settings.clone().unwrap_or_default())
	}

	pub fn build(self) -> Result<CdpClient, ClientBuildError> {
		let settings = self.settings.unwrap_or_default();
		let credentials = self.credentials.or_else(|| settings.credentials());

		let signer: Arc<dyn JwtSigner> = self
			.signer
			.unwrap_or_else(|| Arc::new(CdpJwtSigner::new()));
		let transport: Arc<dyn HttpTransport> = match self.transport {
			Some(transport) => transport,
			None => Arc::new(ReqwestTransport::new(TransportConfig {
				request_timeout_ms: settings.timeouts.request_ms,
				connect_timeout_ms: settings.timeouts.connect_ms,
				..TransportConfig::default()
			})?),
		};

		let api = self.api.or_else(|| {
			credentials.clone().map(|credentials| {
				Arc::new(HttpPlatformApi::new(
					credentials,
					signer.clone(),
					transport.clone(),
				)) as Arc<dyn PlatformApi>
			})
		});
		if api.is_none() {
			debug!("No API key credentials; platform API calls will fail until configured");
		}

		let serializer: Arc<dyn TransactionSerializer> = self
			.serializer
			.unwrap_or_else(|| Arc::new(Eip1559Serializer::new()));
		let resolver = NodeRpcUrlResolver::new(credentials, signer, transport);

		Ok(CdpClient {
			settings,
			api,
			serializer,
			resolver,
		})
	}
}

/// Entry point of the SDK
#[derive(Debug, Clone)]
pub struct CdpClient {
	settings: Settings,
	api: Option<Arc<dyn PlatformApi>>,
	serializer: Arc<dyn TransactionSerializer>,
	resolver: NodeRpcUrlResolver,
}

impl CdpClient {
	pub fn builder() -> CdpClientBuilder {
		CdpClientBuilder::new()
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	fn api(&self) -> ApiResult<&dyn PlatformApi> {
		self.api.as_deref().ok_or_else(|| ApiError::Config {
			reason: "no API key credentials configured".to_string(),
		})
	}

	pub async fn list_token_balances(
		&self,
		options: &ListTokenBalancesOptions,
	) -> ApiResult<TokenBalancesPage> {
		cdp_service::list_token_balances(self.api()?, options).await
	}

	pub async fn request_faucet(
		&self,
		options: &RequestFaucetOptions,
	) -> ApiResult<RequestFaucetResult> {
		cdp_service::request_faucet(self.api()?, options).await
	}

	pub async fn send_transaction(
		&self,
		options: &SendTransactionOptions,
	) -> ApiResult<SendTransactionResult> {
		cdp_service::send_transaction(self.api()?, self.serializer.as_ref(), options).await
	}

	pub async fn list_spend_permissions(
		&self,
		options: &ListSpendPermissionsOptions,
	) -> ApiResult<SpendPermissionsPage> {
		cdp_service::list_spend_permissions(self.api()?, options).await
	}

	/// Node RPC URL for `network`, or `None` on any failure
	pub async fn get_base_node_rpc_url(&self, network: NetworkId) -> Option<String> {
		self.resolver.get_base_node_rpc_url(network).await
	}

	/// Node RPC URL for `network`, with the reason on failure
	pub async fn try_get_base_node_rpc_url(&self, network: NetworkId) -> Result<String, RpcUrlError> {
		self.resolver.try_get_base_node_rpc_url(network).await
	}

	pub fn is_method_supported_on_network(&self, method: &str, network: &str) -> bool {
		is_method_supported_on_network(method, network)
	}

	pub fn get_networks_supporting_method(&self, method: &str) -> Vec<NetworkId> {
		get_networks_supporting_method(method)
	}

	pub fn capabilities(&self, network: NetworkId) -> &'static CapabilityFlags {
		cdp_types::capabilities(network)
	}

	pub fn get_erc20_address(&self, token: &str, network: NetworkId) -> String {
		get_erc20_address(token, network.as_str())
	}
}
