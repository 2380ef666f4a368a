//! CDP Types
//!
//! Shared models and traits for the CDP SDK.
//! This crate holds the domain and wire models, the network capability table,
//! and the traits at every collaborator seam (signer, transport, platform API,
//! transaction serializer).

pub mod api;
pub mod auth;
pub mod models;
pub mod networks;
pub mod rpc;
pub mod transactions;
pub mod transport;

// Re-export serde_json and primitive-types for convenience
pub use primitive_types;
pub use serde_json;

pub use api::{
	ApiError, ApiResult, ApiSpendPermission, ApiSpendPermissionEntry, ApiToken, ApiTokenAmount,
	ApiTokenBalance, FaucetToken, ListSpendPermissionsResponse, ListTokenBalancesResponse,
	PageRequest, PlatformApi, RequestFaucetBody, RequestFaucetResponse, SendTransactionBody,
	SendTransactionResponse, DEFAULT_BASE_PATH, IDEMPOTENCY_KEY_HEADER,
};

pub use auth::{AuthError, AuthResult, Credentials, JwtOptions, JwtSigner};

pub use models::{
	Address, Hex, NumericFieldError, SecretString, SpendPermission, SpendPermissionEntry,
	SpendPermissionsPage, Token, TokenAmount, TokenBalance, TokenBalancesPage,
};

pub use networks::{
	capabilities, capability_table, get_networks_supporting_method, is_method_supported_on_network,
	is_supported, networks_supporting, CapabilityFlags, Method, Network, NetworkId, UnknownMethod,
	UnknownNetwork,
};

pub use rpc::{RpcUrlError, RpcUrlResult};

pub use transactions::{Eip1559Request, SerializationError, TransactionInput, TransactionSerializer};

pub use transport::{
	HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError, TransportResult,
};

pub use primitive_types::U256;
