//! CDP Client
//!
//! Default implementations of the collaborator traits defined in `cdp-types`:
//! the API key token signer, the reqwest transport, the HTTP platform API,
//! the EIP-1559 serializer, and the node RPC URL resolver built on them.

pub mod jwt;
pub mod platform_api;
pub mod rpc_url;
pub mod serializer;
pub mod transport;

pub use jwt::CdpJwtSigner;
pub use platform_api::HttpPlatformApi;
pub use rpc_url::NodeRpcUrlResolver;
pub use serializer::Eip1559Serializer;
pub use transport::{ReqwestTransport, TransportConfig};
