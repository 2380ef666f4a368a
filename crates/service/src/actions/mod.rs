//! High-level SDK operations built on the platform API

pub mod evm;

use cdp_types::{is_supported, ApiError, ApiResult, Method, NetworkId};
use tracing::warn;

/// Fail with `UnsupportedNetwork` unless `network` supports `method`
pub(crate) fn ensure_supported(method: Method, network: NetworkId) -> ApiResult<()> {
	if is_supported(method, network) {
		return Ok(());
	}

	warn!("{} is not supported on network {}", method, network);
	Err(ApiError::unsupported_network(method, network))
}
