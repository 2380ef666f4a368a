//! Network identifiers and the per-network capability table

pub mod capabilities;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use capabilities::{
	capabilities, capability_table, get_networks_supporting_method, is_method_supported_on_network,
	is_supported, networks_supporting, CapabilityFlags, Method, UnknownMethod,
};

/// Supported chain/environment combination
///
/// The declaration order is the iteration order of the capability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkId {
	Base,
	BaseSepolia,
	Ethereum,
	EthereumSepolia,
	EthereumHoodi,
	Optimism,
	OptimismSepolia,
	Arbitrum,
	ArbitrumSepolia,
	Avalanche,
	Binance,
	Polygon,
	Zora,
}

/// Descriptive record of a network, as returned by [`NetworkId::to_network`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
	pub id: NetworkId,
	pub chain_id: u64,
	pub is_testnet: bool,
}

/// Error returned when a string does not name a known network
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl NetworkId {
	/// Every network, in table order
	pub const ALL: [NetworkId; 13] = [
		NetworkId::Base,
		NetworkId::BaseSepolia,
		NetworkId::Ethereum,
		NetworkId::EthereumSepolia,
		NetworkId::EthereumHoodi,
		NetworkId::Optimism,
		NetworkId::OptimismSepolia,
		NetworkId::Arbitrum,
		NetworkId::ArbitrumSepolia,
		NetworkId::Avalanche,
		NetworkId::Binance,
		NetworkId::Polygon,
		NetworkId::Zora,
	];

	/// Wire name of the network (e.g. `base-sepolia`)
	pub const fn as_str(&self) -> &'static str {
		match self {
			NetworkId::Base => "base",
			NetworkId::BaseSepolia => "base-sepolia",
			NetworkId::Ethereum => "ethereum",
			NetworkId::EthereumSepolia => "ethereum-sepolia",
			NetworkId::EthereumHoodi => "ethereum-hoodi",
			NetworkId::Optimism => "optimism",
			NetworkId::OptimismSepolia => "optimism-sepolia",
			NetworkId::Arbitrum => "arbitrum",
			NetworkId::ArbitrumSepolia => "arbitrum-sepolia",
			NetworkId::Avalanche => "avalanche",
			NetworkId::Binance => "binance",
			NetworkId::Polygon => "polygon",
			NetworkId::Zora => "zora",
		}
	}

	/// EVM chain id
	pub const fn chain_id(&self) -> u64 {
		match self {
			NetworkId::Base => 8453,
			NetworkId::BaseSepolia => 84532,
			NetworkId::Ethereum => 1,
			NetworkId::EthereumSepolia => 11_155_111,
			NetworkId::EthereumHoodi => 560_048,
			NetworkId::Optimism => 10,
			NetworkId::OptimismSepolia => 11_155_420,
			NetworkId::Arbitrum => 42161,
			NetworkId::ArbitrumSepolia => 421_614,
			NetworkId::Avalanche => 43114,
			NetworkId::Binance => 56,
			NetworkId::Polygon => 137,
			NetworkId::Zora => 7_777_777,
		}
	}

	pub const fn is_testnet(&self) -> bool {
		matches!(
			self,
			NetworkId::BaseSepolia
				| NetworkId::EthereumSepolia
				| NetworkId::EthereumHoodi
				| NetworkId::OptimismSepolia
				| NetworkId::ArbitrumSepolia
		)
	}

	/// Descriptive network model for this identifier
	pub fn to_network(&self) -> Network {
		Network {
			id: *self,
			chain_id: self.chain_id(),
			is_testnet: self.is_testnet(),
		}
	}
}

impl fmt::Display for NetworkId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for NetworkId {
	type Err = UnknownNetwork;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		NetworkId::ALL
			.iter()
			.copied()
			.find(|network| network.as_str() == s)
			.ok_or_else(|| UnknownNetwork(s.to_string()))
	}
}

impl From<NetworkId> for Network {
	fn from(network: NetworkId) -> Self {
		network.to_network()
	}
}
