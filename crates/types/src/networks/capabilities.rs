//! Static matrix of which SDK operations each network supports
//!
//! Capability support is a deployment property of the platform, so the table
//! is compiled in. Lookups never fail: unknown methods or networks answer
//! `false` (or an empty list) because callers routinely pass user-supplied
//! strings here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::NetworkId;

/// High-level SDK operation gated by the capability table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Method {
	ListTokenBalances,
	RequestFaucet,
	QuoteFund,
	Fund,
	WaitForFundOperationReceipt,
	Transfer,
	SendTransaction,
	QuoteSwap,
	Swap,
	UseSpendPermission,
}

/// Error returned when a string does not name a known method
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown method: {0}")]
pub struct UnknownMethod(pub String);

impl Method {
	pub const ALL: [Method; 10] = [
		Method::ListTokenBalances,
		Method::RequestFaucet,
		Method::QuoteFund,
		Method::Fund,
		Method::WaitForFundOperationReceipt,
		Method::Transfer,
		Method::SendTransaction,
		Method::QuoteSwap,
		Method::Swap,
		Method::UseSpendPermission,
	];

	/// camelCase name used by the public SDK surface
	pub const fn as_str(&self) -> &'static str {
		match self {
			Method::ListTokenBalances => "listTokenBalances",
			Method::RequestFaucet => "requestFaucet",
			Method::QuoteFund => "quoteFund",
			Method::Fund => "fund",
			Method::WaitForFundOperationReceipt => "waitForFundOperationReceipt",
			Method::Transfer => "transfer",
			Method::SendTransaction => "sendTransaction",
			Method::QuoteSwap => "quoteSwap",
			Method::Swap => "swap",
			Method::UseSpendPermission => "useSpendPermission",
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Method {
	type Err = UnknownMethod;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Method::ALL
			.iter()
			.copied()
			.find(|method| method.as_str() == s)
			.ok_or_else(|| UnknownMethod(s.to_string()))
	}
}

/// Which operations a single network supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityFlags {
	pub list_token_balances: bool,
	pub request_faucet: bool,
	pub quote_fund: bool,
	pub fund: bool,
	pub wait_for_fund_operation_receipt: bool,
	pub transfer: bool,
	pub send_transaction: bool,
	pub quote_swap: bool,
	pub swap: bool,
	pub use_spend_permission: bool,
}

impl CapabilityFlags {
	/// Flag value for `method`
	pub const fn supports(&self, method: Method) -> bool {
		match method {
			Method::ListTokenBalances => self.list_token_balances,
			Method::RequestFaucet => self.request_faucet,
			Method::QuoteFund => self.quote_fund,
			Method::Fund => self.fund,
			Method::WaitForFundOperationReceipt => self.wait_for_fund_operation_receipt,
			Method::Transfer => self.transfer,
			Method::SendTransaction => self.send_transaction,
			Method::QuoteSwap => self.quote_swap,
			Method::Swap => self.swap,
			Method::UseSpendPermission => self.use_spend_permission,
		}
	}
}

// Every network can at least submit a raw transaction.
const SEND_ONLY: CapabilityFlags = CapabilityFlags {
	list_token_balances: false,
	request_faucet: false,
	quote_fund: false,
	fund: false,
	wait_for_fund_operation_receipt: false,
	transfer: false,
	send_transaction: true,
	quote_swap: false,
	swap: false,
	use_spend_permission: false,
};

const SPEND_PERMISSIONS: CapabilityFlags = CapabilityFlags {
	use_spend_permission: true,
	..SEND_ONLY
};

const SWAPS: CapabilityFlags = CapabilityFlags {
	quote_swap: true,
	swap: true,
	..SPEND_PERMISSIONS
};

/// Indexed by `NetworkId as usize`; entries follow the enum declaration order.
static NETWORK_CAPABILITIES: [(NetworkId, CapabilityFlags); 13] = [
	(
		NetworkId::Base,
		CapabilityFlags {
			list_token_balances: true,
			quote_fund: true,
			fund: true,
			wait_for_fund_operation_receipt: true,
			transfer: true,
			..SWAPS
		},
	),
	(
		NetworkId::BaseSepolia,
		CapabilityFlags {
			list_token_balances: true,
			request_faucet: true,
			transfer: true,
			..SPEND_PERMISSIONS
		},
	),
	(
		NetworkId::Ethereum,
		CapabilityFlags {
			list_token_balances: true,
			transfer: true,
			..SWAPS
		},
	),
	(
		NetworkId::EthereumSepolia,
		CapabilityFlags {
			request_faucet: true,
			transfer: true,
			..SPEND_PERMISSIONS
		},
	),
	(
		NetworkId::EthereumHoodi,
		CapabilityFlags {
			request_faucet: true,
			..SEND_ONLY
		},
	),
	(NetworkId::Optimism, SWAPS),
	(NetworkId::OptimismSepolia, SPEND_PERMISSIONS),
	(NetworkId::Arbitrum, SWAPS),
	(NetworkId::ArbitrumSepolia, SPEND_PERMISSIONS),
	(NetworkId::Avalanche, SPEND_PERMISSIONS),
	(NetworkId::Binance, SPEND_PERMISSIONS),
	(NetworkId::Polygon, SPEND_PERMISSIONS),
	(NetworkId::Zora, SPEND_PERMISSIONS),
];

/// The full table, in fixed network order
pub fn capability_table() -> &'static [(NetworkId, CapabilityFlags)] {
	&NETWORK_CAPABILITIES
}

/// Capability record of `network`
pub fn capabilities(network: NetworkId) -> &'static CapabilityFlags {
	&NETWORK_CAPABILITIES[network as usize].1
}

pub fn is_supported(method: Method, network: NetworkId) -> bool {
	capabilities(network).supports(method)
}

/// Networks whose record has `method` set, in table order
pub fn networks_supporting(method: Method) -> impl Iterator<Item = NetworkId> {
	NETWORK_CAPABILITIES
		.iter()
		.filter(move |(_, flags)| flags.supports(method))
		.map(|(network, _)| *network)
}

/// String form of [`networks_supporting`]; an unknown method yields an empty list
pub fn get_networks_supporting_method(method: &str) -> Vec<NetworkId> {
	match method.parse::<Method>() {
		Ok(method) => networks_supporting(method).collect(),
		Err(_) => Vec::new(),
	}
}

/// String form of [`is_supported`]; unknown methods and networks answer `false`
pub fn is_method_supported_on_network(method: &str, network: &str) -> bool {
	match (method.parse::<Method>(), network.parse::<NetworkId>()) {
		(Ok(method), Ok(network)) => is_supported(method, network),
		_ => false,
	}
}
