//! CDP Service
//!
//! EVM account actions on top of the platform API, gated by the network
//! capability table, plus the ERC-20 address lookup.

pub mod actions;
pub mod token_addresses;

pub use actions::evm::{
	list_spend_permissions, list_token_balances, request_faucet, send_transaction,
	ListSpendPermissionsOptions, ListTokenBalancesOptions, RequestFaucetOptions,
	RequestFaucetResult, SendTransactionOptions, SendTransactionResult,
};
pub use token_addresses::get_erc20_address;
