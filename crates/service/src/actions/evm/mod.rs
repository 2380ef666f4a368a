//! EVM account actions

pub mod list_spend_permissions;
pub mod list_token_balances;
pub mod request_faucet;
pub mod send_transaction;

#[cfg(test)]
pub(crate) mod test_support;

pub use list_spend_permissions::{list_spend_permissions, ListSpendPermissionsOptions};
pub use list_token_balances::{list_token_balances, ListTokenBalancesOptions};
pub use request_faucet::{request_faucet, RequestFaucetOptions, RequestFaucetResult};
pub use send_transaction::{send_transaction, SendTransactionOptions, SendTransactionResult};
