//! Shared domain models used by the client, actions, and facade

pub mod balances;
pub mod numeric;
pub mod secret_string;
pub mod spend_permissions;

pub use balances::{Token, TokenAmount, TokenBalance, TokenBalancesPage};
pub use numeric::{format_u256, parse_u256, parse_u64, NumericFieldError};
pub use secret_string::SecretString;
pub use spend_permissions::{SpendPermission, SpendPermissionEntry, SpendPermissionsPage};

/// `0x`-prefixed EVM address
pub type Address = String;

/// `0x`-prefixed hex string
pub type Hex = String;
