//! Spend permission domain models

use primitive_types::U256;
use serde::Serialize;

use super::numeric::{format_u256, parse_u256, parse_u64, NumericFieldError};
use super::{Address, Hex};
use crate::api::models::{ApiSpendPermission, ApiSpendPermissionEntry, ListSpendPermissionsResponse};

/// Allowance granted by a smart account to a spender over a recurring period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendPermission {
	pub account: Address,
	pub spender: Address,
	pub token: Address,
	pub allowance: U256,
	/// Period length in seconds
	pub period: u64,
	/// Unix timestamp, seconds
	pub start: u64,
	/// Unix timestamp, seconds
	pub end: u64,
	pub salt: U256,
	pub extra_data: Hex,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendPermissionEntry {
	pub permission_hash: Hex,
	pub permission: SpendPermission,
	pub network: Option<String>,
	pub revoked: Option<bool>,
	pub created_at: Option<String>,
	pub last_updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpendPermissionsPage {
	pub spend_permissions: Vec<SpendPermissionEntry>,
	pub next_page_token: Option<String>,
}

impl TryFrom<ApiSpendPermission> for SpendPermission {
	type Error = NumericFieldError;

	fn try_from(permission: ApiSpendPermission) -> Result<Self, Self::Error> {
		Ok(Self {
			allowance: parse_u256("allowance", &permission.allowance)?,
			period: parse_u64("period", &permission.period)?,
			start: parse_u64("start", &permission.start)?,
			end: parse_u64("end", &permission.end)?,
			salt: parse_u256("salt", &permission.salt)?,
			account: permission.account,
			spender: permission.spender,
			token: permission.token,
			extra_data: permission.extra_data,
		})
	}
}

impl From<SpendPermission> for ApiSpendPermission {
	fn from(permission: SpendPermission) -> Self {
		Self {
			account: permission.account,
			spender: permission.spender,
			token: permission.token,
			allowance: format_u256(&permission.allowance),
			period: permission.period.to_string(),
			start: permission.start.to_string(),
			end: permission.end.to_string(),
			salt: format_u256(&permission.salt),
			extra_data: permission.extra_data,
		}
	}
}

impl TryFrom<ApiSpendPermissionEntry> for SpendPermissionEntry {
	type Error = NumericFieldError;

	fn try_from(entry: ApiSpendPermissionEntry) -> Result<Self, Self::Error> {
		Ok(Self {
			permission_hash: entry.permission_hash,
			permission: entry.permission.try_into()?,
			network: entry.network,
			revoked: entry.revoked,
			created_at: entry.created_at,
			last_updated_at: entry.last_updated_at,
		})
	}
}

impl TryFrom<ListSpendPermissionsResponse> for SpendPermissionsPage {
	type Error = NumericFieldError;

	fn try_from(response: ListSpendPermissionsResponse) -> Result<Self, Self::Error> {
		let spend_permissions = response
			.spend_permissions
			.into_iter()
			.map(SpendPermissionEntry::try_from)
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self {
			spend_permissions,
			next_page_token: response.next_page_token,
		})
	}
}
