//! Token balance domain models

use primitive_types::U256;
use serde::Serialize;

use super::numeric::{parse_u256, NumericFieldError};
use super::Address;
use crate::api::models::{ApiToken, ApiTokenAmount, ApiTokenBalance, ListTokenBalancesResponse};

/// Token identity as reported by the balances endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
	pub network: String,
	pub symbol: Option<String>,
	pub name: Option<String>,
	pub contract_address: Address,
}

/// Amount in the token's smallest unit plus its decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenAmount {
	pub amount: U256,
	pub decimals: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenBalance {
	pub token: Token,
	pub amount: TokenAmount,
}

/// One page of balances
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenBalancesPage {
	pub balances: Vec<TokenBalance>,
	pub next_page_token: Option<String>,
}

impl From<ApiToken> for Token {
	fn from(token: ApiToken) -> Self {
		Self {
			network: token.network,
			symbol: token.symbol,
			name: token.name,
			contract_address: token.contract_address,
		}
	}
}

impl TryFrom<ApiTokenAmount> for TokenAmount {
	type Error = NumericFieldError;

	fn try_from(amount: ApiTokenAmount) -> Result<Self, Self::Error> {
		Ok(Self {
			amount: parse_u256("amount", &amount.amount)?,
			decimals: amount.decimals,
		})
	}
}

impl From<TokenAmount> for ApiTokenAmount {
	fn from(amount: TokenAmount) -> Self {
		Self {
			amount: amount.amount.to_string(),
			decimals: amount.decimals,
		}
	}
}

impl TryFrom<ApiTokenBalance> for TokenBalance {
	type Error = NumericFieldError;

	fn try_from(balance: ApiTokenBalance) -> Result<Self, Self::Error> {
		Ok(Self {
			token: balance.token.into(),
			amount: balance.amount.try_into()?,
		})
	}
}

impl TryFrom<ListTokenBalancesResponse> for TokenBalancesPage {
	type Error = NumericFieldError;

	fn try_from(response: ListTokenBalancesResponse) -> Result<Self, Self::Error> {
		let balances = response
			.balances
			.into_iter()
			.map(TokenBalance::try_from)
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self {
			balances,
			next_page_token: response.next_page_token,
		})
	}
}
