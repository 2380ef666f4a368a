//! Decimal-string integer fields
//!
//! The platform API encodes integers as decimal strings so that values wider
//! than a JSON number survive transport. These helpers convert them to native
//! integers and back.

use primitive_types::U256;
use thiserror::Error;

/// A decimal-string field that could not be converted
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid numeric field '{field}' ({value:?}): {reason}")]
pub struct NumericFieldError {
	pub field: &'static str,
	pub value: String,
	pub reason: String,
}

impl NumericFieldError {
	fn new(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
		Self {
			field,
			value: value.to_string(),
			reason: reason.into(),
		}
	}
}

fn validate_digits(field: &'static str, value: &str) -> Result<(), NumericFieldError> {
	if value.is_empty() {
		return Err(NumericFieldError::new(field, value, "value cannot be empty"));
	}

	if !value.chars().all(|c| c.is_ascii_digit()) {
		return Err(NumericFieldError::new(
			field,
			value,
			"value must contain only digits",
		));
	}

	Ok(())
}

/// Parse a decimal string into a 256-bit unsigned integer
pub fn parse_u256(field: &'static str, value: &str) -> Result<U256, NumericFieldError> {
	validate_digits(field, value)?;
	U256::from_dec_str(value)
		.map_err(|e| NumericFieldError::new(field, value, format!("{:?}", e)))
}

/// Parse a decimal string into a `u64`
pub fn parse_u64(field: &'static str, value: &str) -> Result<u64, NumericFieldError> {
	validate_digits(field, value)?;
	value
		.parse::<u64>()
		.map_err(|e| NumericFieldError::new(field, value, e.to_string()))
}

/// Decimal string form of a 256-bit value
pub fn format_u256(value: &U256) -> String {
	value.to_string()
}
