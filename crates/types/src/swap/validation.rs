//! Composable parameter checks shared by every provider
//!
//! Each provider declares the list of checks it needs and runs it before any
//! network call. Checks run in order and stop at the first failure.

use rust_decimal::Decimal;

use super::SwapParams;
use crate::models::is_valid_address;
use crate::provider::ValidationError;

pub type ParamCheck = fn(&SwapParams) -> Result<(), ValidationError>;

/// Checks every provider applies
pub const BASE_CHECKS: &[ParamCheck] = &[
	check_amount,
	check_slippage,
	check_recipient,
	check_token_pair,
];

/// [`BASE_CHECKS`] plus the same-chain rule for single-chain aggregators
pub const SINGLE_CHAIN_CHECKS: &[ParamCheck] = &[
	check_amount,
	check_slippage,
	check_recipient,
	check_token_pair,
	check_same_chain,
];

/// Amount must be a `uint256` integer greater than zero
pub fn check_amount(params: &SwapParams) -> Result<(), ValidationError> {
	if params.amount.to_u256()?.is_zero() {
		return Err(ValidationError::NonPositiveAmount {
			amount: params.amount.to_string(),
		});
	}
	Ok(())
}

pub fn check_slippage(params: &SwapParams) -> Result<(), ValidationError> {
	let slippage = params.slippage_tolerance;
	if slippage < Decimal::ZERO || slippage > Decimal::ONE {
		return Err(ValidationError::SlippageOutOfRange { slippage });
	}
	Ok(())
}

pub fn check_recipient(params: &SwapParams) -> Result<(), ValidationError> {
	if !is_valid_address(params.recipient.trim()) {
		return Err(ValidationError::InvalidRecipient {
			recipient: params.recipient.clone(),
		});
	}
	Ok(())
}

/// Both addresses well-formed and not the same token
pub fn check_token_pair(params: &SwapParams) -> Result<(), ValidationError> {
	for token in [&params.from_token, &params.to_token] {
		if !is_valid_address(&token.address) {
			return Err(ValidationError::InvalidTokenAddress {
				address: token.address.clone(),
			});
		}
	}

	if params.from_token.same_token(&params.to_token) {
		return Err(ValidationError::IdenticalTokens {
			address: params.from_token.address.clone(),
		});
	}
	Ok(())
}

pub fn check_same_chain(params: &SwapParams) -> Result<(), ValidationError> {
	let (from, to) = (params.from_token.chain_id, params.to_token.chain_id);
	if from != to {
		return Err(ValidationError::CrossChainPair { from, to });
	}
	Ok(())
}

pub fn run_checks(params: &SwapParams, checks: &[ParamCheck]) -> Result<(), ValidationError> {
	checks.iter().try_for_each(|check| check(params))
}

/// Run [`BASE_CHECKS`]
pub fn validate_swap_params(params: &SwapParams) -> Result<(), ValidationError> {
	run_checks(params, BASE_CHECKS)
}
