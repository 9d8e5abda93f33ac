//! Swap requests and their normalized results

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ratio, AmountError, BaseUnits, ChainId, DecimalAmount, TokenInfo};

pub mod chain_support;
pub mod fees;
pub mod validation;

pub use chain_support::ChainSupport;
pub use fees::FeeConvention;
pub use validation::{
	check_amount, check_recipient, check_same_chain, check_slippage, check_token_pair, run_checks,
	validate_swap_params, ParamCheck, BASE_CHECKS, SINGLE_CHAIN_CHECKS,
};

/// Deadline applied when the caller does not set one (20 minutes)
pub const DEFAULT_DEADLINE_WINDOW_SECS: u64 = 1200;

/// A requested swap, immutable for the duration of a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapParams {
	pub from_token: TokenInfo,
	pub to_token: TokenInfo,
	/// Input amount in `from_token` smallest units
	pub amount: BaseUnits,
	/// Fraction, e.g. `0.005` for half a percent
	pub slippage_tolerance: Decimal,
	pub recipient: String,
	/// Unix seconds
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deadline: Option<u64>,
}

impl SwapParams {
	pub fn new(
		from_token: TokenInfo,
		to_token: TokenInfo,
		amount: impl Into<BaseUnits>,
		slippage_tolerance: Decimal,
		recipient: impl Into<String>,
	) -> Self {
		Self {
			from_token,
			to_token,
			amount: amount.into(),
			slippage_tolerance,
			recipient: recipient.into(),
			deadline: None,
		}
	}

	pub fn with_deadline(mut self, deadline: u64) -> Self {
		self.deadline = Some(deadline);
		self
	}

	/// Chain the swap executes on
	pub fn chain(&self) -> ChainId {
		self.from_token.chain_id
	}
}

/// Caller deadline, or now plus [`DEFAULT_DEADLINE_WINDOW_SECS`]
pub fn resolve_deadline(params: &SwapParams) -> u64 {
	params.deadline.unwrap_or_else(|| {
		let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
		now + DEFAULT_DEADLINE_WINDOW_SECS
	})
}

/// A priced estimate, normalized across providers
///
/// Amounts are the exact smallest-unit figures the upstream reported, up to
/// the `uint256` range. The price is their ratio to 28 significant digits; use
/// [`SwapQuote::human_price`] for a decimals-adjusted rate. The fee is signed:
/// positive is a cost, negative a rebate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapQuote {
	input_amount: BaseUnits,
	output_amount: BaseUnits,
	expected_price: Decimal,
	fee: DecimalAmount,
	estimated_gas: Decimal,
}

impl SwapQuote {
	/// Build a quote, deriving `expected_price = output / input`
	pub fn from_amounts(
		input_amount: BaseUnits,
		output_amount: BaseUnits,
		fee: DecimalAmount,
		estimated_gas: Decimal,
	) -> Result<Self, AmountError> {
		let input = input_amount.to_u256()?;
		let output = output_amount.to_u256()?;

		if estimated_gas.is_sign_negative() && !estimated_gas.is_zero() {
			return Err(AmountError::Negative {
				value: format!("estimated_gas={}", estimated_gas),
			});
		}

		let expected_price = ratio("expected_price", output, input)?;

		Ok(Self {
			input_amount: BaseUnits::from(input),
			output_amount: BaseUnits::from(output),
			expected_price,
			fee,
			estimated_gas: estimated_gas.normalize(),
		})
	}

	pub fn input_amount(&self) -> &BaseUnits {
		&self.input_amount
	}

	pub fn output_amount(&self) -> &BaseUnits {
		&self.output_amount
	}

	pub fn expected_price(&self) -> Decimal {
		self.expected_price
	}

	pub fn fee(&self) -> &DecimalAmount {
		&self.fee
	}

	pub fn estimated_gas(&self) -> Decimal {
		self.estimated_gas
	}

	/// Price in whole tokens of output per whole token of input
	pub fn human_price(&self, from_decimals: u8, to_decimals: u8) -> Option<Decimal> {
		let shift = i32::from(from_decimals) - i32::from(to_decimals);
		// 10^-|shift|
		let unit = Decimal::try_new(1, shift.unsigned_abs()).ok()?;
		if shift >= 0 {
			self.expected_price.checked_div(unit)
		} else {
			self.expected_price.checked_mul(unit)
		}
		.map(|price| price.normalize())
	}
}

/// A transaction ready for an external signer
///
/// Holds no key or signature. Becomes invalid once `deadline` elapses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedSwapTransaction {
	pub to: String,
	/// Native value in wei as a decimal string
	pub value: String,
	/// Hex calldata
	pub data: String,
	pub chain_id: ChainId,
	/// Unix seconds
	pub deadline: u64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gas: Option<Decimal>,
}

impl UnsignedSwapTransaction {
	/// `value` falls back to `"0"` when absent or blank
	pub fn new(
		to: impl Into<String>,
		value: Option<String>,
		data: impl Into<String>,
		chain_id: ChainId,
		deadline: u64,
	) -> Self {
		let value = value
			.map(|v| v.trim().to_string())
			.filter(|v| !v.is_empty())
			.unwrap_or_else(|| "0".to_string());

		Self {
			to: to.into(),
			value,
			data: data.into(),
			chain_id,
			deadline,
			gas: None,
		}
	}

	pub fn with_gas(mut self, gas: Option<Decimal>) -> Self {
		self.gas = gas;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rust_decimal_macros::dec;

	fn params() -> SwapParams {
		SwapParams::new(
			TokenInfo::usdc_ethereum(),
			TokenInfo::weth_ethereum(),
			"1000000",
			dec!(0.01),
			"0x742d35Cc6634C0532925a3b8D38BA2297C33A9D7",
		)
	}

	fn quote(input: &str, output: &str) -> SwapQuote {
		SwapQuote::from_amounts(input.into(), output.into(), DecimalAmount::zero(), dec!(0))
			.unwrap()
	}

	#[test]
	fn test_quote_derives_price() {
		let quote = SwapQuote::from_amounts(
			"1000000".into(),
			"2000000".into(),
			"5".parse().unwrap(),
			dec!(21000),
		)
		.unwrap();
		assert_eq!(quote.input_amount().as_str(), "1000000");
		assert_eq!(quote.expected_price(), dec!(2));
		assert_eq!(quote.fee().to_string(), "5");
		assert_eq!(quote.estimated_gas(), dec!(21000));
	}

	#[test]
	fn test_quote_rejects_zero_input() {
		assert!(matches!(
			SwapQuote::from_amounts("0".into(), "10".into(), DecimalAmount::zero(), dec!(0)),
			Err(AmountError::DivisionByZero { .. })
		));
		assert!(matches!(
			SwapQuote::from_amounts("10".into(), "-1".into(), DecimalAmount::zero(), dec!(0)),
			Err(AmountError::Negative { .. })
		));
		assert!(matches!(
			SwapQuote::from_amounts("10".into(), "1".into(), DecimalAmount::zero(), dec!(-1)),
			Err(AmountError::Negative { .. })
		));
	}

	#[test]
	fn test_price_keeps_full_precision() {
		assert_eq!(
			quote("3", "1").expected_price() * dec!(3),
			dec!(0.9999999999999999999999999999)
		);
		assert_eq!(quote("4", "1").expected_price(), dec!(0.25));
	}

	#[test]
	fn test_amounts_beyond_decimal_range_stay_exact() {
		// 10^11 tokens of an 18-decimal token for 10^12 of another
		let large = quote(
			"100000000000000000000000000000",
			"1000000000000000000000000000000",
		);
		assert_eq!(large.input_amount().as_str(), "100000000000000000000000000000");
		assert_eq!(large.output_amount().as_str(), "1000000000000000000000000000000");
		assert_eq!(large.expected_price(), dec!(10));
		assert_eq!(large.human_price(18, 18), Some(dec!(10)));

		// 33 digits each; the price keeps 28 significant digits
		let doubled = quote(
			"123456789012345678901234567890123",
			"246913578024691357802469135780246",
		);
		let drift = (doubled.expected_price() - dec!(2)).abs();
		assert!(drift < dec!(0.000000000000000000000001), "{}", doubled.expected_price());
	}

	#[test]
	fn test_leading_zeros_are_dropped() {
		assert_eq!(quote("0010", "005").input_amount().as_str(), "10");
		assert_eq!(quote("0010", "005").output_amount().as_str(), "5");
	}

	#[test]
	fn test_human_price_adjusts_decimals() {
		// 1 USDC (6) -> 0.0005 WETH (18)
		assert_eq!(
			quote("1000000", "500000000000000").human_price(6, 18),
			Some(dec!(0.0005))
		);
		assert_eq!(quote("1", "1").human_price(18, 6), Some(dec!(1000000000000)));
	}

	#[test]
	fn test_default_deadline_window() {
		let now = u64::try_from(Utc::now().timestamp()).unwrap();
		let deadline = resolve_deadline(&params());
		assert!(deadline >= now + 1199 && deadline <= now + 1201);

		assert_eq!(resolve_deadline(&params().with_deadline(42)), 42);
	}

	#[test]
	fn test_transaction_value_defaults_to_zero() {
		let tx = UnsignedSwapTransaction::new("0xrouter", None, "0xdead", ChainId::Ethereum, 1);
		assert_eq!(tx.value, "0");

		let tx = UnsignedSwapTransaction::new(
			"0xrouter",
			Some(" ".to_string()),
			"0xdead",
			ChainId::Ethereum,
			1,
		);
		assert_eq!(tx.value, "0");

		let tx = UnsignedSwapTransaction::new(
			"0xrouter",
			Some("1000".to_string()),
			"0xdead",
			ChainId::Base,
			1,
		)
		.with_gas(Some(dec!(150000)));
		assert_eq!(tx.value, "1000");
		assert_eq!(tx.gas, Some(dec!(150000)));
	}
}
