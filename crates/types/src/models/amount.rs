//! Token amounts and exact decimal conversion
//!
//! Smallest-unit amounts travel as digit strings ([`BaseUnits`]) checked
//! against the `uint256` range an EVM token balance can occupy. Human-readable
//! amounts and fees use [`DecimalAmount`], an exact decimal of any size.
//! Conversions between the two only move the decimal point, so nothing is
//! rounded. [`Decimal`] is reserved for derived figures such as prices.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;
use thiserror::Error;

/// Largest token decimals whose unit still fits a `uint256` (10^77 < 2^256)
pub const MAX_DECIMALS: u8 = 77;

/// Significant digits a [`Decimal`] mantissa always holds
const DECIMAL_DIGITS: usize = 28;

/// Bound on scientific-notation exponents accepted from upstream
const MAX_EXPONENT: u64 = 255;

/// Amount conversion errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
	#[error("Amount cannot be empty")]
	Empty,

	#[error("Amount must contain only digits: {value}")]
	NotAnInteger { value: String },

	#[error("Amount is not a decimal number: {value}")]
	NotADecimal { value: String },

	#[error("Amount {value} exceeds the supported precision")]
	Overflow { value: String },

	#[error("Token decimals {decimals} exceed the maximum of {max}", max = MAX_DECIMALS)]
	UnsupportedDecimals { decimals: u8 },

	#[error("Amount {value} has more fractional digits than the token's {decimals} decimals")]
	TooPrecise { value: String, decimals: u8 },

	#[error("Amount cannot be negative: {value}")]
	Negative { value: String },

	#[error("Invalid decimal value for {field}: {value}")]
	InvalidDecimal { field: String, value: String },

	#[error("Division by zero while deriving {field}")]
	DivisionByZero { field: String },
}

/// Integer token quantity in the token's indivisible base unit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUnits(String);

impl BaseUnits {
	/// Wrap a raw string; call [`BaseUnits::validate`] before trusting it
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Numeric value, failing above `2^256 - 1`
	pub fn to_u256(&self) -> Result<U256, AmountError> {
		self.validate()?;
		self.0.parse::<U256>().map_err(|_| AmountError::Overflow {
			value: self.0.clone(),
		})
	}

	/// True for "0", "000" and friends
	pub fn is_zero(&self) -> bool {
		!self.0.is_empty() && self.0.chars().all(|c| c == '0')
	}

	/// Ensure the string is a non-empty run of ASCII digits
	pub fn validate(&self) -> Result<(), AmountError> {
		if self.0.is_empty() {
			return Err(AmountError::Empty);
		}

		if let Some(rest) = self.0.strip_prefix('-') {
			if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
				return Err(AmountError::Negative {
					value: self.0.clone(),
				});
			}
		}

		if !self.0.chars().all(|c| c.is_ascii_digit()) {
			return Err(AmountError::NotAnInteger {
				value: self.0.clone(),
			});
		}

		Ok(())
	}
}

impl fmt::Display for BaseUnits {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for BaseUnits {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for BaseUnits {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<u128> for BaseUnits {
	fn from(value: u128) -> Self {
		Self(value.to_string())
	}
}

impl From<u64> for BaseUnits {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}

impl From<U256> for BaseUnits {
	fn from(value: U256) -> Self {
		Self(value.to_string())
	}
}

impl Serialize for BaseUnits {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for BaseUnits {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		let amount = Self(value);
		amount.validate().map_err(serde::de::Error::custom)?;
		Ok(amount)
	}
}

impl FromStr for BaseUnits {
	type Err = AmountError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let amount = BaseUnits::new(s);
		amount.validate()?;
		Ok(amount)
	}
}

/// Exact signed decimal without a size limit
///
/// Kept normalized: no leading zeros in the integer part, no trailing zeros
/// in the fraction, and zero is never negative. Equality is numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalAmount {
	negative: bool,
	integer: String,
	fraction: String,
}

impl DecimalAmount {
	pub fn zero() -> Self {
		Self {
			negative: false,
			integer: "0".to_string(),
			fraction: String::new(),
		}
	}

	/// Place the decimal point `point` digits from the left of `digits`
	///
	/// `point` may be negative or past the end; zeros fill the gap.
	fn from_digits(negative: bool, digits: &str, point: i64) -> Self {
		let len = digits.len() as i64;
		let (integer, fraction) = if point <= 0 {
			(
				String::new(),
				format!("{}{}", "0".repeat(point.unsigned_abs() as usize), digits),
			)
		} else if point >= len {
			(
				format!("{}{}", digits, "0".repeat((point - len) as usize)),
				String::new(),
			)
		} else {
			let (integer, fraction) = digits.split_at(point as usize);
			(integer.to_string(), fraction.to_string())
		};

		let integer = match integer.trim_start_matches('0') {
			"" => "0".to_string(),
			trimmed => trimmed.to_string(),
		};
		let fraction = fraction.trim_end_matches('0').to_string();
		let is_zero = integer == "0" && fraction.is_empty();

		Self {
			negative: negative && !is_zero,
			integer,
			fraction,
		}
	}

	pub fn is_zero(&self) -> bool {
		self.integer == "0" && self.fraction.is_empty()
	}

	pub fn is_negative(&self) -> bool {
		self.negative
	}

	/// Digits after the decimal point
	pub fn scale(&self) -> usize {
		self.fraction.len()
	}

	/// Fixed-point value, when it fits a [`Decimal`]
	pub fn to_decimal(&self) -> Result<Decimal, AmountError> {
		Decimal::from_str_exact(&self.to_string()).map_err(|_| AmountError::Overflow {
			value: self.to_string(),
		})
	}
}

impl Default for DecimalAmount {
	fn default() -> Self {
		Self::zero()
	}
}

impl fmt::Display for DecimalAmount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.negative {
			write!(f, "-")?;
		}
		write!(f, "{}", self.integer)?;
		if !self.fraction.is_empty() {
			write!(f, ".{}", self.fraction)?;
		}
		Ok(())
	}
}

impl FromStr for DecimalAmount {
	type Err = AmountError;

	/// Accepts plain and scientific notation, e.g. `-1.5`, `.25`, `1e29`
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if trimmed.is_empty() {
			return Err(AmountError::Empty);
		}
		let malformed = || AmountError::NotADecimal {
			value: s.to_string(),
		};

		let (negative, unsigned) = match trimmed.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
		};

		let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
			Some((mantissa, exponent)) => {
				(mantissa, exponent.parse::<i64>().map_err(|_| malformed())?)
			},
			None => (unsigned, 0),
		};
		if exponent.unsigned_abs() > MAX_EXPONENT {
			return Err(AmountError::Overflow {
				value: s.to_string(),
			});
		}

		let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
		let all_digits = integer
			.chars()
			.chain(fraction.chars())
			.all(|c| c.is_ascii_digit());
		if (integer.is_empty() && fraction.is_empty()) || !all_digits {
			return Err(malformed());
		}

		let digits = format!("{}{}", integer, fraction);
		Ok(Self::from_digits(
			negative,
			&digits,
			integer.len() as i64 + exponent,
		))
	}
}

impl From<Decimal> for DecimalAmount {
	fn from(value: Decimal) -> Self {
		let mantissa = value.mantissa();
		let digits = mantissa.unsigned_abs().to_string();
		let point = digits.len() as i64 - i64::from(value.scale());
		Self::from_digits(mantissa < 0, &digits, point)
	}
}

impl Neg for DecimalAmount {
	type Output = Self;

	fn neg(mut self) -> Self {
		self.negative = !self.negative && !self.is_zero();
		self
	}
}

impl Serialize for DecimalAmount {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for DecimalAmount {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let raw = RawNumber::deserialize(deserializer)?;
		raw.to_string().parse().map_err(serde::de::Error::custom)
	}
}

fn check_decimals(decimals: u8) -> Result<(), AmountError> {
	if decimals > MAX_DECIMALS {
		return Err(AmountError::UnsupportedDecimals { decimals });
	}
	Ok(())
}

/// Convert a smallest-unit amount to its human-readable value
///
/// `1500000` with 6 decimals becomes `1.5`. Trailing zeros are stripped.
pub fn to_human(amount: &BaseUnits, decimals: u8) -> Result<DecimalAmount, AmountError> {
	check_decimals(decimals)?;

	let digits = amount.to_u256()?.to_string();
	let point = digits.len() as i64 - i64::from(decimals);
	Ok(DecimalAmount::from_digits(false, &digits, point))
}

/// Convert a human-readable value back to smallest units
///
/// Fails instead of rounding when `human` has more fractional digits than the
/// token supports.
pub fn to_base_units(human: &DecimalAmount, decimals: u8) -> Result<BaseUnits, AmountError> {
	check_decimals(decimals)?;

	if human.is_negative() {
		return Err(AmountError::Negative {
			value: human.to_string(),
		});
	}

	if human.scale() > usize::from(decimals) {
		return Err(AmountError::TooPrecise {
			value: human.to_string(),
			decimals,
		});
	}

	let padding = "0".repeat(usize::from(decimals) - human.scale());
	let digits = format!("{}{}{}", human.integer, human.fraction, padding);
	let amount = match digits.trim_start_matches('0') {
		"" => BaseUnits::new("0"),
		trimmed => BaseUnits::new(trimmed),
	};

	amount.to_u256().map_err(|_| AmountError::Overflow {
		value: human.to_string(),
	})?;
	Ok(amount)
}

/// `numerator / denominator` as a [`Decimal`]
///
/// Exact while both operands have at most 28 digits. Longer operands keep
/// their 28 leading digits, so the ratio carries 28 significant digits.
pub fn ratio(field: &str, numerator: U256, denominator: U256) -> Result<Decimal, AmountError> {
	if denominator.is_zero() {
		return Err(AmountError::DivisionByZero {
			field: field.to_string(),
		});
	}

	let overflow = || AmountError::Overflow {
		value: format!("{}/{}", numerator, denominator),
	};
	let (top, top_exponent) = leading_digits(numerator).ok_or_else(overflow)?;
	let (bottom, bottom_exponent) = leading_digits(denominator).ok_or_else(overflow)?;

	let quotient = top.checked_div(bottom).ok_or_else(overflow)?;
	shift(quotient, top_exponent - bottom_exponent)
		.map(|value| value.normalize())
		.ok_or_else(overflow)
}

/// Split into a mantissa of at most 28 digits and a power-of-ten exponent
fn leading_digits(value: U256) -> Option<(Decimal, i64)> {
	let digits = value.to_string();
	let kept = digits.len().min(DECIMAL_DIGITS);
	let mantissa = Decimal::from_str_exact(&digits[..kept]).ok()?;
	Some((mantissa, (digits.len() - kept) as i64))
}

/// Multiply by `10^exponent`
fn shift(mut value: Decimal, mut exponent: i64) -> Option<Decimal> {
	let limit = DECIMAL_DIGITS as i64;
	while exponent != 0 {
		let step = exponent.clamp(-limit, limit);
		let power = 10i128.pow(step.unsigned_abs() as u32);
		let factor = Decimal::try_from_i128_with_scale(power, 0).ok()?;
		value = if step > 0 {
			value.checked_mul(factor)?
		} else {
			value.checked_div(factor)?
		};
		exponent -= step;
	}
	Some(value)
}

/// Parse an upstream decimal string without rounding
pub fn parse_decimal(field: &str, value: &str) -> Result<Decimal, AmountError> {
	let trimmed = value.trim();
	let parsed = if trimmed.contains(['e', 'E']) {
		Decimal::from_scientific(trimmed)
	} else {
		Decimal::from_str_exact(trimmed)
	};

	parsed.map_err(|_| AmountError::InvalidDecimal {
		field: field.to_string(),
		value: value.to_string(),
	})
}

/// A numeric JSON field that upstream APIs send either as a string or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
	Text(String),
	Number(serde_json::Number),
}

impl RawNumber {
	/// Exact decimal value of this field
	pub fn to_decimal(&self, field: &str) -> Result<Decimal, AmountError> {
		parse_decimal(field, &self.to_string())
	}

	/// Exact value of any size
	pub fn to_amount(&self, field: &str) -> Result<DecimalAmount, AmountError> {
		self.to_string()
			.parse()
			.map_err(|_| AmountError::InvalidDecimal {
				field: field.to_string(),
				value: self.to_string(),
			})
	}

	/// Whole smallest-unit amount; JSON numbers such as `1e+29` are accepted
	pub fn to_base_units(&self, field: &str) -> Result<BaseUnits, AmountError> {
		let invalid = || AmountError::InvalidDecimal {
			field: field.to_string(),
			value: self.to_string(),
		};

		let amount = self.to_amount(field)?;
		if amount.is_negative() || amount.scale() > 0 {
			return Err(invalid());
		}
		to_base_units(&amount, 0).map_err(|_| invalid())
	}
}

impl fmt::Display for RawNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RawNumber::Text(text) => write!(f, "{}", text),
			RawNumber::Number(number) => write!(f, "{}", number),
		}
	}
}

impl From<&str> for RawNumber {
	fn from(value: &str) -> Self {
		RawNumber::Text(value.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rust_decimal_macros::dec;

	fn human(value: &str) -> DecimalAmount {
		value.parse().unwrap()
	}

	#[test]
	fn test_base_units_validation() {
		assert!(BaseUnits::from("1234567890").validate().is_ok());
		assert_eq!(BaseUnits::from("").validate(), Err(AmountError::Empty));
		assert!(matches!(
			BaseUnits::from("-5").validate(),
			Err(AmountError::Negative { .. })
		));
		assert!(matches!(
			BaseUnits::from("12.5").validate(),
			Err(AmountError::NotAnInteger { .. })
		));
		assert!(matches!(
			BaseUnits::from("abc").validate(),
			Err(AmountError::NotAnInteger { .. })
		));
	}

	#[test]
	fn test_is_zero() {
		assert!(BaseUnits::from("0").is_zero());
		assert!(BaseUnits::from("000").is_zero());
		assert!(!BaseUnits::from("10").is_zero());
		assert!(!BaseUnits::from("").is_zero());
	}

	#[test]
	fn test_u256_range() {
		let max = U256::MAX.to_string();
		assert_eq!(BaseUnits::new(max.clone()).to_u256().unwrap(), U256::MAX);
		assert_eq!(
			BaseUnits::from("100000000000000000000000000000")
				.to_u256()
				.unwrap()
				.to_string(),
			"100000000000000000000000000000"
		);

		// 2^256
		let beyond = BaseUnits::from(
			"115792089237316195423570985008687907853269984665640564039457584007913129639936",
		);
		assert!(matches!(beyond.to_u256(), Err(AmountError::Overflow { .. })));
	}

	#[test]
	fn test_decimal_amount_parsing() {
		assert_eq!(human("1.50").to_string(), "1.5");
		assert_eq!(human("007").to_string(), "7");
		assert_eq!(human(".25").to_string(), "0.25");
		assert_eq!(human("-0.0").to_string(), "0");
		assert_eq!(human("1e29").to_string(), "100000000000000000000000000000");
		assert_eq!(human("1.5e-3").to_string(), "0.0015");
		assert_eq!(human("-2.5E2").to_string(), "-250");
		assert_eq!(human("1.5"), human("1.500"));

		assert_eq!("".parse::<DecimalAmount>(), Err(AmountError::Empty));
		for bad in [".", "1.2.3", "abc", "1e", "--1", "1,5"] {
			assert!(
				matches!(bad.parse::<DecimalAmount>(), Err(AmountError::NotADecimal { .. })),
				"{}",
				bad
			);
		}
		assert!(matches!(
			"1e9999".parse::<DecimalAmount>(),
			Err(AmountError::Overflow { .. })
		));
	}

	#[test]
	fn test_decimal_amount_from_decimal_and_sign() {
		assert_eq!(DecimalAmount::from(dec!(-0.750)).to_string(), "-0.75");
		assert_eq!(DecimalAmount::from(dec!(1200)).to_string(), "1200");
		assert_eq!(-human("5"), human("-5"));
		assert_eq!(-DecimalAmount::zero(), DecimalAmount::zero());
		assert!(!(-DecimalAmount::zero()).is_negative());
		assert_eq!(human("2.5").to_decimal().unwrap(), dec!(2.5));
		assert!(matches!(
			human("100000000000000000000000000000").to_decimal(),
			Err(AmountError::Overflow { .. })
		));
	}

	#[test]
	fn test_to_human() {
		assert_eq!(to_human(&BaseUnits::from("1500000"), 6).unwrap(), human("1.5"));
		assert_eq!(
			to_human(&BaseUnits::from("1000000000000000000"), 18).unwrap(),
			human("1")
		);
		assert_eq!(
			to_human(&BaseUnits::from("1"), 18).unwrap().to_string(),
			"0.000000000000000001"
		);
		assert_eq!(to_human(&BaseUnits::from("42"), 0).unwrap(), human("42"));
		assert_eq!(to_human(&BaseUnits::from("0"), 18).unwrap().to_string(), "0");
	}

	#[test]
	fn test_to_base_units() {
		assert_eq!(to_base_units(&human("1.5"), 6).unwrap().as_str(), "1500000");
		assert_eq!(to_base_units(&human("2"), 0).unwrap().as_str(), "2");
		assert_eq!(
			to_base_units(&human("1.000"), 18).unwrap().as_str(),
			"1000000000000000000"
		);
		assert_eq!(to_base_units(&human("0"), 6).unwrap().as_str(), "0");
		assert!(matches!(
			to_base_units(&human("0.0000001"), 6),
			Err(AmountError::TooPrecise { .. })
		));
		assert!(matches!(
			to_base_units(&human("-1"), 6),
			Err(AmountError::Negative { .. })
		));
	}

	#[test]
	fn test_round_trip_is_exact() {
		let amounts = [
			"1",
			"7919",
			"1000000007",
			"1200000",
			"50000000000000000000",
			"123456789012345678901234567",
			"100000000000000000000000000000",
			"987654321098765432109876543210987654321",
		];

		for decimals in [0u8, 6, 8, 18, 24, 36] {
			for raw in amounts {
				let original = BaseUnits::from(raw);
				let human = to_human(&original, decimals).unwrap();
				let back = to_base_units(&human, decimals).unwrap();
				assert_eq!(back, original, "decimals={} amount={}", decimals, raw);
			}
		}
	}

	#[test]
	fn test_large_amounts_at_high_decimals() {
		let amount = BaseUnits::from("100000000000000000000000000000");
		assert_eq!(to_human(&amount, 36).unwrap().to_string(), "0.0000001");
		assert_eq!(to_human(&amount, 18).unwrap().to_string(), "100000000000");

		let whale = human("123456789012345678901234567890.123456789012345678901234567891");
		let units = to_base_units(&whale, 36).unwrap();
		assert_eq!(
			units.as_str(),
			"123456789012345678901234567890123456789012345678901234567891000000"
		);
		assert_eq!(to_human(&units, 36).unwrap(), whale);
	}

	#[test]
	fn test_unsupported_decimals_and_overflow() {
		assert!(matches!(
			to_human(&BaseUnits::from("1"), 78),
			Err(AmountError::UnsupportedDecimals { decimals: 78 })
		));
		assert_eq!(
			to_base_units(&human("1"), MAX_DECIMALS).unwrap().as_str(),
			format!("1{}", "0".repeat(77))
		);

		// Twelve whole tokens at 77 decimals pass 2^256
		assert!(matches!(
			to_base_units(&human("12"), MAX_DECIMALS),
			Err(AmountError::Overflow { .. })
		));
	}

	#[test]
	fn test_ratio() {
		let units = |s: &str| BaseUnits::from(s).to_u256().unwrap();

		assert_eq!(ratio("price", units("1000000"), units("2500000")).unwrap(), dec!(0.4));
		assert_eq!(ratio("price", units("4"), units("1")).unwrap(), dec!(4));
		assert_eq!(
			ratio("price", units("100000000000000000000000000000"), units("1000000")).unwrap(),
			dec!(100000000000000000000000)
		);
		assert_eq!(
			ratio("price", units("1000000"), units("100000000000000000000000000000")).unwrap(),
			dec!(0.00000000000000000000001)
		);
		assert!(matches!(
			ratio("price", units("1"), U256::ZERO),
			Err(AmountError::DivisionByZero { .. })
		));
	}

	#[test]
	fn test_raw_number_accepts_text_and_numbers() {
		let text: RawNumber = serde_json::from_str("\"21000\"").unwrap();
		assert_eq!(text.to_decimal("estimatedGas").unwrap(), dec!(21000));

		let number: RawNumber = serde_json::from_str("21000").unwrap();
		assert_eq!(number.to_decimal("estimatedGas").unwrap(), dec!(21000));

		let negative: RawNumber = serde_json::from_str("\"-5\"").unwrap();
		assert_eq!(negative.to_decimal("save").unwrap(), dec!(-5));

		let scientific: RawNumber = serde_json::from_str("1.5e3").unwrap();
		assert_eq!(scientific.to_decimal("gas").unwrap(), dec!(1500));

		let garbage = RawNumber::from("n/a");
		assert!(matches!(
			garbage.to_decimal("save"),
			Err(AmountError::InvalidDecimal { .. })
		));
	}

	#[test]
	fn test_raw_number_to_base_units() {
		let large = RawNumber::from("100000000000000000000000000000");
		assert_eq!(
			large.to_base_units("outAmount").unwrap().as_str(),
			"100000000000000000000000000000"
		);

		// serde_json turns integers past u64 into floats
		let float: RawNumber = serde_json::from_str("1e29").unwrap();
		assert_eq!(
			float.to_base_units("outAmount").unwrap().as_str(),
			"100000000000000000000000000000"
		);

		for bad in ["1.5", "-3", "n/a"] {
			assert!(
				matches!(
					RawNumber::from(bad).to_base_units("outAmount"),
					Err(AmountError::InvalidDecimal { .. })
				),
				"{}",
				bad
			);
		}
	}

	#[test]
	fn test_serde_validation() {
		let amount: BaseUnits = serde_json::from_str("\"2500000000\"").unwrap();
		assert_eq!(amount.as_str(), "2500000000");
		assert!(serde_json::from_str::<BaseUnits>("\"12a\"").is_err());
		assert_eq!(serde_json::to_string(&amount).unwrap(), "\"2500000000\"");

		let fee: DecimalAmount = serde_json::from_str("-0.75").unwrap();
		assert_eq!(serde_json::to_string(&fee).unwrap(), "\"-0.75\"");
	}
}
