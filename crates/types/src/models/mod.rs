//! Shared domain models used by providers, the registry and configuration

pub mod amount;
pub mod chain;
pub mod secret_string;
pub mod token;

pub use amount::{
	parse_decimal, ratio, to_base_units, to_human, AmountError, BaseUnits, DecimalAmount,
	RawNumber, MAX_DECIMALS,
};
pub use chain::ChainId;
pub use secret_string::SecretString;
pub use token::{is_valid_address, TokenInfo};
