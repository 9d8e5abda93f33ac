//! Swap provider types
//!
//! Shared models, the `SwapProvider` contract, validation helpers and the
//! collaborator traits used by the provider adapters.

pub mod models;
pub mod provider;
pub mod swap;
pub mod test_utils;
pub mod tokens;
pub mod transport;

// Re-export for adapters and tests
pub use alloy_primitives;
pub use chrono;
pub use rust_decimal;
pub use serde_json;

pub use models::{
	is_valid_address, to_base_units, to_human, AmountError, BaseUnits, ChainId, DecimalAmount,
	RawNumber, SecretString, TokenInfo, MAX_DECIMALS,
};

pub use provider::{
	ProviderInfo, ProviderKind, ProviderValidationError, RegistryError, SwapError, SwapProvider,
	SwapResult, TokenMetadataError, TransportError, ValidationError,
};

pub use swap::{
	resolve_deadline, run_checks, validate_swap_params, ChainSupport, FeeConvention, ParamCheck,
	SwapParams, SwapQuote, UnsignedSwapTransaction, BASE_CHECKS, DEFAULT_DEADLINE_WINDOW_SECS,
	SINGLE_CHAIN_CHECKS,
};

pub use tokens::{StaticTokenMetadata, TokenMetadataService};

pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
