//! Error taxonomy for swap providers and the provider registry

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{AmountError, ChainId};

/// Structured reason behind [`SwapError::InvalidParameters`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	#[error("Amount must be greater than zero: {amount}")]
	NonPositiveAmount { amount: String },

	#[error("Invalid amount: {0}")]
	InvalidAmount(#[from] AmountError),

	#[error("Slippage tolerance must be within [0, 1], got {slippage}")]
	SlippageOutOfRange { slippage: Decimal },

	#[error("Invalid recipient address: '{recipient}'")]
	InvalidRecipient { recipient: String },

	#[error("Invalid token address: '{address}'")]
	InvalidTokenAddress { address: String },

	#[error("Cannot swap a token for itself: {address}")]
	IdenticalTokens { address: String },

	#[error("Cross-chain swaps are not supported: {from} -> {to}")]
	CrossChainPair { from: ChainId, to: ChainId },
}

/// Errors returned by every [`crate::SwapProvider`] operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwapError {
	#[error("Invalid parameters: {0}")]
	InvalidParameters(#[from] ValidationError),

	#[error("Chain {chain} is not supported by provider {provider}")]
	UnsupportedChain { chain: ChainId, provider: String },

	#[error("Provider {provider} error: {message}")]
	ProviderError {
		provider: String,
		message: String,
		status_code: Option<u16>,
	},
}

impl SwapError {
	pub fn provider_failure(provider: impl Into<String>, message: impl Into<String>) -> Self {
		Self::ProviderError {
			provider: provider.into(),
			message: message.into(),
			status_code: None,
		}
	}

	/// Build a provider error from an upstream non-2xx response
	pub fn from_http_failure(provider: impl Into<String>, status_code: u16, body: &str) -> Self {
		let reason = match status_code {
			400 => "Bad Request",
			401 => "Unauthorized",
			403 => "Forbidden",
			404 => "Not Found",
			408 => "Request Timeout",
			429 => "Too Many Requests",
			500 => "Internal Server Error",
			502 => "Bad Gateway",
			503 => "Service Unavailable",
			504 => "Gateway Timeout",
			_ => "HTTP Error",
		};

		let message = if body.trim().is_empty() {
			format!("HTTP {} {}", status_code, reason)
		} else {
			format!("HTTP {} {}: {}", status_code, reason, truncate(body.trim(), 256))
		};

		Self::ProviderError {
			provider: provider.into(),
			message,
			status_code: Some(status_code),
		}
	}

	/// Prefix the message of a provider error, leaving other variants untouched
	pub fn with_context(self, context: &str) -> Self {
		match self {
			SwapError::ProviderError {
				provider,
				message,
				status_code,
			} => SwapError::ProviderError {
				provider,
				message: format!("{}: {}", context, message),
				status_code,
			},
			other => other,
		}
	}

	/// Upstream HTTP status, when the failure came from a response
	pub fn status_code(&self) -> Option<u16> {
		match self {
			SwapError::ProviderError { status_code, .. } => *status_code,
			_ => None,
		}
	}

	pub fn provider(&self) -> Option<&str> {
		match self {
			SwapError::UnsupportedChain { provider, .. } | SwapError::ProviderError { provider, .. } => {
				Some(provider)
			},
			SwapError::InvalidParameters(_) => None,
		}
	}

	/// Only upstream failures are worth retrying or falling back on
	pub fn is_retryable(&self) -> bool {
		matches!(self, SwapError::ProviderError { .. })
	}
}

fn truncate(text: &str, max_chars: usize) -> String {
	match text.char_indices().nth(max_chars) {
		Some((idx, _)) => format!("{}...", &text[..idx]),
		None => text.to_string(),
	}
}

/// Failures of the HTTP transport collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
	#[error("Request timed out after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("Connection error: {0}")]
	Connection(String),

	#[error("Invalid request: {0}")]
	InvalidRequest(String),

	#[error("Request failed: {0}")]
	Request(String),
}

/// Failures of the token metadata collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenMetadataError {
	#[error("Decimals unavailable for {address} on {chain}: {reason}")]
	Lookup {
		address: String,
		chain: ChainId,
		reason: String,
	},

	#[error(transparent)]
	Amount(#[from] AmountError),
}

/// Validation errors for [`crate::ProviderInfo`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderValidationError {
	#[error("Missing required field: {field}")]
	MissingRequiredField { field: String },

	#[error("Invalid provider name: {name}")]
	InvalidName { name: String },

	#[error("Invalid version format: {version}")]
	InvalidVersion { version: String },
}

/// Start-up errors raised while assembling providers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	#[error("Provider name cannot be empty")]
	EmptyName,

	#[error("Provider already registered: {name}")]
	DuplicateName { name: String },

	#[error("Invalid provider info: {0}")]
	InvalidInfo(#[from] ProviderValidationError),

	#[error("Unknown provider kind: {kind}")]
	UnknownProvider { kind: String },

	#[error("Provider {provider} has no chain code for {chain}")]
	ChainNotCovered { provider: String, chain: ChainId },

	#[error("Invalid configuration for provider {provider}: {reason}")]
	Configuration { provider: String, reason: String },
}
