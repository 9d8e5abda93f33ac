//! Configuration settings structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use swap_types::{is_valid_address, ChainId, ProviderKind, StaticTokenMetadata, MAX_DECIMALS};
use thiserror::Error;

use crate::configurable_value::{ConfigurableValue, ConfigurableValueError};
use swap_types::SecretString;

/// Root settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub logging: LoggingSettings,
	pub http: HttpSettings,
	/// Keyed by registry name
	pub providers: BTreeMap<String, ProviderSettings>,
	/// Decimals overrides for the token metadata service
	pub tokens: Vec<TokenSettings>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	/// Include targets and thread ids
	pub structured: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpSettings {
	/// Default per-request timeout
	pub timeout_ms: u64,
	/// Lifetime of pooled HTTP clients
	pub client_ttl_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderSettings {
	pub kind: ProviderKind,
	#[serde(default = "default_enabled")]
	pub enabled: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub base_url: Option<String>,
	/// Falls back to `http.timeout_ms`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub timeout_ms: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub api_key: Option<ConfigurableValue>,
	#[serde(default)]
	pub headers: BTreeMap<String, String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub supported_chains: Option<Vec<ChainId>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gas_price: Option<String>,
}

fn default_enabled() -> bool {
	true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenSettings {
	pub chain: ChainId,
	pub address: String,
	pub decimals: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
	#[error("Invalid log level: {level}")]
	InvalidLogLevel { level: String },

	#[error("Timeout must be greater than zero for {scope}")]
	ZeroTimeout { scope: String },

	#[error("Provider name cannot be empty")]
	EmptyProviderName,

	#[error("Provider {provider} has an invalid base URL: {url}")]
	InvalidBaseUrl { provider: String, url: String },

	#[error("Token override has an invalid address: {address}")]
	InvalidTokenAddress { address: String },

	#[error("Token override {address} has {decimals} decimals, more than {max}", max = MAX_DECIMALS)]
	TooManyDecimals { address: String, decimals: u8 },
}

impl ProviderSettings {
	pub fn new(kind: ProviderKind) -> Self {
		Self {
			kind,
			enabled: true,
			base_url: None,
			timeout_ms: None,
			api_key: None,
			headers: BTreeMap::new(),
			supported_chains: None,
			gas_price: None,
		}
	}

	/// Resolve the configured API key, if any
	pub fn api_key_secret(&self) -> Result<Option<SecretString>, ConfigurableValueError> {
		self.api_key.as_ref().map(ConfigurableValue::resolve).transpose()
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Default for HttpSettings {
	fn default() -> Self {
		Self {
			timeout_ms: 10_000,
			client_ttl_secs: 30 * 60,
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		let providers = ProviderKind::ALL
			.iter()
			.map(|kind| (kind.canonical_name().to_string(), ProviderSettings::new(*kind)))
			.collect();

		Self {
			logging: LoggingSettings::default(),
			http: HttpSettings::default(),
			providers,
			tokens: Vec::new(),
		}
	}
}

impl Settings {
	/// Enabled providers in name order
	pub fn enabled_providers(&self) -> impl Iterator<Item = (&String, &ProviderSettings)> {
		self.providers.iter().filter(|(_, provider)| provider.enabled)
	}

	pub fn timeout_for(&self, provider: &ProviderSettings) -> u64 {
		provider.timeout_ms.unwrap_or(self.http.timeout_ms)
	}

	/// Token metadata seeded with the configured decimals overrides
	pub fn token_metadata(&self) -> StaticTokenMetadata {
		self.tokens
			.iter()
			.fold(StaticTokenMetadata::new(), |metadata, token| {
				metadata.with_override(token.chain, &token.address, token.decimals)
			})
	}

	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
		if !LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
			return Err(ConfigValidationError::InvalidLogLevel {
				level: self.logging.level.clone(),
			});
		}

		if self.http.timeout_ms == 0 {
			return Err(ConfigValidationError::ZeroTimeout {
				scope: "http".to_string(),
			});
		}

		for (name, provider) in &self.providers {
			if name.trim().is_empty() {
				return Err(ConfigValidationError::EmptyProviderName);
			}
			if provider.timeout_ms == Some(0) {
				return Err(ConfigValidationError::ZeroTimeout {
					scope: name.clone(),
				});
			}
			if let Some(url) = &provider.base_url {
				if !url.starts_with("http://") && !url.starts_with("https://") {
					return Err(ConfigValidationError::InvalidBaseUrl {
						provider: name.clone(),
						url: url.clone(),
					});
				}
			}
		}

		for token in &self.tokens {
			if !is_valid_address(&token.address) {
				return Err(ConfigValidationError::InvalidTokenAddress {
					address: token.address.clone(),
				});
			}
			if token.decimals > MAX_DECIMALS {
				return Err(ConfigValidationError::TooManyDecimals {
					address: token.address.clone(),
					decimals: token.decimals,
				});
			}
		}

		Ok(())
	}
}
