//! Provider contract, identity and error taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod errors;
pub mod traits;

pub use errors::{
	ProviderValidationError, RegistryError, SwapError, TokenMetadataError, TransportError,
	ValidationError,
};
pub use traits::SwapProvider;

/// Result type for provider operations
pub type SwapResult<T> = Result<T, SwapError>;
pub type ProviderValidationResult<T> = Result<T, ProviderValidationError>;

/// Identity of a provider adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
	/// Registry key, unique across the registry
	pub name: String,
	pub description: String,
	/// Adapter version (semver)
	pub version: String,
}

impl ProviderInfo {
	pub fn new(
		name: impl Into<String>,
		description: impl Into<String>,
		version: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			version: version.into(),
		}
	}

	pub fn validate(&self) -> ProviderValidationResult<()> {
		if self.name.is_empty() {
			return Err(ProviderValidationError::MissingRequiredField {
				field: "name".to_string(),
			});
		}

		if self.name.len() > 100
			|| !self
				.name
				.chars()
				.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
		{
			return Err(ProviderValidationError::InvalidName {
				name: self.name.clone(),
			});
		}

		if self.version.is_empty() {
			return Err(ProviderValidationError::MissingRequiredField {
				field: "version".to_string(),
			});
		}

		if !is_valid_semver(&self.version) {
			return Err(ProviderValidationError::InvalidVersion {
				version: self.version.clone(),
			});
		}

		Ok(())
	}
}

/// X.Y.Z with numeric parts
fn is_valid_semver(version: &str) -> bool {
	let parts: Vec<&str> = version.split('.').collect();
	parts.len() == 3 && parts.iter().all(|part| part.parse::<u32>().is_ok())
}

/// Aggregators with a built-in adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
	OpenOcean,
	ParaSwap,
	ZeroEx,
}

impl ProviderKind {
	pub const ALL: [ProviderKind; 3] = [
		ProviderKind::OpenOcean,
		ProviderKind::ParaSwap,
		ProviderKind::ZeroEx,
	];

	/// Default registry name for this kind
	pub fn canonical_name(&self) -> &'static str {
		match self {
			ProviderKind::OpenOcean => "openocean",
			ProviderKind::ParaSwap => "paraswap",
			ProviderKind::ZeroEx => "zeroex",
		}
	}
}

impl fmt::Display for ProviderKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.canonical_name())
	}
}

impl FromStr for ProviderKind {
	type Err = RegistryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"openocean" => Ok(ProviderKind::OpenOcean),
			"paraswap" => Ok(ProviderKind::ParaSwap),
			"zeroex" | "0x" => Ok(ProviderKind::ZeroEx),
			other => Err(RegistryError::UnknownProvider {
				kind: other.to_string(),
			}),
		}
	}
}
