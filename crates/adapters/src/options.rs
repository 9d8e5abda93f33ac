//! Per-adapter construction options

use std::collections::BTreeMap;
use swap_types::{ChainId, SecretString};

/// Overrides applied when building an adapter
///
/// Every field is optional; unset fields fall back to the adapter's defaults.
#[derive(Debug, Clone, Default)]
pub struct AdapterOptions {
	/// Registry name, defaults to the kind's canonical name
	pub name: Option<String>,
	/// Replaces the public endpoint (proxies, tests)
	pub base_url: Option<String>,
	pub api_key: Option<SecretString>,
	/// Replaces the default supported set; each chain needs a chain code
	pub supported_chains: Option<Vec<ChainId>>,
	/// Gas price sent to the build-swap endpoint
	pub gas_price: Option<String>,
	/// Extra headers added to every request
	pub headers: BTreeMap<String, String>,
}

impl AdapterOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	pub fn with_api_key(mut self, api_key: impl Into<SecretString>) -> Self {
		self.api_key = Some(api_key.into());
		self
	}

	pub fn with_supported_chains(mut self, chains: Vec<ChainId>) -> Self {
		self.supported_chains = Some(chains);
		self
	}

	pub fn with_gas_price(mut self, gas_price: impl Into<String>) -> Self {
		self.gas_price = Some(gas_price.into());
		self
	}

	pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.insert(key.into(), value.into());
		self
	}
}
