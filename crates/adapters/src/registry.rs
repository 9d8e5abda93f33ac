//! Name-to-adapter mapping built once at start-up

use std::collections::BTreeMap;
use std::sync::Arc;
use swap_types::{
	HttpTransport, ProviderKind, RegistryError, SwapProvider, TokenInfo, TokenMetadataService,
};
use tracing::info;

use crate::{AdapterOptions, ProviderFactory};

/// Registered providers keyed by unique name, iterated in name order
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
	providers: BTreeMap<String, Arc<dyn SwapProvider>>,
}

impl ProviderRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Every built-in adapter with default options over one transport
	pub fn with_defaults(
		transport: Arc<dyn HttpTransport>,
		tokens: Arc<dyn TokenMetadataService>,
	) -> Result<Self, RegistryError> {
		let mut registry = Self::new();
		for kind in ProviderKind::ALL {
			registry.register(ProviderFactory::create(
				kind,
				transport.clone(),
				tokens.clone(),
				AdapterOptions::default(),
			)?)?;
		}
		Ok(registry)
	}

	/// Add a provider; names must be non-empty and unique
	pub fn register(&mut self, provider: Arc<dyn SwapProvider>) -> Result<(), RegistryError> {
		let name = provider.name().trim().to_string();
		if name.is_empty() {
			return Err(RegistryError::EmptyName);
		}
		if self.providers.contains_key(&name) {
			return Err(RegistryError::DuplicateName { name });
		}

		info!(
			"Registered swap provider {} v{} on chains {:?}",
			name,
			provider.version(),
			provider.supported_chains()
		);
		self.providers.insert(name, provider);
		Ok(())
	}

	pub fn get(&self, name: &str) -> Option<Arc<dyn SwapProvider>> {
		self.providers.get(name).cloned()
	}

	pub fn names(&self) -> Vec<&str> {
		self.providers.keys().map(String::as_str).collect()
	}

	pub fn providers(&self) -> Vec<Arc<dyn SwapProvider>> {
		self.providers.values().cloned().collect()
	}

	/// Providers able to swap `from` into `to`, checked locally
	pub fn supporting(&self, from: &TokenInfo, to: &TokenInfo) -> Vec<Arc<dyn SwapProvider>> {
		self.providers
			.values()
			.filter(|provider| provider.is_swap_supported(from, to))
			.cloned()
			.collect()
	}

	/// Providers whose credentials and configuration are in place
	pub fn initialized(&self) -> Vec<Arc<dyn SwapProvider>> {
		self.providers
			.values()
			.filter(|provider| provider.is_init())
			.cloned()
			.collect()
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}
}
