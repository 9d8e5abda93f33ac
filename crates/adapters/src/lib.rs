//! Swap adapters
//!
//! `SwapProvider` implementations for DEX aggregators, the reqwest transport
//! they use in production and the provider registry.

mod base;
pub mod client_cache;
pub mod openocean_adapter;
pub mod options;
pub mod paraswap_adapter;
pub mod registry;
pub mod reqwest_transport;
pub mod zeroex_adapter;

pub use client_cache::{global_client_cache, ClientCache, ClientConfig};
pub use openocean_adapter::OpenOceanAdapter;
pub use options::AdapterOptions;
pub use paraswap_adapter::ParaSwapAdapter;
pub use registry::ProviderRegistry;
pub use reqwest_transport::ReqwestTransport;
pub use swap_types::{ProviderKind, RegistryError, SwapError, SwapProvider, SwapResult};
pub use zeroex_adapter::ZeroExAdapter;

use std::sync::Arc;
use swap_types::{HttpTransport, TokenMetadataService};

/// Builds adapters from a [`ProviderKind`]
pub struct ProviderFactory;

impl ProviderFactory {
	pub fn create(
		kind: ProviderKind,
		transport: Arc<dyn HttpTransport>,
		tokens: Arc<dyn TokenMetadataService>,
		options: AdapterOptions,
	) -> Result<Arc<dyn SwapProvider>, RegistryError> {
		let provider: Arc<dyn SwapProvider> = match kind {
			ProviderKind::OpenOcean => {
				Arc::new(OpenOceanAdapter::with_options(transport, tokens, options)?)
			},
			ProviderKind::ParaSwap => {
				Arc::new(ParaSwapAdapter::with_options(transport, tokens, options)?)
			},
			ProviderKind::ZeroEx => Arc::new(ZeroExAdapter::with_options(transport, tokens, options)?),
		};
		Ok(provider)
	}

	/// Parse a kind name such as `"openocean"` or `"0x"` and build it
	pub fn create_by_name(
		kind: &str,
		transport: Arc<dyn HttpTransport>,
		tokens: Arc<dyn TokenMetadataService>,
		options: AdapterOptions,
	) -> Result<Arc<dyn SwapProvider>, RegistryError> {
		Self::create(kind.parse()?, transport, tokens, options)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use swap_types::test_utils::MockTransport;
	use swap_types::{ChainId, StaticTokenMetadata};

	#[test]
	fn test_factory_builds_every_kind() {
		let transport: Arc<dyn HttpTransport> =
			Arc::new(MockTransport::responding(200, serde_json::json!({})));
		let tokens: Arc<dyn TokenMetadataService> = Arc::new(StaticTokenMetadata::new());

		for kind in ProviderKind::ALL {
			let provider =
				ProviderFactory::create(kind, transport.clone(), tokens.clone(), AdapterOptions::new())
					.unwrap();
			assert_eq!(provider.name(), kind.canonical_name());
			assert!(provider.provider_info().validate().is_ok());
			assert!(provider.supported_chains().contains(&ChainId::Ethereum));
		}
	}

	#[test]
	fn test_factory_rejects_unknown_kind() {
		let result = ProviderFactory::create_by_name(
			"1inch",
			Arc::new(MockTransport::responding(200, serde_json::json!({}))),
			Arc::new(StaticTokenMetadata::new()),
			AdapterOptions::new(),
		);
		assert!(matches!(
			result,
			Err(RegistryError::UnknownProvider { .. })
		));
	}
}
