//! Per-provider chain support table

use std::collections::BTreeMap;

use crate::models::{ChainId, TokenInfo};
use crate::provider::{RegistryError, SwapError, SwapResult};

/// Maps networks to a provider's own chain codes
///
/// A chain is usable only when it is both in the supported set and has a code.
/// The table is fixed once the provider is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSupport {
	provider: String,
	codes: BTreeMap<ChainId, String>,
	supported: Vec<ChainId>,
}

impl ChainSupport {
	/// Every supported chain must appear in `codes`
	pub fn new(
		provider: impl Into<String>,
		codes: &[(ChainId, &str)],
		supported: &[ChainId],
	) -> Result<Self, RegistryError> {
		let provider = provider.into();
		let codes: BTreeMap<ChainId, String> = codes
			.iter()
			.map(|(chain, code)| (*chain, code.to_string()))
			.collect();

		let mut table = Self {
			provider,
			codes,
			supported: Vec::new(),
		};
		table.supported = table.covered(supported)?;
		Ok(table)
	}

	/// Replace the supported set, e.g. from configuration
	pub fn with_supported_chains(mut self, subset: &[ChainId]) -> Result<Self, RegistryError> {
		self.supported = self.covered(subset)?;
		Ok(self)
	}

	fn covered(&self, chains: &[ChainId]) -> Result<Vec<ChainId>, RegistryError> {
		let mut out = Vec::with_capacity(chains.len());
		for chain in chains {
			if !self.codes.contains_key(chain) {
				return Err(RegistryError::ChainNotCovered {
					provider: self.provider.clone(),
					chain: *chain,
				});
			}
			if !out.contains(chain) {
				out.push(*chain);
			}
		}
		out.sort();
		Ok(out)
	}

	pub fn supported_chains(&self) -> &[ChainId] {
		&self.supported
	}

	pub fn chain_code(&self, chain: ChainId) -> Option<&str> {
		if !self.supported.contains(&chain) {
			return None;
		}
		self.codes.get(&chain).map(String::as_str)
	}

	/// Both ends supported and mapped
	/// Both tokens sit on chains this table can serve
	pub fn validate_chain_id(&self, from: &TokenInfo, to: &TokenInfo) -> bool {
		self.chain_code(from.chain_id).is_some() && self.chain_code(to.chain_id).is_some()
	}

	pub fn resolve(&self, chain: ChainId) -> SwapResult<&str> {
		self.chain_code(chain).ok_or_else(|| SwapError::UnsupportedChain {
			chain,
			provider: self.provider.clone(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const CODES: &[(ChainId, &str)] = &[
		(ChainId::Ethereum, "eth"),
		(ChainId::Polygon, "polygon"),
		(ChainId::Bsc, "bsc"),
	];

	#[test]
	fn test_lookup() {
		let table =
			ChainSupport::new("test", CODES, &[ChainId::Polygon, ChainId::Ethereum]).unwrap();
		assert_eq!(
			table.supported_chains(),
			&[ChainId::Ethereum, ChainId::Polygon]
		);
		assert_eq!(table.chain_code(ChainId::Ethereum), Some("eth"));
		// mapped but not enabled
		assert_eq!(table.chain_code(ChainId::Bsc), None);

		let usdc = TokenInfo::usdc_ethereum();
		let polygon_usdc = TokenInfo::usdc_polygon();
		let bsc_token = TokenInfo::new(usdc.address.clone(), ChainId::Bsc, 18);
		assert!(table.validate_chain_id(&usdc, &polygon_usdc));
		assert!(!table.validate_chain_id(&usdc, &bsc_token));
		assert!(!table.validate_chain_id(&bsc_token, &bsc_token));
	}

	#[test]
	fn test_supported_chain_without_code_is_rejected() {
		let err = ChainSupport::new("test", CODES, &[ChainId::Base]).unwrap_err();
		assert_eq!(
			err,
			RegistryError::ChainNotCovered {
				provider: "test".to_string(),
				chain: ChainId::Base,
			}
		);
	}

	#[test]
	fn test_supported_chains_override() {
		let table = ChainSupport::new("test", CODES, &[ChainId::Ethereum, ChainId::Bsc])
			.unwrap()
			.with_supported_chains(&[ChainId::Bsc, ChainId::Bsc])
			.unwrap();
		assert_eq!(table.supported_chains(), &[ChainId::Bsc]);
		assert!(ChainSupport::new("test", CODES, &[])
			.unwrap()
			.with_supported_chains(&[ChainId::Avalanche])
			.is_err());
	}

	#[test]
	fn test_resolve_reports_provider() {
		let table = ChainSupport::new("test", CODES, &[ChainId::Ethereum]).unwrap();
		assert_eq!(table.resolve(ChainId::Ethereum).unwrap(), "eth");
		match table.resolve(ChainId::Polygon) {
			Err(SwapError::UnsupportedChain { chain, provider }) => {
				assert_eq!(chain, ChainId::Polygon);
				assert_eq!(provider, "test");
			},
			other => panic!("unexpected: {:?}", other),
		}
	}
}
