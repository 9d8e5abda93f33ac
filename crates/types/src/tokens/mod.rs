//! Token metadata boundary

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::models::{self, BaseUnits, ChainId, DecimalAmount, TokenInfo};
use crate::provider::TokenMetadataError;
use tracing::debug;

/// Source of token decimals and unit conversion
#[async_trait]
pub trait TokenMetadataService: Send + Sync + Debug {
	async fn decimals(&self, token: &TokenInfo) -> Result<u8, TokenMetadataError>;

	/// Smallest units to human-readable, exact
	async fn to_human(
		&self,
		token: &TokenInfo,
		amount: &BaseUnits,
	) -> Result<DecimalAmount, TokenMetadataError> {
		let decimals = self.decimals(token).await?;
		Ok(models::to_human(amount, decimals)?)
	}

	/// Human-readable to smallest units, failing rather than rounding
	async fn to_base_units(
		&self,
		token: &TokenInfo,
		human: &DecimalAmount,
	) -> Result<BaseUnits, TokenMetadataError> {
		let decimals = self.decimals(token).await?;
		Ok(models::to_base_units(human, decimals)?)
	}
}

/// In-memory decimals table
///
/// Overrides are keyed by chain and lowercased address; tokens without one
/// use the decimals they carry.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenMetadata {
	overrides: HashMap<(ChainId, String), u8>,
}

impl StaticTokenMetadata {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_override(mut self, chain: ChainId, address: &str, decimals: u8) -> Self {
		self.insert(chain, address, decimals);
		self
	}

	pub fn insert(&mut self, chain: ChainId, address: &str, decimals: u8) {
		self.overrides
			.insert((chain, address.to_ascii_lowercase()), decimals);
	}

	pub fn len(&self) -> usize {
		self.overrides.len()
	}

	pub fn is_empty(&self) -> bool {
		self.overrides.is_empty()
	}
}

#[async_trait]
impl TokenMetadataService for StaticTokenMetadata {
	async fn decimals(&self, token: &TokenInfo) -> Result<u8, TokenMetadataError> {
		let decimals = match self.overrides.get(&(token.chain_id, token.address_key())) {
			Some(decimals) => {
				debug!("Decimals override for {}: {}", token.label(), decimals);
				*decimals
			},
			None => token.decimals,
		};

		if decimals > models::MAX_DECIMALS {
			return Err(TokenMetadataError::Lookup {
				address: token.address.clone(),
				chain: token.chain_id,
				reason: format!("{} decimals is beyond the supported scale", decimals),
			});
		}
		Ok(decimals)
	}
}
