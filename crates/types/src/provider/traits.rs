//! The contract every swap provider implements

use async_trait::async_trait;
use std::fmt::Debug;

use super::{ProviderInfo, SwapResult};
use crate::models::{ChainId, TokenInfo};
use crate::swap::{ChainSupport, SwapParams, SwapQuote, UnsignedSwapTransaction};

/// Uniform interface over a DEX aggregator
///
/// Implementations hold only immutable configuration and injected
/// collaborators, so one instance can serve concurrent calls behind an `Arc`.
#[async_trait]
pub trait SwapProvider: Send + Sync + Debug {
	fn provider_info(&self) -> &ProviderInfo;

	/// Chain-code table backing the chain checks
	fn chain_support(&self) -> &ChainSupport;

	/// Registry key
	fn name(&self) -> &str {
		&self.provider_info().name
	}

	fn version(&self) -> &str {
		&self.provider_info().version
	}

	fn supported_chains(&self) -> &[ChainId] {
		self.chain_support().supported_chains()
	}

	/// Whether credentials and configuration needed for calls are present
	fn is_init(&self) -> bool;

	/// Local check on both tokens' chains, never touches the network
	fn is_swap_supported(&self, from: &TokenInfo, to: &TokenInfo) -> bool {
		self.chain_support().validate_chain_id(from, to)
	}

	async fn get_swap_quote(&self, params: &SwapParams) -> SwapResult<SwapQuote>;

	async fn get_unsigned_transaction(
		&self,
		params: &SwapParams,
	) -> SwapResult<UnsignedSwapTransaction>;
}
