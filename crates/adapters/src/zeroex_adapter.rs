//! 0x Swap API v1 adapter
//!
//! Each chain has its own host (`https://{prefix}.0x.org`). Quotes use the
//! indicative `/swap/v1/price` endpoint and transactions the firm
//! `/swap/v1/quote`. An API key is required.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use swap_types::{
	resolve_deadline, ChainId, ChainSupport, FeeConvention, HttpRequest, HttpTransport,
	ParamCheck, ProviderInfo, RawNumber, RegistryError, SwapParams, SwapProvider, SwapQuote,
	SwapResult, TokenMetadataService, UnsignedSwapTransaction, SINGLE_CHAIN_CHECKS,
};
use tracing::{debug, warn};

use crate::base::{AdapterProfile, ProviderCore};
use crate::options::AdapterOptions;

/// `protocolFee` is paid by the taker
pub const FEE_CONVENTION: FeeConvention = FeeConvention::PositiveIsCost;

const PARAM_CHECKS: &[ParamCheck] = SINGLE_CHAIN_CHECKS;

/// Marker base URL meaning "pick the per-chain host"
const PER_CHAIN_HOST: &str = "https://api.0x.org";

const CHAIN_CODES: &[(ChainId, &str)] = &[
	(ChainId::Ethereum, "api"),
	(ChainId::Optimism, "optimism"),
	(ChainId::Bsc, "bsc"),
	(ChainId::Polygon, "polygon"),
	(ChainId::Base, "base"),
	(ChainId::Arbitrum, "arbitrum"),
	(ChainId::Avalanche, "avalanche"),
];

const PROFILE: AdapterProfile = AdapterProfile {
	default_name: "zeroex",
	description: "0x Swap API v1",
	version: "1.0.0",
	default_base_url: PER_CHAIN_HOST,
	api_key_header: "0x-api-key",
	chain_codes: CHAIN_CODES,
	default_chains: &[
		ChainId::Ethereum,
		ChainId::Optimism,
		ChainId::Bsc,
		ChainId::Polygon,
		ChainId::Base,
		ChainId::Arbitrum,
		ChainId::Avalanche,
	],
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceResponse {
	sell_amount: Option<RawNumber>,
	buy_amount: Option<RawNumber>,
	estimated_gas: Option<RawNumber>,
	gas: Option<RawNumber>,
	protocol_fee: Option<RawNumber>,
	reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResponse {
	to: Option<String>,
	data: Option<String>,
	value: Option<RawNumber>,
	gas: Option<RawNumber>,
	reason: Option<String>,
}

#[derive(Debug)]
pub struct ZeroExAdapter {
	core: ProviderCore,
}

impl ZeroExAdapter {
	pub fn new(
		transport: Arc<dyn HttpTransport>,
		tokens: Arc<dyn TokenMetadataService>,
	) -> Result<Self, RegistryError> {
		Self::with_options(transport, tokens, AdapterOptions::default())
	}

	pub fn with_options(
		transport: Arc<dyn HttpTransport>,
		tokens: Arc<dyn TokenMetadataService>,
		options: AdapterOptions,
	) -> Result<Self, RegistryError> {
		Ok(Self {
			core: ProviderCore::new(&PROFILE, options, transport, tokens)?,
		})
	}

	/// Per-chain host unless the base URL was overridden
	fn host(&self, prefix: &str) -> String {
		if self.core.base_url == PER_CHAIN_HOST {
			format!("https://{}.0x.org", prefix)
		} else {
			self.core.base_url.clone()
		}
	}

	fn swap_request(&self, path: &str, prefix: &str, params: &SwapParams) -> HttpRequest {
		HttpRequest::get(format!("{}/swap/v1/{}", self.host(prefix), path))
			.query("sellToken", &params.from_token.address)
			.query("buyToken", &params.to_token.address)
			.query("sellAmount", &params.amount)
			.query("slippagePercentage", params.slippage_tolerance.normalize())
	}

	async fn fetch_quote(&self, params: &SwapParams) -> SwapResult<SwapQuote> {
		let prefix = self.core.prepare(params, PARAM_CHECKS)?;

		debug!(
			"0x price on {}: {} {} -> {}",
			prefix,
			params.amount,
			params.from_token.label(),
			params.to_token.label()
		);

		let response: PriceResponse = self
			.core
			.send_json(self.swap_request("price", prefix, params))
			.await?;

		if response.sell_amount.is_none() {
			let detail = response
				.reason
				.unwrap_or_else(|| "sellAmount not present".to_string());
			return Err(self.core.invalid_response(detail));
		}

		let input = self
			.core
			.amount_field("sellAmount", response.sell_amount.as_ref())?;
		let output = self
			.core
			.amount_field("buyAmount", response.buy_amount.as_ref())?;
		let gas = self.core.decimal_field(
			"estimatedGas",
			response.estimated_gas.as_ref().or(response.gas.as_ref()),
		)?;
		let protocol_fee = self
			.core
			.exact_field("protocolFee", response.protocol_fee.as_ref())?;

		SwapQuote::from_amounts(input, output, FEE_CONVENTION.to_fee(protocol_fee), gas)
			.map_err(|e| self.core.invalid_response(e))
	}

	async fn build_transaction(&self, params: &SwapParams) -> SwapResult<UnsignedSwapTransaction> {
		let prefix = self.core.prepare(params, PARAM_CHECKS)?;
		// 0x orders expire on their own; the deadline is reported, not sent
		let deadline = resolve_deadline(params);

		let mut request = self
			.swap_request("quote", prefix, params)
			.query("takerAddress", params.recipient.trim());
		if let Some(gas_price) = &self.core.gas_price {
			request = request.query("gasPrice", gas_price);
		}

		let response: QuoteResponse = self.core.send_json(request).await?;

		let calldata = response
			.data
			.filter(|d| !d.is_empty())
			.ok_or_else(|| {
				self.core.invalid_response(
					response
						.reason
						.clone()
						.unwrap_or_else(|| "data not present".to_string()),
				)
			})?;
		let to = response
			.to
			.filter(|t| !t.is_empty())
			.ok_or_else(|| self.core.invalid_response("to not present"))?;
		let gas = self.core.optional_decimal_field("gas", response.gas.as_ref())?;

		Ok(UnsignedSwapTransaction::new(
			to,
			response.value.map(|v| v.to_string()),
			calldata,
			params.chain(),
			deadline,
		)
		.with_gas(gas))
	}
}

#[async_trait]
impl SwapProvider for ZeroExAdapter {
	fn provider_info(&self) -> &ProviderInfo {
		&self.core.info
	}

	fn chain_support(&self) -> &ChainSupport {
		&self.core.chains
	}

	/// Requests are rejected without an API key
	fn is_init(&self) -> bool {
		self.core.api_key.is_some()
	}

	async fn get_swap_quote(&self, params: &SwapParams) -> SwapResult<SwapQuote> {
		self.fetch_quote(params).await.map_err(|e| {
			if e.is_retryable() {
				warn!("0x quote failed: {}", e);
			}
			e.with_context("Failed to get swap quote")
		})
	}

	async fn get_unsigned_transaction(
		&self,
		params: &SwapParams,
	) -> SwapResult<UnsignedSwapTransaction> {
		self.build_transaction(params)
			.await
			.map_err(|e| e.with_context("Failed to execute swap"))
	}
}
