//! OpenOcean v4 adapter
//!
//! Amounts go out human-readable, slippage as a percent. Every response is
//! wrapped in a `{ code, data }` envelope and failed quotes may still come
//! back with HTTP 200, so `data.inAmount` is the success marker.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use swap_types::{
	resolve_deadline, ChainId, ChainSupport, FeeConvention, HttpRequest, HttpTransport,
	ParamCheck, ProviderInfo, RawNumber, RegistryError, SwapParams, SwapProvider, SwapQuote,
	SwapResult, TokenMetadataService, UnsignedSwapTransaction, SINGLE_CHAIN_CHECKS,
};
use tracing::{debug, warn};

use crate::base::{slippage_percent, AdapterProfile, ProviderCore};
use crate::options::AdapterOptions;

/// `save` is what the route saves the user, so a positive value is a rebate
pub const FEE_CONVENTION: FeeConvention = FeeConvention::PositiveIsRebate;

const PARAM_CHECKS: &[ParamCheck] = SINGLE_CHAIN_CHECKS;

/// Gwei, used when no gas price is configured
pub const DEFAULT_GAS_PRICE: &str = "5";

pub const DEFAULT_BASE_URL: &str = "https://open-api.openocean.finance/v4";

// https://docs.openocean.finance/dev/developer-resources/supported-chains
const CHAIN_CODES: &[(ChainId, &str)] = &[
	(ChainId::Ethereum, "eth"),
	(ChainId::Bsc, "bsc"),
	(ChainId::Polygon, "polygon"),
	(ChainId::Arbitrum, "arbitrum"),
	(ChainId::Optimism, "optimism"),
	(ChainId::Base, "base"),
	(ChainId::Avalanche, "avax"),
	(ChainId::Gnosis, "xdai"),
];

const PROFILE: AdapterProfile = AdapterProfile {
	default_name: "openocean",
	description: "OpenOcean v4 DEX aggregator",
	version: "1.0.0",
	default_base_url: DEFAULT_BASE_URL,
	api_key_header: "apikey",
	chain_codes: CHAIN_CODES,
	default_chains: &[
		ChainId::Ethereum,
		ChainId::Optimism,
		ChainId::Bsc,
		ChainId::Polygon,
		ChainId::Base,
		ChainId::Arbitrum,
	],
};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
	code: Option<i64>,
	data: Option<T>,
	error: Option<String>,
	message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteData {
	in_amount: Option<RawNumber>,
	out_amount: Option<RawNumber>,
	estimated_gas: Option<RawNumber>,
	save: Option<RawNumber>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SwapData {
	to: Option<String>,
	data: Option<String>,
	value: Option<RawNumber>,
	estimated_gas: Option<RawNumber>,
}

#[derive(Debug)]
pub struct OpenOceanAdapter {
	core: ProviderCore,
}

impl OpenOceanAdapter {
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

	fn gas_price(&self) -> &str {
		self.core.gas_price.as_deref().unwrap_or(DEFAULT_GAS_PRICE)
	}

	/// Unwrap `{ code, data }`, treating a non-200 `code` as a failure
	fn open_envelope<T>(&self, envelope: Envelope<T>, marker: &str) -> SwapResult<T> {
		if let Some(code) = envelope.code.filter(|code| *code != 200) {
			let detail = envelope
				.error
				.or(envelope.message)
				.unwrap_or_else(|| "no detail".to_string());
			return Err(self
				.core
				.invalid_response(format!("code {}: {}", code, detail)));
		}

		envelope
			.data
			.ok_or_else(|| self.core.invalid_response(format!("{} not present", marker)))
	}

	async fn fetch_quote(&self, params: &SwapParams) -> SwapResult<SwapQuote> {
		let chain_code = self.core.prepare(params, PARAM_CHECKS)?;
		let amount = self
			.core
			.human_amount(&params.from_token, &params.amount)
			.await?;

		let request = HttpRequest::get(format!("{}/{}/quote", self.core.base_url, chain_code))
			.query("inTokenAddress", &params.from_token.address)
			.query("outTokenAddress", &params.to_token.address)
			.query("amount", &amount)
			.query("gasPrice", self.gas_price())
			.query("slippage", slippage_percent(params.slippage_tolerance));

		debug!(
			"OpenOcean quote on {}: {} {} -> {}",
			chain_code,
			amount,
			params.from_token.label(),
			params.to_token.label()
		);

		let envelope: Envelope<QuoteData> = self.core.send_json(request).await?;
		let data = self.open_envelope(envelope, "inAmount")?;

		// A failed quote can still be a 200 with an empty payload
		if data.in_amount.is_none() {
			return Err(self.core.invalid_response("inAmount not present"));
		}

		let input = self.core.amount_field("inAmount", data.in_amount.as_ref())?;
		let output = self.core.amount_field("outAmount", data.out_amount.as_ref())?;
		let gas = self
			.core
			.decimal_field("estimatedGas", data.estimated_gas.as_ref())?;
		let save = self.core.exact_field("save", data.save.as_ref())?;

		SwapQuote::from_amounts(input, output, FEE_CONVENTION.to_fee(save), gas)
			.map_err(|e| self.core.invalid_response(e))
	}

	async fn build_transaction(&self, params: &SwapParams) -> SwapResult<UnsignedSwapTransaction> {
		let chain_code = self.core.prepare(params, PARAM_CHECKS)?;
		let deadline = resolve_deadline(params);
		let amount = self
			.core
			.human_amount(&params.from_token, &params.amount)
			.await?;

		let request = HttpRequest::get(format!("{}/{}/swap", self.core.base_url, chain_code))
			.query("inTokenAddress", &params.from_token.address)
			.query("outTokenAddress", &params.to_token.address)
			.query("amount", amount)
			.query("gasPrice", self.gas_price())
			.query("slippage", slippage_percent(params.slippage_tolerance))
			.query("account", params.recipient.trim())
			.query("deadline", deadline);

		let envelope: Envelope<SwapData> = self.core.send_json(request).await?;
		let data = self.open_envelope(envelope, "data")?;

		let calldata = data
			.data
			.filter(|d| !d.is_empty())
			.ok_or_else(|| self.core.invalid_response("data not present"))?;
		let to = data
			.to
			.filter(|t| !t.is_empty())
			.ok_or_else(|| self.core.invalid_response("to not present"))?;
		let gas = self
			.core
			.optional_decimal_field("estimatedGas", data.estimated_gas.as_ref())?;

		Ok(UnsignedSwapTransaction::new(
			to,
			data.value.map(|v| v.to_string()),
			calldata,
			params.chain(),
			deadline,
		)
		.with_gas(gas))
	}
}

#[async_trait]
impl SwapProvider for OpenOceanAdapter {
	fn provider_info(&self) -> &ProviderInfo {
		&self.core.info
	}

	fn chain_support(&self) -> &ChainSupport {
		&self.core.chains
	}

	/// Public API, nothing to configure
	fn is_init(&self) -> bool {
		true
	}

	async fn get_swap_quote(&self, params: &SwapParams) -> SwapResult<SwapQuote> {
		self.fetch_quote(params).await.map_err(|e| {
			if e.is_retryable() {
				warn!("OpenOcean quote failed: {}", e);
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
