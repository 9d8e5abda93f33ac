//! ParaSwap v5 adapter
//!
//! Prices come from `GET /prices` and transactions from
//! `POST /transactions/{network}`, which needs the full `priceRoute` of a
//! fresh price call. Amounts stay in smallest units.

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use swap_types::{
	alloy_primitives::U256, resolve_deadline, to_human, AmountError, BaseUnits, ChainId,
	ChainSupport, DecimalAmount, FeeConvention, HttpRequest, HttpTransport, ParamCheck,
	ProviderInfo, RawNumber, RegistryError, SwapParams, SwapProvider, SwapQuote, SwapResult,
	TokenMetadataService, UnsignedSwapTransaction, SINGLE_CHAIN_CHECKS,
};
use tracing::{debug, warn};

use crate::base::{AdapterProfile, ProviderCore};
use crate::options::AdapterOptions;

/// `partnerFee` is charged on top of the route
///
/// Upstream reports it as a percentage of `destAmount`; the quote fee is that
/// share expressed in destination-token smallest units.
pub const FEE_CONVENTION: FeeConvention = FeeConvention::PositiveIsCost;

const PARAM_CHECKS: &[ParamCheck] = SINGLE_CHAIN_CHECKS;

pub const DEFAULT_BASE_URL: &str = "https://apiv5.paraswap.io";

const CHAIN_CODES: &[(ChainId, &str)] = &[
	(ChainId::Ethereum, "1"),
	(ChainId::Optimism, "10"),
	(ChainId::Bsc, "56"),
	(ChainId::Polygon, "137"),
	(ChainId::Base, "8453"),
	(ChainId::Arbitrum, "42161"),
	(ChainId::Avalanche, "43114"),
];

const PROFILE: AdapterProfile = AdapterProfile {
	default_name: "paraswap",
	description: "ParaSwap v5 DEX aggregator",
	version: "1.0.0",
	default_base_url: DEFAULT_BASE_URL,
	api_key_header: "X-API-KEY",
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
struct PricesResponse {
	price_route: Option<Value>,
	error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceRoute {
	src_amount: Option<RawNumber>,
	dest_amount: Option<RawNumber>,
	gas_cost: Option<RawNumber>,
	partner_fee: Option<RawNumber>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionResponse {
	to: Option<String>,
	data: Option<String>,
	value: Option<RawNumber>,
	gas: Option<RawNumber>,
	error: Option<String>,
}

#[derive(Debug)]
pub struct ParaSwapAdapter {
	core: ProviderCore,
}

impl ParaSwapAdapter {
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

	/// Raw and typed `priceRoute` for the swap
	async fn fetch_price_route(
		&self,
		params: &SwapParams,
		network: &str,
		src_decimals: u8,
		dest_decimals: u8,
	) -> SwapResult<(Value, PriceRoute)> {
		let request = HttpRequest::get(format!("{}/prices", self.core.base_url))
			.query("srcToken", &params.from_token.address)
			.query("destToken", &params.to_token.address)
			.query("amount", &params.amount)
			.query("srcDecimals", src_decimals)
			.query("destDecimals", dest_decimals)
			.query("side", "SELL")
			.query("network", network)
			.query("userAddress", params.recipient.trim());

		let response: PricesResponse = self.core.send_json(request).await?;
		let raw = match (response.price_route, response.error) {
			(Some(route), _) => route,
			(None, Some(error)) => return Err(self.core.invalid_response(error)),
			(None, None) => return Err(self.core.invalid_response("priceRoute not present")),
		};

		let route: PriceRoute = serde_json::from_value(raw.clone())
			.map_err(|e| self.core.invalid_response(format!("malformed priceRoute: {}", e)))?;
		if route.src_amount.is_none() {
			return Err(self.core.invalid_response("srcAmount not present"));
		}

		Ok((raw, route))
	}

	async fn token_decimals(&self, params: &SwapParams) -> SwapResult<(u8, u8)> {
		Ok((
			self.core.decimals(&params.from_token).await?,
			self.core.decimals(&params.to_token).await?,
		))
	}

	async fn fetch_quote(&self, params: &SwapParams) -> SwapResult<SwapQuote> {
		let network = self.core.prepare(params, PARAM_CHECKS)?;
		let (src_decimals, dest_decimals) = self.token_decimals(params).await?;

		debug!(
			"ParaSwap price on network {}: {} {} -> {}",
			network,
			params.amount,
			params.from_token.label(),
			params.to_token.label()
		);

		let (_, route) = self
			.fetch_price_route(params, network, src_decimals, dest_decimals)
			.await?;

		let input = self.core.amount_field("srcAmount", route.src_amount.as_ref())?;
		let output = self
			.core
			.amount_field("destAmount", route.dest_amount.as_ref())?;
		let gas = self.core.decimal_field("gasCost", route.gas_cost.as_ref())?;
		let partner_fee = self
			.core
			.optional_decimal_field("partnerFee", route.partner_fee.as_ref())?
			.unwrap_or_default();
		let fee = partner_fee_amount(&output, partner_fee)
			.map_err(|e| self.core.invalid_response(e))?;

		SwapQuote::from_amounts(input, output, FEE_CONVENTION.to_fee(fee), gas)
			.map_err(|e| self.core.invalid_response(e))
	}

	async fn build_transaction(&self, params: &SwapParams) -> SwapResult<UnsignedSwapTransaction> {
		let network = self.core.prepare(params, PARAM_CHECKS)?;
		let deadline = resolve_deadline(params);
		let (src_decimals, dest_decimals) = self.token_decimals(params).await?;

		// Routes go stale quickly, so always re-price before building
		let (price_route, _) = self
			.fetch_price_route(params, network, src_decimals, dest_decimals)
			.await?;

		let recipient = params.recipient.trim();
		let mut body = json!({
			"srcToken": params.from_token.address,
			"destToken": params.to_token.address,
			"srcAmount": params.amount.as_str(),
			"srcDecimals": src_decimals,
			"destDecimals": dest_decimals,
			"slippage": slippage_bps(params.slippage_tolerance),
			"priceRoute": price_route,
			"userAddress": recipient,
			"receiver": recipient,
			"deadline": deadline,
		});
		if let Some(gas_price) = &self.core.gas_price {
			body["gasPrice"] = Value::String(gas_price.clone());
		}

		let request = HttpRequest::post(
			format!("{}/transactions/{}", self.core.base_url, network),
			body,
		)
		.query("ignoreChecks", "true");

		let response: TransactionResponse = self.core.send_json(request).await?;
		if let Some(error) = response.error {
			return Err(self.core.invalid_response(error));
		}

		let calldata = response
			.data
			.filter(|d| !d.is_empty())
			.ok_or_else(|| self.core.invalid_response("data not present"))?;
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

/// `percent` of `dest_amount`, exact
fn partner_fee_amount(
	dest_amount: &BaseUnits,
	percent: Decimal,
) -> Result<DecimalAmount, AmountError> {
	let percent = percent.normalize();
	if percent.is_sign_negative() && !percent.is_zero() {
		return Err(AmountError::Negative {
			value: format!("partnerFee={}", percent),
		});
	}

	let product = dest_amount
		.to_u256()?
		.checked_mul(U256::from(percent.mantissa().unsigned_abs()))
		.ok_or_else(|| AmountError::Overflow {
			value: format!("{} * {}%", dest_amount, percent),
		})?;

	// Percent plus the mantissa's own scale
	let scale = u8::try_from(percent.scale() + 2).map_err(|_| AmountError::Overflow {
		value: percent.to_string(),
	})?;
	to_human(&BaseUnits::from(product), scale)
}

/// Slippage fraction in basis points, e.g. 0.005 -> 50
fn slippage_bps(slippage: Decimal) -> u64 {
	(slippage * Decimal::from(10_000u32))
		.round()
		.to_u64()
		.unwrap_or_default()
}

#[async_trait]
impl SwapProvider for ParaSwapAdapter {
	fn provider_info(&self) -> &ProviderInfo {
		&self.core.info
	}

	fn chain_support(&self) -> &ChainSupport {
		&self.core.chains
	}

	/// The public endpoint works without a key
	fn is_init(&self) -> bool {
		true
	}

	async fn get_swap_quote(&self, params: &SwapParams) -> SwapResult<SwapQuote> {
		self.fetch_quote(params).await.map_err(|e| {
			if e.is_retryable() {
				warn!("ParaSwap quote failed: {}", e);
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
