//! State and helpers shared by every adapter
//!
//! Adapters embed a [`ProviderCore`] and call its steps in order: validate
//! parameters, resolve the chain code, convert amounts, send, decode.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use swap_types::{
	run_checks, BaseUnits, ChainId, ChainSupport, DecimalAmount, HttpRequest, HttpTransport,
	ParamCheck, ProviderInfo, RawNumber, RegistryError, SecretString, SwapError, SwapParams,
	SwapResult, TokenInfo, TokenMetadataService,
};
use tracing::{debug, warn};

use crate::options::AdapterOptions;

/// Static description of an adapter implementation
pub(crate) struct AdapterProfile {
	pub default_name: &'static str,
	pub description: &'static str,
	pub version: &'static str,
	pub default_base_url: &'static str,
	pub api_key_header: &'static str,
	pub chain_codes: &'static [(ChainId, &'static str)],
	pub default_chains: &'static [ChainId],
}

#[derive(Debug)]
pub(crate) struct ProviderCore {
	pub info: ProviderInfo,
	pub chains: ChainSupport,
	pub base_url: String,
	pub api_key: Option<SecretString>,
	pub gas_price: Option<String>,
	api_key_header: &'static str,
	headers: Vec<(String, String)>,
	transport: Arc<dyn HttpTransport>,
	tokens: Arc<dyn TokenMetadataService>,
}

impl ProviderCore {
	pub fn new(
		profile: &AdapterProfile,
		options: AdapterOptions,
		transport: Arc<dyn HttpTransport>,
		tokens: Arc<dyn TokenMetadataService>,
	) -> Result<Self, RegistryError> {
		let name = options
			.name
			.unwrap_or_else(|| profile.default_name.to_string());
		if name.trim().is_empty() {
			return Err(RegistryError::EmptyName);
		}

		let info = ProviderInfo::new(name, profile.description, profile.version);
		info.validate()?;

		let mut chains = ChainSupport::new(&info.name, profile.chain_codes, profile.default_chains)?;
		if let Some(subset) = &options.supported_chains {
			chains = chains.with_supported_chains(subset)?;
		}

		let base_url = options
			.base_url
			.unwrap_or_else(|| profile.default_base_url.to_string())
			.trim_end_matches('/')
			.to_string();
		if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
			return Err(RegistryError::Configuration {
				provider: info.name.clone(),
				reason: format!("base URL must be http(s): {}", base_url),
			});
		}

		let api_key = options.api_key.filter(|key| !key.is_empty());

		Ok(Self {
			info,
			chains,
			base_url,
			api_key,
			gas_price: options.gas_price,
			api_key_header: profile.api_key_header,
			headers: options.headers.into_iter().collect(),
			transport,
			tokens,
		})
	}

	pub fn name(&self) -> &str {
		&self.info.name
	}

	/// Run the parameter checks, then resolve both chains and return the swap chain code
	pub fn prepare(&self, params: &SwapParams, checks: &[ParamCheck]) -> SwapResult<&str> {
		run_checks(params, checks).map_err(|e| {
			debug!("{} rejected swap params: {}", self.name(), e);
			SwapError::InvalidParameters(e)
		})?;

		let code = self.chains.resolve(params.from_token.chain_id)?;
		self.chains.resolve(params.to_token.chain_id)?;
		Ok(code)
	}

	/// Request with the API key and configured headers attached
	pub fn authorize(&self, mut request: HttpRequest) -> HttpRequest {
		if let Some(key) = &self.api_key {
			request = request.header(self.api_key_header, key.expose_secret());
		}
		request.headers(self.headers.iter().cloned())
	}

	/// Send and decode a 2xx JSON body
	pub async fn send_json<T: DeserializeOwned>(&self, request: HttpRequest) -> SwapResult<T> {
		let url = request.url.clone();
		debug!("{} -> {} {}", self.name(), request.method, url);

		let response = self
			.transport
			.send(self.authorize(request))
			.await
			.map_err(|e| {
				warn!("{} transport failure for {}: {}", self.name(), url, e);
				SwapError::provider_failure(self.name(), e.to_string())
			})?;

		if !response.is_success() {
			warn!("{} returned HTTP {} for {}", self.name(), response.status, url);
			return Err(SwapError::from_http_failure(
				self.name(),
				response.status,
				&response.body,
			));
		}

		response.json::<T>().map_err(|e| {
			warn!("{} sent an undecodable body for {}: {}", self.name(), url, e);
			self.invalid_response(format!("malformed body: {}", e))
		})
	}

	pub fn invalid_response(&self, detail: impl std::fmt::Display) -> SwapError {
		SwapError::provider_failure(self.name(), format!("Invalid response: {}", detail))
	}

	/// Smallest units to a human-readable amount via the metadata service
	pub async fn human_amount(
		&self,
		token: &TokenInfo,
		amount: &BaseUnits,
	) -> SwapResult<DecimalAmount> {
		self.tokens
			.to_human(token, amount)
			.await
			.map_err(|e| SwapError::provider_failure(self.name(), e.to_string()))
	}

	pub async fn decimals(&self, token: &TokenInfo) -> SwapResult<u8> {
		self.tokens
			.decimals(token)
			.await
			.map_err(|e| SwapError::provider_failure(self.name(), e.to_string()))
	}

	/// Required smallest-unit amount, exact up to `uint256`
	pub fn amount_field(&self, field: &str, value: Option<&RawNumber>) -> SwapResult<BaseUnits> {
		let value = value.ok_or_else(|| self.invalid_response(format!("{} not present", field)))?;
		value
			.to_base_units(field)
			.map_err(|e| self.invalid_response(e))
	}

	/// Optional exact figure such as a fee; absent reads as zero
	pub fn exact_field(&self, field: &str, value: Option<&RawNumber>) -> SwapResult<DecimalAmount> {
		match value {
			Some(value) => value
				.to_amount(field)
				.map_err(|e| self.invalid_response(e)),
			None => Ok(DecimalAmount::zero()),
		}
	}

	/// Decimal parse of a required upstream field
	pub fn decimal_field(
		&self,
		field: &str,
		value: Option<&RawNumber>,
	) -> SwapResult<Decimal> {
		let value = value.ok_or_else(|| self.invalid_response(format!("{} not present", field)))?;
		value
			.to_decimal(field)
			.map_err(|e| self.invalid_response(e))
	}

	pub fn optional_decimal_field(
		&self,
		field: &str,
		value: Option<&RawNumber>,
	) -> SwapResult<Option<Decimal>> {
		value
			.map(|v| v.to_decimal(field).map_err(|e| self.invalid_response(e)))
			.transpose()
	}
}

/// Slippage fraction as a percent string, e.g. 0.005 -> "0.5"
pub(crate) fn slippage_percent(slippage: Decimal) -> String {
	(slippage * Decimal::ONE_HUNDRED).normalize().to_string()
}
