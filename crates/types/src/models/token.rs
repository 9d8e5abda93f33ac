//! Token models

use serde::{Deserialize, Serialize};

use super::ChainId;

/// A token on a specific chain
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TokenInfo {
	/// Contract address on `chain_id` (the zero address or 0xEeee... for native currency)
	pub address: String,
	/// Chain the address belongs to
	pub chain_id: ChainId,
	/// Number of decimal places of the smallest unit
	pub decimals: u8,
	/// Ticker, informational only
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub symbol: Option<String>,
}

impl TokenInfo {
	pub fn new(address: impl Into<String>, chain_id: ChainId, decimals: u8) -> Self {
		Self {
			address: address.into(),
			chain_id,
			decimals,
			symbol: None,
		}
	}

	pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
		self.symbol = Some(symbol.into());
		self
	}

	/// Case-insensitive address comparison on the same chain
	pub fn same_token(&self, other: &TokenInfo) -> bool {
		self.chain_id == other.chain_id && self.address.eq_ignore_ascii_case(&other.address)
	}

	/// Lowercased address, used as a lookup key
	pub fn address_key(&self) -> String {
		self.address.to_ascii_lowercase()
	}

	/// Short label for logs
	pub fn label(&self) -> String {
		match &self.symbol {
			Some(symbol) => format!("{}@{}", symbol, self.chain_id),
			None => format!("{}@{}", self.address, self.chain_id),
		}
	}
}

/// Check for a 0x-prefixed, 20-byte hex address
pub fn is_valid_address(address: &str) -> bool {
	match address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")) {
		Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
		None => false,
	}
}

/// Common token constants
impl TokenInfo {
	pub fn eth() -> Self {
		Self::new(
			"0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE",
			ChainId::Ethereum,
			18,
		)
		.with_symbol("ETH")
	}

	pub fn weth_ethereum() -> Self {
		Self::new(
			"0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
			ChainId::Ethereum,
			18,
		)
		.with_symbol("WETH")
	}

	pub fn usdc_ethereum() -> Self {
		Self::new(
			"0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
			ChainId::Ethereum,
			6,
		)
		.with_symbol("USDC")
	}

	pub fn usdt_ethereum() -> Self {
		Self::new(
			"0xdAC17F958D2ee523a2206206994597C13D831ec7",
			ChainId::Ethereum,
			6,
		)
		.with_symbol("USDT")
	}

	pub fn wbtc_ethereum() -> Self {
		Self::new(
			"0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599",
			ChainId::Ethereum,
			8,
		)
		.with_symbol("WBTC")
	}

	pub fn usdc_polygon() -> Self {
		Self::new(
			"0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359",
			ChainId::Polygon,
			6,
		)
		.with_symbol("USDC")
	}

	pub fn usdc_base() -> Self {
		Self::new(
			"0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913",
			ChainId::Base,
			6,
		)
		.with_symbol("USDC")
	}

	pub fn usdc_avalanche() -> Self {
		Self::new(
			"0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E",
			ChainId::Avalanche,
			6,
		)
		.with_symbol("USDC")
	}

	pub fn wavax_avalanche() -> Self {
		Self::new(
			"0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7",
			ChainId::Avalanche,
			18,
		)
		.with_symbol("WAVAX")
	}
}
