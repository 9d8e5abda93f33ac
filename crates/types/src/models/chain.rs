//! Blockchain network identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of networks the swap layer knows about
///
/// Providers advertise a subset of these through their chain support table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ChainId {
	/// Ethereum mainnet (1)
	Ethereum,
	/// OP Mainnet (10)
	Optimism,
	/// BNB Smart Chain (56)
	Bsc,
	/// Gnosis Chain (100)
	Gnosis,
	/// Polygon PoS (137)
	Polygon,
	/// Base (8453)
	Base,
	/// Arbitrum One (42161)
	Arbitrum,
	/// Avalanche C-Chain (43114)
	Avalanche,
}

impl ChainId {
	/// Every known network, ordered by numeric chain id
	pub const ALL: [ChainId; 8] = [
		ChainId::Ethereum,
		ChainId::Optimism,
		ChainId::Bsc,
		ChainId::Gnosis,
		ChainId::Polygon,
		ChainId::Base,
		ChainId::Arbitrum,
		ChainId::Avalanche,
	];

	/// EIP-155 numeric chain id
	pub fn id(&self) -> u64 {
		match self {
			ChainId::Ethereum => 1,
			ChainId::Optimism => 10,
			ChainId::Bsc => 56,
			ChainId::Gnosis => 100,
			ChainId::Polygon => 137,
			ChainId::Base => 8453,
			ChainId::Arbitrum => 42161,
			ChainId::Avalanche => 43114,
		}
	}

	/// Lowercase canonical name, matching the serde representation
	pub fn name(&self) -> &'static str {
		match self {
			ChainId::Ethereum => "ethereum",
			ChainId::Optimism => "optimism",
			ChainId::Bsc => "bsc",
			ChainId::Gnosis => "gnosis",
			ChainId::Polygon => "polygon",
			ChainId::Base => "base",
			ChainId::Arbitrum => "arbitrum",
			ChainId::Avalanche => "avalanche",
		}
	}

	/// Look up a network by its numeric chain id
	pub fn from_id(id: u64) -> Option<Self> {
		Self::ALL.iter().copied().find(|chain| chain.id() == id)
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// Accepts either the canonical name ("polygon") or the numeric id ("137")
impl FromStr for ChainId {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if let Ok(id) = trimmed.parse::<u64>() {
			return Self::from_id(id).ok_or_else(|| format!("Unknown chain id: {}", id));
		}

		let lower = trimmed.to_ascii_lowercase();
		Self::ALL
			.iter()
			.copied()
			.find(|chain| chain.name() == lower)
			.ok_or_else(|| format!("Unknown chain: {}", trimmed))
	}
}

impl TryFrom<u64> for ChainId {
	type Error = String;

	fn try_from(value: u64) -> Result<Self, Self::Error> {
		Self::from_id(value).ok_or_else(|| format!("Unknown chain id: {}", value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_numeric_ids() {
		assert_eq!(ChainId::Ethereum.id(), 1);
		assert_eq!(ChainId::Polygon.id(), 137);
		assert_eq!(ChainId::Arbitrum.id(), 42161);
		assert_eq!(ChainId::from_id(8453), Some(ChainId::Base));
		assert_eq!(ChainId::from_id(999_999), None);
	}

	#[test]
	fn test_parse_by_name_and_id() {
		assert_eq!("polygon".parse::<ChainId>().unwrap(), ChainId::Polygon);
		assert_eq!("BSC".parse::<ChainId>().unwrap(), ChainId::Bsc);
		assert_eq!("43114".parse::<ChainId>().unwrap(), ChainId::Avalanche);
		assert!("solana".parse::<ChainId>().is_err());
		assert!("5".parse::<ChainId>().is_err());
	}

	#[test]
	fn test_all_is_sorted_by_id() {
		let ids: Vec<u64> = ChainId::ALL.iter().map(|c| c.id()).collect();
		let mut sorted = ids.clone();
		sorted.sort_unstable();
		assert_eq!(ids, sorted);
	}

	#[test]
	fn test_serde_uses_lowercase_names() {
		let json = serde_json::to_string(&ChainId::Optimism).unwrap();
		assert_eq!(json, "\"optimism\"");
		let chain: ChainId = serde_json::from_str("\"arbitrum\"").unwrap();
		assert_eq!(chain, ChainId::Arbitrum);
	}
}
