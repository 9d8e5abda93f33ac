//! Fee sign conventions

use serde::{Deserialize, Serialize};

use crate::models::DecimalAmount;

/// How an upstream reports its fee figure
///
/// Normalized fees are positive for a cost and negative for a rebate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeConvention {
	/// Reported value is already a cost
	PositiveIsCost,
	/// Reported value is a saving or rebate and gets negated
	PositiveIsRebate,
}

impl FeeConvention {
	/// Normalize a reported figure; the sign is applied unconditionally
	pub fn to_fee(&self, reported: DecimalAmount) -> DecimalAmount {
		match self {
			FeeConvention::PositiveIsCost => reported,
			FeeConvention::PositiveIsRebate => -reported,
		}
	}
}
