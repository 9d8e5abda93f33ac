//! Shared fixtures for the integration tests
//!
//! Success bodies for each provider and helpers that build adapters over a
//! recording [`MockTransport`].

#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::Arc;
use swap_providers::models::test_utils::MockTransport;
use swap_providers::{
	AdapterOptions, HttpRequest, HttpResponse, ProviderFactory, ProviderKind, StaticTokenMetadata,
	SwapProvider,
};

pub use swap_providers::models::test_utils::{params_on_chain, usdc_to_weth_params, TEST_RECIPIENT};

/// Options that make every adapter initialized and hit a local host
pub fn test_options() -> AdapterOptions {
	AdapterOptions::new()
		.with_base_url("http://localhost:18545")
		.with_api_key("test-key")
}

pub fn provider_over(kind: ProviderKind, transport: &MockTransport) -> Arc<dyn SwapProvider> {
	ProviderFactory::create(
		kind,
		Arc::new(transport.clone()),
		Arc::new(StaticTokenMetadata::new()),
		test_options(),
	)
	.expect("built-in adapter should build")
}

/// A well-formed quote body in each provider's own shape
pub fn quote_body(kind: ProviderKind) -> Value {
	match kind {
		ProviderKind::OpenOcean => json!({
			"code": 200,
			"data": {
				"inAmount": "1000000",
				"outAmount": "2000000",
				"estimatedGas": "21000",
				"save": "-5"
			}
		}),
		ProviderKind::ParaSwap => json!({
			"priceRoute": {
				"srcAmount": "1000000",
				"destAmount": "2000000",
				"gasCost": "21000",
				"partnerFee": 0
			}
		}),
		ProviderKind::ZeroEx => json!({
			"sellAmount": "1000000",
			"buyAmount": "2000000",
			"estimatedGas": "21000",
			"protocolFee": "0"
		}),
	}
}

/// HTTP 200 bodies that lack each provider's success marker
pub fn markerless_body(kind: ProviderKind) -> Value {
	match kind {
		ProviderKind::OpenOcean => json!({"code": 200, "data": {}}),
		ProviderKind::ParaSwap => json!({"priceRoute": {"destAmount": "1"}}),
		ProviderKind::ZeroEx => json!({"buyAmount": "1"}),
	}
}

/// Answers price requests with a quote and build requests with a transaction
pub fn transaction_transport(kind: ProviderKind) -> MockTransport {
	MockTransport::new(move |request: &HttpRequest| {
		let body = if is_build_request(kind, request) {
			transaction_body(kind)
		} else {
			quote_body(kind)
		};
		Ok(HttpResponse::new(200, body.to_string()))
	})
}

fn is_build_request(kind: ProviderKind, request: &HttpRequest) -> bool {
	match kind {
		ProviderKind::OpenOcean => request.url.ends_with("/swap"),
		ProviderKind::ParaSwap => request.url.contains("/transactions/"),
		ProviderKind::ZeroEx => request.url.ends_with("/quote"),
	}
}

fn transaction_body(kind: ProviderKind) -> Value {
	let tx = json!({
		"to": "0x6352a56caadC4F1E25CD6c75970Fa768A3304e64",
		"data": "0xabcdef",
		"value": "0",
		"gas": "150000",
		"estimatedGas": "150000"
	});
	match kind {
		ProviderKind::OpenOcean => json!({"code": 200, "data": tx}),
		_ => tx,
	}
}
