//! OpenOcean end to end over a recording transport

mod mocks;

use chrono::Utc;
use mocks::*;
use rust_decimal_macros::dec;
use serde_json::json;
use std::sync::Arc;
use swap_providers::models::test_utils::MockTransport;
use swap_providers::{
	AdapterOptions, ChainId, HttpRequest, HttpResponse, OpenOceanAdapter, StaticTokenMetadata,
	SwapProvider, TokenInfo, DEFAULT_DEADLINE_WINDOW_SECS,
};

fn adapter(transport: &MockTransport) -> OpenOceanAdapter {
	OpenOceanAdapter::with_options(
		Arc::new(transport.clone()),
		Arc::new(StaticTokenMetadata::new()),
		AdapterOptions::new().with_base_url("http://localhost:18545"),
	)
	.unwrap()
}

#[tokio::test]
async fn test_save_is_flipped_into_fee() {
	let transport = MockTransport::responding(
		200,
		json!({
			"code": 200,
			"data": {
				"inAmount": "1000000",
				"outAmount": "2000000",
				"save": "-5",
				"estimatedGas": "21000"
			}
		}),
	);

	let quote = adapter(&transport)
		.get_swap_quote(&usdc_to_weth_params())
		.await
		.unwrap();

	assert_eq!(quote.input_amount().as_str(), "1000000");
	assert_eq!(quote.output_amount().as_str(), "2000000");
	assert_eq!(quote.expected_price(), dec!(2));
	assert_eq!(quote.fee().to_string(), "5");
	assert_eq!(quote.estimated_gas(), dec!(21000));
}

#[tokio::test]
async fn test_positive_save_is_a_rebate() {
	let transport = MockTransport::responding(
		200,
		json!({"code": 200, "data": {"inAmount": 10, "outAmount": 25, "save": 0.75, "estimatedGas": 1}}),
	);

	let quote = adapter(&transport)
		.get_swap_quote(&usdc_to_weth_params())
		.await
		.unwrap();
	assert_eq!(quote.expected_price(), dec!(2.5));
	assert_eq!(quote.fee().to_string(), "-0.75");
}

#[tokio::test]
async fn test_default_deadline_is_twenty_minutes_out() {
	let transport = transaction_transport(swap_providers::ProviderKind::OpenOcean);
	let before = Utc::now().timestamp() as u64;

	let tx = adapter(&transport)
		.get_unsigned_transaction(&usdc_to_weth_params())
		.await
		.unwrap();

	let after = Utc::now().timestamp() as u64;
	assert!(tx.deadline >= before + DEFAULT_DEADLINE_WINDOW_SECS - 1);
	assert!(tx.deadline <= after + DEFAULT_DEADLINE_WINDOW_SECS + 1);

	let request = transport.last_request().unwrap();
	assert_eq!(request.url, "http://localhost:18545/eth/swap");
	assert_eq!(
		request.query_value("deadline"),
		Some(tx.deadline.to_string().as_str())
	);
	assert_eq!(request.query_value("account"), Some(TEST_RECIPIENT));
}

#[tokio::test]
async fn test_amount_sent_human_readable() {
	let transport = MockTransport::responding(
		200,
		json!({"code": 200, "data": {"inAmount": "1500000", "outAmount": "1", "estimatedGas": "1"}}),
	);
	let mut params = usdc_to_weth_params();
	params.amount = "1500000".into();
	params.slippage_tolerance = dec!(0.005);

	adapter(&transport).get_swap_quote(&params).await.unwrap();

	let request = transport.last_request().unwrap();
	assert_eq!(request.url, "http://localhost:18545/eth/quote");
	assert_eq!(request.query_value("amount"), Some("1.5"));
	assert_eq!(request.query_value("slippage"), Some("0.5"));
	assert_eq!(
		request.query_value("inTokenAddress"),
		Some(TokenInfo::usdc_ethereum().address.as_str())
	);
}

#[tokio::test]
async fn test_token_metadata_overrides_decimals() {
	let transport = MockTransport::responding(
		200,
		json!({"code": 200, "data": {"inAmount": "1", "outAmount": "1", "estimatedGas": "1"}}),
	);
	let usdc = TokenInfo::usdc_ethereum();
	let tokens = StaticTokenMetadata::new().with_override(ChainId::Ethereum, &usdc.address, 8);
	let adapter = OpenOceanAdapter::with_options(
		Arc::new(transport.clone()),
		Arc::new(tokens),
		AdapterOptions::new(),
	)
	.unwrap();

	adapter
		.get_swap_quote(&usdc_to_weth_params())
		.await
		.unwrap();
	assert_eq!(
		transport.last_request().unwrap().query_value("amount"),
		Some("0.01")
	);
}

#[tokio::test]
async fn test_concurrent_quotes_do_not_interfere() {
	// Echo the requested amount back so each caller can recognize its own quote
	let transport = MockTransport::new(|request: &HttpRequest| {
		let (input, output) = match request.query_value("amount") {
			Some("1") => ("1000000", "2000000"),
			Some("3") => ("3000000", "9000000"),
			other => panic!("unexpected amount {:?}", other),
		};
		let body = json!({
			"code": 200,
			"data": {"inAmount": input, "outAmount": output, "estimatedGas": "21000"}
		});
		Ok(HttpResponse::new(200, body.to_string()))
	})
	.with_delay(50);
	let adapter = adapter(&transport);

	let first = usdc_to_weth_params();
	let mut second = usdc_to_weth_params();
	second.amount = "3000000".into();

	let (a, b) = tokio::join!(adapter.get_swap_quote(&first), adapter.get_swap_quote(&second));
	let (a, b) = (a.unwrap(), b.unwrap());

	assert_eq!(a.input_amount().as_str(), "1000000");
	assert_eq!(a.expected_price(), dec!(2));
	assert_eq!(b.input_amount().as_str(), "3000000");
	assert_eq!(b.expected_price(), dec!(3));
	assert_eq!(transport.call_count(), 2);
}

#[tokio::test]
async fn test_out_amount_past_decimal_range() {
	let transport = MockTransport::responding(
		200,
		json!({
			"code": 200,
			"data": {
				"inAmount": "1000000000000000000000",
				"outAmount": "100000000000000000000000000000",
				"estimatedGas": "21000"
			}
		}),
	);

	// 1000 WETH into a high-supply 18-decimal token
	let meme = TokenInfo::new(
		"0x6982508145454Ce325dDbE47a25d4ec3d2311933",
		ChainId::Ethereum,
		18,
	);
	let mut params = usdc_to_weth_params();
	params.from_token = TokenInfo::weth_ethereum();
	params.to_token = meme;
	params.amount = "1000000000000000000000".into();

	let quote = adapter(&transport).get_swap_quote(&params).await.unwrap();
	assert_eq!(quote.output_amount().as_str(), "100000000000000000000000000000");
	assert_eq!(quote.expected_price(), dec!(100000000));
	assert_eq!(quote.human_price(18, 18), Some(dec!(100000000)));
	assert_eq!(
		transport.last_request().unwrap().query_value("amount"),
		Some("1000")
	);
}

#[tokio::test]
async fn test_envelope_error_code() {
	let transport = MockTransport::responding(
		200,
		json!({"code": 500, "error": "Insufficient liquidity"}),
	);
	let err = adapter(&transport)
		.get_swap_quote(&usdc_to_weth_params())
		.await
		.unwrap_err();

	assert!(err.to_string().contains("code 500"));
	assert!(err.to_string().contains("Insufficient liquidity"));
	assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_restricted_chain_subset() {
	let transport = MockTransport::responding(200, quote_body(swap_providers::ProviderKind::OpenOcean));
	let adapter = OpenOceanAdapter::with_options(
		Arc::new(transport.clone()),
		Arc::new(StaticTokenMetadata::new()),
		AdapterOptions::new().with_supported_chains(vec![ChainId::Gnosis, ChainId::Base]),
	)
	.unwrap();

	assert_eq!(adapter.supported_chains(), &[ChainId::Gnosis, ChainId::Base]);
	let mainnet = usdc_to_weth_params();
	assert!(!adapter.is_swap_supported(&mainnet.from_token, &mainnet.to_token));
	adapter
		.get_swap_quote(&params_on_chain(ChainId::Gnosis))
		.await
		.unwrap();
	assert!(transport.last_request().unwrap().url.ends_with("/xdai/quote"));
}
