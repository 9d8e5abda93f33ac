//! Test doubles for the provider collaborators
//!
//! [`MockTransport`] records every request and answers from a scripted
//! handler, so adapter behavior can be checked without network access.

use async_trait::async_trait;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::models::{ChainId, TokenInfo};
use crate::provider::TransportError;
use crate::swap::SwapParams;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

type Handler = dyn Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync;

/// Recording transport with scripted responses
#[derive(Clone)]
pub struct MockTransport {
	handler: Arc<Handler>,
	requests: Arc<Mutex<Vec<HttpRequest>>>,
	call_tracker: Arc<AtomicUsize>,
	response_delay_ms: u64,
}

impl MockTransport {
	pub fn new<F>(handler: F) -> Self
	where
		F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError> + Send + Sync + 'static,
	{
		Self {
			handler: Arc::new(handler),
			requests: Arc::new(Mutex::new(Vec::new())),
			call_tracker: Arc::new(AtomicUsize::new(0)),
			response_delay_ms: 0,
		}
	}

	/// Answer every request with the same status and JSON body
	pub fn responding(status: u16, body: serde_json::Value) -> Self {
		let body = body.to_string();
		Self::new(move |_| Ok(HttpResponse::new(status, body.clone())))
	}

	/// Fail every request at the transport level
	pub fn failing(message: &str) -> Self {
		let message = message.to_string();
		Self::new(move |_| Err(TransportError::Connection(message.clone())))
	}

	pub fn with_delay(mut self, delay_ms: u64) -> Self {
		self.response_delay_ms = delay_ms;
		self
	}

	pub fn call_count(&self) -> usize {
		self.call_tracker.load(Ordering::SeqCst)
	}

	pub fn requests(&self) -> Vec<HttpRequest> {
		self.requests
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone()
	}

	pub fn last_request(&self) -> Option<HttpRequest> {
		self.requests().pop()
	}
}

impl fmt::Debug for MockTransport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MockTransport")
			.field("calls", &self.call_count())
			.field("response_delay_ms", &self.response_delay_ms)
			.finish()
	}
}

#[async_trait]
impl HttpTransport for MockTransport {
	async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
		self.call_tracker.fetch_add(1, Ordering::SeqCst);
		self.requests
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.push(request.clone());

		if self.response_delay_ms > 0 {
			tokio::time::sleep(Duration::from_millis(self.response_delay_ms)).await;
		}

		(self.handler)(&request)
	}
}

pub const TEST_RECIPIENT: &str = "0x742d35Cc6634C0532925a3b8D38BA2297C33A9D7";

/// 1 USDC -> WETH on Ethereum, 1% slippage, no deadline
pub fn usdc_to_weth_params() -> SwapParams {
	SwapParams::new(
		TokenInfo::usdc_ethereum(),
		TokenInfo::weth_ethereum(),
		"1000000",
		rust_decimal::Decimal::new(1, 2),
		TEST_RECIPIENT,
	)
}

/// Same pair moved to a chain of the caller's choosing
pub fn params_on_chain(chain: ChainId) -> SwapParams {
	let mut params = usdc_to_weth_params();
	params.from_token.chain_id = chain;
	params.to_token.chain_id = chain;
	params
}
