//! Production [`HttpTransport`] backed by reqwest

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use swap_types::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
use tracing::debug;

use crate::client_cache::{global_client_cache, ClientCache, ClientConfig};

#[derive(Debug)]
enum ClientStrategy {
	/// Pooled client from a shared cache
	Cached(ClientCache),
	/// Fresh client per request
	OnDemand,
}

/// reqwest transport for one provider
#[derive(Debug)]
pub struct ReqwestTransport {
	config: ClientConfig,
	client_strategy: ClientStrategy,
}

impl ReqwestTransport {
	/// Use the process-wide client cache
	pub fn new(config: ClientConfig) -> Self {
		Self::with_cache(config, global_client_cache())
	}

	pub fn with_cache(config: ClientConfig, cache: ClientCache) -> Self {
		Self {
			config,
			client_strategy: ClientStrategy::Cached(cache),
		}
	}

	pub fn without_cache(config: ClientConfig) -> Self {
		Self {
			config,
			client_strategy: ClientStrategy::OnDemand,
		}
	}

	pub fn timeout_ms(&self) -> u64 {
		self.config.timeout_ms
	}

	fn client(&self) -> Result<Arc<Client>, TransportError> {
		match &self.client_strategy {
			ClientStrategy::Cached(cache) => cache.get_client(&self.config),
			ClientStrategy::OnDemand => ClientCache::build_client(&self.config).map(Arc::new),
		}
	}

	fn map_error(&self, error: reqwest::Error) -> TransportError {
		if error.is_timeout() {
			TransportError::Timeout {
				timeout_ms: self.config.timeout_ms,
			}
		} else if error.is_connect() {
			TransportError::Connection(error.to_string())
		} else if error.is_builder() {
			TransportError::InvalidRequest(error.to_string())
		} else {
			TransportError::Request(error.to_string())
		}
	}
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
	async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
		let client = self.client()?;

		let mut builder = match request.method {
			HttpMethod::Get => client.get(&request.url),
			HttpMethod::Post => client.post(&request.url),
		};
		if !request.query.is_empty() {
			builder = builder.query(&request.query);
		}
		for (key, value) in &request.headers {
			builder = builder.header(key.as_str(), value.as_str());
		}
		if let Some(body) = &request.body {
			builder = builder.json(body);
		}

		debug!(
			"{} {} via {} transport",
			request.method, request.url, self.config.provider
		);

		let response = builder.send().await.map_err(|e| self.map_error(e))?;
		let status = response.status().as_u16();
		let body = response.text().await.map_err(|e| self.map_error(e))?;

		debug!(
			"{} responded {} ({} bytes)",
			request.url,
			status,
			body.len()
		);

		Ok(HttpResponse::new(status, body))
	}
}
