//! Pooled reqwest clients shared across provider transports
//!
//! One client per distinct (provider, timeout, default headers) combination,
//! recreated after a TTL so DNS and TLS state does not go stale.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::{Duration, Instant};
use swap_types::TransportError;
use tracing::{debug, warn};

const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Settings that distinguish one pooled client from another
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientConfig {
	/// Provider the client serves, for logs and cache separation
	pub provider: String,
	/// Whole-request timeout
	pub timeout_ms: u64,
	pub max_idle_per_host: usize,
	pub keep_alive_timeout_ms: u64,
	/// Sent on every request made with this client
	pub headers: Vec<(String, String)>,
}

impl ClientConfig {
	pub fn new(provider: impl Into<String>, timeout_ms: u64) -> Self {
		Self {
			provider: provider.into(),
			timeout_ms,
			max_idle_per_host: 10,
			keep_alive_timeout_ms: 90_000,
			headers: vec![
				("User-Agent".to_string(), "swap-providers/0.1".to_string()),
				("Accept".to_string(), "application/json".to_string()),
			],
		}
	}

	pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((key.into(), value.into()));
		self
	}
}

#[derive(Debug, Clone)]
struct CachedClient {
	client: Arc<Client>,
	created_at: Instant,
}

impl CachedClient {
	fn new(client: Client) -> Self {
		Self {
			client: Arc::new(client),
			created_at: Instant::now(),
		}
	}

	fn is_expired(&self, ttl: Duration) -> bool {
		self.created_at.elapsed() > ttl
	}
}

/// Concurrent client cache with TTL expiry
#[derive(Clone, Debug)]
pub struct ClientCache {
	clients: Arc<DashMap<ClientConfig, CachedClient>>,
	ttl: Duration,
}

impl ClientCache {
	pub fn new() -> Self {
		Self::with_ttl(DEFAULT_TTL)
	}

	pub fn with_ttl(ttl: Duration) -> Self {
		Self {
			clients: Arc::new(DashMap::new()),
			ttl,
		}
	}

	/// Reuse a live client for `config` or build a new one
	pub fn get_client(&self, config: &ClientConfig) -> Result<Arc<Client>, TransportError> {
		self.clients.remove_if(config, |_, cached| {
			let expired = cached.is_expired(self.ttl);
			if expired {
				warn!(
					"HTTP client for {} expired after {:?}, rebuilding",
					config.provider,
					cached.created_at.elapsed()
				);
			}
			expired
		});

		if let Some(cached) = self.clients.get(config) {
			return Ok(cached.client.clone());
		}

		debug!(
			"Building HTTP client for {} (timeout {}ms)",
			config.provider, config.timeout_ms
		);
		let cached = CachedClient::new(Self::build_client(config)?);

		// Another task may have inserted while we were building
		match self.clients.entry(config.clone()) {
			Entry::Occupied(entry) => Ok(entry.get().client.clone()),
			Entry::Vacant(entry) => {
				let client = cached.client.clone();
				entry.insert(cached);
				Ok(client)
			},
		}
	}

	pub(crate) fn build_client(config: &ClientConfig) -> Result<Client, TransportError> {
		let mut headers = reqwest::header::HeaderMap::new();
		for (key, value) in &config.headers {
			let name = reqwest::header::HeaderName::from_bytes(key.as_bytes())
				.map_err(|e| TransportError::InvalidRequest(format!("header {}: {}", key, e)))?;
			let value = reqwest::header::HeaderValue::from_str(value)
				.map_err(|e| TransportError::InvalidRequest(format!("header {}: {}", key, e)))?;
			headers.insert(name, value);
		}

		ClientBuilder::new()
			.timeout(Duration::from_millis(config.timeout_ms))
			.pool_max_idle_per_host(config.max_idle_per_host)
			.pool_idle_timeout(Duration::from_millis(config.keep_alive_timeout_ms))
			.tcp_keepalive(Duration::from_secs(60))
			.default_headers(headers)
			.build()
			.map_err(|e| TransportError::InvalidRequest(e.to_string()))
	}

	/// Drop expired clients, returning how many were removed
	pub fn cleanup_expired(&self) -> usize {
		let before = self.clients.len();
		self.clients.retain(|_, cached| !cached.is_expired(self.ttl));
		let removed = before.saturating_sub(self.clients.len());
		if removed > 0 {
			debug!("Removed {} expired HTTP clients", removed);
		}
		removed
	}

	pub fn len(&self) -> usize {
		self.clients.len()
	}

	pub fn is_empty(&self) -> bool {
		self.clients.is_empty()
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}
}

impl Default for ClientCache {
	fn default() -> Self {
		Self::new()
	}
}

lazy_static::lazy_static! {
	static ref GLOBAL_CLIENT_CACHE: ClientCache = ClientCache::new();
}

/// Process-wide cache used when no explicit cache is supplied
pub fn global_client_cache() -> ClientCache {
	GLOBAL_CLIENT_CACHE.clone()
}
