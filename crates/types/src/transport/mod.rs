//! HTTP transport boundary
//!
//! Adapters describe requests as plain data and hand them to an
//! [`HttpTransport`]. Timeouts and connection pooling live behind the trait.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::provider::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	Get,
	Post,
}

impl fmt::Display for HttpMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			HttpMethod::Get => f.write_str("GET"),
			HttpMethod::Post => f.write_str("POST"),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
	pub method: HttpMethod,
	pub url: String,
	pub query: Vec<(String, String)>,
	pub headers: Vec<(String, String)>,
	pub body: Option<serde_json::Value>,
}

impl HttpRequest {
	pub fn get(url: impl Into<String>) -> Self {
		Self {
			method: HttpMethod::Get,
			url: url.into(),
			query: Vec::new(),
			headers: Vec::new(),
			body: None,
		}
	}

	pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
		Self {
			method: HttpMethod::Post,
			url: url.into(),
			query: Vec::new(),
			headers: Vec::new(),
			body: Some(body),
		}
	}

	pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
		self.query.push((key.into(), value.to_string()));
		self
	}

	pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((key.into(), value.into()));
		self
	}

	pub fn headers<I, K, V>(mut self, headers: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.headers
			.extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
		self
	}

	/// First query value for `key`
	pub fn query_value(&self, key: &str) -> Option<&str> {
		self.query
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Header lookup, case-insensitive on the name
	pub fn header_value(&self, key: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(k, _)| k.eq_ignore_ascii_case(key))
			.map(|(_, v)| v.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
	pub status: u16,
	pub body: String,
}

impl HttpResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
		serde_json::from_str(&self.body)
	}
}

#[async_trait]
pub trait HttpTransport: Send + Sync + Debug {
	/// Perform one round trip; non-2xx statuses are returned, not raised
	async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
