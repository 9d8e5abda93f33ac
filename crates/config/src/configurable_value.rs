//! API keys that come either from the environment or inline configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use swap_types::SecretString;

/// A credential reference
///
/// ```toml
/// api_key = { type = "env", value = "ZEROEX_API_KEY" }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConfigurableValue {
	#[serde(rename = "type")]
	pub value_type: ValueType,
	/// Variable name for `env`, the literal for `plain`
	pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
	Env,
	Plain,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigurableValueError {
	#[error("Environment variable '{0}' not found")]
	EnvironmentVariableNotFound(String),

	#[error("Configured value is empty")]
	Empty,
}

impl ConfigurableValue {
	pub fn from_env(name: &str) -> Self {
		Self {
			value_type: ValueType::Env,
			value: name.to_string(),
		}
	}

	pub fn from_plain(value: &str) -> Self {
		Self {
			value_type: ValueType::Plain,
			value: value.to_string(),
		}
	}

	/// Read the credential, wrapped so it cannot leak into logs
	pub fn resolve(&self) -> Result<SecretString, ConfigurableValueError> {
		let raw = match self.value_type {
			ValueType::Env => std::env::var(&self.value).map_err(|_| {
				ConfigurableValueError::EnvironmentVariableNotFound(self.value.clone())
			})?,
			ValueType::Plain => self.value.clone(),
		};

		let secret = SecretString::new(raw);
		if secret.is_empty() {
			return Err(ConfigurableValueError::Empty);
		}
		Ok(secret)
	}

	/// Inline secrets end up in config files and should be flagged
	pub fn is_inline_secret(&self) -> bool {
		self.value_type == ValueType::Plain
	}

	/// Where the value comes from, safe to log
	pub fn description(&self) -> String {
		match self.value_type {
			ValueType::Env => format!("environment variable '{}'", self.value),
			ValueType::Plain => "inline value".to_string(),
		}
	}
}

impl fmt::Display for ConfigurableValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value_type {
			ValueType::Env => write!(f, "env:{}", self.value),
			ValueType::Plain => write!(f, "plain:[REDACTED]"),
		}
	}
}

/// `"env:NAME"` references a variable, anything else is inline
impl From<&str> for ConfigurableValue {
	fn from(value: &str) -> Self {
		match value.strip_prefix("env:") {
			Some(name) => Self::from_env(name),
			None => Self::from_plain(value),
		}
	}
}
