//! Configuration loading utilities
//!
//! Layers, lowest precedence first: built-in defaults, `config/config.*`,
//! then `SWAP__`-prefixed environment variables (`SWAP__LOGGING__LEVEL=debug`).

use crate::settings::{ConfigValidationError, Settings};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "config/config";
pub const ENV_PREFIX: &str = "SWAP";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
	#[error("Failed to read configuration: {0}")]
	Source(#[from] ConfigError),

	#[error("Invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load configuration from the default file and the environment
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from(DEFAULT_CONFIG_PATH)
}

/// Load configuration from `path` (extension optional) and the environment
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	let builder = defaults()?
		.add_source(File::with_name(path).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.separator("__")
				.try_parsing(true),
		);
	finish(builder)
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigLoadError> {
	Ok(Config::builder().add_source(Config::try_from(&Settings::default())?))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigLoadError> {
	let settings: Settings = builder.build()?.try_deserialize()?;
	settings.validate()?;
	Ok(settings)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::LogFormat;
	use config::FileFormat;
	use swap_types::{ChainId, ProviderKind};

	fn load_toml(contents: &str) -> Result<Settings, ConfigLoadError> {
		finish(defaults()?.add_source(File::from_str(contents, FileFormat::Toml)))
	}

	#[test]
	fn test_missing_file_yields_defaults() {
		let settings = load_config_from("config/does-not-exist").unwrap();
		assert_eq!(settings.providers.len(), 3);
		assert_eq!(settings.http.timeout_ms, 10_000);
	}

	#[test]
	fn test_file_overrides_merge_with_defaults() {
		let settings = load_toml(
			r#"
			[logging]
			level = "debug"
			format = "json"

			[providers.zeroex]
			kind = "zeroex"
			timeout_ms = 4000
			supported_chains = ["ethereum", "base"]
			api_key = { type = "env", value = "ZEROEX_API_KEY" }

			[providers.paraswap]
			kind = "paraswap"
			enabled = false

			[[tokens]]
			chain = "polygon"
			address = "0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359"
			decimals = 6
			"#,
		)
		.unwrap();

		assert_eq!(settings.logging.level, "debug");
		assert_eq!(settings.logging.format, LogFormat::Json);

		let enabled: Vec<&String> = settings.enabled_providers().map(|(name, _)| name).collect();
		assert_eq!(enabled, vec!["openocean", "zeroex"]);

		let zeroex = &settings.providers["zeroex"];
		assert_eq!(zeroex.kind, ProviderKind::ZeroEx);
		assert_eq!(settings.timeout_for(zeroex), 4000);
		assert_eq!(
			zeroex.supported_chains,
			Some(vec![ChainId::Ethereum, ChainId::Base])
		);
		assert!(zeroex.api_key.is_some());
		assert_eq!(settings.tokens.len(), 1);
	}

	#[test]
	fn test_extra_provider_under_custom_name() {
		let settings = load_toml(
			r#"
			[providers.openocean-proxy]
			kind = "openocean"
			base_url = "http://localhost:9000"
			"#,
		)
		.unwrap();
		assert_eq!(settings.providers.len(), 4);
		assert_eq!(
			settings.providers["openocean-proxy"].base_url.as_deref(),
			Some("http://localhost:9000")
		);
	}

	#[test]
	fn test_invalid_values_fail_validation() {
		let result = load_toml(
			r#"
			[http]
			timeout_ms = 0
			"#,
		);
		assert!(matches!(
			result,
			Err(ConfigLoadError::Validation(
				ConfigValidationError::ZeroTimeout { .. }
			))
		));

		assert!(matches!(
			load_toml("[logging]\nformat = \"xml\""),
			Err(ConfigLoadError::Source(_))
		));
	}

	#[test]
	fn test_environment_overrides() {
		std::env::set_var("SWAP__HTTP__CLIENT_TTL_SECS", "60");
		let settings = load_config_from("config/does-not-exist").unwrap();
		std::env::remove_var("SWAP__HTTP__CLIENT_TTL_SECS");
		assert_eq!(settings.http.client_ttl_secs, 60);
	}
}
