//! Swap Providers
//!
//! One `SwapProvider` contract over several DEX aggregator HTTP APIs, with
//! exact decimal quotes, shared parameter validation and a registry built
//! from configuration.

// Core domain types
pub use swap_types::{
	alloy_primitives,
	chrono,
	resolve_deadline,
	rust_decimal,
	serde_json,
	to_base_units,
	to_human,
	validate_swap_params,
	AmountError,
	BaseUnits,
	ChainId,
	ChainSupport,
	DecimalAmount,
	DEFAULT_DEADLINE_WINDOW_SECS,
	FeeConvention,
	HttpRequest,
	HttpResponse,
	HttpTransport,
	ProviderInfo,
	ProviderKind,
	RegistryError,
	SecretString,
	StaticTokenMetadata,
	SwapError,
	SwapParams,
	SwapProvider,
	SwapQuote,
	SwapResult,
	TokenInfo,
	TokenMetadataError,
	TokenMetadataService,
	TransportError,
	UnsignedSwapTransaction,
	ValidationError,
};

// Adapters
pub use swap_adapters::{
	AdapterOptions, ClientCache, ClientConfig, OpenOceanAdapter, ParaSwapAdapter, ProviderFactory,
	ProviderRegistry, ReqwestTransport, ZeroExAdapter,
};

// Config
pub use swap_config::{load_config, ConfigLoadError, LoggingSettings, ProviderSettings, Settings};

pub mod models {
	pub use swap_types::*;
}

pub mod adapters {
	pub use swap_adapters::*;
}

pub mod config {
	pub use swap_config::*;
}

pub use async_trait;

use std::sync::Arc;
use std::time::Duration;
use swap_config::{ConfigValidationError, ConfigurableValueError, LogFormat};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum BuildError {
	#[error(transparent)]
	Load(#[from] ConfigLoadError),

	#[error("Invalid configuration: {0}")]
	Config(#[from] ConfigValidationError),

	#[error(transparent)]
	Registry(#[from] RegistryError),

	#[error("Failed to initialize tracing: {0}")]
	Tracing(String),
}

/// Builds a [`ProviderRegistry`] from settings plus any hand-made providers
#[derive(Default)]
pub struct SwapLayerBuilder {
	settings: Option<Settings>,
	transport: Option<Arc<dyn HttpTransport>>,
	tokens: Option<Arc<dyn TokenMetadataService>>,
	client_cache: Option<ClientCache>,
	providers: Vec<Arc<dyn SwapProvider>>,
}

impl SwapLayerBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Share one transport between every configured provider
	///
	/// Without it each provider gets a [`ReqwestTransport`] with its own timeout.
	pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
		self.transport = Some(transport);
		self
	}

	/// Replace the token metadata built from `settings.tokens`
	pub fn with_token_metadata(mut self, tokens: Arc<dyn TokenMetadataService>) -> Self {
		self.tokens = Some(tokens);
		self
	}

	pub fn with_client_cache(mut self, cache: ClientCache) -> Self {
		self.client_cache = Some(cache);
		self
	}

	/// Register a custom provider next to the configured ones
	pub fn with_provider(mut self, provider: Arc<dyn SwapProvider>) -> Self {
		self.providers.push(provider);
		self
	}

	/// Create every enabled provider and register it
	pub fn build(self) -> Result<ProviderRegistry, BuildError> {
		let settings = self.settings.unwrap_or_default();
		settings.validate()?;

		let tokens = self
			.tokens
			.unwrap_or_else(|| Arc::new(settings.token_metadata()));
		let cache = self.client_cache.unwrap_or_else(|| {
			ClientCache::with_ttl(Duration::from_secs(settings.http.client_ttl_secs))
		});

		let mut registry = ProviderRegistry::new();
		for (name, provider) in settings.enabled_providers() {
			let transport: Arc<dyn HttpTransport> = match &self.transport {
				Some(transport) => transport.clone(),
				None => Arc::new(ReqwestTransport::with_cache(
					ClientConfig::new(name.clone(), settings.timeout_for(provider)),
					cache.clone(),
				)),
			};

			let options = adapter_options(name, provider);
			registry.register(ProviderFactory::create(
				provider.kind,
				transport,
				tokens.clone(),
				options,
			)?)?;
		}

		for provider in self.providers {
			registry.register(provider)?;
		}

		Ok(registry)
	}

	/// Load `.env` and configuration, initialize tracing, then build
	pub fn start(mut self) -> Result<ProviderRegistry, BuildError> {
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config()?,
		};

		if let Err(e) = init_tracing(&settings.logging) {
			// A subscriber installed by the host application wins
			warn!("{}", e);
		}

		swap_config::log_service_info();
		swap_config::log_provider_settings(&settings);

		let registry = self.with_settings(settings).build()?;
		swap_config::log_startup_complete(registry.len());
		Ok(registry)
	}
}

/// Unresolvable keys leave the provider uninitialized instead of failing start-up
fn adapter_options(name: &str, provider: &ProviderSettings) -> AdapterOptions {
	let api_key = match provider.api_key_secret() {
		Ok(key) => key,
		Err(ConfigurableValueError::EnvironmentVariableNotFound(var)) => {
			warn!("API key for {} not set: missing environment variable {}", name, var);
			None
		},
		Err(e) => {
			warn!("API key for {} ignored: {}", name, e);
			None
		},
	};

	AdapterOptions {
		name: Some(name.to_string()),
		base_url: provider.base_url.clone(),
		api_key,
		supported_chains: provider.supported_chains.clone(),
		gas_price: provider.gas_price.clone(),
		headers: provider.headers.clone(),
	}
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
pub fn init_tracing(logging: &LoggingSettings) -> Result<(), BuildError> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

	let result = match logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
			if logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);
			if logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);
			if logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
	};
	result.map_err(|e| BuildError::Tracing(e.to_string()))?;

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		logging.level, logging.format, logging.structured
	);
	Ok(())
}
