//! Swap provider configuration
//!
//! Settings, layered loading and start-up logging.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::{load_config, load_config_from, ConfigLoadError, DEFAULT_CONFIG_PATH, ENV_PREFIX};
pub use settings::{
	ConfigValidationError, HttpSettings, LogFormat, LoggingSettings, ProviderSettings, Settings,
	TokenSettings,
};
pub use startup_logger::{
	log_provider_settings, log_service_info, log_service_shutdown, log_startup_complete,
};
