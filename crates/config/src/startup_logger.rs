//! Start-up and shutdown logging

use std::env;
use tracing::{info, warn};

use crate::settings::Settings;

const SERVICE_NAME: &str = "swap-providers";

/// Log the service banner and environment details
pub fn log_service_info() {
	info!("=== Swap Providers Starting ===");
	info!("🚀 Service: {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}
	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 RUST_LOG: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Log which providers will be built and where their keys come from
pub fn log_provider_settings(settings: &Settings) {
	for (name, provider) in &settings.providers {
		if !provider.enabled {
			info!("⏸️ Provider {} ({}) disabled", name, provider.kind);
			continue;
		}

		let key_source = provider
			.api_key
			.as_ref()
			.map(|key| key.description())
			.unwrap_or_else(|| "none".to_string());
		info!(
			"🔌 Provider {} ({}), timeout {}ms, api key: {}",
			name,
			provider.kind,
			settings.timeout_for(provider),
			key_source
		);

		if provider.api_key.as_ref().is_some_and(|key| key.is_inline_secret()) {
			warn!(
				"Provider {} has an inline API key; prefer an environment variable",
				name
			);
		}
	}
}

pub fn log_startup_complete(provider_count: usize) {
	info!("✅ Swap Providers Ready");
	info!("📡 {} provider(s) registered", provider_count);
}

pub fn log_service_shutdown() {
	info!("🛑 Swap Providers Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}
