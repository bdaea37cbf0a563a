// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the retrace server.
//!
//! Sources are merged in precedence order: built-in defaults, then the TOML
//! file, then `RETRACE_SERVER_*` environment variables.
//!
//! # Usage
//!
//! ```ignore
//! use retrace_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub fetch: FetchConfig,
	pub logging: LoggingConfig,
	pub request: RequestConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`RETRACE_SERVER_*`)
/// 2. Config file (`/etc/retrace/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only.
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let fetch = layer.fetch.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();
	let request = layer.request.unwrap_or_default().finalize();

	validate_config(&http)?;

	info!(
		host = %http.host,
		port = http.port,
		fetch_timeout_secs = fetch.timeout_secs,
		request_timeout_secs = ?request.timeout_secs,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		fetch,
		logging,
		request,
	})
}

fn validate_config(http: &HttpConfig) -> Result<(), ConfigError> {
	if http.host.trim().is_empty() {
		return Err(ConfigError::Validation(
			"http.host must not be empty".to_string(),
		));
	}
	Ok(())
}
