// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Creates a new HTTP client with the standard retrace User-Agent header.
///
/// `timeout` bounds each request end to end; `None` leaves requests
/// unbounded.
pub fn new_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
	let mut builder = builder();
	if let Some(timeout) = timeout {
		builder = builder.timeout(timeout);
	}
	builder.build()
}

/// Creates a new HTTP client builder with the standard retrace User-Agent header.
///
/// # Example
/// ```ignore
/// let client = retrace_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	builder_with_user_agent(user_agent())
}

/// Creates a new HTTP client builder with a custom User-Agent header.
///
/// Used when the deployment configures its own agent string.
pub fn builder_with_user_agent(user_agent: impl Into<String>) -> ClientBuilder {
	Client::builder().user_agent(user_agent.into())
}

/// Returns the standard retrace User-Agent string.
///
/// Format: `retrace/{version}`
pub fn user_agent() -> String {
	format!("retrace/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		assert!(ua.starts_with("retrace/"));
		let parts: Vec<&str> = ua.split('/').collect();
		assert_eq!(parts.len(), 2);
		assert_eq!(parts[1], env!("CARGO_PKG_VERSION"));
	}

	#[test]
	fn builder_with_custom_user_agent() {
		let client = builder_with_user_agent("my-custom-agent/1.0").build();
		assert!(client.is_ok());
	}

	#[test]
	fn new_client_with_and_without_timeout() {
		assert!(new_client(None).is_ok());
		assert!(new_client(Some(Duration::from_secs(5))).is_ok());
	}
}
