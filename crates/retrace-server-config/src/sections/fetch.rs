// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outbound fetch configuration for scripts and source maps.

use std::time::Duration;

use serde::Deserialize;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
	/// Per-request timeout for script and map downloads. Zero disables it.
	pub timeout_secs: u64,
	/// Overrides the default `retrace/<version>` agent string.
	pub user_agent: Option<String>,
}

impl FetchConfig {
	pub fn timeout(&self) -> Option<Duration> {
		(self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
	}
}

impl Default for FetchConfig {
	fn default() -> Self {
		FetchConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchConfigLayer {
	#[serde(default)]
	pub timeout_secs: Option<u64>,
	#[serde(default)]
	pub user_agent: Option<String>,
}

impl FetchConfigLayer {
	pub fn merge(&mut self, other: FetchConfigLayer) {
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
		if other.user_agent.is_some() {
			self.user_agent = other.user_agent;
		}
	}

	pub fn finalize(self) -> FetchConfig {
		FetchConfig {
			timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
			user_agent: self.user_agent.filter(|ua| !ua.trim().is_empty()),
		}
	}
}
