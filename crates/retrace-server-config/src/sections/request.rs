// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-request limits.

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestConfig {
	/// Overall deadline for one symbolication request. `None` means unbounded.
	pub timeout_secs: Option<u64>,
}

impl RequestConfig {
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_secs.map(Duration::from_secs)
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestConfigLayer {
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

impl RequestConfigLayer {
	pub fn merge(&mut self, other: RequestConfigLayer) {
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
	}

	pub fn finalize(self) -> RequestConfig {
		RequestConfig {
			timeout_secs: self.timeout_secs.filter(|secs| *secs > 0),
		}
	}
}
