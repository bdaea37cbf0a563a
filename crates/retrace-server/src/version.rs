// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Build information for retrace-server.

/// Format version info for display.
pub fn format_version_info() -> String {
	format!(
		"retrace-server version: {}\n\
         User-Agent:             {}\n\
         Platform:               {}-{}",
		env!("CARGO_PKG_VERSION"),
		retrace_common_http::user_agent(),
		std::env::consts::OS,
		std::env::consts::ARCH,
	)
}
