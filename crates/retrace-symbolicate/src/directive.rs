// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locating a generated script's source map.

use url::Url;

use crate::error::ResolveError;

/// Prefix of the directive bundlers append to generated scripts.
pub const SOURCE_MAPPING_URL_PREFIX: &str = "//# sourceMappingURL=";

/// Return the value of the trailing `//# sourceMappingURL=` directive.
///
/// The directive must be the last non-blank line of the body. An empty
/// value counts as no directive.
pub fn find_source_mapping_url(body: &str) -> Option<&str> {
	let last_line = body.trim_end().rsplit('\n').next()?;
	let value = last_line.strip_prefix(SOURCE_MAPPING_URL_PREFIX)?.trim();

	if value.is_empty() {
		None
	} else {
		Some(value)
	}
}

/// Resolve a directive value against the URL of the script that carries it.
///
/// Relative references replace the last path segment of `script_url`.
pub fn resolve_map_url(script_url: &str, reference: &str) -> Result<String, ResolveError> {
	if reference.starts_with("data:") {
		return Err(ResolveError::InlineSourceMap {
			url: script_url.to_string(),
		});
	}

	let invalid = |message: String| ResolveError::InvalidUrl {
		url: script_url.to_string(),
		reference: reference.to_string(),
		message,
	};

	let base = Url::parse(script_url).map_err(|e| invalid(e.to_string()))?;
	let resolved = base.join(reference).map_err(|e| invalid(e.to_string()))?;

	Ok(resolved.into())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_directive_on_last_line() {
		let body = "!function(){}();\n//# sourceMappingURL=app.js.map";
		assert_eq!(find_source_mapping_url(body), Some("app.js.map"));
	}

	#[test]
	fn test_directive_with_crlf_and_trailing_newline() {
		let body = "!function(){}();\r\n//# sourceMappingURL=app.js.map\r\n";
		assert_eq!(find_source_mapping_url(body), Some("app.js.map"));
	}

	#[test]
	fn test_directive_must_be_last() {
		let body = "//# sourceMappingURL=app.js.map\nconsole.log(1);";
		assert_eq!(find_source_mapping_url(body), None);
	}

	#[test]
	fn test_missing_or_empty_directive() {
		assert_eq!(find_source_mapping_url("console.log(1);"), None);
		assert_eq!(find_source_mapping_url(""), None);
		assert_eq!(find_source_mapping_url("a\n//# sourceMappingURL=   "), None);
	}

	#[test]
	fn test_legacy_at_directive_is_not_recognised() {
		assert_eq!(find_source_mapping_url("a\n//@ sourceMappingURL=app.js.map"), None);
	}

	#[test]
	fn test_resolve_relative_reference() {
		let url = resolve_map_url(
			"https://staging.example-assets.com/site/assets/41.prod.bdb4b078.js",
			"41.prod.bdb4b078.js.map",
		)
		.unwrap();
		assert_eq!(
			url,
			"https://staging.example-assets.com/site/assets/41.prod.bdb4b078.js.map"
		);
	}

	#[test]
	fn test_resolve_replaces_query() {
		let url = resolve_map_url("https://cdn.example.com/app.js?v=3", "app.js.map").unwrap();
		assert_eq!(url, "https://cdn.example.com/app.js.map");
	}

	#[test]
	fn test_resolve_inline_map_is_rejected() {
		let err = resolve_map_url(
			"https://cdn.example.com/app.js",
			"data:application/json;base64,e30=",
		)
		.unwrap_err();
		assert_eq!(
			err,
			ResolveError::InlineSourceMap {
				url: "https://cdn.example.com/app.js".to_string()
			}
		);
	}

	#[test]
	fn test_resolve_invalid_script_url() {
		let err = resolve_map_url("not a url", "app.js.map").unwrap_err();
		assert!(matches!(err, ResolveError::InvalidUrl { .. }));
	}
}
