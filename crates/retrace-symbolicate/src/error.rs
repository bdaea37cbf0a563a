// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for symbolication operations.

use retrace_core::ParseError;
use thiserror::Error;

/// Errors raised while retrieving a script or source map.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("request to {url} failed: {source}")]
	Request {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	#[error("request to {url} returned HTTP {status}")]
	Status { url: String, status: u16 },

	#[error("{url} is unavailable: {message}")]
	Unavailable { url: String, message: String },
}

impl FetchError {
	/// The URL that could not be retrieved.
	pub fn url(&self) -> &str {
		match self {
			FetchError::Request { url, .. }
			| FetchError::Status { url, .. }
			| FetchError::Unavailable { url, .. } => url,
		}
	}
}

/// Errors raised while turning a generated script into a queryable map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
	#[error("no sourceMappingURL directive at the end of {url}")]
	NoSourceMapDirective { url: String },

	#[error("inline source maps are not supported (referenced by {url})")]
	InlineSourceMap { url: String },

	#[error("cannot resolve source map URL '{reference}' against {url}: {message}")]
	InvalidUrl {
		url: String,
		reference: String,
		message: String,
	},

	#[error("invalid source map at {url}: {message}")]
	InvalidMap { url: String, message: String },
}

/// Errors that fail a whole symbolication request.
#[derive(Debug, Error)]
pub enum SymbolicateError {
	#[error(transparent)]
	Parse(#[from] ParseError),

	#[error(transparent)]
	Fetch(#[from] FetchError),

	#[error(transparent)]
	Resolve(#[from] ResolveError),

	#[error("no translated position for frame {index}")]
	MissingFrame { index: usize },
}

impl SymbolicateError {
	/// Stable machine-readable kind, used in error responses.
	pub fn kind(&self) -> &'static str {
		match self {
			SymbolicateError::Parse(_) => "parse_error",
			SymbolicateError::Fetch(_) => "fetch_error",
			SymbolicateError::Resolve(_) => "resolve_error",
			SymbolicateError::MissingFrame { .. } => "assembly_error",
		}
	}
}

pub type Result<T> = std::result::Result<T, SymbolicateError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fetch_error_exposes_url() {
		let err = FetchError::Status {
			url: "https://cdn.example.com/app.js".to_string(),
			status: 404,
		};
		assert_eq!(err.url(), "https://cdn.example.com/app.js");
		assert_eq!(
			err.to_string(),
			"request to https://cdn.example.com/app.js returned HTTP 404"
		);
	}

	#[test]
	fn symbolicate_error_kinds() {
		let fetch: SymbolicateError = FetchError::Unavailable {
			url: "u".to_string(),
			message: "down".to_string(),
		}
		.into();
		assert_eq!(fetch.kind(), "fetch_error");

		let resolve: SymbolicateError = ResolveError::NoSourceMapDirective {
			url: "u".to_string(),
		}
		.into();
		assert_eq!(resolve.kind(), "resolve_error");
		assert_eq!(resolve.to_string(), "no sourceMappingURL directive at the end of u");

		let parse: SymbolicateError = ParseError::InvalidPosition {
			line: 1,
			value: "9".to_string(),
		}
		.into();
		assert_eq!(parse.kind(), "parse_error");
	}
}
