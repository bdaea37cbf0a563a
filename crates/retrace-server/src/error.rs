// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use retrace_symbolicate::SymbolicateError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Request body is not JSON or has no `stackTrace` string.
	#[error("Invalid request: {0}")]
	InvalidRequest(String),

	#[error(transparent)]
	Symbolicate(#[from] SymbolicateError),

	/// Request exceeded the configured deadline.
	#[error("Symbolication timed out after {0}s")]
	Timeout(u64),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl ServerError {
	/// Machine-readable error kind.
	pub fn kind(&self) -> &'static str {
		match self {
			ServerError::InvalidRequest(_) => "invalid_request",
			ServerError::Symbolicate(e) => e.kind(),
			ServerError::Timeout(_) => "timeout",
			ServerError::Serialization(_) => "serialization_error",
		}
	}

	/// Every failure is reported as an internal error.
	pub fn status(&self) -> StatusCode {
		StatusCode::INTERNAL_SERVER_ERROR
	}

	pub fn to_error_response(&self) -> ErrorResponse {
		ErrorResponse {
			error: self.kind().to_string(),
			message: self.to_string(),
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		match &self {
			ServerError::InvalidRequest(message) => {
				tracing::warn!(%message, "rejected symbolication request");
			}
			ServerError::Symbolicate(e) => {
				tracing::error!(error = %e, kind = e.kind(), "symbolication failed");
			}
			ServerError::Timeout(secs) => {
				tracing::error!(timeout_secs = secs, "symbolication timed out");
			}
			ServerError::Serialization(e) => {
				tracing::error!(error = %e, "failed to serialize response");
			}
		}

		(self.status(), Json(self.to_error_response())).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use retrace_symbolicate::{FetchError, ResolveError};

	#[test]
	fn test_kinds() {
		assert_eq!(
			ServerError::InvalidRequest("x".to_string()).kind(),
			"invalid_request"
		);
		assert_eq!(ServerError::Timeout(5).kind(), "timeout");
		assert_eq!(
			ServerError::from(SymbolicateError::from(FetchError::Status {
				url: "https://cdn.example.com/a.js".to_string(),
				status: 503,
			}))
			.kind(),
			"fetch_error"
		);
		assert_eq!(
			ServerError::from(SymbolicateError::from(ResolveError::NoSourceMapDirective {
				url: "https://cdn.example.com/a.js".to_string(),
			}))
			.kind(),
			"resolve_error"
		);
	}

	#[test]
	fn test_error_response_uses_display() {
		let err = ServerError::Timeout(3);
		let body = err.to_error_response();
		assert_eq!(body.error, "timeout");
		assert_eq!(body.message, "Symbolication timed out after 3s");
		assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
