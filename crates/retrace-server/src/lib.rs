// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP surface for stack trace symbolication.
//!
//! Routes:
//! - `POST /symbolicate` takes `{"stackTrace": "..."}` and returns the
//!   symbolicated trace, or a 500 with `{"error", "message"}`.
//! - `POST /gateway` wraps the same operation in an API-gateway style
//!   envelope.
//! - `GET /health` reports liveness and cache size.

pub mod error;
pub mod routes;

pub use error::{ErrorResponse, ServerError};

use std::sync::Arc;
use std::time::Duration;

use axum::{
	routing::{get, post},
	Router,
};
use retrace_core::SymbolicatedTrace;
use retrace_server_config::{FetchConfig, ServerConfig};
use retrace_symbolicate::{HttpFetcher, Symbolicator};
use serde::Deserialize;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
	pub symbolicator: Arc<Symbolicator>,
	pub request_timeout: Option<Duration>,
}

/// Body accepted by the symbolicate endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolicateRequest {
	pub stack_trace: String,
}

impl AppState {
	pub fn new(symbolicator: Arc<Symbolicator>, request_timeout: Option<Duration>) -> Self {
		Self {
			symbolicator,
			request_timeout,
		}
	}

	/// Build state with an HTTP fetcher configured from `config`.
	pub fn from_config(config: &ServerConfig) -> reqwest::Result<Self> {
		let fetcher = build_fetcher(&config.fetch)?;
		Ok(Self::new(
			Arc::new(Symbolicator::with_fetcher(Arc::new(fetcher))),
			config.request.timeout(),
		))
	}

	/// Parse a request body and symbolicate its trace within the deadline.
	pub async fn handle(&self, body: &[u8]) -> Result<SymbolicatedTrace, ServerError> {
		let request: SymbolicateRequest = serde_json::from_slice(body)
			.map_err(|e| ServerError::InvalidRequest(e.to_string()))?;
		self.symbolicate(&request.stack_trace).await
	}

	pub async fn symbolicate(&self, raw: &str) -> Result<SymbolicatedTrace, ServerError> {
		let work = self.symbolicator.symbolicate(raw);
		match self.request_timeout {
			Some(deadline) => tokio::time::timeout(deadline, work)
				.await
				.map_err(|_| ServerError::Timeout(deadline.as_secs()))?
				.map_err(ServerError::from),
			None => work.await.map_err(ServerError::from),
		}
	}
}

/// Build the outbound fetcher for scripts and source maps.
pub fn build_fetcher(config: &FetchConfig) -> reqwest::Result<HttpFetcher> {
	let user_agent = config
		.user_agent
		.clone()
		.unwrap_or_else(retrace_common_http::user_agent);
	let mut builder = retrace_common_http::builder_with_user_agent(user_agent);
	if let Some(timeout) = config.timeout() {
		builder = builder.timeout(timeout);
	}
	Ok(HttpFetcher::from_client(builder.build()?))
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/symbolicate", post(routes::symbolicate::symbolicate))
		.route("/gateway", post(routes::gateway::gateway))
		.route("/health", get(routes::health::health_check))
		.with_state(state)
}
