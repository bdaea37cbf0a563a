// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: &'static str,
	/// Scripts and maps currently held in the fetch cache.
	pub cached_urls: usize,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "ok",
		version: env!("CARGO_PKG_VERSION"),
		cached_urls: state.symbolicator.cache().len().await,
	})
}

#[cfg(test)]
mod tests {
	use crate::{create_router, testing};
	use axum::{
		body::Body,
		http::{Request, StatusCode},
	};
	use serde_json::Value;
	use tower::ServiceExt;

	#[tokio::test]
	async fn reports_cache_size() {
		let state = testing::state(testing::fetcher());
		state
			.symbolicate("Error\nat f (https://cdn.example.com/app.js:10:5)")
			.await
			.unwrap();

		let app = create_router(state);
		let resp = app
			.oneshot(Request::get("/health").body(Body::empty()).unwrap())
			.await
			.unwrap();
		assert_eq!(resp.status(), StatusCode::OK);

		let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
			.await
			.unwrap();
		let body: Value = serde_json::from_slice(&bytes).unwrap();
		assert_eq!(body["status"], "ok");
		assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
		assert_eq!(body["cachedUrls"], 2);
	}
}
