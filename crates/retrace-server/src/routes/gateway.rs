// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! API-gateway style envelope around the symbolicate operation.
//!
//! The outer response is always HTTP 200. Success or failure is carried in
//! `statusCode`, and `body` holds the JSON payload as a string.

use std::collections::HashMap;

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{error::ServerError, AppState};

#[derive(Debug, Deserialize)]
pub struct GatewayEvent {
	#[serde(default)]
	pub body: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
	pub is_base64_encoded: bool,
	pub status_code: u16,
	pub headers: HashMap<String, String>,
	pub body: String,
}

impl GatewayResponse {
	fn new(status_code: u16, body: String) -> Self {
		Self {
			is_base64_encoded: false,
			status_code,
			headers: HashMap::new(),
			body,
		}
	}

	fn from_error(err: &ServerError) -> Self {
		tracing::error!(error = %err, kind = err.kind(), "gateway request failed");
		let body = serde_json::to_string(&err.to_error_response()).unwrap_or_default();
		Self::new(err.status().as_u16(), body)
	}
}

/// POST /gateway
pub async fn gateway(State(state): State<AppState>, event: Bytes) -> Json<GatewayResponse> {
	Json(process_event(&state, &event).await)
}

async fn process_event(state: &AppState, event: &[u8]) -> GatewayResponse {
	let body = match serde_json::from_slice::<GatewayEvent>(event) {
		Ok(GatewayEvent { body: Some(body) }) => body,
		Ok(GatewayEvent { body: None }) => {
			return GatewayResponse::from_error(&ServerError::InvalidRequest(
				"event has no body".to_string(),
			))
		}
		Err(e) => return GatewayResponse::from_error(&ServerError::InvalidRequest(e.to_string())),
	};

	let result = state
		.handle(body.as_bytes())
		.await
		.and_then(|trace| serde_json::to_string(&trace).map_err(ServerError::from));

	match result {
		Ok(body) => GatewayResponse::new(200, body),
		Err(err) => GatewayResponse::from_error(&err),
	}
}

#[cfg(test)]
mod tests {
	use crate::{create_router, testing};
	use axum::{
		body::Body,
		http::{Request, StatusCode},
	};
	use serde_json::{json, Value};
	use tower::ServiceExt;

	async fn post(event: Value) -> Value {
		let app = create_router(testing::state(testing::fetcher()));
		let req = Request::post("/gateway")
			.header("content-type", "application/json")
			.body(Body::from(event.to_string()))
			.unwrap();
		let resp = app.oneshot(req).await.unwrap();
		assert_eq!(resp.status(), StatusCode::OK);
		let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
			.await
			.unwrap();
		serde_json::from_slice(&bytes).unwrap()
	}

	#[tokio::test]
	async fn wraps_success_in_envelope() {
		let inner = json!({"stackTrace": "TypeError: x\nat f (https://cdn.example.com/app.js:10:5)"});
		let envelope = post(json!({"body": inner.to_string()})).await;

		assert_eq!(envelope["isBase64Encoded"], false);
		assert_eq!(envelope["statusCode"], 200);
		assert_eq!(envelope["headers"], json!({}));

		let body: Value = serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
		assert_eq!(body["message"], "TypeError: x");
		assert_eq!(body["stackTrace"][0]["source"], "src/app.ts");
		assert_eq!(body["stackTrace"][0]["line"], 3);
	}

	#[tokio::test]
	async fn wraps_failure_in_envelope() {
		let inner = json!({"stackTrace": "Error\nat f (https://cdn.example.com/missing.js:1:1)"});
		let envelope = post(json!({"body": inner.to_string()})).await;

		assert_eq!(envelope["statusCode"], 500);
		let body: Value = serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
		assert_eq!(body["error"], "fetch_error");
	}

	#[tokio::test]
	async fn malformed_inner_body_is_a_500() {
		let envelope = post(json!({"body": "{nope"})).await;

		assert_eq!(envelope["statusCode"], 500);
		let body: Value = serde_json::from_str(envelope["body"].as_str().unwrap()).unwrap();
		assert_eq!(body["error"], "invalid_request");
	}

	#[tokio::test]
	async fn missing_body_is_a_500() {
		let envelope = post(json!({})).await;
		assert_eq!(envelope["statusCode"], 500);
	}
}
