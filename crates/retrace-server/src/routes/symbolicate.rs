// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Symbolication HTTP handler.

use axum::{body::Bytes, extract::State, Json};
use retrace_core::SymbolicatedTrace;

use crate::{error::ServerError, AppState};

/// POST /symbolicate
///
/// The body is read raw so malformed JSON is reported through
/// [`ServerError`] rather than axum's extractor rejection.
pub async fn symbolicate(
	State(state): State<AppState>,
	body: Bytes,
) -> Result<Json<SymbolicatedTrace>, ServerError> {
	state.handle(&body).await.map(Json)
}
