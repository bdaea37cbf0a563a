// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Symbolication results returned to callers.

use serde::{Deserialize, Serialize};

/// Original position of one frame, recovered from a source map.
///
/// All original fields are `None` when no mapping covers the generated
/// position. `generated_name` is always the symbol name parsed from the
/// minified trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalPosition {
	/// Original source file path.
	pub source: Option<String>,
	/// Line in the original source (1-indexed).
	pub line: Option<u32>,
	/// Column in the original source (0-indexed).
	pub column: Option<u32>,
	/// Original identifier name if the map records one.
	pub name: Option<String>,
	pub generated_name: String,
}

impl OriginalPosition {
	/// A position no mapping covers.
	pub fn unmapped(generated_name: impl Into<String>) -> Self {
		Self {
			source: None,
			line: None,
			column: None,
			name: None,
			generated_name: generated_name.into(),
		}
	}

	pub fn is_unmapped(&self) -> bool {
		self.source.is_none() && self.line.is_none() && self.column.is_none() && self.name.is_none()
	}
}

/// A fully symbolicated stack trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolicatedTrace {
	pub message: String,
	/// One entry per parseable input frame, in input order.
	pub stack_trace: Vec<OriginalPosition>,
}
