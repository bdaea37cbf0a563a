// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for stack trace parsing.

use thiserror::Error;

/// Errors that can occur while parsing a raw stack trace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
	/// A frame line matched the frame shape but its line or column does not
	/// fit in a `u32`.
	#[error("invalid position '{value}' on stack trace line {line}")]
	InvalidPosition { line: usize, value: String },
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
