// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Source map decoding and position lookup.
//!
//! Decoding is an injected capability: [`SourceMapDecoder`] turns map text
//! into a [`SourceMapHandle`] that answers original-position queries.
//! [`V3Decoder`] is backed by the `sourcemap` crate.

use thiserror::Error;

/// A source map could not be decoded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DecodeError(pub String);

/// Original location of a generated position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalLocation {
	/// Original source file path.
	pub source: String,
	/// Line in the original source (1-indexed).
	pub line: u32,
	/// Column in the original source (0-indexed).
	pub column: u32,
	/// Original identifier name if available.
	pub name: Option<String>,
}

/// A decoded, immutable source map.
pub trait SourceMapHandle {
	/// Look up the mapping nearest before `line`/`column` on the same
	/// generated line.
	///
	/// `line` is 1-indexed, `column` is 0-indexed. Returns `None` when no
	/// mapping with a source covers the position.
	fn original_position_for(&self, line: u32, column: u32) -> Option<OriginalLocation>;
}

/// Turns source map text into a queryable handle.
pub trait SourceMapDecoder: Send + Sync {
	fn decode(&self, data: &[u8]) -> Result<Box<dyn SourceMapHandle>, DecodeError>;
}

/// Decoder for Source Map v3 documents, including index maps.
#[derive(Debug, Clone, Copy, Default)]
pub struct V3Decoder;

impl SourceMapDecoder for V3Decoder {
	fn decode(&self, data: &[u8]) -> Result<Box<dyn SourceMapHandle>, DecodeError> {
		let map = sourcemap::decode_slice(data).map_err(|e| DecodeError(e.to_string()))?;
		Ok(Box::new(DecodedSourceMap { map }))
	}
}

struct DecodedSourceMap {
	map: sourcemap::DecodedMap,
}

impl SourceMapHandle for DecodedSourceMap {
	fn original_position_for(&self, line: u32, column: u32) -> Option<OriginalLocation> {
		let dst_line = line.checked_sub(1)?;
		let token = self.map.lookup_token(dst_line, column)?;

		// The nearest token may sit on an earlier generated line
		if token.get_dst_line() != dst_line {
			return None;
		}

		let source = token.get_source()?;

		Some(OriginalLocation {
			source: source.to_string(),
			line: token.get_src_line() + 1,
			column: token.get_src_col(),
			name: token.get_name().map(str::to_string),
		})
	}
}
