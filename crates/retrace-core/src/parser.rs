// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Parsing of raw minified stack traces.
//!
//! The first line of a trace is the error message. Every later line is
//! either a frame of the shape `at <name> (<url>:<line>:<column>)` or is
//! ignored. Only `http`/`https` URLs whose host carries no explicit port are
//! recognised.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseError, Result};
use crate::frame::ParsedTrace;

static FRAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"at (.+) \((https?://[^:]+):([0-9]+):([0-9]+)\)").expect("frame pattern is valid")
});

/// Fields extracted from one frame line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLine<'a> {
	pub name: &'a str,
	pub url: &'a str,
	pub line: u32,
	pub column: u32,
}

/// Parse a raw stack trace into its message and URL-grouped frames.
///
/// Lines that do not look like frames are skipped and do not consume a
/// sequence index.
pub fn parse(raw: &str) -> Result<ParsedTrace> {
	let mut lines = raw.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));

	let message = lines.next().unwrap_or_default();
	let mut trace = ParsedTrace::new(message);

	for (offset, text) in lines.enumerate() {
		if let Some(frame) = parse_frame_line(text, offset + 1)? {
			trace.push(frame.name, frame.url, frame.line, frame.column);
		}
	}

	Ok(trace)
}

/// Match a single line against the frame shape.
///
/// `line_number` is the 0-indexed position of the line in the raw trace and
/// is only used for error reporting. Returns `Ok(None)` for lines that are
/// not frames.
pub fn parse_frame_line(text: &str, line_number: usize) -> Result<Option<FrameLine<'_>>> {
	let caps = match FRAME_LINE.captures(text) {
		Some(caps) => caps,
		None => return Ok(None),
	};

	let (name, url, line, column) = match (caps.get(1), caps.get(2), caps.get(3), caps.get(4)) {
		(Some(n), Some(u), Some(l), Some(c)) => (n.as_str(), u.as_str(), l.as_str(), c.as_str()),
		_ => return Ok(None),
	};

	Ok(Some(FrameLine {
		name,
		url,
		line: parse_position(line, line_number)?,
		column: parse_position(column, line_number)?,
	}))
}

fn parse_position(value: &str, line_number: usize) -> Result<u32> {
	value.parse().map_err(|_| ParseError::InvalidPosition {
		line: line_number,
		value: value.to_string(),
	})
}
