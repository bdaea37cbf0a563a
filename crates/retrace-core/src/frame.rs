// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack frame types produced by the parser.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One parseable entry of a minified stack trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
	/// Symbol name as it appears in the generated code, e.g. `t.render`.
	pub name: String,
	/// URL of the generated script.
	pub url: String,
	/// Generated line (1-indexed).
	pub line: u32,
	/// Generated column, as reported by the runtime.
	pub column: u32,
	/// Rank of this frame among the parseable frames of the trace.
	pub sequence_index: usize,
}

/// Frames sharing one generated script URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameGroup {
	pub url: String,
	/// Frames in discovery order.
	pub frames: Vec<Frame>,
}

impl FrameGroup {
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			frames: Vec::new(),
		}
	}
}

/// A raw stack trace split into its message and URL-grouped frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTrace {
	/// First line of the raw trace, verbatim.
	pub message: String,
	groups: Vec<FrameGroup>,
	group_by_url: HashMap<String, usize>,
	frame_count: usize,
}

impl ParsedTrace {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			..Self::default()
		}
	}

	/// Record a frame, assigning it the next sequence index.
	///
	/// The first frame seen for a URL creates that URL's group.
	pub fn push(&mut self, name: impl Into<String>, url: &str, line: u32, column: u32) -> &Frame {
		let frame = Frame {
			name: name.into(),
			url: url.to_string(),
			line,
			column,
			sequence_index: self.frame_count,
		};
		self.frame_count += 1;

		let idx = match self.group_by_url.get(url) {
			Some(&idx) => idx,
			None => {
				self.groups.push(FrameGroup::new(url));
				let idx = self.groups.len() - 1;
				self.group_by_url.insert(url.to_string(), idx);
				idx
			}
		};

		let group = &mut self.groups[idx];
		group.frames.push(frame);
		&group.frames[group.frames.len() - 1]
	}

	/// Groups in the order their URL was first seen.
	pub fn groups(&self) -> &[FrameGroup] {
		&self.groups
	}

	pub fn group(&self, url: &str) -> Option<&FrameGroup> {
		self.group_by_url.get(url).map(|&idx| &self.groups[idx])
	}

	/// Number of parseable frames across all groups.
	pub fn frame_count(&self) -> usize {
		self.frame_count
	}

	/// All frames ordered by sequence index.
	pub fn frames(&self) -> Vec<&Frame> {
		let mut frames: Vec<&Frame> = self.groups.iter().flat_map(|g| g.frames.iter()).collect();
		frames.sort_by_key(|f| f.sequence_index);
		frames
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn push_assigns_sequential_indices_across_groups() {
		let mut trace = ParsedTrace::new("Error");
		trace.push("a", "https://cdn.example.com/a.js", 1, 10);
		trace.push("b", "https://cdn.example.com/b.js", 1, 20);
		trace.push("c", "https://cdn.example.com/a.js", 2, 30);

		assert_eq!(trace.frame_count(), 3);
		assert_eq!(trace.groups().len(), 2);

		let a = trace.group("https://cdn.example.com/a.js").unwrap();
		let indices: Vec<usize> = a.frames.iter().map(|f| f.sequence_index).collect();
		assert_eq!(indices, vec![0, 2]);

		let b = trace.group("https://cdn.example.com/b.js").unwrap();
		assert_eq!(b.frames[0].sequence_index, 1);
	}

	#[test]
	fn groups_keep_first_seen_order() {
		let mut trace = ParsedTrace::new("Error");
		trace.push("x", "https://cdn.example.com/z.js", 1, 1);
		trace.push("y", "https://cdn.example.com/a.js", 1, 1);

		let urls: Vec<&str> = trace.groups().iter().map(|g| g.url.as_str()).collect();
		assert_eq!(
			urls,
			vec!["https://cdn.example.com/z.js", "https://cdn.example.com/a.js"]
		);
	}

	#[test]
	fn frames_are_returned_in_sequence_order() {
		let mut trace = ParsedTrace::new("Error");
		trace.push("first", "https://cdn.example.com/a.js", 1, 1);
		trace.push("second", "https://cdn.example.com/b.js", 1, 1);
		trace.push("third", "https://cdn.example.com/a.js", 1, 1);

		let names: Vec<&str> = trace.frames().iter().map(|f| f.name.as_str()).collect();
		assert_eq!(names, vec!["first", "second", "third"]);
	}
}
