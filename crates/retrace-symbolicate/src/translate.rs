// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation of generated frame positions to original positions.

use retrace_core::{Frame, FrameGroup, OriginalPosition};
use tracing::trace;

use crate::source_map::SourceMapHandle;

/// Translate one frame through its script's source map.
///
/// The frame's line and column are passed to the map unchanged. A position
/// no mapping covers yields an unmapped result, never an error.
pub fn translate(map: &dyn SourceMapHandle, frame: &Frame) -> OriginalPosition {
	match map.original_position_for(frame.line, frame.column) {
		Some(location) => OriginalPosition {
			source: Some(location.source),
			line: Some(location.line),
			column: Some(location.column),
			name: location.name,
			generated_name: frame.name.clone(),
		},
		None => {
			trace!(
				url = %frame.url,
				line = frame.line,
				column = frame.column,
				"no mapping for frame"
			);
			OriginalPosition::unmapped(frame.name.clone())
		}
	}
}

/// Translate every frame of a group, keyed by sequence index.
pub fn translate_group(map: &dyn SourceMapHandle, group: &FrameGroup) -> Vec<(usize, OriginalPosition)> {
	group
		.frames
		.iter()
		.map(|frame| (frame.sequence_index, translate(map, frame)))
		.collect()
}
