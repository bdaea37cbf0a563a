// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Reassembly of translated frames into input order.

use retrace_core::{OriginalPosition, SymbolicatedTrace};

use crate::error::{Result, SymbolicateError};

/// Place each translated position at its sequence index.
///
/// The output has `max index + 1` entries; an index with no position is an
/// error rather than a gap.
pub fn assemble(
	message: impl Into<String>,
	positions: Vec<(usize, OriginalPosition)>,
) -> Result<SymbolicatedTrace> {
	let len = positions.iter().map(|(idx, _)| idx + 1).max().unwrap_or(0);

	let mut slots: Vec<Option<OriginalPosition>> = vec![None; len];
	for (idx, position) in positions {
		slots[idx] = Some(position);
	}

	let stack_trace = slots
		.into_iter()
		.enumerate()
		.map(|(index, slot)| slot.ok_or(SymbolicateError::MissingFrame { index }))
		.collect::<Result<Vec<_>>>()?;

	Ok(SymbolicatedTrace {
		message: message.into(),
		stack_trace,
	})
}
