// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end symbolication of raw stack traces.
//!
//! A trace is parsed into URL groups, every group's source map is resolved
//! concurrently, and the results are joined before reassembly. The first
//! failing group fails the whole trace.

use std::sync::Arc;

use futures::future::try_join_all;
use retrace_core::{parse, FrameGroup, OriginalPosition, SymbolicatedTrace};
use tracing::{debug, info, instrument};

use crate::assemble::assemble;
use crate::error::Result;
use crate::fetch::{FetchCache, Fetcher};
use crate::resolver::SourceMapResolver;
use crate::source_map::{SourceMapDecoder, V3Decoder};
use crate::translate::translate_group;

/// Symbolication pipeline sharing one fetch cache across requests.
pub struct Symbolicator {
	cache: Arc<FetchCache>,
	resolver: SourceMapResolver,
}

impl Symbolicator {
	pub fn new(cache: Arc<FetchCache>, decoder: Arc<dyn SourceMapDecoder>) -> Self {
		Self {
			resolver: SourceMapResolver::new(Arc::clone(&cache), decoder),
			cache,
		}
	}

	/// Build a symbolicator with a fresh cache and the v3 decoder.
	pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
		Self::new(Arc::new(FetchCache::new(fetcher)), Arc::new(V3Decoder))
	}

	pub fn cache(&self) -> &Arc<FetchCache> {
		&self.cache
	}

	/// Symbolicate a raw minified stack trace.
	#[instrument(
		skip(self, raw),
		fields(frame_count = tracing::field::Empty, group_count = tracing::field::Empty)
	)]
	pub async fn symbolicate(&self, raw: &str) -> Result<SymbolicatedTrace> {
		let parsed = parse(raw)?;

		let span = tracing::Span::current();
		span.record("frame_count", parsed.frame_count());
		span.record("group_count", parsed.groups().len());

		let pending = parsed
			.groups()
			.iter()
			.map(|group| self.symbolicate_group(group));
		let translated = try_join_all(pending).await?;

		let trace = assemble(parsed.message, translated.into_iter().flatten().collect())?;

		info!(
			frames = trace.stack_trace.len(),
			unmapped = trace.stack_trace.iter().filter(|p| p.is_unmapped()).count(),
			"symbolicated stack trace"
		);

		Ok(trace)
	}

	async fn symbolicate_group(&self, group: &FrameGroup) -> Result<Vec<(usize, OriginalPosition)>> {
		let map = self.resolver.resolve(&group.url).await?;
		debug!(url = %group.url, frames = group.frames.len(), "translating frames");
		Ok(translate_group(map.as_ref(), group))
	}
}

impl std::fmt::Debug for Symbolicator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Symbolicator")
			.field("cache", &self.cache)
			.finish_non_exhaustive()
	}
}
