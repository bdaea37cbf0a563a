// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolution of a generated script URL to its decoded source map.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::directive::{find_source_mapping_url, resolve_map_url};
use crate::error::{ResolveError, Result};
use crate::fetch::FetchCache;
use crate::source_map::{SourceMapDecoder, SourceMapHandle};

/// Resolves generated scripts to queryable source maps.
pub struct SourceMapResolver {
	cache: Arc<FetchCache>,
	decoder: Arc<dyn SourceMapDecoder>,
}

impl SourceMapResolver {
	pub fn new(cache: Arc<FetchCache>, decoder: Arc<dyn SourceMapDecoder>) -> Self {
		Self { cache, decoder }
	}

	/// Fetch `script_url`, follow its `sourceMappingURL` directive and decode
	/// the referenced map.
	#[instrument(skip(self))]
	pub async fn resolve(&self, script_url: &str) -> Result<Box<dyn SourceMapHandle>> {
		let script = self.cache.fetch_cached(script_url).await?;

		let reference =
			find_source_mapping_url(&script).ok_or_else(|| ResolveError::NoSourceMapDirective {
				url: script_url.to_string(),
			})?;
		let map_url = resolve_map_url(script_url, reference)?;
		debug!(map_url = %map_url, "found source map reference");

		let body = self.cache.fetch_cached(&map_url).await?;
		let map = self
			.decoder
			.decode(body.as_bytes())
			.map_err(|e| ResolveError::InvalidMap {
				url: map_url.clone(),
				message: e.to_string(),
			})?;

		Ok(map)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::SymbolicateError;
	use crate::fetch::InMemoryFetcher;
	use crate::source_map::V3Decoder;

	const SCRIPT: &str = "https://cdn.example.com/assets/app.js";
	const MAP: &str = "https://cdn.example.com/assets/app.js.map";
	const MAP_JSON: &str =
		r#"{"version":3,"sources":["src/app.ts"],"names":["f"],"mappings":";;;;;;;;;AAECA"}"#;

	fn resolver(fetcher: InMemoryFetcher) -> (Arc<InMemoryFetcher>, SourceMapResolver) {
		let fetcher = Arc::new(fetcher);
		let cache = Arc::new(FetchCache::new(fetcher.clone()));
		(fetcher, SourceMapResolver::new(cache, Arc::new(V3Decoder)))
	}

	#[tokio::test]
	async fn test_resolve_follows_directive() {
		let mut fetcher = InMemoryFetcher::new();
		fetcher.add(SCRIPT, "var f=1;\n//# sourceMappingURL=app.js.map\n");
		fetcher.add(MAP, MAP_JSON);
		let (fetcher, resolver) = resolver(fetcher);

		let map = resolver.resolve(SCRIPT).await.unwrap();
		let pos = map.original_position_for(10, 5).unwrap();
		assert_eq!(pos.source, "src/app.ts");
		assert_eq!(pos.line, 3);

		assert_eq!(fetcher.fetch_count(SCRIPT), 1);
		assert_eq!(fetcher.fetch_count(MAP), 1);
	}

	#[tokio::test]
	async fn test_resolve_twice_uses_cache() {
		let mut fetcher = InMemoryFetcher::new();
		fetcher.add(SCRIPT, "var f=1;\n//# sourceMappingURL=app.js.map");
		fetcher.add(MAP, MAP_JSON);
		let (fetcher, resolver) = resolver(fetcher);

		resolver.resolve(SCRIPT).await.unwrap();
		resolver.resolve(SCRIPT).await.unwrap();

		assert_eq!(fetcher.total_fetches(), 2);
	}

	#[tokio::test]
	async fn test_missing_directive() {
		let mut fetcher = InMemoryFetcher::new();
		fetcher.add(SCRIPT, "var f=1;");
		let (fetcher, resolver) = resolver(fetcher);

		let err = resolver.resolve(SCRIPT).await.err().unwrap();
		assert!(matches!(
			err,
			SymbolicateError::Resolve(ResolveError::NoSourceMapDirective { ref url }) if url == SCRIPT
		));
		assert_eq!(fetcher.fetch_count(MAP), 0);
	}

	#[tokio::test]
	async fn test_undecodable_map() {
		let mut fetcher = InMemoryFetcher::new();
		fetcher.add(SCRIPT, "var f=1;\n//# sourceMappingURL=app.js.map");
		fetcher.add(MAP, "<html>not found</html>");
		let (_, resolver) = resolver(fetcher);

		let err = resolver.resolve(SCRIPT).await.err().unwrap();
		assert!(matches!(
			err,
			SymbolicateError::Resolve(ResolveError::InvalidMap { ref url, .. }) if url == MAP
		));
	}

	#[tokio::test]
	async fn test_missing_map_is_fetch_error() {
		let mut fetcher = InMemoryFetcher::new();
		fetcher.add(SCRIPT, "var f=1;\n//# sourceMappingURL=app.js.map");
		let (_, resolver) = resolver(fetcher);

		let err = resolver.resolve(SCRIPT).await.err().unwrap();
		assert!(matches!(err, SymbolicateError::Fetch(_)));
	}
}
