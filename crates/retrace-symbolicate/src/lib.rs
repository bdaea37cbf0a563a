// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Source map resolution and symbolication engine for retrace.
//!
//! This crate provides functionality for:
//! - Fetching generated scripts and source maps with a per-process cache
//! - Locating the `//# sourceMappingURL=` directive of a generated script
//! - Translating minified frame positions to original source positions
//! - Reassembling translated frames in their original order
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use retrace_symbolicate::{InMemoryFetcher, Symbolicator};
//!
//! let mut fetcher = InMemoryFetcher::new();
//! fetcher.add(
//!     "https://cdn.example.com/app.js",
//!     "console.log(1);\n//# sourceMappingURL=app.js.map",
//! );
//! fetcher.add(
//!     "https://cdn.example.com/app.js.map",
//!     r#"{"version":3,"sources":["src/app.ts"],"names":["f"],"mappings":";;;;;;;;;AAECA"}"#,
//! );
//!
//! let symbolicator = Symbolicator::with_fetcher(Arc::new(fetcher));
//! let trace = futures::executor::block_on(
//!     symbolicator.symbolicate("TypeError: x\nat f (https://cdn.example.com/app.js:10:5)"),
//! )
//! .unwrap();
//! assert_eq!(trace.stack_trace[0].source.as_deref(), Some("src/app.ts"));
//! ```

pub mod assemble;
pub mod directive;
pub mod error;
pub mod fetch;
pub mod processor;
pub mod resolver;
pub mod source_map;
pub mod translate;

// Re-export main types
pub use assemble::assemble;
pub use directive::{find_source_mapping_url, resolve_map_url, SOURCE_MAPPING_URL_PREFIX};
pub use error::{FetchError, ResolveError, Result, SymbolicateError};
pub use fetch::{FetchCache, Fetcher, HttpFetcher, InMemoryFetcher};
pub use processor::Symbolicator;
pub use resolver::SourceMapResolver;
pub use source_map::{DecodeError, OriginalLocation, SourceMapDecoder, SourceMapHandle, V3Decoder};
pub use translate::{translate, translate_group};
