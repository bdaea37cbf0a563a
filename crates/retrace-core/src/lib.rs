// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the retrace stack trace symbolication service.
//!
//! This crate provides the shared vocabulary used by the symbolication
//! pipeline (`retrace-symbolicate`) and the HTTP server (`retrace-server`):
//!
//! - Parsing a raw minified stack trace into frames grouped by script URL
//! - The frame and frame group types produced by the parser
//! - The original-position and symbolicated-trace types returned to callers
//!
//! # Example
//!
//! ```
//! use retrace_core::parse;
//!
//! let trace = parse("TypeError: x\nat f (https://cdn.example.com/app.js:10:5)").unwrap();
//! assert_eq!(trace.message, "TypeError: x");
//! assert_eq!(trace.frame_count(), 1);
//! ```

pub mod error;
pub mod frame;
pub mod parser;
pub mod position;

pub use error::{ParseError, Result};
pub use frame::{Frame, FrameGroup, ParsedTrace};
pub use parser::{parse, parse_frame_line};
pub use position::{OriginalPosition, SymbolicatedTrace};
