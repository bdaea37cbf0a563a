// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for retrace.
//!
//! This crate provides a pre-configured HTTP client with a consistent
//! User-Agent header, used to download generated scripts and their source
//! maps.

mod client;

pub use client::{builder, builder_with_user_agent, new_client, user_agent};
