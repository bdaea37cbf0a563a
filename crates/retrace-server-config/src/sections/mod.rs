// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod fetch;
mod http;
mod logging;
mod request;

pub use fetch::{FetchConfig, FetchConfigLayer};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use request::{RequestConfig, RequestConfigLayer};
