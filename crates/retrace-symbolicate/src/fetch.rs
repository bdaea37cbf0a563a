// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Retrieval of generated scripts and source maps.
//!
//! [`Fetcher`] is the raw network capability. [`FetchCache`] wraps a fetcher
//! so that each URL is downloaded at most once per cache lifetime, and
//! concurrent requests for the same URL share a single in-flight download.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, instrument};

use crate::error::FetchError;

/// Network capability returning the textual body of a URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
	async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`Fetcher`] backed by an HTTP client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
	client: Client,
}

impl HttpFetcher {
	/// Build a fetcher with the standard retrace User-Agent.
	pub fn new(timeout: Option<Duration>) -> reqwest::Result<Self> {
		Ok(Self::from_client(retrace_common_http::new_client(timeout)?))
	}

	pub fn from_client(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Fetcher for HttpFetcher {
	async fn fetch(&self, url: &str) -> Result<String, FetchError> {
		let response = self
			.client
			.get(url)
			.send()
			.await
			.map_err(|source| FetchError::Request {
				url: url.to_string(),
				source,
			})?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status {
				url: url.to_string(),
				status: status.as_u16(),
			});
		}

		response.text().await.map_err(|source| FetchError::Request {
			url: url.to_string(),
			source,
		})
	}
}

/// In-memory fetcher for testing and offline use.
///
/// Unknown URLs fail with HTTP 404. Every call is counted, including calls
/// that fail.
#[derive(Debug, Default)]
pub struct InMemoryFetcher {
	bodies: HashMap<String, String>,
	delays: HashMap<String, Duration>,
	calls: std::sync::Mutex<HashMap<String, usize>>,
}

impl InMemoryFetcher {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, url: impl Into<String>, body: impl Into<String>) {
		self.bodies.insert(url.into(), body.into());
	}

	/// Hold every response for `url` back by `delay`.
	pub fn delay(&mut self, url: impl Into<String>, delay: Duration) {
		self.delays.insert(url.into(), delay);
	}

	/// Number of times `url` has been requested.
	pub fn fetch_count(&self, url: &str) -> usize {
		let calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
		calls.get(url).copied().unwrap_or(0)
	}

	pub fn total_fetches(&self) -> usize {
		let calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
		calls.values().sum()
	}
}

#[async_trait]
impl Fetcher for InMemoryFetcher {
	async fn fetch(&self, url: &str) -> Result<String, FetchError> {
		{
			let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
			*calls.entry(url.to_string()).or_insert(0) += 1;
		}

		if let Some(delay) = self.delays.get(url) {
			tokio::time::sleep(*delay).await;
		}

		self.bodies
			.get(url)
			.cloned()
			.ok_or_else(|| FetchError::Status {
				url: url.to_string(),
				status: 404,
			})
	}
}

/// URL-keyed body cache in front of a [`Fetcher`].
///
/// Entries are never evicted or invalidated. Failed fetches are not cached;
/// the next caller for that URL fetches again.
pub struct FetchCache {
	fetcher: Arc<dyn Fetcher>,
	entries: Mutex<HashMap<String, Arc<OnceCell<Arc<str>>>>>,
}

impl FetchCache {
	pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
		Self {
			fetcher,
			entries: Mutex::new(HashMap::new()),
		}
	}

	/// Return the body of `url`, fetching it on first use.
	#[instrument(skip(self))]
	pub async fn fetch_cached(&self, url: &str) -> Result<Arc<str>, FetchError> {
		let cell = {
			let mut entries = self.entries.lock().await;
			Arc::clone(entries.entry(url.to_string()).or_default())
		};

		if let Some(body) = cell.get() {
			debug!("cache hit");
			return Ok(Arc::clone(body));
		}

		let result = cell
			.get_or_try_init(|| async {
				debug!("fetching");
				let body = self.fetcher.fetch(url).await?;
				debug!(bytes = body.len(), "fetched");
				Ok::<_, FetchError>(Arc::<str>::from(body))
			})
			.await;

		match result {
			Ok(body) => Ok(Arc::clone(body)),
			Err(e) => {
				self.forget_failed(url, &cell).await;
				Err(e)
			}
		}
	}

	/// Drop the empty cell left behind by a failed fetch.
	async fn forget_failed(&self, url: &str, cell: &Arc<OnceCell<Arc<str>>>) {
		let mut entries = self.entries.lock().await;
		if entries
			.get(url)
			.is_some_and(|stored| Arc::ptr_eq(stored, cell) && !stored.initialized())
		{
			entries.remove(url);
		}
	}

	/// Number of URLs with a cached body.
	pub async fn len(&self) -> usize {
		let entries = self.entries.lock().await;
		entries.values().filter(|cell| cell.initialized()).count()
	}

	pub async fn is_empty(&self) -> bool {
		self.len().await == 0
	}

	pub async fn contains(&self, url: &str) -> bool {
		let entries = self.entries.lock().await;
		entries.get(url).is_some_and(|cell| cell.initialized())
	}
}

impl std::fmt::Debug for FetchCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FetchCache").finish_non_exhaustive()
	}
}
