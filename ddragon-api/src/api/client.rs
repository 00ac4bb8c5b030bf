use std::{
    num::NonZeroU32,
    sync::{Arc, PoisonError, RwLock},
};

use bytes::Bytes;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use crate::types::{DDragonError, DDragonResponse, Version};

use super::metrics::RequestMetrics;

pub const DEFAULT_BASE_URL: &str = "https://ddragon.leagueoflegends.com";
pub const DEFAULT_LOCALE: &str = "en_US";
/// Version used until the versions feed has been read at least once.
pub const DEFAULT_VERSION: &str = "15.24.1";

/// Construction settings for a [`DDragonClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub locale: String,
    pub default_version: Version,
    /// Client side limit, `None` sends requests as fast as they come.
    pub rate_limit_per_second: Option<NonZeroU32>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            default_version: Version::default(),
            rate_limit_per_second: None,
        }
    }
}

/// Session bound handle on the CDN.
///
/// Owns the cached [`Version`] and the flag telling whether the versions feed
/// was already consulted. Share it behind an [`Arc`] between tasks.
#[derive(Debug)]
pub struct DDragonClient {
    client: reqwest::Client,
    limiter: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    base_url: String,
    locale: String,
    version: RwLock<Version>,
    version_checked: OnceCell<()>,
    pub metrics: Arc<RequestMetrics>,
}

impl DDragonClient {
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(options: ClientOptions) -> Self {
        let limiter = options
            .rate_limit_per_second
            .map(|per_second| RateLimiter::direct(Quota::per_second(per_second)));

        Self {
            client: reqwest::Client::new(),
            limiter,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            locale: options.locale,
            version: RwLock::new(options.default_version),
            version_checked: OnceCell::new(),
            metrics: RequestMetrics::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Currently cached version, the default one if nothing was resolved yet.
    pub fn version(&self) -> Version {
        self.version
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn set_version(&self, version: Version) {
        *self.version.write().unwrap_or_else(PoisonError::into_inner) = version;
    }

    /// Whether a version resolution already completed through the data accessors.
    pub fn is_version_checked(&self) -> bool {
        self.version_checked.initialized()
    }

    /// Resolve the version once per client.
    ///
    /// Concurrent first callers wait on the same resolution instead of each
    /// fetching the versions feed.
    pub(crate) async fn ensure_version(&self) -> Version {
        self.version_checked
            .get_or_init(|| async {
                self.resolve_latest_version().await;
            })
            .await;

        self.version()
    }

    pub(crate) fn data_url(&self, version: &Version, document: &str) -> String {
        format!(
            "{}/cdn/{}/data/{}/{}",
            self.base_url, version, self.locale, document
        )
    }

    pub(crate) async fn request<T: DeserializeOwned>(&self, path: String) -> DDragonResponse<T> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
        self.metrics.inc();

        let res = self.fetch(path).await;
        if res.is_err() {
            self.metrics.inc_failure();
        }
        res
    }

    async fn fetch<T: DeserializeOwned>(&self, path: String) -> DDragonResponse<T> {
        let res = self.client.get(path).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(DDragonError::Status(status));
        }

        let raw: Bytes = res.bytes().await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

impl Default for DDragonClient {
    fn default() -> Self {
        Self::new()
    }
}
