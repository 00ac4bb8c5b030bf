use std::env;
use std::num::NonZeroU32;

use ddragon_api::{ClientOptions, DEFAULT_BASE_URL, DEFAULT_LOCALE, DEFAULT_VERSION, Version};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub locale: String,
    pub ddragon_version: String,
    pub rate_limit_per_second: Option<NonZeroU32>,
}

impl Config {
    /// Read the `DDRAGON_*` variables. `.env` must already be loaded.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let base_url = lookup("DDRAGON_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(AppError::Config(format!(
                "DDRAGON_BASE_URL must be an http(s) URL, got {}",
                base_url
            )));
        }

        let locale = lookup("DDRAGON_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.into());
        if locale.trim().is_empty() {
            return Err(AppError::Config("DDRAGON_LOCALE must not be empty".into()));
        }

        let ddragon_version =
            lookup("DDRAGON_VERSION").unwrap_or_else(|| DEFAULT_VERSION.into());

        let rate_limit_per_second = lookup("DDRAGON_RATE_LIMIT_PER_SECOND")
            .and_then(|v| v.parse().ok())
            .and_then(NonZeroU32::new);

        Ok(Self {
            base_url,
            locale,
            ddragon_version,
            rate_limit_per_second,
        })
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            base_url: self.base_url.clone(),
            locale: self.locale.clone(),
            default_version: Version::new(self.ddragon_version.clone()),
            rate_limit_per_second: self.rate_limit_per_second,
        }
    }
}
