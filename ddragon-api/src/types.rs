use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DDragonError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Decoding raw response error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("The versions feed did not contain any version")]
    EmptyVersionFeed,

    #[error("A champion id must not be empty")]
    InvalidChampionId,
}

/// A call to the CDN can either result in a success with the success type or fail with a [`DDragonError`].
pub type DDragonResponse<T> = Result<T, DDragonError>;

/// Game-data release published on the CDN, e.g. `15.24.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new(crate::api::DEFAULT_VERSION)
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
