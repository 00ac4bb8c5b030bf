//! Client for Riot's Data Dragon CDN.
//!
//! The library resolves the current game-data version once per client,
//! fetches champion and profile icon data for that version and derives the
//! asset URLs the CDN serves for it.

pub mod api;
pub mod models;
pub mod types;

pub use api::{ClientOptions, DDragonClient, DEFAULT_BASE_URL, DEFAULT_LOCALE, DEFAULT_VERSION};
pub use types::{DDragonError, DDragonResponse, Version};
