mod assets;
pub mod client;
mod endpoints;
pub mod metrics;

pub use client::{ClientOptions, DDragonClient, DEFAULT_BASE_URL, DEFAULT_LOCALE, DEFAULT_VERSION};
