//! Cache Proxy - A forward-caching HTTP proxy
//!
//! Serves GET requests from an in-memory response cache and forwards misses
//! to a configured origin server.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;

pub use api::AppState;
pub use config::Config;
