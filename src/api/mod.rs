//! API Module
//!
//! HTTP handler and routing for the caching proxy.
//!
//! A single wildcard route accepts every method and path; GET requests are
//! served from the cache or forwarded to the origin, everything else is
//! rejected with 405.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
