//! Cached Response Module
//!
//! Defines the immutable snapshot of an origin reply held by the cache.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};

// == Cached Response ==
/// An origin response captured for reuse: status, headers, and body.
///
/// The snapshot owns its data outright. Headers are copied out of the
/// transport response at capture time, so the entry stays valid after the
/// transport layer reuses or drops its own buffers. Entries are never
/// mutated in place; an update replaces the whole value.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    /// HTTP status code of the origin reply
    pub status: StatusCode,
    /// Header multimap (case-insensitive names, value order preserved)
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Bytes,
}

impl CachedResponse {
    // == Constructor ==
    /// Captures a response snapshot from its parts.
    ///
    /// # Arguments
    /// * `status` - Status code returned by the origin
    /// * `headers` - Origin headers; copied into the snapshot
    /// * `body` - Fully read response body
    pub fn new(status: StatusCode, headers: &HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers: headers.clone(),
            body,
        }
    }
}
