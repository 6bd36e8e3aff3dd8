//! API Handlers
//!
//! The per-request proxy handler: method gate, cache lookup, origin fetch,
//! and write-through to the cache store.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, Method, Uri},
    response::Response,
};
use tracing::debug;

use crate::cache::{CacheStore, CachedResponse};
use crate::error::{ProxyError, Result};

/// Marker header added to every proxied response.
pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// Application state shared across all handler invocations.
///
/// Constructed once at startup and passed by handle into every request,
/// never held as ambient global state.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe response cache
    pub cache: Arc<RwLock<CacheStore>>,
    /// Shared HTTP client used for origin fetches
    pub client: reqwest::Client,
    /// Origin base URL that cache misses are forwarded to
    pub origin: String,
}

impl AppState {
    /// Creates a new AppState with the given cache store and origin base URL.
    pub fn new(cache: CacheStore, origin: impl Into<String>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            client: reqwest::Client::new(),
            origin: origin.into(),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(CacheStore::new(), config.origin.clone())
    }
}

/// Handler for every inbound request (wildcard route).
///
/// Only GET is cached and proxied; any other method is rejected with 405
/// before the cache or the origin is touched. A GET is served from the
/// cache when a snapshot exists for its key, and otherwise forwarded to
/// the origin, returned to the caller, and written through to the cache.
pub async fn proxy_handler(State(state): State<AppState>, req: Request) -> Result<Response> {
    if req.method() != Method::GET {
        return Err(ProxyError::MethodNotAllowed);
    }

    let target = target_url(&state.origin, req.uri());
    let key = cache_key(req.method(), &target);

    // Read lock only for the lookup, so concurrent hits proceed in parallel
    {
        let cache = state.cache.read().await;
        if let Some(cached) = cache.get(&key) {
            debug!("cache hit for {}", key);
            return Ok(write_response(&cached, "HIT"));
        }
    }

    debug!("cache miss for {}, fetching {}", key, target);
    let fetched = fetch_origin(&state.client, &target).await?;
    let response = write_response(&fetched, "MISS");

    // Write-through after the client response is fully built. Concurrent
    // misses for the same key each fetch independently; the last set wins.
    let mut cache = state.cache.write().await;
    cache.set(key, fetched);

    Ok(response)
}

/// Builds the absolute target URL from the origin base and the inbound
/// request-URI (path plus query string). Trailing slashes on the base are
/// insignificant.
pub fn target_url(origin: &str, uri: &Uri) -> String {
    let request_uri = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    format!("{}{}", origin.trim_end_matches('/'), request_uri)
}

/// Builds the cache key `<METHOD>:<target URL>` for a request.
pub fn cache_key(method: &Method, target: &str) -> String {
    format!("{}:{}", method, target)
}

/// Performs the single GET against the origin and captures the reply.
///
/// The reqwest response is consumed or dropped on every path out of this
/// function, which releases the origin connection even when the body read
/// fails midway.
async fn fetch_origin(client: &reqwest::Client, target: &str) -> Result<CachedResponse> {
    let url = reqwest::Url::parse(target)
        .map_err(|err| ProxyError::InvalidOriginRequest(err.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| ProxyError::OriginUnreachable(err.to_string()))?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .bytes()
        .await
        .map_err(|err| ProxyError::OriginBodyRead(err.to_string()))?;

    Ok(CachedResponse {
        status,
        headers,
        body,
    })
}

/// Writes a captured response out to the client: every stored header/value
/// pair, the `X-Cache` marker, the stored status, and the stored body.
fn write_response(cached: &CachedResponse, cache_status: &'static str) -> Response {
    let mut response = Response::new(Body::from(cached.body.clone()));
    *response.status_mut() = cached.status;

    let headers = response.headers_mut();
    for (name, value) in cached.headers.iter() {
        headers.append(name.clone(), value.clone());
    }
    headers.insert(X_CACHE, HeaderValue::from_static(cache_status));

    response
}
