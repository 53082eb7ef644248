//! JSON data client for the portfolio backend.
//!
//! Every fetch is a single best-effort GET against `<api_base><path>`. Any
//! failure (transport, non-2xx, undecodable body) is logged and turned into
//! `None`, so callers fall back to static content without handling errors.

mod endpoints;
mod error;
pub(crate) mod transfer;

use serde::de::DeserializeOwned;

use crate::asset::AssetResolver;
use crate::config::ApiBase;

pub use error::FetchError;

/// Fetches JSON resources from one backend.
#[derive(Debug, Clone, Default)]
pub struct DataClient {
    base: ApiBase,
}

impl DataClient {
    pub fn new(base: ApiBase) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Resolver bound to the same API base.
    pub fn assets(&self) -> AssetResolver {
        AssetResolver::new(self.base.clone())
    }

    /// Full URL for an API path such as `/api/home`.
    pub fn url_for(&self, path: &str) -> String {
        self.base.join(path)
    }

    /// GET and decode, keeping the failure reason.
    ///
    /// Blocking; prefer [`fetch_json_async`](Self::fetch_json_async) from async code.
    pub fn try_fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url_for(path);
        tracing::debug!("GET {}", url);
        let resp = transfer::get_json(&url)?;
        if !resp.is_success() {
            return Err(FetchError::Status(resp.status));
        }
        Ok(serde_json::from_slice(&resp.body)?)
    }

    /// GET and decode; `None` on any failure. Blocking.
    pub fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        absorb(path, self.try_fetch_json(path))
    }

    /// Like [`try_fetch_json`](Self::try_fetch_json), on the blocking pool.
    pub async fn try_fetch_json_async<T>(&self, path: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        let path = path.to_string();
        tokio::task::spawn_blocking(move || client.try_fetch_json(&path))
            .await
            .map_err(|e| FetchError::Join(e.to_string()))?
    }

    /// Async [`fetch_json`](Self::fetch_json). Each call runs its own transfer on
    /// the blocking pool; dropping the future discards the result.
    pub async fn fetch_json_async<T>(&self, path: &str) -> Option<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        absorb(path, self.try_fetch_json_async(path).await)
    }
}

fn absorb<T>(path: &str, result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("fetch {} unavailable: {}", path, e);
            None
        }
    }
}
