use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::FetchError;

/// Transport behind the cache. The live app dispatches to server functions;
/// tests use [`crate::MemoryFetcher`].
pub trait ResourceFetcher {
    async fn fetch(&self, path: &str) -> Result<Value, FetchError>;
}

type Slot = Arc<tokio::sync::Mutex<Option<Value>>>;

/// Read-through cache of JSON resources keyed by path.
///
/// Concurrent reads of the same path serialize on a per-key async mutex, so
/// an in-flight fetch is never duplicated: the second reader waits and then
/// sees the cached value. Failed fetches are not cached; the next read
/// retries.
#[derive(Clone)]
pub struct RequestCache<F> {
    fetcher: F,
    entries: Arc<Mutex<HashMap<String, Slot>>>,
}

impl<F: ResourceFetcher> RequestCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn slot(&self, path: &str) -> Slot {
        let mut entries = self.entries.lock().unwrap();
        entries
            .entry(path.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(None)))
            .clone()
    }

    /// Return the cached value for `path`, fetching it first if needed.
    pub async fn read(&self, path: &str) -> Result<Value, FetchError> {
        let slot = self.slot(path);
        let mut guard = slot.lock().await;
        if let Some(value) = guard.as_ref() {
            return Ok(value.clone());
        }
        let value = self.fetcher.fetch(path).await?;
        *guard = Some(value.clone());
        Ok(value)
    }

    /// Typed read: fetch (or recall) `path` and decode it as `T`.
    pub async fn read_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let value = self.read(path).await?;
        serde_json::from_value(value).map_err(|e| FetchError::decode(path, e.to_string()))
    }

    /// Drop the cached value for `path`. The next read refetches.
    ///
    /// Invalidation does not push anything to earlier readers: a component
    /// that already read `path` keeps its value until it reads again
    /// (typically on remount).
    pub fn invalidate(&self, path: &str) {
        self.entries.lock().unwrap().remove(path);
    }

    /// Drop every cached value.
    pub fn invalidate_all(&self) {
        self.entries.lock().unwrap().clear();
    }
}
