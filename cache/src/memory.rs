use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::request_cache::ResourceFetcher;
use crate::FetchError;

/// In-memory ResourceFetcher for tests.
///
/// Serves canned responses (or canned failures) per path and counts how many
/// times each path was actually fetched, so tests can assert deduplication.
#[derive(Clone, Debug, Default)]
pub struct MemoryFetcher {
    responses: Arc<Mutex<HashMap<String, Result<Value, FetchError>>>>,
    counts: Arc<Mutex<HashMap<String, usize>>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `value` for `path` on subsequent fetches.
    pub fn insert(&self, path: &str, value: Value) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Ok(value));
    }

    /// Serve a transport failure for `path` on subsequent fetches.
    pub fn fail(&self, path: &str, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Err(FetchError::transport(path, message)));
    }

    /// How many times `path` has been fetched (cache misses only).
    pub fn fetch_count(&self, path: &str) -> usize {
        self.counts.lock().unwrap().get(path).copied().unwrap_or(0)
    }
}

impl ResourceFetcher for MemoryFetcher {
    async fn fetch(&self, path: &str) -> Result<Value, FetchError> {
        *self.counts.lock().unwrap().entry(path.to_string()).or_insert(0) += 1;
        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::UnknownResource(path.to_string())))
    }
}
