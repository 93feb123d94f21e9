//! Read-through request cache shared by every Hireboard frontend component.
//!
//! Components never issue HTTP requests directly. They read JSON resources by
//! path through a [`RequestCache`], which deduplicates in-flight fetches and
//! caches successful responses until invalidated. The actual transport is an
//! injected [`ResourceFetcher`], so tests can swap in a [`MemoryFetcher`] with
//! canned responses.

pub mod state;

mod request_cache;
pub use request_cache::{RequestCache, ResourceFetcher};

mod error;
pub use error::FetchError;

mod memory;
pub use memory::MemoryFetcher;

pub use state::FetchState;
