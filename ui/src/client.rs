//! Request cache wiring for the live app.
//!
//! [`CacheProvider`] injects an [`AppCache`] via Dioxus context; components
//! read resources with [`use_cached_resource`]. The cache's transport,
//! [`ServerFnFetcher`], dispatches known paths to the typed server functions
//! in the `api` crate.

use cache::{FetchError, FetchState, RequestCache, ResourceFetcher};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Latest KPI snapshot for the dashboard panel.
pub const KPI_SNAPSHOT_PATH: &str = "/api/dashboard/kpis";
/// Current authenticated user, if any.
pub const CURRENT_USER_PATH: &str = "/api/auth/me";
/// Full-navigation logout target served by the web binary.
pub const LOGOUT_PATH: &str = "/api/auth/logout";

/// Dispatches resource paths to `api` server functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnFetcher;

impl ResourceFetcher for ServerFnFetcher {
    async fn fetch(&self, path: &str) -> Result<Value, FetchError> {
        match path {
            KPI_SNAPSHOT_PATH => {
                let snapshot = api::get_kpi_snapshot()
                    .await
                    .map_err(|e| FetchError::transport(path, e.to_string()))?;
                serde_json::to_value(snapshot)
                    .map_err(|e| FetchError::decode(path, e.to_string()))
            }
            CURRENT_USER_PATH => {
                let user = api::get_current_user()
                    .await
                    .map_err(|e| FetchError::transport(path, e.to_string()))?;
                serde_json::to_value(user).map_err(|e| FetchError::decode(path, e.to_string()))
            }
            _ => Err(FetchError::UnknownResource(path.to_string())),
        }
    }
}

/// The request cache shared by every component in the app.
pub type AppCache = RequestCache<ServerFnFetcher>;

/// Provider component that injects the shared request cache.
/// Wrap your app with this component so views can call [`use_cached_resource`].
#[component]
pub fn CacheProvider(children: Element) -> Element {
    use_context_provider(|| AppCache::new(ServerFnFetcher));

    rsx! {
        {children}
    }
}

/// Get the shared request cache from context.
pub fn use_request_cache() -> AppCache {
    use_context::<AppCache>()
}

/// Read a resource through the shared cache.
///
/// Returns a signal that starts at [`FetchState::Loading`] and settles to
/// `Ready` or `Error` when the (possibly cached) fetch resolves. Repeated
/// mounts of the same path are served from cache without a new request.
///
/// The read happens once per mount: after `invalidate`, a component that is
/// already showing the old value picks up the fresh one on its next mount,
/// not immediately.
pub fn use_cached_resource<T>(path: &'static str) -> Signal<FetchState<T>>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let cache = use_request_cache();
    let mut state = use_signal(FetchState::<T>::default);

    let _ = use_resource(move || {
        let cache = cache.clone();
        async move {
            match cache.read_as::<T>(path).await {
                Ok(value) => state.set(FetchState::Ready(value)),
                Err(e) => {
                    tracing::error!("cached read of {path} failed: {e}");
                    state.set(FetchState::Error(e.to_string()));
                }
            }
        }
    });

    state
}
