//! This crate contains all shared UI for the Hireboard dashboard.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{
    use_cached_resource, use_request_cache, AppCache, CacheProvider, ServerFnFetcher,
    CURRENT_USER_PATH, KPI_SNAPSHOT_PATH, LOGOUT_PATH,
};

pub mod format;

pub mod menu;
pub use menu::{MenuEvent, MenuState};

mod kpi_panel;
pub use kpi_panel::KpiPanel;

mod top_bar;
pub use top_bar::TopBar;

mod notification_bell;
pub use notification_bell::NotificationBell;
