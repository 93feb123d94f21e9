//! # API crate — shared fullstack server functions for Hireboard
//!
//! Defines every Dioxus server function the dashboard frontend calls, along
//! with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | `KpiSnapshot`, plus the `User` row and its client-safe projection `UserInfo` |
//! | [`session`] | — | Session key constants shared with the web server |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` and compiled twice: once with full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Dashboard**: `get_kpi_snapshot`
//! - **Authentication**: `get_current_user`
//!
//! Login, registration, and KPI computation are handled by external services;
//! this crate only reads their results. Logout is not a server function: the
//! top bar navigates the whole browser to `GET /api/auth/logout`, an axum
//! route in the web binary that flushes the session and redirects.

use dioxus::prelude::*;

pub mod db;
pub mod models;
pub mod session;

pub use models::{KpiSnapshot, UserInfo};
pub use session::SESSION_USER_ID_KEY;

/// Get the latest KPI snapshot for the dashboard.
///
/// Snapshots are precomputed by the metrics pipeline; this just reads the
/// newest `kpi_snapshots` row. An empty table yields the all-zero snapshot.
#[cfg(feature = "server")]
#[get("/api/dashboard/kpis")]
pub async fn get_kpi_snapshot() -> Result<KpiSnapshot, ServerFnError> {
    use crate::db::get_pool;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let snapshot: Option<KpiSnapshot> = sqlx::query_as(
        "SELECT today_applicants, today_applicants_change, \
                interview_rate, interview_rate_change, \
                booking_rate, booking_rate_change, \
                offer_rate, offer_rate_change \
         FROM kpi_snapshots ORDER BY captured_at DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(snapshot.unwrap_or_default())
}

#[cfg(not(feature = "server"))]
#[get("/api/dashboard/kpis")]
pub async fn get_kpi_snapshot() -> Result<KpiSnapshot, ServerFnError> {
    Ok(KpiSnapshot::default())
}

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user_uuid = uuid::Uuid::parse_str(&user_id)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_uuid)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

