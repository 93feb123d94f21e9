//! Data models for the application.

mod kpi;
mod user;

pub use kpi::KpiSnapshot;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
