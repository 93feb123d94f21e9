//! Aggregate recruiting metrics for the dashboard KPI panel.

use serde::{Deserialize, Serialize};

/// One snapshot of the four dashboard KPIs and their deltas.
///
/// The client treats this as read-only and replaces it wholesale on each
/// fetch. Every field is serde-defaulted so a sparse payload decodes with
/// zeros instead of failing; the panel renders those zeros as `0` / `0%`.
///
/// Deltas are percentage points relative to a per-metric reference period:
/// applicants against yesterday, interview and booking rates against last
/// week, offer rate against last month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct KpiSnapshot {
    pub today_applicants: i64,
    pub today_applicants_change: f64,
    pub interview_rate: f64,
    pub interview_rate_change: f64,
    pub booking_rate: f64,
    pub booking_rate_change: f64,
    pub offer_rate: f64,
    pub offer_rate_change: f64,
}
