//! Dashboard KPI summary panel.

use api::KpiSnapshot;
use cache::FetchState;
use dioxus::prelude::*;

use crate::format::{snapshot_cards, KpiCard};
use crate::icons::{FaCalendarCheck, FaComments, FaHandshake, FaUsers};
use crate::{use_cached_resource, Icon, KPI_SNAPSHOT_PATH};

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// Four metric cards fed by the latest KPI snapshot.
///
/// While the snapshot is loading the panel shows exactly four skeleton
/// cards; a failed fetch renders an inline error banner instead of the
/// cards (failure is never dressed up as an endless skeleton).
#[component]
pub fn KpiPanel() -> Element {
    let snapshot = use_cached_resource::<KpiSnapshot>(KPI_SNAPSHOT_PATH);

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }
        KpiPanelView { state: snapshot() }
    }
}

/// Markup for one fetch state. Split from [`KpiPanel`] so the render
/// contract is testable without a live cache.
#[component]
fn KpiPanelView(state: FetchState<KpiSnapshot>) -> Element {
    let body = match state {
        FetchState::Loading => rsx! {
            for i in 0..4 {
                div {
                    key: "{i}",
                    class: "kpi-card kpi-card--skeleton",
                    "data-testid": "kpi-skeleton",
                    div { class: "kpi-skeleton-line kpi-skeleton-line--title" }
                    div { class: "kpi-skeleton-line kpi-skeleton-line--value" }
                    div { class: "kpi-skeleton-line" }
                }
            }
        },
        FetchState::Error(message) => rsx! {
            div {
                class: "kpi-error",
                "data-testid": "kpi-error",
                "Couldn't load metrics: {message}"
            }
        },
        FetchState::Ready(snapshot) => rsx! {
            for card in snapshot_cards(&snapshot) {
                KpiCardView { key: "{card.slug}", card }
            }
        },
    };

    rsx! {
        section {
            class: "kpi-panel",
            "data-testid": "kpi-panel",
            {body}
        }
    }
}

#[component]
fn KpiCardView(card: KpiCard) -> Element {
    let trend_class = card.trend().class();
    let delta_label = card.delta_label();
    let icon = match card.slug {
        "applicants" => rsx! { Icon { icon: FaUsers, width: 18, height: 18 } },
        "interview-rate" => rsx! { Icon { icon: FaComments, width: 18, height: 18 } },
        "booking-rate" => rsx! { Icon { icon: FaCalendarCheck, width: 18, height: 18 } },
        _ => rsx! { Icon { icon: FaHandshake, width: 18, height: 18 } },
    };

    rsx! {
        div {
            class: "kpi-card",
            "data-testid": "kpi-card-{card.slug}",
            div { class: "kpi-card-header",
                span { class: "kpi-title", "{card.title}" }
                span { class: "kpi-icon", {icon} }
            }
            span {
                class: "kpi-value",
                "data-testid": "kpi-value-{card.slug}",
                "{card.value}"
            }
            span {
                class: "kpi-delta {trend_class}",
                "data-testid": "kpi-delta-{card.slug}",
                "{delta_label}"
            }
        }
    }
}
