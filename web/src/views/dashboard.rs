use dioxus::prelude::*;

use ui::{KpiPanel, TopBar};

/// The recruiting dashboard: top bar over the KPI summary panel.
///
/// Both children issue their reads independently on mount; neither blocks
/// the other.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div { class: "dashboard",
            TopBar {}
            main { class: "dashboard-main",
                KpiPanel {}
            }
        }
    }
}
