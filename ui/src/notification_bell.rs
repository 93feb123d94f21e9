//! Notification indicator for the top bar.
//!
//! Delivery and unread counts live in an external service; this component
//! only renders the entry point.

use dioxus::prelude::*;

use crate::icons::FaBell;
use crate::Icon;

#[component]
pub fn NotificationBell() -> Element {
    rsx! {
        button {
            class: "notification-bell",
            "data-testid": "notification-bell",
            title: "Notifications",
            Icon { icon: FaBell, width: 16, height: 16 }
            span { class: "notification-dot" }
        }
    }
}
