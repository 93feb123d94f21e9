//! Top navigation bar: title, search field, notification bell, profile menu.

use api::UserInfo;
use cache::FetchState;
use dioxus::prelude::*;

use crate::icons::{FaChevronDown, FaMagnifyingGlass, FaUser};
use crate::menu::{MenuEvent, MenuState};
use crate::{use_cached_resource, Icon, NotificationBell, CURRENT_USER_PATH, LOGOUT_PATH};

const TOPBAR_CSS: Asset = asset!("/assets/styling/topbar.css");

/// The dashboard's top bar.
#[component]
pub fn TopBar() -> Element {
    let user = use_cached_resource::<Option<UserInfo>>(CURRENT_USER_PATH);

    rsx! {
        document::Stylesheet { href: TOPBAR_CSS }
        TopBarView { user: user() }
    }
}

/// Markup for one profile fetch state. Split from [`TopBar`] so the render
/// contract is testable without a live cache — the view itself has no cache
/// access, so nothing below this point can issue a request.
///
/// The search field holds local keystroke state only; it is not wired to a
/// query yet. The profile menu appears only once a user profile actually
/// loaded — a pending or failed fetch both leave the trigger out.
#[component]
fn TopBarView(user: FetchState<Option<UserInfo>>) -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        header {
            class: "topbar",
            "data-testid": "topbar",
            // Hidden on wider viewports via CSS.
            span { class: "topbar-title", "Hireboard" }
            div { class: "topbar-search",
                span { class: "topbar-search-icon",
                    Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                }
                input {
                    class: "topbar-search-input",
                    "data-testid": "topbar-search",
                    r#type: "text",
                    placeholder: "Search candidates, roles...",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }
            div { class: "topbar-actions",
                NotificationBell {}
                if let FetchState::Ready(Some(user)) = user {
                    ProfileMenu { user }
                }
            }
        }
    }
}

#[component]
fn ProfileMenu(user: UserInfo) -> Element {
    let mut menu = use_signal(MenuState::default);
    let full_name = user.full_name();

    rsx! {
        div {
            class: "profile",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    menu.set(menu().transition(MenuEvent::Escape));
                }
            },
            button {
                class: "profile-trigger",
                "data-testid": "profile-button",
                onclick: move |_| menu.set(menu().transition(MenuEvent::ToggleTrigger)),
                span { class: "profile-avatar",
                    Icon { icon: FaUser, width: 14, height: 14 }
                }
                Icon { icon: FaChevronDown, width: 12, height: 12 }
            }
            if menu().is_open() {
                // Transparent backdrop so any click outside the menu closes it.
                div {
                    class: "profile-backdrop",
                    onclick: move |_| menu.set(menu().transition(MenuEvent::OutsideClick)),
                }
                div {
                    class: "profile-menu",
                    "data-testid": "profile-menu",
                    onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                    div { class: "profile-identity",
                        span {
                            class: "profile-email",
                            "data-testid": "profile-email",
                            "{user.email}"
                        }
                        if let Some(ref name) = full_name {
                            span { class: "profile-name", "{name}" }
                        }
                        if user.is_admin {
                            span { class: "profile-admin-badge", "Admin" }
                        }
                    }
                    button {
                        class: "profile-menu-item profile-menu-item--logout",
                        "data-testid": "logout-button",
                        // Terminal action: a full navigation, not a menu
                        // transition. The server clears the session and
                        // redirects.
                        onclick: move |_| navigate_to(LOGOUT_PATH),
                        "Log out"
                    }
                }
            }
        }
    }
}

/// Full browser navigation (not an in-app route change).
fn navigate_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("navigation to {path} requested outside a browser context");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(user: FetchState<Option<UserInfo>>) -> String {
        let mut dom = VirtualDom::new_with_props(TopBarView, TopBarViewProps { user });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn admin() -> UserInfo {
        UserInfo {
            id: "1".into(),
            email: "a@b.com".into(),
            first_name: None,
            last_name: None,
            is_admin: true,
        }
    }

    #[test]
    fn no_profile_trigger_without_a_loaded_user() {
        let states = [
            FetchState::Loading,
            FetchState::Error("gateway timeout".into()),
            FetchState::Ready(None),
        ];
        for state in states {
            let html = render(state);
            assert!(!html.contains("data-testid=\"profile-button\""));
            assert!(!html.contains("data-testid=\"profile-menu\""));
            // The rest of the bar is unconditional.
            assert!(html.contains("data-testid=\"topbar-search\""));
            assert!(html.contains("data-testid=\"notification-bell\""));
        }
    }

    #[test]
    fn loaded_user_gets_a_trigger_with_the_menu_closed() {
        let html = render(FetchState::Ready(Some(admin())));
        assert!(html.contains("data-testid=\"profile-button\""));
        assert!(!html.contains("data-testid=\"profile-menu\""));
    }

    #[test]
    fn search_field_is_plain_local_input() {
        let html = render(FetchState::Ready(None));
        assert!(html.contains("data-testid=\"topbar-search\""));
        // No form, so keystrokes can't submit anything.
        assert!(!html.contains("<form"));
    }
}
