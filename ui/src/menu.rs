//! Explicit open/close state machine for the profile dropdown.
//!
//! Kept out of the component so the interaction contract is testable without
//! a DOM. Logout is deliberately not an event here: it is a full browser
//! navigation away from the app, not a transition of this machine.

/// Whether the profile dropdown is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Interactions that can move the dropdown between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The trigger button was activated.
    ToggleTrigger,
    /// Escape pressed while the menu had focus.
    Escape,
    /// A click landed outside the menu.
    OutsideClick,
    /// A menu item was selected.
    SelectItem,
}

impl MenuState {
    pub fn transition(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::ToggleTrigger) => MenuState::Open,
            (MenuState::Open, _) => MenuState::Closed,
            (MenuState::Closed, _) => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_toggles() {
        let open = MenuState::Closed.transition(MenuEvent::ToggleTrigger);
        assert!(open.is_open());
        let closed = open.transition(MenuEvent::ToggleTrigger);
        assert_eq!(closed, MenuState::Closed);
    }

    #[test]
    fn escape_outside_click_and_selection_all_close() {
        for event in [MenuEvent::Escape, MenuEvent::OutsideClick, MenuEvent::SelectItem] {
            assert_eq!(MenuState::Open.transition(event), MenuState::Closed);
        }
    }

    #[test]
    fn closed_ignores_everything_but_the_trigger() {
        for event in [MenuEvent::Escape, MenuEvent::OutsideClick, MenuEvent::SelectItem] {
            assert_eq!(MenuState::Closed.transition(event), MenuState::Closed);
        }
    }
}
