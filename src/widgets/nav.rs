//! Mobile navigation state machine.
//!
//! The embedded runtime script mirrors these transitions in the browser;
//! this is the canonical definition.

/// Hamburger menu state. Pages start closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Interactions that drive the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Hamburger button click: flip.
    ToggleClick,
    /// Navigating via a menu link: close.
    LinkClick,
    /// Click anywhere outside the menu: close.
    OutsideClick,
}

impl MenuState {
    pub fn on(self, event: NavEvent) -> Self {
        match event {
            NavEvent::ToggleClick => match self {
                Self::Closed => Self::Open,
                Self::Open => Self::Closed,
            },
            NavEvent::LinkClick | NavEvent::OutsideClick => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}
