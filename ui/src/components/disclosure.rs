//! Open/closed state shared by dropdown menus and the sidebar.

/// Events that drive a [`Disclosure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureEvent {
    /// The trigger was activated (click, Enter or Space).
    Trigger,
    /// A click landed outside the component, or it lost focus.
    OutsideInteraction,
    /// Esc was pressed.
    Dismiss,
    /// An entry of the open menu was chosen.
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn is_open(&self) -> bool {
        matches!(self, Disclosure::Open)
    }

    /// Next state after `event`. Only a trigger can open; everything else closes.
    pub fn apply(self, event: DisclosureEvent) -> Disclosure {
        match (self, event) {
            (Disclosure::Closed, DisclosureEvent::Trigger) => Disclosure::Open,
            (Disclosure::Open, DisclosureEvent::Trigger) => Disclosure::Closed,
            (
                _,
                DisclosureEvent::OutsideInteraction | DisclosureEvent::Dismiss | DisclosureEvent::Select,
            ) => Disclosure::Closed,
        }
    }
}
