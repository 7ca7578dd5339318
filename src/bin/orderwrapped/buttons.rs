//! Clickable button registry.
//!
//! The renderer registers each button's screen region every frame; taps are
//! resolved against the registry. Buttons that are disabled (navigation at a
//! boundary) are simply never registered, so clicks on them are inert.

use orderwrapped::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonAction {
    Previous,
    Next,
    TogglePlay,
}

impl ButtonAction {
    pub(crate) fn to_command(self) -> Command {
        match self {
            ButtonAction::Previous => Command::Previous,
            ButtonAction::Next => Command::Next,
            ButtonAction::TogglePlay => Command::TogglePlay,
        }
    }
}

/// A clickable region; x range inclusive, single row.
#[derive(Debug, Clone, Copy)]
struct Button {
    start_x: u16,
    end_x: u16,
    y: u16,
    action: ButtonAction,
}

/// Registry of the current frame's clickable regions. Lives on the event
/// loop thread only.
#[derive(Debug, Default)]
pub(crate) struct ButtonRegistry {
    buttons: Vec<Button>,
}

impl ButtonRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn clear(&mut self) {
        self.buttons.clear();
    }

    pub(crate) fn register(&mut self, start_x: u16, end_x: u16, y: u16, action: ButtonAction) {
        self.buttons.push(Button {
            start_x,
            end_x,
            y,
            action,
        });
    }

    /// Resolve a tap to a button action, if any region contains it.
    pub(crate) fn hit(&self, x: u16, y: u16) -> Option<ButtonAction> {
        self.buttons
            .iter()
            .find(|button| button.y == y && x >= button.start_x && x <= button.end_x)
            .map(|button| button.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_testing_respects_bounds() {
        let mut registry = ButtonRegistry::new();
        registry.register(10, 17, 22, ButtonAction::Previous);
        registry.register(20, 27, 22, ButtonAction::Next);
        assert_eq!(registry.hit(10, 22), Some(ButtonAction::Previous));
        assert_eq!(registry.hit(17, 22), Some(ButtonAction::Previous));
        assert_eq!(registry.hit(18, 22), None);
        assert_eq!(registry.hit(25, 22), Some(ButtonAction::Next));
        assert_eq!(registry.hit(25, 21), None);
    }

    #[test]
    fn cleared_registry_hits_nothing() {
        let mut registry = ButtonRegistry::new();
        registry.register(0, 5, 0, ButtonAction::TogglePlay);
        registry.clear();
        assert_eq!(registry.hit(3, 0), None);
    }
}
