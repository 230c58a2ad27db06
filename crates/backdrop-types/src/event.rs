//! Semantic input events.
//!
//! These are what the raw input decoder produces from an OS notification and
//! what the dispatcher fans out to wallpaper surfaces. They live for a single
//! notification and carry no identity.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A decoded input event with the payload needed for forwarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemanticEvent {
    /// Mouse button transition at an absolute global position.
    MouseButton {
        button: MouseButton,
        state: ButtonState,
        position: Point,
    },

    /// Cursor movement, reported as the absolute global position.
    MouseMove { position: Point },

    /// Keyboard transition. `virtual_key` is the Win32 virtual-key code.
    Key { virtual_key: u16, state: ButtonState },
}

impl SemanticEvent {
    /// Global cursor position carried by mouse events; keyboard events have none.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::MouseButton { position, .. } | Self::MouseMove { position } => Some(*position),
            Self::Key { .. } => None,
        }
    }

    #[must_use]
    pub fn is_mouse_move(&self) -> bool {
        matches!(self, Self::MouseMove { .. })
    }
}

/// Button/key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_only_for_mouse_events() {
        let click = SemanticEvent::MouseButton {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
            position: Point::new(3, 4),
        };
        let key = SemanticEvent::Key {
            virtual_key: 0x41,
            state: ButtonState::Pressed,
        };
        assert_eq!(click.position(), Some(Point::new(3, 4)));
        assert_eq!(key.position(), None);
        assert!(!key.is_mouse_move());
        assert!(!click.is_mouse_move());
    }
}
