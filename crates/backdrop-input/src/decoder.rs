//! Raw notification → semantic event decoding.
//!
//! Flag words are matched as whole values, the way Raw Input reports one
//! transition per notification. Combinations and unknown values decode to
//! nothing.
//!
//! Several transitions are recognised but deliberately not emitted:
//! - right button: the desktop owns right-click for its context menu;
//! - wheel: forwarding has not been validated against wallpaper runtimes;
//! - key up: forwarded `WM_KEYUP` produced repeated keys in receivers.
//!
//! Cursor positions come from the absolute cursor query at decode time, not
//! from the relative deltas in the sample.

use backdrop_types::{ButtonState, MouseButton, SemanticEvent};
use tracing::trace;

use crate::notification::{key_flags, mouse_flags, RawKeyboardSample, RawMouseSample, RawNotification};
use crate::CursorSource;

/// One wheel detent in `usButtonData` units.
const WHEEL_DELTA: f32 = 120.0;

/// Classified mouse transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseTransition {
    LeftDown,
    LeftUp,
    RightDown,
    RightUp,
    /// Wheel rotation in detents (positive = away from the user).
    Wheel { notches: f32 },
    /// No button transition: plain movement.
    Move,
    Unrecognized(u16),
}

/// Classified keyboard transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTransition {
    Down,
    Up,
    /// E0-prefixed scancode marker.
    ExtendedLeft,
    /// E1-prefixed scancode marker.
    ExtendedRight,
    Unrecognized(u16),
}

#[must_use]
pub fn classify_mouse(sample: &RawMouseSample) -> MouseTransition {
    match sample.button_flags {
        mouse_flags::NONE => MouseTransition::Move,
        mouse_flags::LEFT_BUTTON_DOWN => MouseTransition::LeftDown,
        mouse_flags::LEFT_BUTTON_UP => MouseTransition::LeftUp,
        mouse_flags::RIGHT_BUTTON_DOWN => MouseTransition::RightDown,
        mouse_flags::RIGHT_BUTTON_UP => MouseTransition::RightUp,
        mouse_flags::WHEEL => {
            let delta = i16::from_ne_bytes(sample.button_data.to_ne_bytes());
            MouseTransition::Wheel {
                notches: f32::from(delta) / WHEEL_DELTA,
            }
        }
        other => MouseTransition::Unrecognized(other),
    }
}

#[must_use]
pub fn classify_key(sample: &RawKeyboardSample) -> KeyTransition {
    match sample.flags {
        key_flags::MAKE => KeyTransition::Down,
        key_flags::BREAK => KeyTransition::Up,
        key_flags::E0 => KeyTransition::ExtendedLeft,
        key_flags::E1 => KeyTransition::ExtendedRight,
        other => KeyTransition::Unrecognized(other),
    }
}

/// Decode one notification into at most one semantic event.
///
/// Never blocks; the only side effect is the cursor query, made only for
/// transitions that produce an event.
pub fn decode(notification: &RawNotification, cursor: &dyn CursorSource) -> Option<SemanticEvent> {
    match notification {
        RawNotification::Mouse(sample) => decode_mouse(sample, cursor),
        RawNotification::Keyboard(sample) => decode_key(sample),
        RawNotification::Hid => None,
    }
}

fn decode_mouse(sample: &RawMouseSample, cursor: &dyn CursorSource) -> Option<SemanticEvent> {
    let transition = classify_mouse(sample);
    let (button, state) = match transition {
        MouseTransition::Move => {
            let position = cursor.cursor_position()?;
            return Some(SemanticEvent::MouseMove { position });
        }
        MouseTransition::LeftDown => (MouseButton::Left, ButtonState::Pressed),
        MouseTransition::LeftUp => (MouseButton::Left, ButtonState::Released),
        MouseTransition::RightDown | MouseTransition::RightUp | MouseTransition::Wheel { .. } => {
            trace!(?transition, "mouse transition not forwarded");
            return None;
        }
        MouseTransition::Unrecognized(flags) => {
            trace!(flags, "unrecognized mouse button flags");
            return None;
        }
    };
    let position = cursor.cursor_position()?;
    Some(SemanticEvent::MouseButton {
        button,
        state,
        position,
    })
}

fn decode_key(sample: &RawKeyboardSample) -> Option<SemanticEvent> {
    match classify_key(sample) {
        KeyTransition::Down => Some(SemanticEvent::Key {
            virtual_key: sample.virtual_key,
            state: ButtonState::Pressed,
        }),
        transition => {
            trace!(?transition, vkey = sample.virtual_key, "key transition not forwarded");
            None
        }
    }
}
