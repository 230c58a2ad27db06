//! Which events may reach which wallpapers.

use backdrop_types::{SemanticEvent, SurfaceKind};

/// Whether a surface kind can receive synthetic input at all.
///
/// Interactive runtimes (applications, browsers, engines, emulators) take
/// input; passive media players do not.
#[must_use]
pub fn accepts_input(kind: SurfaceKind) -> bool {
    match kind {
        SurfaceKind::Application
        | SurfaceKind::Web
        | SurfaceKind::WebAudio
        | SurfaceKind::Url
        | SurfaceKind::Emulator
        | SurfaceKind::Unity
        | SurfaceKind::UnityAudio
        | SurfaceKind::Godot => true,
        SurfaceKind::Video | SurfaceKind::Gif | SurfaceKind::VideoStream | SurfaceKind::Picture => {
            false
        }
    }
}

/// Focus gating for forwarded input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardingPolicy {
    /// Forward cursor movement even while an application has focus.
    pub always_forward_mouse_move: bool,
}

impl ForwardingPolicy {
    pub fn new(always_forward_mouse_move: bool) -> Self {
        Self {
            always_forward_mouse_move,
        }
    }

    /// Global gate, evaluated before any surface is considered.
    ///
    /// With the desktop focused everything passes. Otherwise keys and clicks
    /// are always held back, and movement passes only when
    /// `always_forward_mouse_move` is set.
    #[must_use]
    pub fn permits(&self, event: &SemanticEvent, desktop_focused: bool) -> bool {
        if desktop_focused {
            return true;
        }
        event.is_mouse_move() && self.always_forward_mouse_move
    }
}

#[cfg(test)]
mod tests {
    use backdrop_types::{ButtonState, MouseButton, Point};

    use super::*;

    const PASSIVE: [SurfaceKind; 4] = [
        SurfaceKind::Video,
        SurfaceKind::Gif,
        SurfaceKind::VideoStream,
        SurfaceKind::Picture,
    ];

    fn mouse_move() -> SemanticEvent {
        SemanticEvent::MouseMove {
            position: Point::new(1, 1),
        }
    }

    fn left_down() -> SemanticEvent {
        SemanticEvent::MouseButton {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
            position: Point::new(1, 1),
        }
    }

    fn key_down() -> SemanticEvent {
        SemanticEvent::Key {
            virtual_key: 0x20,
            state: ButtonState::Pressed,
        }
    }

    #[test]
    fn passive_kinds_never_accept_input() {
        for kind in SurfaceKind::ALL {
            assert_eq!(accepts_input(kind), !PASSIVE.contains(&kind), "{kind:?}");
        }
    }

    #[test]
    fn desktop_focus_admits_everything() {
        let policy = ForwardingPolicy::new(false);
        for event in [mouse_move(), left_down(), key_down()] {
            assert!(policy.permits(&event, true));
        }
    }

    #[test]
    fn buttons_and_keys_never_bypass_focus() {
        for flag in [false, true] {
            let policy = ForwardingPolicy::new(flag);
            assert!(!policy.permits(&left_down(), false));
            assert!(!policy.permits(&key_down(), false));
        }
    }

    #[test]
    fn mouse_move_bypasses_focus_only_with_flag() {
        assert!(ForwardingPolicy::new(true).permits(&mouse_move(), false));
        assert!(!ForwardingPolicy::new(false).permits(&mouse_move(), false));
    }
}
