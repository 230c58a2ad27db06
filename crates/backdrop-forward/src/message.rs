//! Window messages posted to wallpaper surfaces.
//!
//! Codes and parameter layouts follow the Win32 mouse and keyboard message
//! conventions bit for bit; receiving wallpapers are ordinary windows
//! (browsers, game engines, third-party apps) that decode them natively.

use backdrop_types::{ButtonState, MouseButton, Point, SemanticEvent};

use crate::error::ForwardError;

pub const WM_KEYDOWN: u32 = 0x0100;
pub const WM_KEYUP: u32 = 0x0101;
pub const WM_MOUSEMOVE: u32 = 0x0200;
pub const WM_LBUTTONDOWN: u32 = 0x0201;
pub const WM_LBUTTONUP: u32 = 0x0202;
pub const WM_RBUTTONDOWN: u32 = 0x0204;
pub const WM_RBUTTONUP: u32 = 0x0205;

/// `MK_LBUTTON`, sent with both left-button messages.
pub const MK_LBUTTON: usize = 0x0001;
/// `MK_RBUTTON`, sent with both right-button messages.
pub const MK_RBUTTON: usize = 0x0002;
/// wParam sent with `WM_MOUSEMOVE`.
pub const MOUSEMOVE_WPARAM: usize = 0x0020;

/// A message ready for `PostMessageW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMessage {
    pub code: u32,
    pub wparam: usize,
    pub lparam: isize,
}

impl WindowMessage {
    /// Build the message for `event`, with `local` as the surface-local
    /// cursor position for mouse events.
    pub fn for_event(event: &SemanticEvent, local: Point) -> Result<Self, ForwardError> {
        match *event {
            SemanticEvent::MouseMove { .. } => Ok(Self {
                code: WM_MOUSEMOVE,
                wparam: MOUSEMOVE_WPARAM,
                lparam: mouse_lparam(local)?,
            }),
            SemanticEvent::MouseButton { button, state, .. } => {
                let (code, wparam) = match (button, state) {
                    (MouseButton::Left, ButtonState::Pressed) => (WM_LBUTTONDOWN, MK_LBUTTON),
                    (MouseButton::Left, ButtonState::Released) => (WM_LBUTTONUP, MK_LBUTTON),
                    (MouseButton::Right, ButtonState::Pressed) => (WM_RBUTTONDOWN, MK_RBUTTON),
                    (MouseButton::Right, ButtonState::Released) => (WM_RBUTTONUP, MK_RBUTTON),
                };
                Ok(Self {
                    code,
                    wparam,
                    lparam: mouse_lparam(local)?,
                })
            }
            SemanticEvent::Key { virtual_key, state } => Ok(Self {
                code: match state {
                    ButtonState::Pressed => WM_KEYDOWN,
                    ButtonState::Released => WM_KEYUP,
                },
                wparam: usize::from(virtual_key),
                lparam: 0,
            }),
        }
    }
}

/// Pack a client position as the mouse-message lParam: x in the low word,
/// y in the high word.
pub fn mouse_lparam(p: Point) -> Result<isize, ForwardError> {
    let x = u16::try_from(p.x).map_err(|_| ForwardError::CoordinateOutOfRange(p))?;
    let y = u16::try_from(p.y).map_err(|_| ForwardError::CoordinateOutOfRange(p))?;
    let packed = (u32::from(y) << 16) | u32::from(x);
    Ok(packed as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lparam_packs_y_high_x_low() {
        assert_eq!(mouse_lparam(Point::new(80, 50)).unwrap(), (50 << 16) | 80);
        assert_eq!(mouse_lparam(Point::new(0, 0)).unwrap(), 0);
        assert_eq!(
            mouse_lparam(Point::new(65535, 65535)).unwrap(),
            0xFFFF_FFFFu32 as isize
        );
    }

    #[test]
    fn lparam_rejects_out_of_range() {
        assert!(matches!(
            mouse_lparam(Point::new(-1, 10)),
            Err(ForwardError::CoordinateOutOfRange(_))
        ));
        assert!(mouse_lparam(Point::new(10, 65536)).is_err());
    }

    #[test]
    fn mouse_messages() {
        let at = Point::new(2000, 50);
        let local = Point::new(80, 50);
        let mv = WindowMessage::for_event(&SemanticEvent::MouseMove { position: at }, local).unwrap();
        assert_eq!(mv.code, WM_MOUSEMOVE);
        assert_eq!(mv.wparam, 0x0020);
        assert_eq!(mv.lparam, 0x0032_0050);

        let down = WindowMessage::for_event(
            &SemanticEvent::MouseButton {
                button: MouseButton::Left,
                state: ButtonState::Pressed,
                position: at,
            },
            local,
        )
        .unwrap();
        assert_eq!((down.code, down.wparam), (0x0201, 0x0001));

        let up = WindowMessage::for_event(
            &SemanticEvent::MouseButton {
                button: MouseButton::Left,
                state: ButtonState::Released,
                position: at,
            },
            local,
        )
        .unwrap();
        assert_eq!((up.code, up.wparam), (0x0202, 0x0001));
    }

    #[test]
    fn key_message_carries_virtual_key_only() {
        let msg = WindowMessage::for_event(
            &SemanticEvent::Key {
                virtual_key: 0x41,
                state: ButtonState::Pressed,
            },
            Point::new(-5, -5),
        )
        .unwrap();
        assert_eq!(
            msg,
            WindowMessage {
                code: WM_KEYDOWN,
                wparam: 0x41,
                lparam: 0,
            }
        );
    }
}
