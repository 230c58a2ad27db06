use backdrop_types::Point;
use windows_sys::Win32::Foundation::POINT;
use windows_sys::Win32::UI::WindowsAndMessaging::GetCursorPos;

use crate::CursorSource;

/// System-wide cursor position via `GetCursorPos`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCursor;

impl CursorSource for SystemCursor {
    fn cursor_position(&self) -> Option<Point> {
        let mut pt = POINT { x: 0, y: 0 };
        // SAFETY: `pt` is a valid, writable POINT.
        let ok = unsafe { GetCursorPos(&mut pt) };
        (ok != 0).then(|| Point::new(pt.x, pt.y))
    }
}
