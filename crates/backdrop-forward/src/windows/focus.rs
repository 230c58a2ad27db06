use windows_sys::Win32::UI::WindowsAndMessaging::{GetClassNameW, GetForegroundWindow};

use crate::DesktopFocus;

/// Window classes of the shell desktop.
const DESKTOP_CLASSES: [&str; 2] = ["Progman", "WorkerW"];

/// The desktop is focused when the foreground window is the shell's
/// `Progman` or one of its `WorkerW` children.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForegroundDesktop;

impl DesktopFocus for ForegroundDesktop {
    fn is_desktop_focused(&self) -> bool {
        let mut buf = [0u16; 64];
        // SAFETY: GetForegroundWindow has no preconditions; GetClassNameW
        // writes at most `buf.len()` units and tolerates a null window.
        let len = unsafe {
            let hwnd = GetForegroundWindow();
            if hwnd.is_null() {
                return false;
            }
            GetClassNameW(hwnd, buf.as_mut_ptr(), buf.len() as i32)
        };
        let Ok(len) = usize::try_from(len) else {
            return false;
        };
        let class = String::from_utf16_lossy(&buf[..len]);
        DESKTOP_CLASSES.contains(&class.as_str())
    }
}
