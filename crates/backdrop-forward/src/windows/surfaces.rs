use backdrop_types::{NativeHandle, Point, Rect, Surface};
use tracing::debug;
use windows_sys::Win32::Foundation::{HWND, RECT};
use windows_sys::Win32::UI::WindowsAndMessaging::{FindWindowW, GetWindowRect, IsWindow};

use super::{rect_from_win32, wide, MonitorLayout};
use crate::config::SurfaceConfig;
use crate::{DisplaySource, SurfaceRegistry};

/// Configured wallpapers resolved to live windows on every snapshot.
///
/// A surface is found by its fixed handle when one is configured, otherwise
/// by exact window title. Its display is the monitor named in the
/// configuration, or the monitor under the window's centre when no monitor
/// has that name. Windows that cannot be found are skipped.
#[derive(Debug, Clone)]
pub struct WindowTitleSurfaces {
    configured: Vec<SurfaceConfig>,
    monitors: MonitorLayout,
}

impl WindowTitleSurfaces {
    pub fn new(configured: Vec<SurfaceConfig>) -> Self {
        Self {
            configured,
            monitors: MonitorLayout,
        }
    }

    fn resolve(&self, config: &SurfaceConfig) -> Option<(NativeHandle, Rect)> {
        // SAFETY: FindWindowW reads a NUL-terminated buffer that outlives the
        // call; IsWindow and GetWindowRect tolerate stale handles.
        unsafe {
            let hwnd: HWND = match (config.handle, &config.window_title) {
                (Some(handle), _) => handle as HWND,
                (None, Some(title)) => {
                    let title = wide(title);
                    FindWindowW(core::ptr::null(), title.as_ptr())
                }
                (None, None) => return None,
            };
            if hwnd.is_null() || IsWindow(hwnd) == 0 {
                return None;
            }
            let mut rect = RECT {
                left: 0,
                top: 0,
                right: 0,
                bottom: 0,
            };
            if GetWindowRect(hwnd, &mut rect) == 0 {
                return None;
            }
            Some((NativeHandle(hwnd as isize), rect_from_win32(&rect)))
        }
    }
}

impl SurfaceRegistry for WindowTitleSurfaces {
    fn surfaces(&self) -> Vec<Surface> {
        let layout = match self.monitors.layout() {
            Ok(layout) => layout,
            Err(e) => {
                debug!(error = %e, "monitor layout unavailable; no surfaces");
                return Vec::new();
            }
        };
        self.configured
            .iter()
            .filter_map(|config| {
                let Some((handle, bounds)) = self.resolve(config) else {
                    debug!(surface = %config.name, "wallpaper window not found");
                    return None;
                };
                let centre = Point::new(
                    bounds.x.saturating_add_unsigned(bounds.width / 2),
                    bounds.y.saturating_add_unsigned(bounds.height / 2),
                );
                let display = layout
                    .by_name(&config.display)
                    .or_else(|| layout.display_at(centre))?
                    .clone();
                Some(Surface {
                    handle,
                    display,
                    kind: config.kind,
                    bounds,
                })
            })
            .collect()
    }
}
