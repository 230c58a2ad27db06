use backdrop_types::{Display, ScreenLayout};
use windows_sys::Win32::Foundation::{BOOL, LPARAM, RECT};
use windows_sys::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO, MONITORINFOEXW,
};

use super::rect_from_win32;
use crate::error::ForwardError;
use crate::DisplaySource;

/// Live monitor layout. Displays are named by device (`\\.\DISPLAY1`).
#[derive(Debug, Clone, Copy, Default)]
pub struct MonitorLayout;

impl DisplaySource for MonitorLayout {
    fn layout(&self) -> Result<ScreenLayout, ForwardError> {
        let mut displays: Vec<Display> = Vec::new();
        // SAFETY: the callback only runs during this call, while `displays`
        // is alive and exclusively borrowed through `dwdata`.
        let ok = unsafe {
            EnumDisplayMonitors(
                core::ptr::null_mut(),
                core::ptr::null(),
                Some(collect_monitor),
                &mut displays as *mut Vec<Display> as LPARAM,
            )
        };
        if ok == 0 {
            return Err(ForwardError::Layout(format!(
                "EnumDisplayMonitors failed: {}",
                std::io::Error::last_os_error()
            )));
        }
        if displays.is_empty() {
            return Err(ForwardError::Layout("no monitors attached".to_string()));
        }
        Ok(ScreenLayout::new(displays))
    }
}

unsafe extern "system" fn collect_monitor(
    monitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    data: LPARAM,
) -> BOOL {
    let displays = &mut *(data as *mut Vec<Display>);
    let mut info: MONITORINFOEXW = core::mem::zeroed();
    info.monitorInfo.cbSize = core::mem::size_of::<MONITORINFOEXW>() as u32;
    if GetMonitorInfoW(monitor, (&mut info as *mut MONITORINFOEXW).cast::<MONITORINFO>()) != 0 {
        let len = info
            .szDevice
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(info.szDevice.len());
        displays.push(Display::new(
            String::from_utf16_lossy(&info.szDevice[..len]),
            rect_from_win32(&info.monitorInfo.rcMonitor),
        ));
    }
    // Keep enumerating.
    1
}
