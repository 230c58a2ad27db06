//! Win32 adapters for the forwarding collaborators.
//!
//! - [`ForegroundDesktop`]: desktop focus from the foreground window class;
//! - [`MonitorLayout`]: `EnumDisplayMonitors` snapshot;
//! - [`PostMessagePoster`]: `PostMessageW`;
//! - [`WindowTitleSurfaces`]: configured wallpapers found by window title.

#![allow(unsafe_code)]

mod focus;
mod monitors;
mod poster;
mod surfaces;

pub use focus::ForegroundDesktop;
pub use monitors::MonitorLayout;
pub use poster::PostMessagePoster;
pub use surfaces::WindowTitleSurfaces;

use windows_sys::Win32::Foundation::RECT;

use backdrop_types::Rect;

fn rect_from_win32(r: &RECT) -> Rect {
    Rect::from_edges(r.left, r.top, r.right, r.bottom)
}

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
