//! Wallpaper surface descriptors.
//!
//! Surfaces are owned by the wallpaper engine; backdrop only reads them.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::screen::Display;

/// A native window handle stored as an integer so it can cross threads.
///
/// On Windows this is an `HWND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeHandle(pub isize);

impl std::fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// What renders a wallpaper surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    /// An external application window.
    Application,
    Web,
    WebAudio,
    /// A remote page loaded by URL.
    Url,
    /// A console emulator.
    Emulator,
    Unity,
    UnityAudio,
    Godot,
    Video,
    Gif,
    VideoStream,
    Picture,
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 12] = [
        Self::Application,
        Self::Web,
        Self::WebAudio,
        Self::Url,
        Self::Emulator,
        Self::Unity,
        Self::UnityAudio,
        Self::Godot,
        Self::Video,
        Self::Gif,
        Self::VideoStream,
        Self::Picture,
    ];
}

/// One live wallpaper window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    /// Window that receives posted messages.
    pub handle: NativeHandle,
    /// Display the wallpaper is assigned to.
    pub display: Display,
    pub kind: SurfaceKind,
    /// Window bounds in global coordinates.
    pub bounds: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_handle_formats_as_hex() {
        assert_eq!(NativeHandle(0x2a).to_string(), "0x2a");
    }

    #[test]
    fn kinds_parse_from_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            kinds: Vec<SurfaceKind>,
        }
        let w: Wrapper =
            toml::from_str(r#"kinds = ["web_audio", "video_stream", "unity_audio", "application"]"#)
                .unwrap();
        assert_eq!(
            w.kinds,
            vec![
                SurfaceKind::WebAudio,
                SurfaceKind::VideoStream,
                SurfaceKind::UnityAudio,
                SurfaceKind::Application,
            ]
        );
    }
}
