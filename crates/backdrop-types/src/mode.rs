//! Capture and arrangement modes.

use serde::{Deserialize, Serialize};

/// Which device classes a capture session listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    /// No raw input registration; the host window still exists.
    Off,
    #[default]
    Mouse,
    MouseKeyboard,
}

impl std::fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Mouse => write!(f, "mouse"),
            Self::MouseKeyboard => write!(f, "mouse+keyboard"),
        }
    }
}

/// How wallpapers are laid out across monitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrangementMode {
    /// One wallpaper per display.
    #[default]
    PerDisplay,
    /// The same wallpaper cloned onto every display.
    Duplicate,
    /// A single wallpaper stretched across the whole virtual screen.
    Span,
}

impl ArrangementMode {
    #[must_use]
    pub fn is_span(self) -> bool {
        self == Self::Span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        capture: CaptureMode,
        arrangement: ArrangementMode,
    }

    #[test]
    fn modes_parse_from_snake_case() {
        let w: Wrapper = toml::from_str(
            r#"
capture = "mouse_keyboard"
arrangement = "span"
"#,
        )
        .unwrap();
        assert_eq!(w.capture, CaptureMode::MouseKeyboard);
        assert!(w.arrangement.is_span());
    }

    #[test]
    fn defaults() {
        assert_eq!(CaptureMode::default(), CaptureMode::Mouse);
        assert_eq!(ArrangementMode::default(), ArrangementMode::PerDisplay);
        assert!(!ArrangementMode::Duplicate.is_span());
    }
}
