//! Configuration loaded from TOML.

use std::collections::HashSet;

use backdrop_types::{
    ArrangementMode, CaptureMode, Display, NativeHandle, Rect, ScreenLayout, Surface, SurfaceKind,
};
use serde::{Deserialize, Serialize};

use crate::error::ForwardError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub forwarding: ForwardingConfig,
    /// Static display layout. Live mode enumerates monitors instead.
    #[serde(default)]
    pub displays: Vec<DisplayConfig>,
    #[serde(default)]
    pub surfaces: Vec<SurfaceConfig>,
}

/// Process-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Raw input capture settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureConfig {
    #[serde(default)]
    pub mode: CaptureMode,
}

/// Forwarding settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForwardingConfig {
    #[serde(default)]
    pub arrangement: ArrangementMode,
    /// Keep forwarding cursor movement while another application has focus.
    #[serde(default)]
    pub always_forward_mouse_move: bool,
}

/// A display in a static layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub name: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl DisplayConfig {
    pub fn to_display(&self) -> Display {
        Display::new(
            self.name.clone(),
            Rect::new(self.x, self.y, self.width, self.height),
        )
    }
}

/// A wallpaper surface to forward to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub name: String,
    pub kind: SurfaceKind,
    /// Name of the display the wallpaper is assigned to.
    pub display: String,
    /// Window title used to find the surface at runtime.
    #[serde(default)]
    pub window_title: Option<String>,
    /// Fixed native handle, used by simulations.
    #[serde(default)]
    pub handle: Option<isize>,
}

impl Config {
    /// The static display layout.
    pub fn screen_layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.displays.iter().map(DisplayConfig::to_display).collect())
    }

    /// Surfaces with a fixed handle, resolved against the static layout.
    pub fn static_surfaces(&self) -> Result<Vec<Surface>, ForwardError> {
        let layout = self.screen_layout();
        self.surfaces
            .iter()
            .filter_map(|s| s.handle.map(|h| (s, h)))
            .map(|(s, handle)| {
                let display = layout.by_name(&s.display).cloned().ok_or_else(|| {
                    ForwardError::Config(format!(
                        "surface {:?} references unknown display {:?}",
                        s.name, s.display
                    ))
                })?;
                Ok(Surface {
                    handle: NativeHandle(handle),
                    bounds: display.bounds,
                    display,
                    kind: s.kind,
                })
            })
            .collect()
    }

    /// Check internal consistency.
    ///
    /// Surface display names are only checked against the static layout when
    /// one is configured; live monitor names are resolved at runtime.
    pub fn validate(&self) -> Result<(), ForwardError> {
        let mut names = HashSet::new();
        for d in &self.displays {
            if !names.insert(d.name.as_str()) {
                return Err(ForwardError::Config(format!(
                    "duplicate display name {:?}",
                    d.name
                )));
            }
            if d.width == 0 || d.height == 0 {
                return Err(ForwardError::Config(format!(
                    "display {:?} has zero size",
                    d.name
                )));
            }
        }

        for s in &self.surfaces {
            if s.window_title.is_none() && s.handle.is_none() {
                return Err(ForwardError::Config(format!(
                    "surface {:?} needs a window_title or a handle",
                    s.name
                )));
            }
            if !self.displays.is_empty() && !names.contains(s.display.as_str()) {
                return Err(ForwardError::Config(format!(
                    "surface {:?} references unknown display {:?}",
                    s.name, s.display
                )));
            }
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"
[general]
log_level = "debug"

[capture]
mode = "mouse_keyboard"

[forwarding]
arrangement = "span"
always_forward_mouse_move = true

[[displays]]
name = "left"
width = 1920
height = 1080

[[displays]]
name = "right"
x = 1920
width = 1920
height = 1080

[[surfaces]]
name = "clock"
kind = "web"
display = "right"
handle = 4242

[[surfaces]]
name = "game"
kind = "godot"
display = "left"
window_title = "Godot Wallpaper"
"#;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("log_level = \"info\""));
        assert!(toml_str.contains("mode = \"mouse\""));
        assert!(toml_str.contains("arrangement = \"per_display\""));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.capture.mode, CaptureMode::Mouse);
        assert_eq!(config.forwarding.arrangement, ArrangementMode::PerDisplay);
        assert!(!config.forwarding.always_forward_mouse_move);
        assert!(config.surfaces.is_empty());
        config.validate().unwrap();
    }

    #[test]
    fn parse_example_config() {
        let config: Config = toml::from_str(EXAMPLE).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.capture.mode, CaptureMode::MouseKeyboard);
        assert!(config.forwarding.arrangement.is_span());
        assert!(config.forwarding.always_forward_mouse_move);
        assert_eq!(config.displays.len(), 2);
        assert_eq!(config.surfaces[1].kind, SurfaceKind::Godot);
        config.validate().unwrap();
    }

    #[test]
    fn static_surfaces_skip_title_lookups() {
        let config: Config = toml::from_str(EXAMPLE).unwrap();
        let surfaces = config.static_surfaces().unwrap();
        assert_eq!(surfaces.len(), 1);
        assert_eq!(surfaces[0].handle, NativeHandle(4242));
        assert_eq!(surfaces[0].display.name, "right");
        assert_eq!(surfaces[0].bounds, Rect::new(1920, 0, 1920, 1080));
    }

    #[test]
    fn validate_rejects_unknown_display() {
        let mut config: Config = toml::from_str(EXAMPLE).unwrap();
        config.surfaces[0].display = "middle".to_string();
        assert!(matches!(config.validate(), Err(ForwardError::Config(_))));
        assert!(config.static_surfaces().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_display_names() {
        let mut config: Config = toml::from_str(EXAMPLE).unwrap();
        config.displays[1].name = "left".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_requires_a_lookup() {
        let mut config: Config = toml::from_str(EXAMPLE).unwrap();
        config.surfaces[1].window_title = None;
        assert!(config.validate().is_err());
    }
}
