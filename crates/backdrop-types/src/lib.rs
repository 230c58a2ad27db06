//! Shared types for backdrop.
//!
//! This crate contains the types shared across the backdrop workspace:
//! screen geometry, display layouts, semantic input events, wallpaper
//! surfaces, and the capture/arrangement modes read from configuration.

pub mod event;
pub mod geometry;
pub mod mode;
pub mod screen;
pub mod surface;

pub use event::{ButtonState, MouseButton, SemanticEvent};
pub use geometry::{Point, Rect};
pub use mode::{ArrangementMode, CaptureMode};
pub use screen::{Display, ScreenLayout};
pub use surface::{NativeHandle, Surface, SurfaceKind};
