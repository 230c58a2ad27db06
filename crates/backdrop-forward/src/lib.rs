//! Input forwarding to wallpaper surfaces.
//!
//! Implements the policy that decides which wallpapers may receive input,
//! the multi-monitor coordinate transform, and the [`Dispatcher`] that fans
//! each captured event out to the matching surfaces as posted window
//! messages.
//!
//! Everything the wallpaper engine owns is consumed through the traits
//! below. The Win32 implementations live in `windows`; the `mock` feature
//! provides in-memory doubles.

use backdrop_types::{NativeHandle, ScreenLayout, Surface};

pub mod cache;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod message;
pub mod normalize;
pub mod policy;
pub mod setup;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(windows)]
pub mod windows;

pub use cache::CachedSurfaces;
pub use config::Config;
pub use dispatcher::{Collaborators, Dispatcher};
pub use error::ForwardError;
pub use message::WindowMessage;
pub use policy::ForwardingPolicy;

/// Read-only view of the wallpaper engine's live surfaces.
pub trait SurfaceRegistry: Send {
    /// Snapshot of the current surfaces, in engine order.
    fn surfaces(&self) -> Vec<Surface>;
}

/// Monitor enumeration.
pub trait DisplaySource: Send {
    fn layout(&self) -> Result<ScreenLayout, ForwardError>;
}

/// Whether the desktop, rather than a foreground application, has focus.
pub trait DesktopFocus: Send {
    fn is_desktop_focused(&self) -> bool;
}

/// Fire-and-forget delivery of a window message.
pub trait MessagePoster: Send {
    /// Queue `message` for `target` without waiting for it to be handled.
    fn post(&self, target: NativeHandle, message: WindowMessage) -> Result<(), ForwardError>;
}
