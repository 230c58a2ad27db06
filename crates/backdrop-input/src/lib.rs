//! Raw input capture and decoding for backdrop.
//!
//! This crate owns the OS-facing half of input forwarding: the
//! [`CaptureSession`] that registers for raw input on a hidden host window,
//! the [`RawNotification`] model the host produces for each `WM_INPUT`, and
//! the [`decode`] step that turns a notification into a
//! [`SemanticEvent`](backdrop_types::SemanticEvent).
//!
//! Platform work sits behind the [`CaptureHost`] and [`CursorSource`] traits.
//! The Win32 implementations live in [`windows`]; the `mock` feature provides
//! in-memory backends for tests and simulation.

use backdrop_types::{NativeHandle, Point};

pub mod decoder;
pub mod error;
pub mod notification;
pub mod session;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(windows)]
pub mod windows;

pub use decoder::{classify_key, classify_mouse, decode, KeyTransition, MouseTransition};
pub use error::InputError;
pub use notification::{DeviceClass, RawKeyboardSample, RawMouseSample, RawNotification};
pub use session::CaptureSession;

/// Callback installed on the host window. Invoked serially, once per raw
/// input notification, on the thread pumping the host's message loop.
pub type NotificationHook = Box<dyn FnMut(RawNotification) + Send>;

/// Owns the native endpoint that receives raw input notifications.
///
/// Implementations create a hidden, non-interactive window placed off the
/// visible screen, and route its raw input messages to the installed hook.
pub trait CaptureHost: Send {
    /// Create the host window and install `hook` for its input notifications.
    fn open(&mut self, hook: NotificationHook) -> Result<NativeHandle, InputError>;

    /// Register `class` for background raw input delivered to `target`.
    fn register(&mut self, class: DeviceClass, target: NativeHandle) -> Result<(), InputError>;

    /// Remove the process-wide registration for `class`.
    fn unregister(&mut self, class: DeviceClass) -> Result<(), InputError>;

    /// Tear down the host window. Must tolerate a window that is already gone.
    fn close(&mut self);
}

/// System-wide absolute cursor position.
pub trait CursorSource: Send {
    /// Current cursor position in global coordinates, if it can be queried.
    fn cursor_position(&self) -> Option<Point>;
}
