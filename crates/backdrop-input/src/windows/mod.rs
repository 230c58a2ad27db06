//! Win32 capture backend.
//!
//! - [`HiddenWindowHost`]: an invisible tool window parked off-screen that
//!   owns the raw input registrations and receives `WM_INPUT`;
//! - [`SystemCursor`]: `GetCursorPos`;
//! - `raw_input`: `WM_INPUT` payload parsing and device registration.
//!
//! Background delivery relies on `RIDEV_EXINPUTSINK`, which behaves like a
//! global hook without installing one.

#![allow(unsafe_code)]

mod cursor;
mod host;
pub(crate) mod raw_input;

pub use cursor::SystemCursor;
pub use host::{HiddenWindowHost, HostCloser};
