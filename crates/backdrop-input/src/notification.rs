//! Typed raw input notifications.
//!
//! The host decodes each `WM_INPUT` payload once, at the OS boundary, into a
//! [`RawNotification`] carrying only the fields the decoder needs.

/// `RAWMOUSE::usButtonFlags` values.
pub mod mouse_flags {
    pub const NONE: u16 = 0x0000;
    pub const LEFT_BUTTON_DOWN: u16 = 0x0001;
    pub const LEFT_BUTTON_UP: u16 = 0x0002;
    pub const RIGHT_BUTTON_DOWN: u16 = 0x0004;
    pub const RIGHT_BUTTON_UP: u16 = 0x0008;
    pub const WHEEL: u16 = 0x0400;
}

/// `RAWKEYBOARD::Flags` values.
pub mod key_flags {
    pub const MAKE: u16 = 0x0000;
    pub const BREAK: u16 = 0x0001;
    pub const E0: u16 = 0x0002;
    pub const E1: u16 = 0x0004;
}

/// HID usage page for generic desktop controls.
pub const HID_USAGE_PAGE_GENERIC: u16 = 0x01;

/// A raw input device class that can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mouse,
    Keyboard,
}

impl DeviceClass {
    /// HID usage within [`HID_USAGE_PAGE_GENERIC`].
    #[must_use]
    pub fn usage(self) -> u16 {
        match self {
            Self::Mouse => 0x02,
            Self::Keyboard => 0x06,
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mouse => write!(f, "mouse"),
            Self::Keyboard => write!(f, "keyboard"),
        }
    }
}

/// Mouse payload of a raw input notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawMouseSample {
    /// `usButtonFlags` bitfield.
    pub button_flags: u16,
    /// `usButtonData`; the signed wheel delta when a wheel flag is set.
    pub button_data: u16,
    /// Relative motion. Carried for completeness; positions come from the
    /// absolute cursor query instead.
    pub last_x: i32,
    pub last_y: i32,
}

impl RawMouseSample {
    #[must_use]
    pub fn buttons(button_flags: u16) -> Self {
        Self {
            button_flags,
            ..Self::default()
        }
    }
}

/// Keyboard payload of a raw input notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawKeyboardSample {
    pub virtual_key: u16,
    pub make_code: u16,
    /// `RAWKEYBOARD::Flags`.
    pub flags: u16,
}

/// One decoded-at-the-boundary raw input notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawNotification {
    Mouse(RawMouseSample),
    Keyboard(RawKeyboardSample),
    /// Any other HID device. Never forwarded.
    Hid,
}
