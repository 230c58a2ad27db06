//! `WM_INPUT` parsing and raw input device registration.
//!
//! Parsing copies the `GetRawInputData` payload into a buffer and reads the
//! header and device struct unaligned, then keeps only the fields
//! [`RawNotification`] carries.

use core::ffi::c_void;

use backdrop_types::NativeHandle;
use windows_sys::Win32::Foundation::HWND;
use windows_sys::Win32::UI::Input::{
    GetRawInputData, RegisterRawInputDevices, RAWINPUTDEVICE, RAWINPUTHEADER, RAWKEYBOARD,
    RAWMOUSE, RIDEV_EXINPUTSINK, RIDEV_REMOVE, RID_INPUT, RIM_TYPEKEYBOARD, RIM_TYPEMOUSE,
};

use crate::error::InputError;
use crate::notification::{
    DeviceClass, RawKeyboardSample, RawMouseSample, RawNotification, HID_USAGE_PAGE_GENERIC,
};

/// Read the raw input payload referenced by a `WM_INPUT` lparam.
pub(crate) fn read_wm_input(lparam: isize) -> Option<RawNotification> {
    let header_size = core::mem::size_of::<RAWINPUTHEADER>() as u32;
    // SAFETY: lparam is the HRAWINPUT of the WM_INPUT being processed; the
    // first call only queries the size, the second writes at most `size`
    // bytes into a buffer of that length.
    unsafe {
        let mut size: u32 = 0;
        let r0 = GetRawInputData(
            lparam as _,
            RID_INPUT,
            core::ptr::null_mut(),
            &mut size,
            header_size,
        );
        if r0 == u32::MAX || size == 0 {
            return None;
        }

        let mut buf = vec![0u8; size as usize];
        let r1 = GetRawInputData(
            lparam as _,
            RID_INPUT,
            buf.as_mut_ptr().cast::<c_void>(),
            &mut size,
            header_size,
        );
        if r1 == u32::MAX {
            return None;
        }

        read_raw_input_bytes(&buf)
    }
}

/// Parse a `RID_INPUT` payload copied out during `WM_INPUT`.
pub(crate) fn read_raw_input_bytes(buf: &[u8]) -> Option<RawNotification> {
    let hdr_sz = core::mem::size_of::<RAWINPUTHEADER>();
    if buf.len() < hdr_sz {
        return None;
    }

    // SAFETY: every read is preceded by a length check against the struct size.
    unsafe {
        let hdr: RAWINPUTHEADER = core::ptr::read_unaligned(buf.as_ptr().cast::<RAWINPUTHEADER>());
        let data_ptr = buf.as_ptr().add(hdr_sz);

        match hdr.dwType {
            RIM_TYPEMOUSE => {
                if buf.len() < hdr_sz + core::mem::size_of::<RAWMOUSE>() {
                    return None;
                }
                let m: RAWMOUSE = core::ptr::read_unaligned(data_ptr.cast::<RAWMOUSE>());
                Some(RawNotification::Mouse(RawMouseSample {
                    button_flags: m.Anonymous.Anonymous.usButtonFlags,
                    button_data: m.Anonymous.Anonymous.usButtonData,
                    last_x: m.lLastX,
                    last_y: m.lLastY,
                }))
            }
            RIM_TYPEKEYBOARD => {
                if buf.len() < hdr_sz + core::mem::size_of::<RAWKEYBOARD>() {
                    return None;
                }
                let k: RAWKEYBOARD = core::ptr::read_unaligned(data_ptr.cast::<RAWKEYBOARD>());
                Some(RawNotification::Keyboard(RawKeyboardSample {
                    virtual_key: k.VKey,
                    make_code: k.MakeCode,
                    flags: k.Flags,
                }))
            }
            _ => Some(RawNotification::Hid),
        }
    }
}

/// Register `class` for background delivery to `target`.
pub(crate) fn register(class: DeviceClass, target: NativeHandle) -> Result<(), InputError> {
    let device = RAWINPUTDEVICE {
        usUsagePage: HID_USAGE_PAGE_GENERIC,
        usUsage: class.usage(),
        dwFlags: RIDEV_EXINPUTSINK,
        hwndTarget: target.0 as HWND,
    };
    submit(&device).map_err(|e| InputError::Registration {
        class,
        reason: e.to_string(),
    })
}

/// Remove the registration for `class`. `RIDEV_REMOVE` requires a null target.
pub(crate) fn unregister(class: DeviceClass) -> Result<(), InputError> {
    let device = RAWINPUTDEVICE {
        usUsagePage: HID_USAGE_PAGE_GENERIC,
        usUsage: class.usage(),
        dwFlags: RIDEV_REMOVE,
        hwndTarget: core::ptr::null_mut(),
    };
    submit(&device).map_err(|e| InputError::Unregistration {
        class,
        reason: e.to_string(),
    })
}

fn submit(device: &RAWINPUTDEVICE) -> std::io::Result<()> {
    // SAFETY: one valid RAWINPUTDEVICE with its exact size.
    let ok = unsafe {
        RegisterRawInputDevices(
            device,
            1,
            core::mem::size_of::<RAWINPUTDEVICE>() as u32,
        )
    };
    if ok == 0 {
        Err(std::io::Error::last_os_error())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use windows_sys::Win32::UI::Input::{RAWMOUSE_0, RAWMOUSE_0_0, RIM_TYPEHID};

    use super::*;
    use crate::notification::{key_flags, mouse_flags};

    fn header(kind: u32) -> RAWINPUTHEADER {
        // SAFETY: RAWINPUTHEADER is plain data; all-zero is a valid value.
        let mut hdr: RAWINPUTHEADER = unsafe { core::mem::zeroed() };
        hdr.dwType = kind;
        hdr
    }

    /// Lay out `hdr` followed by `body` the way `GetRawInputData` does.
    fn payload<T: Copy>(hdr: &RAWINPUTHEADER, body: &T) -> Vec<u8> {
        let hdr_sz = core::mem::size_of::<RAWINPUTHEADER>();
        let mut buf = vec![0u8; hdr_sz + core::mem::size_of::<T>()];
        // SAFETY: `buf` is large enough for both writes.
        unsafe {
            core::ptr::write_unaligned(buf.as_mut_ptr().cast::<RAWINPUTHEADER>(), *hdr);
            core::ptr::write_unaligned(buf.as_mut_ptr().add(hdr_sz).cast::<T>(), *body);
        }
        buf
    }

    fn mouse(button_flags: u16, button_data: u16) -> RAWMOUSE {
        // SAFETY: RAWMOUSE is plain data; all-zero is a valid value.
        let mut m: RAWMOUSE = unsafe { core::mem::zeroed() };
        m.Anonymous = RAWMOUSE_0 {
            Anonymous: RAWMOUSE_0_0 {
                usButtonFlags: button_flags,
                usButtonData: button_data,
            },
        };
        m.lLastX = -4;
        m.lLastY = 9;
        m
    }

    fn keyboard(vkey: u16, make_code: u16, flags: u16) -> RAWKEYBOARD {
        // SAFETY: RAWKEYBOARD is plain data; all-zero is a valid value.
        let mut k: RAWKEYBOARD = unsafe { core::mem::zeroed() };
        k.VKey = vkey;
        k.MakeCode = make_code;
        k.Flags = flags;
        k
    }

    #[test]
    fn mouse_payload_keeps_button_fields() {
        let buf = payload(
            &header(RIM_TYPEMOUSE),
            &mouse(mouse_flags::WHEEL, 0xFF88),
        );
        assert_eq!(
            read_raw_input_bytes(&buf),
            Some(RawNotification::Mouse(RawMouseSample {
                button_flags: mouse_flags::WHEEL,
                button_data: 0xFF88,
                last_x: -4,
                last_y: 9,
            }))
        );
    }

    #[test]
    fn keyboard_payload_keeps_key_fields() {
        let buf = payload(
            &header(RIM_TYPEKEYBOARD),
            &keyboard(0x41, 0x1E, key_flags::BREAK),
        );
        assert_eq!(
            read_raw_input_bytes(&buf),
            Some(RawNotification::Keyboard(RawKeyboardSample {
                virtual_key: 0x41,
                make_code: 0x1E,
                flags: key_flags::BREAK,
            }))
        );
    }

    #[test]
    fn hid_payload_has_no_body() {
        let buf = payload(&header(RIM_TYPEHID), &0u32);
        assert_eq!(read_raw_input_bytes(&buf), Some(RawNotification::Hid));
    }

    #[test]
    fn truncated_payloads_are_rejected() {
        let hdr_sz = core::mem::size_of::<RAWINPUTHEADER>();
        assert_eq!(read_raw_input_bytes(&[]), None);

        let mouse_buf = payload(&header(RIM_TYPEMOUSE), &mouse(mouse_flags::LEFT_BUTTON_DOWN, 0));
        assert_eq!(read_raw_input_bytes(&mouse_buf[..hdr_sz - 1]), None);
        assert_eq!(read_raw_input_bytes(&mouse_buf[..mouse_buf.len() - 1]), None);

        let key_buf = payload(&header(RIM_TYPEKEYBOARD), &keyboard(0x20, 0x39, key_flags::MAKE));
        assert_eq!(read_raw_input_bytes(&key_buf[..hdr_sz]), None);
    }
}
