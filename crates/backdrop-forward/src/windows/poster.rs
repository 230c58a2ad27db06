use backdrop_types::NativeHandle;
use windows_sys::Win32::Foundation::HWND;
use windows_sys::Win32::UI::WindowsAndMessaging::PostMessageW;

use crate::error::ForwardError;
use crate::message::WindowMessage;
use crate::MessagePoster;

/// Queues messages on the target window's thread with `PostMessageW`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostMessagePoster;

impl MessagePoster for PostMessagePoster {
    fn post(&self, target: NativeHandle, message: WindowMessage) -> Result<(), ForwardError> {
        // SAFETY: PostMessageW validates the handle and does not dereference
        // wParam/lParam for these message codes.
        let ok = unsafe {
            PostMessageW(
                target.0 as HWND,
                message.code,
                message.wparam,
                message.lparam,
            )
        };
        if ok == 0 {
            return Err(ForwardError::Post {
                target,
                reason: std::io::Error::last_os_error().to_string(),
            });
        }
        Ok(())
    }
}
