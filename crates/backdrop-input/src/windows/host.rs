//! Hidden host window for raw input.

use std::panic::{catch_unwind, AssertUnwindSafe};

use backdrop_types::NativeHandle;
use tracing::{debug, error};
use windows_sys::Win32::Foundation::{GetLastError, HWND, LPARAM, LRESULT, WPARAM};
use windows_sys::Win32::System::LibraryLoader::GetModuleHandleW;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW,
    GetWindowLongPtrW, IsWindow, PostMessageW, PostQuitMessage, RegisterClassExW,
    SetWindowLongPtrW, TranslateMessage, GWLP_USERDATA, MSG, WM_CLOSE, WM_DESTROY,
    WM_INPUT, WM_NCDESTROY, WNDCLASSEXW, WS_EX_NOACTIVATE,
    WS_EX_TOOLWINDOW, WS_POPUP,
};

use super::raw_input;
use crate::error::InputError;
use crate::notification::DeviceClass;
use crate::{CaptureHost, NotificationHook};

const ERROR_CLASS_ALREADY_EXISTS: u32 = 1410;

/// Far enough left to be outside any realistic virtual screen.
const OFFSCREEN_X: i32 = -99_999;

/// Per-window state reachable from the window procedure via `GWLP_USERDATA`.
struct HostState {
    hook: NotificationHook,
}

/// Invisible, non-activating tool window that receives `WM_INPUT`.
///
/// The window has thread affinity: open it, pump its messages, and close it
/// on the same thread.
#[derive(Debug, Default)]
pub struct HiddenWindowHost {
    window: Option<NativeHandle>,
}

impl HiddenWindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A thread-safe handle that asks the host window to close.
    pub fn closer(&self) -> Option<HostCloser> {
        self.window.map(|window| HostCloser { window })
    }

    /// Run the message loop until the host window is destroyed or `WM_QUIT`
    /// arrives. Stop the owning capture session afterwards.
    pub fn pump_messages(&self) -> Result<(), InputError> {
        // SAFETY: MSG is plain data; GetMessageW fills it before use.
        let mut msg: MSG = unsafe { core::mem::zeroed() };
        loop {
            // SAFETY: standard GetMessage/DispatchMessage loop on the owning thread.
            let r = unsafe { GetMessageW(&mut msg, core::ptr::null_mut(), 0, 0) };
            match r {
                0 => return Ok(()),
                -1 => {
                    return Err(InputError::HostWindow(format!(
                        "message loop failed: {}",
                        std::io::Error::last_os_error()
                    )))
                }
                // SAFETY: `msg` was just filled by GetMessageW on this thread.
                _ => unsafe {
                    TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                },
            }
        }
    }
}

impl CaptureHost for HiddenWindowHost {
    fn open(&mut self, hook: NotificationHook) -> Result<NativeHandle, InputError> {
        let class_name = wide("BackdropInputHost");
        let title = wide("backdrop input");

        // SAFETY: all pointers passed below outlive the calls; the boxed
        // state is attached only to a created window and reclaimed on
        // WM_NCDESTROY.
        unsafe {
            let instance = GetModuleHandleW(core::ptr::null());

            let mut class: WNDCLASSEXW = core::mem::zeroed();
            class.cbSize = core::mem::size_of::<WNDCLASSEXW>() as u32;
            class.lpfnWndProc = Some(host_wndproc);
            class.hInstance = instance;
            class.lpszClassName = class_name.as_ptr();
            if RegisterClassExW(&class) == 0 && GetLastError() != ERROR_CLASS_ALREADY_EXISTS {
                return Err(InputError::HostWindow(format!(
                    "RegisterClassExW failed: {}",
                    std::io::Error::last_os_error()
                )));
            }

            let hwnd = CreateWindowExW(
                WS_EX_TOOLWINDOW | WS_EX_NOACTIVATE,
                class_name.as_ptr(),
                title.as_ptr(),
                WS_POPUP,
                OFFSCREEN_X,
                0,
                1,
                1,
                core::ptr::null_mut(),
                core::ptr::null_mut(),
                instance,
                core::ptr::null(),
            );
            if hwnd.is_null() {
                return Err(InputError::HostWindow(format!(
                    "CreateWindowExW failed: {}",
                    std::io::Error::last_os_error()
                )));
            }

            // Raw input is not registered yet, so no WM_INPUT can arrive
            // before the hook is attached.
            let state = Box::into_raw(Box::new(HostState { hook }));
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, state as isize);

            let window = NativeHandle(hwnd as isize);
            debug!(%window, "created hidden host window");
            self.window = Some(window);
            Ok(window)
        }
    }

    fn register(&mut self, class: DeviceClass, target: NativeHandle) -> Result<(), InputError> {
        raw_input::register(class, target)
    }

    fn unregister(&mut self, class: DeviceClass) -> Result<(), InputError> {
        raw_input::unregister(class)
    }

    fn close(&mut self) {
        let Some(window) = self.window.take() else {
            return;
        };
        let hwnd = window.0 as HWND;
        // SAFETY: IsWindow tolerates stale handles; DestroyWindow runs on the
        // creating thread.
        unsafe {
            if IsWindow(hwnd) != 0 && DestroyWindow(hwnd) == 0 {
                debug!(%window, error = %std::io::Error::last_os_error(), "DestroyWindow failed");
            }
        }
    }
}

/// Requests host shutdown from any thread by posting `WM_CLOSE`.
#[derive(Debug, Clone, Copy)]
pub struct HostCloser {
    window: NativeHandle,
}

impl HostCloser {
    pub fn request_close(&self) -> Result<(), InputError> {
        // SAFETY: PostMessageW is thread-safe and tolerates destroyed windows.
        let ok = unsafe { PostMessageW(self.window.0 as HWND, WM_CLOSE, 0, 0) };
        if ok == 0 {
            Err(InputError::HostWindow(format!(
                "PostMessageW(WM_CLOSE) failed: {}",
                std::io::Error::last_os_error()
            )))
        } else {
            Ok(())
        }
    }
}

unsafe extern "system" fn host_wndproc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_INPUT => {
            let state = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut HostState;
            if !state.is_null() {
                if let Some(notification) = raw_input::read_wm_input(lparam) {
                    let hook = &mut (*state).hook;
                    // Unwinding across the window procedure would abort.
                    if catch_unwind(AssertUnwindSafe(|| hook(notification))).is_err() {
                        error!("input hook panicked; notification dropped");
                    }
                }
            }
        }
        WM_DESTROY => PostQuitMessage(0),
        WM_NCDESTROY => {
            let state = SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) as *mut HostState;
            if !state.is_null() {
                drop(Box::from_raw(state));
            }
        }
        _ => {}
    }
    DefWindowProcW(hwnd, msg, wparam, lparam)
}

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
