//! Raw input capture session.
//!
//! A [`CaptureSession`] is the single owner of the process-wide raw input
//! registrations for its [`CaptureMode`]. Registrations are released by
//! [`CaptureSession::stop`], which also runs on drop, so every exit path
//! (including a host window torn down underneath us) leaves nothing
//! registered.

use backdrop_types::{CaptureMode, NativeHandle};
use tracing::{debug, info, warn};

use crate::error::InputError;
use crate::notification::DeviceClass;
use crate::{CaptureHost, NotificationHook};

/// Device classes a capture mode registers for.
#[must_use]
pub fn device_classes(mode: CaptureMode) -> &'static [DeviceClass] {
    match mode {
        CaptureMode::Off => &[],
        CaptureMode::Mouse => &[DeviceClass::Mouse],
        CaptureMode::MouseKeyboard => &[DeviceClass::Mouse, DeviceClass::Keyboard],
    }
}

/// Registration lifecycle for one capture mode on one host window.
pub struct CaptureSession<H: CaptureHost> {
    mode: CaptureMode,
    host: H,
    window: Option<NativeHandle>,
    registered: Vec<DeviceClass>,
}

impl<H: CaptureHost> CaptureSession<H> {
    /// Open the host window, install `hook`, and register every device class
    /// `mode` needs.
    ///
    /// A registration failure is returned as-is and not retried; anything
    /// registered before it is rolled back and the host is closed.
    pub fn start(mode: CaptureMode, host: H, hook: NotificationHook) -> Result<Self, InputError> {
        let mut session = Self {
            mode,
            host,
            window: None,
            registered: Vec::new(),
        };

        let window = session.host.open(hook)?;
        session.window = Some(window);

        for &class in device_classes(mode) {
            if let Err(e) = session.host.register(class, window) {
                warn!(%class, error = %e, "raw input registration failed");
                session.stop();
                return Err(e);
            }
            debug!(%class, %window, "registered raw input device class");
            session.registered.push(class);
        }

        info!(%mode, %window, "capture session started");
        Ok(session)
    }

    /// Unregister everything `start` registered and close the host.
    ///
    /// Idempotent: once stopped, further calls do nothing.
    pub fn stop(&mut self) {
        if self.window.is_none() && self.registered.is_empty() {
            return;
        }

        for class in self.registered.drain(..).rev() {
            match self.host.unregister(class) {
                Ok(()) => debug!(%class, "unregistered raw input device class"),
                Err(e) => warn!(%class, error = %e, "failed to unregister raw input"),
            }
        }

        if let Some(window) = self.window.take() {
            self.host.close();
            info!(mode = %self.mode, %window, "capture session stopped");
        }
    }

    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    /// Host window handle while the session is running.
    pub fn window(&self) -> Option<NativeHandle> {
        self.window
    }

    /// Device classes currently registered by this session.
    pub fn registered(&self) -> &[DeviceClass] {
        &self.registered
    }

    pub fn is_running(&self) -> bool {
        self.window.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: CaptureHost> Drop for CaptureSession<H> {
    fn drop(&mut self) {
        self.stop();
    }
}
