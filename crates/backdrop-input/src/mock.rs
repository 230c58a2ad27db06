//! Mock input backends for testing.

use std::sync::{Arc, Mutex};

use backdrop_types::{NativeHandle, Point};

use crate::error::InputError;
use crate::notification::{DeviceClass, RawNotification};
use crate::{CaptureHost, CursorSource, NotificationHook};

// ---------------------------------------------------------------------------
// MockHost
// ---------------------------------------------------------------------------

/// Handle value reported for the mock host window.
pub const MOCK_HOST_WINDOW: NativeHandle = NativeHandle(0x0B0B);

#[derive(Default)]
struct MockHostState {
    hook: Option<NotificationHook>,
    open: bool,
    registered: Vec<DeviceClass>,
    unregister_calls: Vec<DeviceClass>,
    close_calls: usize,
    fail_registration: Option<DeviceClass>,
}

/// Mock capture host.
///
/// Records registrations and keeps the installed hook so tests can deliver
/// notifications through [`MockHostHandle::deliver`], as the OS would.
pub struct MockHost {
    state: Arc<Mutex<MockHostState>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    /// Create a new mock host.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockHostState::default())),
        }
    }

    /// Get a clonable handle for driving and observing the host from tests.
    pub fn handle(&self) -> MockHostHandle {
        MockHostHandle {
            state: Arc::clone(&self.state),
        }
    }
}

impl CaptureHost for MockHost {
    fn open(&mut self, hook: NotificationHook) -> Result<NativeHandle, InputError> {
        let mut state = self.state.lock().unwrap();
        state.hook = Some(hook);
        state.open = true;
        Ok(MOCK_HOST_WINDOW)
    }

    fn register(&mut self, class: DeviceClass, _target: NativeHandle) -> Result<(), InputError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_registration == Some(class) {
            return Err(InputError::Registration {
                class,
                reason: "refused by mock".to_string(),
            });
        }
        state.registered.push(class);
        Ok(())
    }

    fn unregister(&mut self, class: DeviceClass) -> Result<(), InputError> {
        let mut state = self.state.lock().unwrap();
        state.unregister_calls.push(class);
        state.registered.retain(|c| *c != class);
        Ok(())
    }

    fn close(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.open = false;
        state.hook = None;
        state.close_calls += 1;
    }
}

/// Clonable driver/observer handle for `MockHost`.
#[derive(Clone)]
pub struct MockHostHandle {
    state: Arc<Mutex<MockHostState>>,
}

impl MockHostHandle {
    /// Make the next registration of `class` fail.
    pub fn fail_registration_of(&self, class: DeviceClass) {
        self.state.lock().unwrap().fail_registration = Some(class);
    }

    /// Deliver a notification to the installed hook. Returns `false` when no
    /// hook is installed (host closed or never opened).
    pub fn deliver(&self, notification: RawNotification) -> bool {
        let hook = self.state.lock().unwrap().hook.take();
        let Some(mut hook) = hook else {
            return false;
        };
        hook(notification);
        let mut state = self.state.lock().unwrap();
        if state.open {
            state.hook = Some(hook);
        }
        true
    }

    /// Device classes currently registered.
    pub fn registered(&self) -> Vec<DeviceClass> {
        self.state.lock().unwrap().registered.clone()
    }

    /// Every `unregister` call, in order.
    pub fn unregister_calls(&self) -> Vec<DeviceClass> {
        self.state.lock().unwrap().unregister_calls.clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().unwrap().open
    }

    pub fn close_calls(&self) -> usize {
        self.state.lock().unwrap().close_calls
    }
}

// ---------------------------------------------------------------------------
// MockCursor
// ---------------------------------------------------------------------------

/// Settable cursor position. Clones share the same position.
#[derive(Clone, Default)]
pub struct MockCursor {
    position: Arc<Mutex<Option<Point>>>,
}

impl MockCursor {
    pub fn at(position: Point) -> Self {
        Self {
            position: Arc::new(Mutex::new(Some(position))),
        }
    }

    /// A cursor whose position query always fails.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn set(&self, position: Point) {
        *self.position.lock().unwrap() = Some(position);
    }
}

impl CursorSource for MockCursor {
    fn cursor_position(&self) -> Option<Point> {
        *self.position.lock().unwrap()
    }
}
