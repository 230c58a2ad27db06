//! In-memory collaborators for tests and simulation.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use backdrop_types::{NativeHandle, ScreenLayout, Surface};

use crate::error::ForwardError;
use crate::message::WindowMessage;
use crate::{DesktopFocus, DisplaySource, MessagePoster, SurfaceRegistry};

/// Fixed surface list.
#[derive(Clone, Default)]
pub struct StaticSurfaces {
    surfaces: Vec<Surface>,
}

impl StaticSurfaces {
    pub fn new(surfaces: Vec<Surface>) -> Self {
        Self { surfaces }
    }
}

impl SurfaceRegistry for StaticSurfaces {
    fn surfaces(&self) -> Vec<Surface> {
        self.surfaces.clone()
    }
}

/// Fixed display layout, optionally failing on demand.
#[derive(Clone, Default)]
pub struct StaticDisplays {
    layout: Arc<Mutex<ScreenLayout>>,
    fail: Arc<AtomicBool>,
}

impl StaticDisplays {
    pub fn new(layout: ScreenLayout) -> Self {
        Self {
            layout: Arc::new(Mutex::new(layout)),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make subsequent `layout()` calls fail.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

impl DisplaySource for StaticDisplays {
    fn layout(&self) -> Result<ScreenLayout, ForwardError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ForwardError::Layout("mock layout failure".to_string()));
        }
        Ok(self.layout.lock().unwrap().clone())
    }
}

/// Settable desktop focus. Clones share the flag.
#[derive(Clone)]
pub struct MockFocus {
    focused: Arc<AtomicBool>,
}

impl MockFocus {
    pub fn new(focused: bool) -> Self {
        Self {
            focused: Arc::new(AtomicBool::new(focused)),
        }
    }

    pub fn set(&self, focused: bool) {
        self.focused.store(focused, Ordering::SeqCst);
    }
}

impl DesktopFocus for MockFocus {
    fn is_desktop_focused(&self) -> bool {
        self.focused.load(Ordering::SeqCst)
    }
}

/// A message observed by [`RecordingPoster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostedMessage {
    pub target: NativeHandle,
    pub message: WindowMessage,
}

#[derive(Default)]
struct PosterState {
    posted: Vec<PostedMessage>,
    failing: HashSet<NativeHandle>,
}

/// Records every posted message; posts to chosen handles fail.
#[derive(Clone, Default)]
pub struct RecordingPoster {
    state: Arc<Mutex<PosterState>>,
}

impl RecordingPoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make posts to `target` fail.
    pub fn fail_for(&self, target: NativeHandle) {
        self.state.lock().unwrap().failing.insert(target);
    }

    /// Snapshot of successfully posted messages.
    pub fn posted(&self) -> Vec<PostedMessage> {
        self.state.lock().unwrap().posted.clone()
    }

    /// Drain the recorded messages.
    pub fn take(&self) -> Vec<PostedMessage> {
        std::mem::take(&mut self.state.lock().unwrap().posted)
    }
}

impl MessagePoster for RecordingPoster {
    fn post(&self, target: NativeHandle, message: WindowMessage) -> Result<(), ForwardError> {
        let mut state = self.state.lock().unwrap();
        if state.failing.contains(&target) {
            return Err(ForwardError::Post {
                target,
                reason: "mock post failure".to_string(),
            });
        }
        state.posted.push(PostedMessage { target, message });
        Ok(())
    }
}
