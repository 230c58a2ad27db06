//! Fan-out of captured events to wallpaper surfaces.
//!
//! [`Dispatcher::on_notification`] is the single entry point, installed as
//! the capture session's hook. Each notification is decoded, gated, and
//! posted to every matching surface before the hook returns; nothing is
//! queued and nothing blocks beyond the non-blocking post.
//!
//! Failures are contained per surface: an error while normalizing or
//! posting for one wallpaper is logged and the remaining wallpapers still
//! receive the event.

use backdrop_input::{decode, CursorSource, NotificationHook, RawNotification};
use backdrop_types::{ArrangementMode, Point, ScreenLayout, SemanticEvent, Surface};
use tracing::{debug, trace, warn};

use crate::config::ForwardingConfig;
use crate::error::ForwardError;
use crate::message::WindowMessage;
use crate::normalize::normalize;
use crate::policy::{accepts_input, ForwardingPolicy};
use crate::{DesktopFocus, DisplaySource, MessagePoster, SurfaceRegistry};

/// External collaborators the dispatcher reads from and posts through.
pub struct Collaborators {
    pub surfaces: Box<dyn SurfaceRegistry>,
    pub displays: Box<dyn DisplaySource>,
    pub focus: Box<dyn DesktopFocus>,
    pub cursor: Box<dyn CursorSource>,
    pub poster: Box<dyn MessagePoster>,
}

pub struct Dispatcher {
    arrangement: ArrangementMode,
    policy: ForwardingPolicy,
    surfaces: Box<dyn SurfaceRegistry>,
    displays: Box<dyn DisplaySource>,
    focus: Box<dyn DesktopFocus>,
    cursor: Box<dyn CursorSource>,
    poster: Box<dyn MessagePoster>,
}

impl Dispatcher {
    pub fn new(config: &ForwardingConfig, collaborators: Collaborators) -> Self {
        Self {
            arrangement: config.arrangement,
            policy: ForwardingPolicy::new(config.always_forward_mouse_move),
            surfaces: collaborators.surfaces,
            displays: collaborators.displays,
            focus: collaborators.focus,
            cursor: collaborators.cursor,
            poster: collaborators.poster,
        }
    }

    /// Decode and dispatch one raw notification. Returns the number of
    /// messages posted.
    pub fn on_notification(&self, notification: &RawNotification) -> usize {
        match decode(notification, self.cursor.as_ref()) {
            Some(event) => self.dispatch(&event),
            None => 0,
        }
    }

    /// Forward `event` to every surface that accepts it. Returns the number
    /// of messages posted.
    pub fn dispatch(&self, event: &SemanticEvent) -> usize {
        let desktop_focused = self.focus.is_desktop_focused();
        if !self.policy.permits(event, desktop_focused) {
            trace!(?event, "desktop not focused; event held back");
            return 0;
        }

        // Keys carry no position: route them to the display under the cursor.
        let Some(at) = event.position().or_else(|| self.cursor.cursor_position()) else {
            debug!(?event, "cursor position unavailable; event dropped");
            return 0;
        };

        let layout = match self.displays.layout() {
            Ok(layout) => layout,
            Err(e) => {
                warn!(error = %e, ?event, "input forwarding error");
                return 0;
            }
        };
        let Some(origin) = layout.display_at(at) else {
            warn!(?event, "no displays available; event dropped");
            return 0;
        };

        let mut posted = 0;
        for surface in self.surfaces.surfaces() {
            if !accepts_input(surface.kind) {
                continue;
            }
            if !self.arrangement.is_span() && !surface.display.same_layout(origin) {
                continue;
            }
            match self.forward_to(&surface, event, &layout) {
                Ok(()) => posted += 1,
                Err(e) => warn!(
                    surface = %surface.handle,
                    kind = ?surface.kind,
                    error = %e,
                    "input forwarding error"
                ),
            }
        }
        trace!(?event, display = %origin.name, posted, "event dispatched");
        posted
    }

    fn forward_to(
        &self,
        surface: &Surface,
        event: &SemanticEvent,
        layout: &ScreenLayout,
    ) -> Result<(), ForwardError> {
        let local = event.position().map_or(Point::default(), |global| {
            normalize(global, &surface.display, layout, self.arrangement)
        });
        let message = WindowMessage::for_event(event, local)?;
        self.poster.post(surface.handle, message)
    }

    /// Wrap the dispatcher as a capture session hook.
    pub fn into_hook(self) -> NotificationHook {
        Box::new(move |notification| {
            self.on_notification(&notification);
        })
    }
}
