//! Offline replay of raw input through the real dispatcher.
//!
//! A script is a TOML list of steps. Each step optionally moves the cursor
//! and sets desktop focus, then delivers one raw notification:
//!
//! ```toml
//! [[steps]]
//! cursor = { x = 2000, y = 50 }
//! input = { type = "mouse", buttons = 1 }
//!
//! [[steps]]
//! desktop_focused = false
//! input = { type = "keyboard", vkey = 65 }
//! ```

use anyhow::{bail, Context};
use backdrop_forward::message::{
    WM_KEYDOWN, WM_KEYUP, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE, WM_RBUTTONDOWN, WM_RBUTTONUP,
};
use backdrop_forward::mock::{
    MockFocus, PostedMessage, RecordingPoster, StaticDisplays, StaticSurfaces,
};
use backdrop_forward::{Collaborators, Config, Dispatcher};
use backdrop_input::mock::{MockCursor, MockHost};
use backdrop_input::{CaptureSession, DeviceClass, RawKeyboardSample, RawMouseSample, RawNotification};
use backdrop_types::Point;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct Step {
    /// New cursor position; unchanged when omitted.
    #[serde(default)]
    pub cursor: Option<Point>,
    #[serde(default = "default_focused")]
    pub desktop_focused: bool,
    pub input: ScriptInput,
}

fn default_focused() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptInput {
    Mouse {
        #[serde(default)]
        buttons: u16,
        #[serde(default)]
        data: u16,
    },
    Keyboard {
        vkey: u16,
        #[serde(default)]
        flags: u16,
    },
    Hid,
}

impl ScriptInput {
    fn to_notification(&self) -> RawNotification {
        match *self {
            Self::Mouse { buttons, data } => RawNotification::Mouse(RawMouseSample {
                button_flags: buttons,
                button_data: data,
                ..RawMouseSample::default()
            }),
            Self::Keyboard { vkey, flags } => RawNotification::Keyboard(RawKeyboardSample {
                virtual_key: vkey,
                make_code: 0,
                flags,
            }),
            Self::Hid => RawNotification::Hid,
        }
    }
}

/// Messages posted while replaying one step.
#[derive(Debug)]
pub struct StepOutcome {
    pub step: usize,
    /// `false` when the capture mode does not listen to the step's device.
    pub delivered: bool,
    pub posted: Vec<PostedMessage>,
}

pub fn run(config: &Config, script_path: &str) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(script_path)
        .with_context(|| format!("failed to read script {script_path}"))?;
    let script: Script =
        toml::from_str(&content).with_context(|| format!("failed to parse script {script_path}"))?;

    for outcome in replay(config, &script)? {
        if !outcome.delivered {
            println!("step {}: not captured in {} mode", outcome.step, config.capture.mode);
            continue;
        }
        if outcome.posted.is_empty() {
            println!("step {}: nothing posted", outcome.step);
        }
        for p in &outcome.posted {
            println!(
                "step {}: {} -> {} wparam={:#06x} lparam={:#010x}",
                outcome.step,
                message_name(p.message.code),
                p.target,
                p.message.wparam,
                p.message.lparam
            );
        }
    }
    Ok(())
}

/// Replay `script` through a mock capture session and the dispatcher.
pub fn replay(config: &Config, script: &Script) -> anyhow::Result<Vec<StepOutcome>> {
    let layout = config.screen_layout();
    if layout.displays.is_empty() {
        bail!("simulation needs at least one [[displays]] entry in the configuration");
    }

    let cursor = MockCursor::at(Point::default());
    let focus = MockFocus::new(true);
    let poster = RecordingPoster::new();
    let dispatcher = Dispatcher::new(
        &config.forwarding,
        Collaborators {
            surfaces: Box::new(StaticSurfaces::new(config.static_surfaces()?)),
            displays: Box::new(StaticDisplays::new(layout)),
            focus: Box::new(focus.clone()),
            cursor: Box::new(cursor.clone()),
            poster: Box::new(poster.clone()),
        },
    );

    let host = MockHost::new();
    let driver = host.handle();
    let session = CaptureSession::start(config.capture.mode, host, dispatcher.into_hook())?;

    let mut outcomes = Vec::with_capacity(script.steps.len());
    for (i, step) in script.steps.iter().enumerate() {
        if let Some(position) = step.cursor {
            cursor.set(position);
        }
        focus.set(step.desktop_focused);

        let notification = step.input.to_notification();
        let delivered = match device_class(&notification) {
            Some(class) => session.registered().contains(&class) && driver.deliver(notification),
            None => driver.deliver(notification),
        };
        debug!(step = i + 1, delivered, "replayed step");
        outcomes.push(StepOutcome {
            step: i + 1,
            delivered,
            posted: poster.take(),
        });
    }
    Ok(outcomes)
}

fn device_class(notification: &RawNotification) -> Option<DeviceClass> {
    match notification {
        RawNotification::Mouse(_) => Some(DeviceClass::Mouse),
        RawNotification::Keyboard(_) => Some(DeviceClass::Keyboard),
        RawNotification::Hid => None,
    }
}

fn message_name(code: u32) -> String {
    match code {
        WM_KEYDOWN => "WM_KEYDOWN".to_string(),
        WM_KEYUP => "WM_KEYUP".to_string(),
        WM_MOUSEMOVE => "WM_MOUSEMOVE".to_string(),
        WM_LBUTTONDOWN => "WM_LBUTTONDOWN".to_string(),
        WM_LBUTTONUP => "WM_LBUTTONUP".to_string(),
        WM_RBUTTONDOWN => "WM_RBUTTONDOWN".to_string(),
        WM_RBUTTONUP => "WM_RBUTTONUP".to_string(),
        other => format!("{other:#06x}"),
    }
}

#[cfg(test)]
mod tests {
    use backdrop_types::NativeHandle;

    use super::*;

    const CONFIG: &str = r#"
[capture]
mode = "mouse"

[forwarding]
always_forward_mouse_move = true

[[displays]]
name = "A"
width = 1920
height = 1080

[[displays]]
name = "B"
x = 1920
width = 1920
height = 1080

[[surfaces]]
name = "left"
kind = "web"
display = "A"
handle = 1

[[surfaces]]
name = "right"
kind = "godot"
display = "B"
handle = 2
"#;

    const SCRIPT: &str = r#"
[[steps]]
cursor = { x = 2000, y = 50 }
input = { type = "mouse" }

[[steps]]
desktop_focused = false
input = { type = "mouse", buttons = 1 }

[[steps]]
desktop_focused = false
input = { type = "mouse" }

[[steps]]
input = { type = "keyboard", vkey = 65 }

[[steps]]
input = { type = "hid" }
"#;

    fn replay_default() -> Vec<StepOutcome> {
        let config: Config = toml::from_str(CONFIG).unwrap();
        let script: Script = toml::from_str(SCRIPT).unwrap();
        replay(&config, &script).unwrap()
    }

    #[test]
    fn move_is_posted_to_the_display_under_the_cursor() {
        let outcomes = replay_default();
        assert_eq!(outcomes[0].posted.len(), 1);
        assert_eq!(outcomes[0].posted[0].target, NativeHandle(2));
        assert_eq!(outcomes[0].posted[0].message.lparam, (50 << 16) | 80);
    }

    #[test]
    fn unfocused_click_dropped_but_move_forwarded() {
        let outcomes = replay_default();
        assert!(outcomes[1].delivered);
        assert!(outcomes[1].posted.is_empty());
        assert_eq!(outcomes[2].posted.len(), 1);
        assert_eq!(outcomes[2].posted[0].message.code, WM_MOUSEMOVE);
    }

    #[test]
    fn keyboard_not_captured_in_mouse_mode() {
        let outcomes = replay_default();
        assert!(!outcomes[3].delivered);
        assert!(outcomes[3].posted.is_empty());
        assert!(outcomes[4].delivered);
        assert!(outcomes[4].posted.is_empty());
    }

    #[test]
    fn replay_requires_a_static_layout() {
        let script: Script = toml::from_str(SCRIPT).unwrap();
        assert!(replay(&Config::default(), &script).is_err());
    }

    #[test]
    fn message_names() {
        assert_eq!(message_name(WM_LBUTTONDOWN), "WM_LBUTTONDOWN");
        assert_eq!(message_name(0x0203), "0x0203");
    }
}
