//! Input subsystem errors.

use thiserror::Error;

use crate::notification::DeviceClass;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to register raw input for {class}: {reason}")]
    Registration { class: DeviceClass, reason: String },

    #[error("failed to unregister raw input for {class}: {reason}")]
    Unregistration { class: DeviceClass, reason: String },

    #[error("host window error: {0}")]
    HostWindow(String),

    #[error("backend not available on this platform")]
    Unavailable,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
