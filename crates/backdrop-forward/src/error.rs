//! Forwarding errors.

use backdrop_types::{NativeHandle, Point};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("display layout unavailable: {0}")]
    Layout(String),

    #[error("coordinate ({}, {}) does not fit a 16-bit mouse lParam", .0.x, .0.y)]
    CoordinateOutOfRange(Point),

    #[error("failed to post message to {target}: {reason}")]
    Post { target: NativeHandle, reason: String },

    #[error("input error: {0}")]
    Input(#[from] backdrop_input::InputError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
