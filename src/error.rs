//! Error types shared by the window model, the tree and the compositor.

use thiserror::Error;

use crate::wm::WindowId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("position ({x}, {y}) is outside the fixed {width}x{height} window")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("child index {index} out of range ({count} children)")]
    ChildIndexOutOfRange { index: usize, count: usize },

    #[error("window {child} is not a child of window {parent}")]
    NotAChild { parent: WindowId, child: WindowId },

    #[error("window {0} does not exist or has been released")]
    StaleWindow(WindowId),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
