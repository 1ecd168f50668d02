//! Output side of the toolkit.
//!
//! - **renderer**: turns a flattened window into text with minimal SGR
//!   escapes, ready for a raw terminal writer

pub mod renderer;

pub use renderer::{Rect, Renderer};
