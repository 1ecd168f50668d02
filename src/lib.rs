//! termwin - layered terminal windows
//!
//! termwin is the screen model behind a terminal UI: cell grids that can be
//! nested inside each other, flattened into one grid, and serialized into
//! text with the fewest attribute escapes needed. It never touches a live
//! terminal; output goes to any `std::io::Write` sink.
//!
//! # Features
//!
//! - **Windows**: fixed or growable cell grids with cursor and default colors
//! - **Text Layout**: `print_str` with wrap/grow policy and tab expansion
//! - **Nested Windows**: child windows with offsets, borders and titles
//! - **Compositing**: `merge_children` flattens any visible subtree
//! - **Rendering**: attribute-diffed SGR output via crossterm
//! - **Cursor Ownership**: find which cursor is really visible
//!
//! # Quick Start
//!
//! ```
//! use termwin::{BorderKind, Brush, Rect, WindowTree, Window};
//!
//! let mut tree = WindowTree::new();
//! let base = tree.add_window(Window::new(20, 5));
//! let child = tree.new_child(base, 2, 1, 8, 2, BorderKind::Line).unwrap();
//! tree.window_mut(child).unwrap().print_str("hello", Brush::default());
//! tree.show(child).unwrap();
//!
//! let frame = tree.render(base, Rect::new(0, 0, 20, 5)).unwrap();
//! assert!(frame.contains("hello"));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod ui;
pub mod wm;

pub use crate::config::{ColorScheme, Config};
pub use crate::core::{
    BorderChars, BorderKind, Brush, Cell, Color, CursorState, Grid, NamedColor, Pen, Style, Window,
};
pub use crate::error::{Error, Result};
pub use crate::ui::{Rect, Renderer};
pub use crate::wm::{CursorPlacement, WindowId, WindowTree};
