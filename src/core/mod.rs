//! Core screen model.
//!
//! - **attrs**: colors, styles, and the `Brush`/`Pen` attribute sets
//! - **cell**: a single grid position and the `Grid` type
//! - **border**: border kinds and glyph sets
//! - **window**: sized cell grid with cursor and default attributes
//! - **text**: text layout (`print_str`) with wrap/grow policy
//!
//! # Architecture
//!
//! ```text
//! Window
//! ├── Grid (rows of Cells, lazily allocated)
//! ├── CursorState (position + visibility)
//! └── Pen (default fg/bg/style)
//! ```

pub mod attrs;
pub mod border;
pub mod cell;
pub mod text;
pub mod window;

pub use attrs::{Brush, Color, NamedColor, Pen, Style};
pub use border::{BorderChars, BorderKind};
pub use cell::{Cell, Grid};
pub use window::{CursorState, Window};
