//! Window Manager - nested window trees, compositing and cursor ownership.
//!
//! - **tree**: `WindowTree` arena and `WindowId` handles, z-order mutators
//! - **child**: placement data of a window inside its parent
//! - **compositor**: flattening a visible subtree (`merge_children`)
//! - **cursor**: which cursor is visible from a base window
//!
//! # Module Hierarchy
//!
//! ```text
//! wm/
//! ├── mod.rs         - Module exports
//! ├── tree.rs        - WindowTree (arena of windows)
//! ├── child.rs       - ChildFrame (offset, border, title, visibility)
//! ├── compositor.rs  - merge_children
//! └── cursor.rs      - take_cursor_from_child
//! ```

pub mod child;
pub mod compositor;
pub mod cursor;
pub mod tree;

pub use child::{ChildFrame, NodeKind};
pub use cursor::CursorPlacement;
pub use tree::{WindowId, WindowTree};
