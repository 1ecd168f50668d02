//! A single grid position and the grid type built from it.

use super::attrs::{Color, Pen, Style};

/// One character cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Pen::default())
    }
}

impl Cell {
    pub fn new(ch: char, fg: Color, bg: Color, style: Style) -> Self {
        Self { ch, fg, bg, style }
    }

    /// A space carrying the given attributes
    pub fn blank(pen: Pen) -> Self {
        Self::with_pen(' ', pen)
    }

    pub fn with_pen(ch: char, pen: Pen) -> Self {
        Self {
            ch,
            fg: pen.fg,
            bg: pen.bg,
            style: pen.style,
        }
    }

    pub fn pen(&self) -> Pen {
        Pen::new(self.fg, self.bg, self.style)
    }
}

/// Rows of cells. Rows may be shorter than the window width and there may be
/// fewer rows than the window height.
pub type Grid = Vec<Vec<Cell>>;
