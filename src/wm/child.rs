//! Child window placement data

use crate::core::{BorderKind, Color};

/// Placement and decoration of a window inside its parent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildFrame {
    /// Position (column, row) in the parent's grid
    pub offset_x: usize,
    pub offset_y: usize,
    /// Border drawn one cell outside the window
    pub border: BorderKind,
    pub border_fg: Color,
    pub border_bg: Color,
    /// Title shown centered in the top border
    pub title: Vec<char>,
    /// Hidden children are skipped by compositing and cursor resolution
    pub visible: bool,
}

impl ChildFrame {
    pub fn new(offset_x: usize, offset_y: usize, border: BorderKind) -> Self {
        Self {
            offset_x,
            offset_y,
            border,
            border_fg: Color::RESET,
            border_bg: Color::RESET,
            title: Vec::new(),
            visible: false,
        }
    }

    /// Check if a parent-space point is covered by a `width`×`height` window
    /// at this offset, counting the border as a one-cell inset.
    pub fn covers(&self, width: usize, height: usize, x: usize, y: usize) -> bool {
        let b = self.border.width();
        x + b >= self.offset_x
            && x < self.offset_x + width + b
            && y + b >= self.offset_y
            && y < self.offset_y + height + b
    }
}

/// What a tree node is: a root, or a window placed inside a parent
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Base,
    Child(ChildFrame),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_with_border_inset() {
        let plain = ChildFrame::new(2, 2, BorderKind::None);
        assert!(plain.covers(3, 2, 2, 2));
        assert!(plain.covers(3, 2, 4, 3));
        assert!(!plain.covers(3, 2, 1, 2));
        assert!(!plain.covers(3, 2, 5, 2));

        let framed = ChildFrame::new(2, 2, BorderKind::Line);
        assert!(framed.covers(3, 2, 1, 1));
        assert!(framed.covers(3, 2, 5, 4));
        assert!(!framed.covers(3, 2, 6, 2));
        assert!(!framed.covers(3, 2, 0, 2));
    }
}
