//! Compositing: flattening a window's visible subtree into one grid.
//!
//! Children are painted bottom to top in list order. Each visible child is
//! resolved recursively first, then its cells are blitted at its offset,
//! its border is drawn one cell outside its footprint, and its title is
//! centered over the top border row. Anything falling outside the target
//! is clipped silently.

use tracing::trace;

use super::child::ChildFrame;
use super::tree::{WindowId, WindowTree};
use crate::core::Window;
use crate::error::Result;

impl WindowTree {
    /// Resolve `id` and all its visible descendants into a standalone,
    /// childless window of the same size.
    ///
    /// The result keeps the window's defaults and cursor. Every call builds
    /// a fresh grid; nothing is cached.
    pub fn merge_children(&self, id: WindowId) -> Result<Window> {
        let node = self.node(id)?;
        let mut merged = flat_copy(&node.window);

        for &child in &node.children {
            let frame = self.frame(child)?;
            if !frame.visible {
                trace!(window = %id, %child, "skipping hidden child");
                continue;
            }
            let resolved = self.merge_children(child)?;
            blit(&mut merged, &resolved, frame)?;
            draw_decoration(&mut merged, &resolved, frame);
        }
        Ok(merged)
    }
}

fn flat_copy(window: &Window) -> Window {
    let mut copy = Window::new(window.width, window.height);
    copy.grid = window.grid.clone();
    copy.cursor = window.cursor;
    copy.defaults = window.defaults;
    copy.tab_size = window.tab_size;
    copy
}

fn blit(target: &mut Window, child: &Window, frame: &ChildFrame) -> Result<()> {
    for y in 0..child.height {
        let ty = y + frame.offset_y;
        if ty >= target.height {
            break;
        }
        for x in 0..child.width {
            let tx = x + frame.offset_x;
            if tx >= target.width {
                break;
            }
            target.set_cell(tx, ty, child.get_cell(x, y))?;
        }
    }
    Ok(())
}

/// Border and title of one child, in the child's border colors
fn draw_decoration(target: &mut Window, child: &Window, frame: &ChildFrame) {
    let Some(chars) = frame.border.chars() else {
        return;
    };
    let left = frame.offset_x as isize - 1;
    let top = frame.offset_y as isize - 1;
    let right = (frame.offset_x + child.width) as isize;
    let bottom = (frame.offset_y + child.height) as isize;
    target.draw_frame(
        (left, top),
        (right, bottom),
        chars,
        frame.border_fg,
        frame.border_bg,
    );

    if frame.title.is_empty() || frame.offset_y == 0 || frame.offset_y > target.height {
        return;
    }
    let width = child.width;
    let mut title: Vec<char> = frame.title.iter().take(width).copied().collect();
    if title.len() + 2 <= width {
        title.insert(0, ' ');
        title.push(' ');
    }
    let x0 = frame.offset_x + (width - title.len()) / 2;
    let row = top;
    for (i, &ch) in title.iter().enumerate() {
        let x = x0 + i;
        if x >= target.width {
            break;
        }
        target.paint(x as isize, row, ch, frame.border_fg, frame.border_bg);
    }
}
