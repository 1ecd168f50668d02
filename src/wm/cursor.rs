//! Cursor arbitration: deciding whether a descendant's cursor shows
//! through to its base window, and where.

use tracing::debug;

use super::tree::{WindowId, WindowTree};
use crate::error::{Error, Result};

/// Outcome of [`WindowTree::take_cursor_from_child`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorPlacement {
    /// The cursor is hidden or covered by another window
    Hidden,
    /// The cursor is visible at this base-window coordinate
    Visible { x: usize, y: usize },
}

impl CursorPlacement {
    pub fn is_visible(&self) -> bool {
        matches!(self, CursorPlacement::Visible { .. })
    }
}

impl WindowTree {
    /// Check whether any visible window in `windows` covers parent-space
    /// point (x, y), borders included.
    fn is_covered(&self, windows: &[WindowId], x: usize, y: usize) -> Result<bool> {
        for &id in windows {
            let frame = self.frame(id)?;
            if !frame.visible {
                continue;
            }
            let win = self.window(id)?;
            if frame.covers(win.width(), win.height(), x, y) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Make sure `subject` is a proper descendant of `base`
    fn check_descendant(&self, base: WindowId, subject: WindowId) -> Result<()> {
        if subject == base {
            return Err(Error::invalid("cannot take the cursor from the base window itself"));
        }
        if self.is_base_window(subject)? {
            return Err(Error::invalid(format!("window {} is not a child window", subject)));
        }
        let mut current = self.parent(subject)?;
        while let Some(id) = current {
            if id == base {
                return Ok(());
            }
            current = self.parent(id)?;
        }
        Err(Error::invalid(format!(
            "window {} does not belong to window {}",
            subject, base
        )))
    }

    /// Walk from `subject` up to `base`, translating the subject's cursor
    /// and checking it is neither clipped nor covered on the way.
    fn resolve_cursor(&self, base: WindowId, subject: WindowId) -> Result<CursorPlacement> {
        let win = self.window(subject)?;
        if !self.is_visible(subject)? || !win.is_cursor_visible() {
            return Ok(CursorPlacement::Hidden);
        }
        let (mut x, mut y) = (win.cursor_x(), win.cursor_y());
        if self.is_covered(self.children(subject)?, x, y)? {
            return Ok(CursorPlacement::Hidden);
        }

        let mut current = subject;
        loop {
            if !self.is_visible(current)? {
                return Ok(CursorPlacement::Hidden);
            }
            let (ox, oy) = self.offset(current)?;
            x += ox;
            y += oy;

            let parent = self
                .parent(current)?
                .ok_or_else(|| Error::invalid(format!("window {} has no parent", current)))?;
            let pwin = self.window(parent)?;
            if x >= pwin.width() || y >= pwin.height() {
                return Ok(CursorPlacement::Hidden);
            }
            let index = self.child_index(parent, current)?;
            if self.is_covered(&self.children(parent)?[index + 1..], x, y)? {
                return Ok(CursorPlacement::Hidden);
            }
            if parent == base {
                return Ok(CursorPlacement::Visible { x, y });
            }
            current = parent;
        }
    }

    /// Hand the cursor of `subject`, a descendant of `base`, to `base`.
    ///
    /// When the cursor is visible from the base window's point of view, the
    /// base cursor is moved there and shown; otherwise the base cursor is
    /// hidden.
    ///
    /// Occlusion by later visible siblings is checked at every ancestor
    /// level on the way up, not only among the base window's children. A
    /// cursor hidden under a sibling of an intermediate window is hidden
    /// on screen too, since that sibling is painted over it.
    pub fn take_cursor_from_child(
        &mut self,
        base: WindowId,
        subject: WindowId,
    ) -> Result<CursorPlacement> {
        self.check_descendant(base, subject)?;
        let placement = self.resolve_cursor(base, subject)?;

        let win = self.window_mut(base)?;
        match placement {
            CursorPlacement::Visible { x, y } => {
                win.set_cursor(x, y)?;
                win.show_cursor();
            }
            CursorPlacement::Hidden => win.hide_cursor(),
        }
        debug!(%base, %subject, ?placement, "resolved cursor");
        Ok(placement)
    }
}
