//! WindowTree - arena owning every window of one or more window trees
//!
//! Windows are addressed by [`WindowId`] handles. A handle stays valid until
//! its window is released; after that the slot may be reused, but the
//! generation stored in the handle no longer matches and every lookup
//! through the old handle fails with [`Error::StaleWindow`].
//!
//! Each node stores an optional parent handle and its ordered child list.
//! The child list is the z-order: later entries paint over earlier ones.

use std::fmt;

use tracing::debug;

use super::child::{ChildFrame, NodeKind};
use crate::core::{BorderKind, Color, Window};
use crate::error::{Error, Result};

/// Stable handle to a window in a [`WindowTree`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WindowId {
    index: u32,
    generation: u32,
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

pub(crate) struct Node {
    pub(crate) window: Window,
    pub(crate) parent: Option<WindowId>,
    pub(crate) children: Vec<WindowId>,
    pub(crate) kind: NodeKind,
}

struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena of windows
#[derive(Default)]
pub struct WindowTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl WindowTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, node: Node) -> WindowId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            return WindowId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        WindowId {
            index,
            generation: 0,
        }
    }

    pub(crate) fn node(&self, id: WindowId) -> Result<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(Error::StaleWindow(id))
    }

    fn node_mut(&mut self, id: WindowId) -> Result<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(Error::StaleWindow(id))
    }

    /// Register a base (root) window
    pub fn add_window(&mut self, window: Window) -> WindowId {
        self.insert(Node {
            window,
            parent: None,
            children: Vec::new(),
            kind: NodeKind::Base,
        })
    }

    /// Whether `id` refers to a live window
    pub fn contains(&self, id: WindowId) -> bool {
        self.node(id).is_ok()
    }

    pub fn window(&self, id: WindowId) -> Result<&Window> {
        Ok(&self.node(id)?.window)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Result<&mut Window> {
        Ok(&mut self.node_mut(id)?.window)
    }

    pub fn parent(&self, id: WindowId) -> Result<Option<WindowId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn is_base_window(&self, id: WindowId) -> Result<bool> {
        Ok(matches!(self.node(id)?.kind, NodeKind::Base))
    }

    /// Child list in z-order (back to front)
    pub fn children(&self, id: WindowId) -> Result<&[WindowId]> {
        Ok(&self.node(id)?.children)
    }

    pub fn children_count(&self, id: WindowId) -> Result<usize> {
        Ok(self.node(id)?.children.len())
    }

    /// Create a child of `parent` and put it on top of its siblings.
    ///
    /// The child has a fixed `width`×`height` grid and starts out hidden.
    pub fn new_child(
        &mut self,
        parent: WindowId,
        offset_x: usize,
        offset_y: usize,
        width: usize,
        height: usize,
        border: BorderKind,
    ) -> Result<WindowId> {
        self.node(parent)?;
        let id = self.insert(Node {
            window: Window::new(width, height),
            parent: Some(parent),
            children: Vec::new(),
            kind: NodeKind::Child(ChildFrame::new(offset_x, offset_y, border)),
        });
        self.node_mut(parent)?.children.push(id);
        debug!(%parent, child = %id, width, height, "created child window");
        Ok(id)
    }

    pub fn child(&self, parent: WindowId, index: usize) -> Result<WindowId> {
        let children = &self.node(parent)?.children;
        children
            .get(index)
            .copied()
            .ok_or(Error::ChildIndexOutOfRange {
                index,
                count: children.len(),
            })
    }

    pub fn child_index(&self, parent: WindowId, child: WindowId) -> Result<usize> {
        self.node(parent)?
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or(Error::NotAChild { parent, child })
    }

    /// Move `child` to the top of the z-order; others keep their order
    pub fn child_to_foreground(&mut self, parent: WindowId, child: WindowId) -> Result<()> {
        let i = self.child_index(parent, child)?;
        let children = &mut self.node_mut(parent)?.children;
        let id = children.remove(i);
        children.push(id);
        Ok(())
    }

    /// Move `child` to the bottom of the z-order; others keep their order
    pub fn child_to_background(&mut self, parent: WindowId, child: WindowId) -> Result<()> {
        let i = self.child_index(parent, child)?;
        let children = &mut self.node_mut(parent)?.children;
        let id = children.remove(i);
        children.insert(0, id);
        Ok(())
    }

    pub(crate) fn frame(&self, id: WindowId) -> Result<&ChildFrame> {
        match &self.node(id)?.kind {
            NodeKind::Child(frame) => Ok(frame),
            NodeKind::Base => Err(Error::invalid(format!("window {} is not a child window", id))),
        }
    }

    fn frame_mut(&mut self, id: WindowId) -> Result<&mut ChildFrame> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Child(frame) => Ok(frame),
            NodeKind::Base => Err(Error::invalid(format!("window {} is not a child window", id))),
        }
    }

    pub fn offset(&self, child: WindowId) -> Result<(usize, usize)> {
        let frame = self.frame(child)?;
        Ok((frame.offset_x, frame.offset_y))
    }

    /// Move a child within its parent.
    ///
    /// The offset is clamped so the child and its border stay inside the
    /// parent. Returns the offset actually applied.
    pub fn move_to(&mut self, child: WindowId, x: usize, y: usize) -> Result<(usize, usize)> {
        let node = self.node(child)?;
        let (w, h) = (node.window.width(), node.window.height());
        let parent = node
            .parent
            .ok_or_else(|| Error::invalid(format!("window {} has no parent", child)))?;
        let (pw, ph) = {
            let p = self.window(parent)?;
            (p.width(), p.height())
        };
        let frame = self.frame_mut(child)?;
        let b = frame.border.width();
        frame.offset_x = if x < b {
            b
        } else {
            x.min(pw.saturating_sub(w + b))
        };
        frame.offset_y = if y < b {
            b
        } else {
            y.min(ph.saturating_sub(h + b))
        };
        Ok((frame.offset_x, frame.offset_y))
    }

    pub fn is_visible(&self, child: WindowId) -> Result<bool> {
        Ok(self.frame(child)?.visible)
    }

    pub fn show(&mut self, child: WindowId) -> Result<()> {
        self.frame_mut(child)?.visible = true;
        Ok(())
    }

    pub fn hide(&mut self, child: WindowId) -> Result<()> {
        self.frame_mut(child)?.visible = false;
        Ok(())
    }

    pub fn title(&self, child: WindowId) -> Result<&[char]> {
        Ok(&self.frame(child)?.title)
    }

    pub fn set_title(&mut self, child: WindowId, title: &str) -> Result<()> {
        self.frame_mut(child)?.title = title.chars().collect();
        Ok(())
    }

    pub fn set_title_chars(&mut self, child: WindowId, title: &[char]) -> Result<()> {
        self.frame_mut(child)?.title = title.to_vec();
        Ok(())
    }

    pub fn border(&self, child: WindowId) -> Result<BorderKind> {
        Ok(self.frame(child)?.border)
    }

    pub fn set_border(
        &mut self,
        child: WindowId,
        border: BorderKind,
        fg: Color,
        bg: Color,
    ) -> Result<()> {
        let frame = self.frame_mut(child)?;
        frame.border = border;
        frame.border_fg = fg;
        frame.border_bg = bg;
        Ok(())
    }

    pub fn border_fg(&self, child: WindowId) -> Result<Color> {
        Ok(self.frame(child)?.border_fg)
    }

    pub fn set_border_fg(&mut self, child: WindowId, fg: Color) -> Result<()> {
        self.frame_mut(child)?.border_fg = fg;
        Ok(())
    }

    pub fn border_bg(&self, child: WindowId) -> Result<Color> {
        Ok(self.frame(child)?.border_bg)
    }

    pub fn set_border_bg(&mut self, child: WindowId, bg: Color) -> Result<()> {
        self.frame_mut(child)?.border_bg = bg;
        Ok(())
    }

    /// Release every descendant of `id`
    fn release_children(&mut self, id: WindowId) -> Result<usize> {
        let mut pending = std::mem::take(&mut self.node_mut(id)?.children);
        let mut released = 0;
        while let Some(child) = pending.pop() {
            let slot = &mut self.slots[child.index as usize];
            if let Some(node) = slot.node.take() {
                pending.extend(node.children);
                self.free.push(child.index);
                released += 1;
            }
        }
        Ok(released)
    }

    /// Clear the grid of `id` and release all of its descendants
    pub fn clear(&mut self, id: WindowId) -> Result<()> {
        let released = self.release_children(id)?;
        self.window_mut(id)?.clear_grid();
        debug!(window = %id, released, "cleared window");
        Ok(())
    }

    /// Release a base window together with its whole subtree
    pub fn remove(&mut self, base: WindowId) -> Result<()> {
        if !self.is_base_window(base)? {
            return Err(Error::invalid(format!(
                "window {} is a child; children are released with their parent",
                base
            )));
        }
        self.release_children(base)?;
        self.slots[base.index as usize].node = None;
        self.free.push(base.index);
        Ok(())
    }
}
