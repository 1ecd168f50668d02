//! Renderer - serializes a flat window into text with SGR escapes
//!
//! Escapes are emitted only when an attribute changes relative to the
//! attribute state the output stream is known to be in. That state starts
//! at [`Renderer::start`] (all reset by default), so rendering a grid of
//! default cells produces nothing but characters and row separators.

use std::fmt;
use std::io;

use tracing::trace;

use crate::core::{Color, Pen, Style, Window};
use crate::error::Result;
use crate::wm::{WindowId, WindowTree};

/// A rectangle in window coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole area of `window`
    pub fn full(window: &Window) -> Self {
        Self::new(0, 0, window.width(), window.height())
    }
}

/// Render options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Renderer {
    /// Emitted between rows
    line_separator: String,
    /// Attribute state the output is assumed to be in before rendering
    start: Pen,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            line_separator: "\n".to_string(),
            start: Pen::default(),
        }
    }

    pub fn with_line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }

    pub fn with_start(mut self, start: Pen) -> Self {
        self.start = start;
        self
    }

    pub fn line_separator(&self) -> &str {
        &self.line_separator
    }

    pub fn start(&self) -> Pen {
        self.start
    }

    /// Render `area` of a window that has no children to resolve.
    ///
    /// The area is clipped to the window.
    pub fn render(&self, window: &Window, area: Rect) -> String {
        let mut out = String::new();
        // fmt::Write for String never fails
        let _ = self.write_into(window, area, &mut out);
        out
    }

    /// Like [`Renderer::render`], writing the bytes to `out`
    pub fn render_to<W: io::Write>(&self, window: &Window, area: Rect, out: &mut W) -> io::Result<()> {
        let text = self.render(window, area);
        trace!(bytes = text.len(), "writing rendered area");
        out.write_all(text.as_bytes())
    }

    /// Merge the children of `id` and render the result
    pub fn render_tree(&self, tree: &WindowTree, id: WindowId, area: Rect) -> Result<String> {
        let merged = tree.merge_children(id)?;
        Ok(self.render(&merged, area))
    }

    fn write_into(&self, window: &Window, area: Rect, out: &mut impl fmt::Write) -> fmt::Result {
        let x1 = window.width().min(area.x.saturating_add(area.width));
        let y1 = window.height().min(area.y.saturating_add(area.height));
        let mut current = self.start;

        for y in area.y..y1 {
            if y > area.y {
                // Some terminals paint the rest of a wrapped line with the
                // active background.
                if !current.bg.is_reset() {
                    Color::RESET.write_bg(out)?;
                    current.bg = Color::RESET;
                }
                out.write_str(&self.line_separator)?;
            }
            for x in area.x..x1 {
                let cell = window.get_cell(x, y);
                let target = cell.pen();
                let mut update_fg = target.fg != current.fg;
                let mut update_bg = target.bg != current.bg;
                let update_style = target.style != current.style;
                if update_style && target.style.is_reset() {
                    // a style reset clears both colors
                    update_fg = !target.fg.is_reset();
                    update_bg = !target.bg.is_reset();
                }
                if update_style {
                    target.style.write_escape(out)?;
                }
                if update_fg {
                    target.fg.write_fg(out)?;
                }
                if update_bg {
                    target.bg.write_bg(out)?;
                }
                out.write_char(cell.ch)?;
                current = target;
            }
        }

        if !current.fg.is_reset() {
            Color::RESET.write_fg(out)?;
        }
        if !current.bg.is_reset() {
            Color::RESET.write_bg(out)?;
        }
        if !current.style.is_reset() {
            Style::Reset.write_escape(out)?;
        }
        Ok(())
    }
}

impl WindowTree {
    /// Merge the children of `id` and render `area` with default options
    pub fn render(&self, id: WindowId, area: Rect) -> Result<String> {
        Renderer::default().render_tree(self, id, area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Brush, NamedColor};

    fn red() -> Color {
        Color::Named(NamedColor::Red)
    }

    #[test]
    fn test_default_grid_has_no_escapes() {
        let mut win = Window::new(3, 2);
        win.print_str("abcdef", Brush::default());
        let out = Renderer::new().render(&win, Rect::full(&win));
        assert_eq!(out, "abc\ndef");

        let empty = Window::new(2, 2);
        assert_eq!(Renderer::new().render(&empty, Rect::full(&empty)), "  \n  ");
    }

    #[test]
    fn test_padded_cells_ignore_later_default_changes() {
        let mut win = Window::new(6, 1);
        win.set_default_bg(Color::Named(NamedColor::Blue));
        win.set_char(3, 0, 'x').unwrap();
        win.set_default_bg(Color::RESET);

        let out = Renderer::new().render(&win, Rect::full(&win));
        assert_eq!(out, "   x  ");
    }

    #[test]
    fn test_fg_change_is_emitted_once() {
        let mut win = Window::new(4, 1);
        win.print_str("abcd", Brush::default());
        win.fill_fg(1, 0, 2, 1, Some(red())).unwrap();

        let out = Renderer::new().render(&win, Rect::full(&win));
        let expected = format!("a{}bc{}d", red().fg_escape(), Color::RESET.fg_escape());
        assert_eq!(out, expected);
    }

    #[test]
    fn test_bg_is_reset_before_separator() {
        let mut win = Window::new(3, 2);
        win.print_str("abcdef", Brush::default());
        let blue = Color::rgb(0, 0, 200);
        win.set_bg(2, 0, blue).unwrap();

        let out = Renderer::new().render(&win, Rect::full(&win));
        let expected = format!("ab{}c{}\ndef", blue.bg_escape(), Color::RESET.bg_escape());
        assert_eq!(out, expected);
    }

    #[test]
    fn test_style_reset_reemits_live_colors() {
        let mut win = Window::new(3, 1);
        win.print_str("a", Brush::new().fg(red()).style(Style::Bold));
        win.print_str("b", Brush::new().fg(red()));
        win.print_str("c", Brush::default());

        let out = Renderer::new().render(&win, Rect::full(&win));
        let expected = format!(
            "{}{}a{}{}b{}c",
            Style::Bold.escape(),
            red().fg_escape(),
            Style::Reset.escape(),
            red().fg_escape(),
            Color::RESET.fg_escape(),
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_trailing_resets() {
        let mut win = Window::new(1, 1);
        let bg = Color::rgb(1, 2, 3);
        win.print_str("x", Brush::new().bg(bg).style(Style::Underline));

        let out = Renderer::new().render(&win, Rect::full(&win));
        let expected = format!(
            "{}{}x{}{}",
            Style::Underline.escape(),
            bg.bg_escape(),
            Color::RESET.bg_escape(),
            Style::Reset.escape(),
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_start_state_and_separator_are_options() {
        let mut win = Window::new(2, 2);
        win.set_default_style(Style::Bold);
        win.print_str("abcd", Brush::default());

        let renderer = Renderer::new()
            .with_start(Pen::new(Color::RESET, Color::RESET, Style::Bold))
            .with_line_separator("\r\n");
        let out = renderer.render(&win, Rect::full(&win));
        assert_eq!(out, format!("ab\r\ncd{}", Style::Reset.escape()));
    }

    #[test]
    fn test_area_is_clipped() {
        let mut win = Window::new(4, 3);
        win.print_str("abcdefghijkl", Brush::default());
        let renderer = Renderer::new();
        assert_eq!(renderer.render(&win, Rect::new(1, 1, 2, 1)), "fg");
        assert_eq!(renderer.render(&win, Rect::new(2, 2, 10, 10)), "kl");
        assert_eq!(renderer.render(&win, Rect::new(5, 0, 1, 1)), "");
    }

    #[test]
    fn test_render_to_writer() {
        let mut win = Window::new(2, 1);
        win.print_str("hi", Brush::default());
        let mut buf = Vec::new();
        Renderer::new()
            .render_to(&win, Rect::full(&win), &mut buf)
            .unwrap();
        assert_eq!(buf, b"hi");
    }
}
