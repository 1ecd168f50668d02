//! Window: a sized cell grid with a cursor and default attributes.
//!
//! Each dimension is either fixed or growable. Writes beyond a fixed
//! dimension are rejected with [`Error::OutOfBounds`]; writes beyond a
//! growable one extend the window. Reads never fail: anything outside the
//! allocated grid reads as a space in the window's default attributes.
//!
//! Rows and cells are allocated lazily, so a fresh window has an empty grid
//! regardless of its declared size.

use super::attrs::{Color, Pen, Style};
use super::border::{BorderChars, BorderKind};
use super::cell::{Cell, Grid};
use crate::error::{Error, Result};

/// Cursor position and visibility
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorState {
    pub x: usize,
    pub y: usize,
    pub visible: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            visible: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) fixed_width: bool,
    pub(crate) fixed_height: bool,
    pub(crate) grid: Grid,
    pub(crate) cursor: CursorState,
    pub(crate) defaults: Pen,
    pub(crate) tab_size: usize,
}

impl Window {
    /// Create a window with both dimensions fixed
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            fixed_width: true,
            fixed_height: true,
            grid: vec![Vec::new(); height],
            cursor: CursorState::default(),
            defaults: Pen::default(),
            tab_size: 0,
        }
    }

    /// Create a window that grows in both dimensions as it is written to
    pub fn growable(width: usize, height: usize) -> Self {
        let mut win = Self::new(width, height);
        win.fixed_width = false;
        win.fixed_height = false;
        win
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_fixed_width(&self) -> bool {
        self.fixed_width
    }

    pub fn set_fixed_width(&mut self, fixed: bool) {
        self.fixed_width = fixed;
    }

    pub fn is_fixed_height(&self) -> bool {
        self.fixed_height
    }

    pub fn set_fixed_height(&mut self, fixed: bool) {
        self.fixed_height = fixed;
    }

    fn check_pos(&self, x: usize, y: usize) -> Result<()> {
        if (y >= self.height && self.fixed_height) || (x >= self.width && self.fixed_width) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Make (x, y) addressable, growing non-fixed dimensions as needed.
    ///
    /// Both axes are checked before anything changes, so a rejected call
    /// leaves the window untouched. Newly allocated cells, including the
    /// padding left of `x`, hold the default cell (space, all reset).
    pub fn assure_pos(&mut self, x: usize, y: usize) -> Result<()> {
        self.check_pos(x, y)?;
        if y >= self.height {
            self.height = y + 1;
        }
        if x >= self.width {
            self.width = x + 1;
        }
        if y >= self.grid.len() {
            self.grid.resize(y + 1, Vec::new());
        }
        // padding is the reset cell, not the current defaults
        let row = &mut self.grid[y];
        if x >= row.len() {
            row.resize(x + 1, Cell::default());
        }
        Ok(())
    }

    fn cell_ref(&self, x: usize, y: usize) -> Option<&Cell> {
        self.grid.get(y).and_then(|row| row.get(x))
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Cell {
        self.cell_ref(x, y)
            .copied()
            .unwrap_or_else(|| Cell::blank(self.defaults))
    }

    pub fn get_char(&self, x: usize, y: usize) -> char {
        self.cell_ref(x, y).map_or(' ', |c| c.ch)
    }

    pub fn get_fg(&self, x: usize, y: usize) -> Color {
        self.cell_ref(x, y).map_or(self.defaults.fg, |c| c.fg)
    }

    pub fn get_bg(&self, x: usize, y: usize) -> Color {
        self.cell_ref(x, y).map_or(self.defaults.bg, |c| c.bg)
    }

    pub fn get_style(&self, x: usize, y: usize) -> Style {
        self.cell_ref(x, y).map_or(self.defaults.style, |c| c.style)
    }

    fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell> {
        self.assure_pos(x, y)?;
        Ok(&mut self.grid[y][x])
    }

    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        *self.cell_mut(x, y)? = cell;
        Ok(())
    }

    pub fn set_char(&mut self, x: usize, y: usize, ch: char) -> Result<()> {
        self.cell_mut(x, y)?.ch = ch;
        Ok(())
    }

    pub fn set_fg(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        self.cell_mut(x, y)?.fg = color;
        Ok(())
    }

    pub fn set_bg(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        self.cell_mut(x, y)?.bg = color;
        Ok(())
    }

    pub fn set_style(&mut self, x: usize, y: usize, style: Style) -> Result<()> {
        self.cell_mut(x, y)?.style = style;
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replace the grid wholesale.
    ///
    /// Content beyond a fixed dimension is cut off; a growable dimension is
    /// extended to fit the new content.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
        if self.grid.len() > self.height {
            if self.fixed_height {
                self.grid.truncate(self.height);
            } else {
                self.height = self.grid.len();
            }
        }
        for row in &mut self.grid {
            if row.len() > self.width {
                if self.fixed_width {
                    row.truncate(self.width);
                } else {
                    self.width = row.len();
                }
            }
        }
        self.clamp_cursor();
    }

    pub fn copy_grid_from(&mut self, other: &Window) {
        self.set_grid(other.grid.clone());
    }

    /// Drop all content and home the cursor
    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.grid.resize(self.height, Vec::new());
        self.cursor.x = 0;
        self.cursor.y = 0;
    }

    pub fn clear_row(&mut self, y: usize) {
        if let Some(row) = self.grid.get_mut(y) {
            row.clear();
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor.x = self.cursor.x.min(self.width.saturating_sub(1));
        self.cursor.y = self.cursor.y.min(self.height.saturating_sub(1));
    }

    pub fn set_w(&mut self, width: usize) {
        if width == self.width {
            return;
        }
        self.width = width;
        for row in &mut self.grid {
            row.truncate(width);
        }
        self.clamp_cursor();
    }

    pub fn set_h(&mut self, height: usize) {
        self.grid.resize(height, Vec::new());
        self.height = height;
        self.clamp_cursor();
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.set_w(width);
        self.set_h(height);
    }

    /// Shrink the width to the populated columns, keeping at least
    /// `min_width` and the cursor column.
    pub fn trim_w(&mut self, min_width: usize) {
        if self.width <= min_width {
            self.set_w(min_width);
            return;
        }
        let used = self.grid.iter().map(Vec::len).max().unwrap_or(0);
        let w = min_width.max(used).max(self.cursor.x + 1);
        self.set_w(w);
    }

    /// Shrink the height to the populated rows, keeping at least
    /// `min_height` and the cursor row.
    pub fn trim_h(&mut self, min_height: usize) {
        if self.height <= min_height {
            self.set_h(min_height);
            return;
        }
        let mut used = self.height.min(self.grid.len());
        while used > 0 && self.grid[used - 1].is_empty() {
            used -= 1;
        }
        let h = min_height.max(used).max(self.cursor.y + 1);
        self.set_h(h);
    }

    pub fn trim(&mut self, min_width: usize, min_height: usize) {
        self.trim_h(min_height);
        self.trim_w(min_width);
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn cursor_x(&self) -> usize {
        self.cursor.x
    }

    pub fn cursor_y(&self) -> usize {
        self.cursor.y
    }

    /// Move the cursor, growing the window like a write would
    pub fn set_cursor(&mut self, x: usize, y: usize) -> Result<()> {
        self.assure_pos(x, y)?;
        self.cursor.x = x;
        self.cursor.y = y;
        Ok(())
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor.visible
    }

    pub fn show_cursor(&mut self) {
        self.cursor.visible = true;
    }

    pub fn hide_cursor(&mut self) {
        self.cursor.visible = false;
    }

    pub fn defaults(&self) -> Pen {
        self.defaults
    }

    pub fn default_fg(&self) -> Color {
        self.defaults.fg
    }

    pub fn set_default_fg(&mut self, color: Color) {
        self.defaults.fg = color;
    }

    pub fn default_bg(&self) -> Color {
        self.defaults.bg
    }

    pub fn set_default_bg(&mut self, color: Color) {
        self.defaults.bg = color;
    }

    pub fn default_style(&self) -> Style {
        self.defaults.style
    }

    pub fn set_default_style(&mut self, style: Style) {
        self.defaults.style = style;
    }

    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    /// Tab stop distance for `print_str`; 0 disables tab expansion
    pub fn set_tab_size(&mut self, tab_size: usize) {
        self.tab_size = tab_size;
    }

    /// Apply `f` to every cell of a rectangle. The far corner is checked up
    /// front so a rejected fill changes nothing.
    fn fill_with(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        f: impl Fn(&mut Cell),
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.check_pos(x + width - 1, y + height - 1)?;
        for j in y..y + height {
            for i in x..x + width {
                f(self.cell_mut(i, j)?);
            }
        }
        Ok(())
    }

    pub fn fill_fg(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        color: Option<Color>,
    ) -> Result<()> {
        let color = color.unwrap_or(self.defaults.fg);
        self.fill_with(x, y, width, height, |cell| cell.fg = color)
    }

    pub fn fill_bg(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        color: Option<Color>,
    ) -> Result<()> {
        let color = color.unwrap_or(self.defaults.bg);
        self.fill_with(x, y, width, height, |cell| cell.bg = color)
    }

    pub fn fill_style(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        style: Option<Style>,
    ) -> Result<()> {
        let style = style.unwrap_or(self.defaults.style);
        self.fill_with(x, y, width, height, |cell| cell.style = style)
    }

    /// Write a glyph with colors if (x, y) lies inside the window; the cell
    /// keeps its style. Never grows the window.
    pub(crate) fn paint(&mut self, x: isize, y: isize, ch: char, fg: Color, bg: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        if let Ok(cell) = self.cell_mut(x, y) {
            cell.ch = ch;
            cell.fg = fg;
            cell.bg = bg;
        }
    }

    /// Draw a frame whose outer corners are (left, top) and (right, bottom).
    /// Parts outside the window, including negative coordinates, are skipped.
    pub(crate) fn draw_frame(
        &mut self,
        (left, top): (isize, isize),
        (right, bottom): (isize, isize),
        chars: BorderChars,
        fg: Color,
        bg: Color,
    ) {
        let max_x = self.width as isize;
        let max_y = self.height as isize;
        for y in (top + 1).max(0)..bottom.min(max_y) {
            self.paint(left, y, chars.vertical, fg, bg);
            self.paint(right, y, chars.vertical, fg, bg);
        }
        for x in (left + 1).max(0)..right.min(max_x) {
            self.paint(x, top, chars.horizontal, fg, bg);
            self.paint(x, bottom, chars.horizontal, fg, bg);
        }
        self.paint(left, top, chars.top_left, fg, bg);
        self.paint(right, top, chars.top_right, fg, bg);
        self.paint(left, bottom, chars.bottom_left, fg, bg);
        self.paint(right, bottom, chars.bottom_right, fg, bg);
    }

    /// Draw a rectangle outline. A rectangle never grows the window; only
    /// its in-window parts are drawn.
    #[allow(clippy::too_many_arguments)]
    pub fn print_rect(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        border: BorderKind,
        fg: Color,
        bg: Color,
    ) {
        let Some(chars) = border.chars() else {
            return;
        };
        if width == 0 || height == 0 || x >= self.width || y >= self.height {
            return;
        }
        let (left, top) = (x as isize, y as isize);
        let right = left + width as isize - 1;
        let bottom = top + height as isize - 1;
        self.draw_frame((left, top), (right, bottom), chars, fg, bg);
    }

    /// Copy a rectangle into a new fixed-size window.
    ///
    /// Source cells that were never allocated are left out rather than
    /// filled. The cursor carries over, translated, only if it lies inside
    /// the rectangle.
    pub fn cutout(&self, x0: usize, y0: usize, width: usize, height: usize) -> Window {
        let mut cropped = Window::new(width, height);
        cropped.defaults = self.defaults;
        cropped.tab_size = self.tab_size;
        let y_end = (y0 + height).min(self.height).min(self.grid.len());
        for y in y0..y_end {
            cropped.grid[y - y0] = self.grid[y].iter().skip(x0).take(width).copied().collect();
        }
        let CursorState { x, y, visible } = self.cursor;
        let inside = x >= x0 && x < x0 + width && y >= y0 && y < y0 + height;
        cropped.cursor = if inside {
            CursorState {
                x: x - x0,
                y: y - y0,
                visible,
            }
        } else {
            CursorState {
                x: 0,
                y: 0,
                visible,
            }
        };
        cropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attrs::NamedColor;

    #[test]
    fn test_fixed_round_trip() {
        let mut win = Window::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                let cell = Cell::new('x', Color::rgb(x as u8, y as u8, 0), Color::RESET, Style::Bold);
                win.set_cell(x, y, cell).unwrap();
                assert_eq!(win.get_cell(x, y), cell);
            }
        }
    }

    #[test]
    fn test_out_of_bounds_leaves_grid_unchanged() {
        let mut win = Window::new(4, 3);
        win.set_char(1, 1, 'a').unwrap();
        let before = win.clone();

        assert_eq!(
            win.set_char(4, 0, 'b'),
            Err(Error::OutOfBounds { x: 4, y: 0, width: 4, height: 3 })
        );
        assert!(win.set_char(0, 3, 'b').is_err());
        assert!(win.set_char(10, 10, 'b').is_err());
        assert_eq!(win, before);
    }

    #[test]
    fn test_growable_writes_extend_window() {
        let mut win = Window::growable(2, 2);
        win.set_char(5, 4, 'z').unwrap();
        assert_eq!(win.width(), 6);
        assert_eq!(win.height(), 5);
        assert_eq!(win.get_char(5, 4), 'z');
    }

    #[test]
    fn test_reads_outside_grid_use_defaults() {
        let mut win = Window::new(3, 3);
        win.set_default_fg(Color::Named(NamedColor::Green));
        win.set_default_style(Style::Underline);
        let cell = win.get_cell(100, 100);
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.fg, Color::Named(NamedColor::Green));
        assert_eq!(cell.style, Style::Underline);
        assert_eq!(win.get_bg(7, 0), Color::RESET);
    }

    #[test]
    fn test_padding_uses_default_cell() {
        let mut win = Window::new(6, 1);
        win.set_default_bg(Color::Named(NamedColor::Blue));
        win.set_char(3, 0, 'x').unwrap();
        win.set_default_bg(Color::RESET);

        assert_eq!(win.get_cell(0, 0), Cell::default());
        assert_eq!(win.get_bg(2, 0), Color::RESET);
        assert_eq!(win.get_cell(3, 0), Cell::new('x', Color::RESET, Color::RESET, Style::Reset));
        assert_eq!(win.get_bg(5, 0), Color::RESET);
    }

    #[test]
    fn test_resize_truncates_and_clamps_cursor() {
        let mut win = Window::new(5, 4);
        win.set_char(1, 1, 'a').unwrap();
        win.set_char(4, 3, 'z').unwrap();
        win.set_cursor(4, 3).unwrap();

        win.set_w(3);
        assert_eq!(win.width(), 3);
        assert!(win.grid().iter().all(|row| row.len() <= 3));
        assert_eq!((win.cursor_x(), win.cursor_y()), (2, 3));

        win.set_h(2);
        assert_eq!(win.grid().len(), 2);
        assert_eq!((win.cursor_x(), win.cursor_y()), (2, 1));
        assert_eq!(win.get_char(1, 1), 'a');

        win.resize(6, 5);
        assert_eq!((win.width(), win.height()), (6, 5));
        assert_eq!(win.grid().len(), 5);
        assert_eq!(win.get_char(1, 1), 'a');
        assert_eq!(win.get_char(4, 3), ' ');
    }

    #[test]
    fn test_copy_grid_and_clear_row() {
        let mut src = Window::new(6, 2);
        for (x, ch) in "abcdef".chars().enumerate() {
            src.set_char(x, 0, ch).unwrap();
        }
        src.set_char(0, 1, 'g').unwrap();

        let mut fixed = Window::new(3, 3);
        fixed.copy_grid_from(&src);
        assert_eq!(fixed.grid()[0].len(), 3);
        assert_eq!(fixed.get_char(2, 0), 'c');
        assert_eq!(fixed.get_char(0, 1), 'g');
        assert_eq!(fixed.width(), 3);

        let mut grow = Window::growable(2, 1);
        grow.copy_grid_from(&src);
        assert_eq!((grow.width(), grow.height()), (6, 2));
        assert_eq!(grow.get_char(5, 0), 'f');

        fixed.clear_row(0);
        assert_eq!(fixed.get_char(0, 0), ' ');
        assert_eq!(fixed.get_char(0, 1), 'g');
        fixed.clear_row(10);
        assert_eq!(fixed.grid().len(), 2);
    }

    #[test]
    fn test_set_grid_truncates_fixed() {
        let mut win = Window::new(2, 1);
        let row = vec![Cell::default(); 5];
        win.set_grid(vec![row.clone(), row]);
        assert_eq!(win.grid().len(), 1);
        assert_eq!(win.grid()[0].len(), 2);

        let mut grow = Window::growable(2, 1);
        grow.set_grid(vec![vec![Cell::default(); 5]; 3]);
        assert_eq!((grow.width(), grow.height()), (5, 3));
    }

    #[test]
    fn test_trim_keeps_content_and_cursor() {
        let mut win = Window::new(20, 10);
        win.set_char(4, 2, 'x').unwrap();
        win.set_cursor(6, 1).unwrap();
        win.trim(1, 1);
        assert_eq!(win.width(), 7);
        assert_eq!(win.height(), 3);
        assert_eq!(win.get_char(4, 2), 'x');

        let mut small = Window::new(2, 2);
        small.trim(5, 4);
        assert_eq!((small.width(), small.height()), (5, 4));
    }

    #[test]
    fn test_fill_rejects_whole_rectangle() {
        let mut win = Window::new(3, 3);
        let before = win.clone();
        assert!(win.fill_bg(1, 1, 3, 1, Some(Color::rgb(1, 2, 3))).is_err());
        assert_eq!(win, before);

        win.set_default_bg(Color::Named(NamedColor::Blue));
        win.fill_bg(0, 0, 2, 2, None).unwrap();
        assert_eq!(win.get_bg(1, 1), Color::Named(NamedColor::Blue));
        assert_eq!(win.get_char(1, 1), ' ');
    }

    #[test]
    fn test_print_rect_clips_to_window() {
        let mut win = Window::new(4, 3);
        win.print_rect(1, 1, 5, 5, BorderKind::Ascii, Color::RESET, Color::RESET);
        assert_eq!(win.get_char(1, 1), '+');
        assert_eq!(win.get_char(2, 1), '-');
        assert_eq!(win.get_char(1, 2), '|');
        assert_eq!(win.width(), 4);
        assert_eq!(win.height(), 3);
    }

    #[test]
    fn test_cutout() {
        let mut win = Window::new(5, 5);
        win.set_char(2, 2, 'c').unwrap();
        win.set_char(4, 4, 'e').unwrap();
        win.set_cursor(3, 3).unwrap();

        let cut = win.cutout(2, 2, 2, 2);
        assert_eq!((cut.width(), cut.height()), (2, 2));
        assert_eq!(cut.get_char(0, 0), 'c');
        assert_eq!((cut.cursor_x(), cut.cursor_y()), (1, 1));
        // unallocated source cells are omitted
        assert!(cut.grid()[1].len() <= 2);

        let outside = win.cutout(0, 0, 2, 2);
        assert_eq!((outside.cursor_x(), outside.cursor_y()), (0, 0));
    }
}
