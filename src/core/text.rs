//! Text layout: writing strings into a window at the cursor.
//!
//! Layout walks the input one scalar value at a time. A `'\n'` or reaching
//! the right edge of a fixed-width window starts a new line. At the right
//! margin the order of preference is:
//!
//! ```text
//! next char is '\n'   → stay, the explicit break handles it
//! width growable      → grow width by one
//! not on last row     → wrap to next row
//! height growable     → grow height by one, wrap
//! otherwise           → stop in the bottom-right corner
//! ```

use tracing::trace;

use super::attrs::{Brush, Pen};
use super::cell::Cell;
use super::window::Window;
use crate::error::Result;

const LINE_BREAK: char = '\n';
const TAB: char = '\t';

enum Flow {
    Continue,
    /// Bottom-right corner of a fully fixed window reached
    Full,
}

impl Window {
    /// Print UTF-8 text at the cursor. See [`Window::print_chars`].
    pub fn print_str(&mut self, s: &str, brush: Brush) -> usize {
        let chars: Vec<char> = s.chars().collect();
        self.print_chars(&chars, brush)
    }

    /// Print scalar values at the cursor and advance it.
    ///
    /// Returns how many input characters were consumed; anything after that
    /// did not fit into the window.
    pub fn print_chars(&mut self, s: &[char], brush: Brush) -> usize {
        let pen = brush.resolve(self.defaults);
        if self.fixed_height && self.cursor.y >= self.height {
            self.cursor.y = self.height.saturating_sub(1);
            self.cursor.x = self.cursor.x.min(self.width.saturating_sub(1));
            return 0;
        }
        let mut x = self.cursor.x;
        let mut y = self.cursor.y;

        let mut i = 0;
        while i < s.len() {
            let ch = s[i];
            if ch == LINE_BREAK || (x >= self.width && self.fixed_width) {
                y += 1;
                if y >= self.height {
                    if self.fixed_height {
                        y = self.height - 1;
                        x = x.min(self.width.saturating_sub(1));
                        break;
                    }
                    self.set_h(y + 1);
                }
                x = 0;
                if ch == LINE_BREAK {
                    i += 1;
                    continue;
                }
            }

            let next = s.get(i + 1).copied();
            let flow = if ch == TAB && self.tab_size > 0 {
                self.put_tab(&mut x, &mut y, pen, next)
            } else if ch < ' ' {
                Ok(Flow::Continue)
            } else {
                self.put_char(&mut x, &mut y, Cell::with_pen(ch, pen), next)
            };
            match flow {
                Ok(Flow::Continue) => i += 1,
                Ok(Flow::Full) => {
                    i += 1;
                    break;
                }
                Err(_) => break,
            }
        }

        if i < s.len() {
            trace!(consumed = i, dropped = s.len() - i, "text did not fit into window");
        }
        self.cursor.x = x;
        self.cursor.y = y;
        i
    }

    /// Write one cell at (x, y) and advance, applying the right-margin rules
    fn put_char(
        &mut self,
        x: &mut usize,
        y: &mut usize,
        cell: Cell,
        next: Option<char>,
    ) -> Result<Flow> {
        self.set_cell(*x, *y, cell)?;
        *x += 1;
        if *x < self.width || next == Some(LINE_BREAK) {
            return Ok(Flow::Continue);
        }
        if !self.fixed_width {
            self.set_w(*x + 1);
            return Ok(Flow::Continue);
        }
        if *y + 1 < self.height {
            *y += 1;
            *x = 0;
            return Ok(Flow::Continue);
        }
        if !self.fixed_height {
            *y += 1;
            self.set_h(*y + 1);
            *x = 0;
            return Ok(Flow::Continue);
        }
        *y = self.height - 1;
        *x = self.width - 1;
        Ok(Flow::Full)
    }

    /// Expand a tab into spaces up to the next tab stop on the current line
    fn put_tab(&mut self, x: &mut usize, y: &mut usize, pen: Pen, next: Option<char>) -> Result<Flow> {
        let count = self.tab_size - *x % self.tab_size;
        let row = *y;
        for k in 0..count {
            let after = if k + 1 < count { Some(' ') } else { next };
            if let Flow::Full = self.put_char(x, y, Cell::blank(pen), after)? {
                return Ok(Flow::Full);
            }
            if *y != row {
                break;
            }
        }
        Ok(Flow::Continue)
    }
}
