//! Property-based invariant tests for windows, text layout and rendering.
//!
//! 1. Cell writes round-trip inside a fixed window.
//! 2. Writes outside a fixed window fail and leave it unchanged.
//! 3. Text layout never moves the cursor out of bounds.
//! 4. Text layout never grows a fixed window.
//! 5. Rendering a default grid emits no escapes.
//! 6. Rendering always ends in the reset state.
//! 7. Merging a tree without visible children is the identity.

use proptest::prelude::*;
use termwin::{BorderKind, Brush, Cell, Color, NamedColor, Rect, Renderer, Style, Window, WindowTree};

// ── Helpers ─────────────────────────────────────────────────────────────

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::RESET),
        Just(Color::Named(NamedColor::Red)),
        Just(Color::Named(NamedColor::BrightBlue)),
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::rgb(r, g, b)),
    ]
}

fn style_strategy() -> impl Strategy<Value = Style> {
    prop_oneof![
        Just(Style::Reset),
        Just(Style::Bold),
        Just(Style::Underline),
        Just(Style::Reverse),
    ]
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    (
        proptest::char::range('!', '~'),
        color_strategy(),
        color_strategy(),
        style_strategy(),
    )
        .prop_map(|(ch, fg, bg, style)| Cell::new(ch, fg, bg, style))
}

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            8 => proptest::char::range('a', 'z'),
            1 => Just('\n'),
            1 => Just('\t'),
        ],
        0..80,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Fixed windows
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cell_round_trip(w in 1usize..12, h in 1usize..12, cell in cell_strategy(), sx in 0usize..12, sy in 0usize..12) {
        let (x, y) = (sx % w, sy % h);
        let mut win = Window::new(w, h);
        prop_assert!(win.set_cell(x, y, cell).is_ok());
        prop_assert_eq!(win.get_cell(x, y), cell);
    }

    #[test]
    fn out_of_bounds_write_is_rejected(w in 1usize..12, h in 1usize..12, dx in 0usize..5, y in 0usize..20) {
        let mut win = Window::new(w, h);
        win.set_char(0, 0, 'a').unwrap();
        let before = win.clone();
        prop_assert!(win.set_char(w + dx, y, 'b').is_err());
        prop_assert!(win.set_char(0, h + dx, 'b').is_err());
        prop_assert_eq!(win, before);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Text layout
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn layout_keeps_cursor_in_bounds(w in 1usize..10, h in 1usize..6, tab in 0usize..5, text in text_strategy()) {
        let mut win = Window::new(w, h);
        win.set_tab_size(tab);
        let consumed = win.print_str(&text, Brush::default());
        prop_assert!(consumed <= text.chars().count());
        prop_assert!(win.cursor_x() < win.width());
        prop_assert!(win.cursor_y() < win.height());
        prop_assert_eq!((win.width(), win.height()), (w, h));
        prop_assert!(win.grid().len() <= h);
        prop_assert!(win.grid().iter().all(|row| row.len() <= w));
    }

    #[test]
    fn growable_height_consumes_everything(w in 1usize..10, text in text_strategy()) {
        let mut win = Window::new(w, 1);
        win.set_fixed_height(false);
        let consumed = win.print_str(&text, Brush::default());
        prop_assert_eq!(consumed, text.chars().count());
        prop_assert!(win.cursor_y() < win.height());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Rendering
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn default_grid_renders_without_escapes(w in 0usize..15, h in 0usize..8, text in "[a-z ]{0,40}") {
        let mut win = Window::new(w, h);
        win.print_str(&text, Brush::default());
        let out = Renderer::new().render(&win, Rect::full(&win));
        prop_assert!(!out.contains('\x1b'), "unexpected escape in {:?}", out);
        prop_assert_eq!(out.matches('\n').count(), h.saturating_sub(1));
    }

    #[test]
    fn rendering_ends_reset(cells in proptest::collection::vec(cell_strategy(), 1..30)) {
        let mut win = Window::new(cells.len(), 1);
        for (x, cell) in cells.iter().enumerate() {
            win.set_cell(x, 0, *cell).unwrap();
        }
        let out = Renderer::new().render(&win, Rect::full(&win));
        let last = cells[cells.len() - 1];
        if last.fg.is_reset() && last.bg.is_reset() && last.style.is_reset() {
            prop_assert!(out.ends_with(last.ch));
        } else {
            prop_assert!(out.ends_with('m'));
        }
        // at most fg, bg and style per cell plus the trailing resets
        prop_assert!(out.matches('\x1b').count() <= 3 * cells.len() + 3);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Compositing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn merge_without_visible_children_is_identity(
        w in 1usize..12,
        h in 1usize..8,
        text in text_strategy(),
        children in proptest::collection::vec((0usize..12, 0usize..8, 1usize..5, 1usize..4), 0..4),
    ) {
        let mut tree = WindowTree::new();
        let mut base = Window::new(w, h);
        base.print_str(&text, Brush::default());
        let base = tree.add_window(base);
        for (ox, oy, cw, ch) in children {
            let id = tree.new_child(base, ox, oy, cw, ch, BorderKind::Line).unwrap();
            tree.window_mut(id).unwrap().print_str("hidden", Brush::default());
        }
        let merged = tree.merge_children(base).unwrap();
        prop_assert_eq!(merged.grid(), tree.window(base).unwrap().grid());
    }
}
