//! Cell attributes: colors, styles and the escape fragments that select them.
//!
//! Colors come in two modes, a closed named palette and 24-bit RGB. Two colors
//! are only equal when both the mode and the payload match, so `Named(Red)`
//! is never equal to any RGB value even if a terminal would show the same
//! shade.
//!
//! "Inherit the window default" is not a color. Writing operations take a
//! [`Brush`] whose fields are `Option`s; `None` means the window default.

use std::fmt;

use crossterm::style::{
    Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::Command;
use serde::{Deserialize, Serialize};

/// Named palette entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl NamedColor {
    fn to_crossterm(self) -> CtColor {
        match self {
            NamedColor::Reset => CtColor::Reset,
            NamedColor::Black => CtColor::Black,
            NamedColor::Red => CtColor::DarkRed,
            NamedColor::Green => CtColor::DarkGreen,
            NamedColor::Yellow => CtColor::DarkYellow,
            NamedColor::Blue => CtColor::DarkBlue,
            NamedColor::Magenta => CtColor::DarkMagenta,
            NamedColor::Cyan => CtColor::DarkCyan,
            NamedColor::White => CtColor::Grey,
            NamedColor::BrightBlack => CtColor::DarkGrey,
            NamedColor::BrightRed => CtColor::Red,
            NamedColor::BrightGreen => CtColor::Green,
            NamedColor::BrightYellow => CtColor::Yellow,
            NamedColor::BrightBlue => CtColor::Blue,
            NamedColor::BrightMagenta => CtColor::Magenta,
            NamedColor::BrightCyan => CtColor::Cyan,
            NamedColor::BrightWhite => CtColor::White,
        }
    }
}

/// Foreground or background color of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

impl Default for Color {
    fn default() -> Self {
        Color::RESET
    }
}

impl From<NamedColor> for Color {
    fn from(c: NamedColor) -> Self {
        Color::Named(c)
    }
}

impl Color {
    pub const RESET: Color = Color::Named(NamedColor::Reset);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    pub fn is_rgb(&self) -> bool {
        matches!(self, Color::Rgb(..))
    }

    /// Only the named reset value counts; no RGB value is ever a reset.
    pub fn is_reset(&self) -> bool {
        *self == Color::RESET
    }

    pub fn to_crossterm(&self) -> CtColor {
        match *self {
            Color::Named(n) => n.to_crossterm(),
            Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
        }
    }

    /// Append the SGR fragment selecting this color as foreground
    pub fn write_fg(&self, out: &mut impl fmt::Write) -> fmt::Result {
        SetForegroundColor(self.to_crossterm()).write_ansi(out)
    }

    /// Append the SGR fragment selecting this color as background
    pub fn write_bg(&self, out: &mut impl fmt::Write) -> fmt::Result {
        SetBackgroundColor(self.to_crossterm()).write_ansi(out)
    }

    pub fn fg_escape(&self) -> String {
        let mut s = String::new();
        let _ = self.write_fg(&mut s);
        s
    }

    pub fn bg_escape(&self) -> String {
        let mut s = String::new();
        let _ = self.write_bg(&mut s);
        s
    }
}

/// Text style of a cell
///
/// `Reset` clears colors as well as the style when emitted, which the
/// renderer has to account for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Hidden,
    CrossedOut,
}

impl Style {
    pub fn is_reset(&self) -> bool {
        *self == Style::Reset
    }

    fn to_attribute(self) -> Attribute {
        match self {
            Style::Reset => Attribute::Reset,
            Style::Bold => Attribute::Bold,
            Style::Dim => Attribute::Dim,
            Style::Italic => Attribute::Italic,
            Style::Underline => Attribute::Underlined,
            Style::Blink => Attribute::SlowBlink,
            Style::Reverse => Attribute::Reverse,
            Style::Hidden => Attribute::Hidden,
            Style::CrossedOut => Attribute::CrossedOut,
        }
    }

    pub fn write_escape(&self, out: &mut impl fmt::Write) -> fmt::Result {
        SetAttribute(self.to_attribute()).write_ansi(out)
    }

    pub fn escape(&self) -> String {
        let mut s = String::new();
        let _ = self.write_escape(&mut s);
        s
    }
}

/// Attribute overlay for writing operations; `None` inherits the window default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Brush {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub style: Option<Style>,
}

impl Brush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, c: impl Into<Color>) -> Self {
        self.fg = Some(c.into());
        self
    }

    pub fn bg(mut self, c: impl Into<Color>) -> Self {
        self.bg = Some(c.into());
        self
    }

    pub fn style(mut self, s: Style) -> Self {
        self.style = Some(s);
        self
    }

    /// Fill in unset fields from `defaults`
    pub fn resolve(&self, defaults: Pen) -> Pen {
        Pen {
            fg: self.fg.unwrap_or(defaults.fg),
            bg: self.bg.unwrap_or(defaults.bg),
            style: self.style.unwrap_or(defaults.style),
        }
    }
}

/// A concrete set of attributes, e.g. the state a terminal is currently in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pen {
    pub fg: Color,
    pub bg: Color,
    pub style: Style,
}

impl Pen {
    pub fn new(fg: Color, bg: Color, style: Style) -> Self {
        Self { fg, bg, style }
    }

    pub fn is_reset(&self) -> bool {
        self.fg.is_reset() && self.bg.is_reset() && self.style.is_reset()
    }
}
