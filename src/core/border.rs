//! Border kinds and their glyph sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Border drawn one cell outside a child window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderKind {
    #[default]
    None,
    Blank,
    Ascii,
    #[serde(alias = "single")]
    Line,
    #[serde(alias = "double")]
    DoubleLine,
}

/// Border characters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderChars {
    pub vertical: char,
    pub horizontal: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderChars {
    const fn from_set(set: [char; 6]) -> Self {
        Self {
            vertical: set[0],
            horizontal: set[1],
            top_left: set[2],
            top_right: set[3],
            bottom_left: set[4],
            bottom_right: set[5],
        }
    }
}

impl BorderKind {
    /// Width of the inset a border occupies around a window (0 or 1)
    pub fn width(self) -> usize {
        match self {
            BorderKind::None => 0,
            _ => 1,
        }
    }

    pub fn is_none(self) -> bool {
        self == BorderKind::None
    }

    /// Glyphs for this kind; `None` has no glyphs
    pub fn chars(self) -> Option<BorderChars> {
        let set = match self {
            BorderKind::None => return None,
            BorderKind::Blank => [' '; 6],
            BorderKind::Ascii => ['|', '-', '+', '+', '+', '+'],
            BorderKind::Line => ['│', '─', '┌', '┐', '└', '┘'],
            BorderKind::DoubleLine => ['║', '═', '╔', '╗', '╚', '╝'],
        };
        Some(BorderChars::from_set(set))
    }

    pub fn name(self) -> &'static str {
        match self {
            BorderKind::None => "none",
            BorderKind::Blank => "blank",
            BorderKind::Ascii => "ascii",
            BorderKind::Line => "line",
            BorderKind::DoubleLine => "double_line",
        }
    }
}

impl fmt::Display for BorderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "no_border" => Ok(BorderKind::None),
            "blank" => Ok(BorderKind::Blank),
            "ascii" => Ok(BorderKind::Ascii),
            "line" | "single" => Ok(BorderKind::Line),
            "double" | "double_line" | "double-line" => Ok(BorderKind::DoubleLine),
            other => Err(Error::invalid(format!("unknown border kind '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_border_kind() {
        assert_eq!("single".parse::<BorderKind>(), Ok(BorderKind::Line));
        assert_eq!("DOUBLE".parse::<BorderKind>(), Ok(BorderKind::DoubleLine));
        assert_eq!("none".parse::<BorderKind>(), Ok(BorderKind::None));
        assert!(matches!(
            "rounded".parse::<BorderKind>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_glyph_sets() {
        assert!(BorderKind::None.chars().is_none());
        let line = BorderKind::Line.chars().unwrap();
        assert_eq!(line.top_left, '┌');
        assert_eq!(line.horizontal, '─');
        let ascii = BorderKind::Ascii.chars().unwrap();
        assert_eq!((ascii.vertical, ascii.bottom_right), ('|', '+'));
        assert_eq!(BorderKind::Blank.width(), 1);
        assert_eq!(BorderKind::None.width(), 0);
    }
}
