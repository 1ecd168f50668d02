//! Configuration and color scheme management for termwin.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.termwin/config.toml`
//! - Built-in color schemes for windows, borders and titles
//!
//! # Configuration File
//!
//! ```toml
//! # Color scheme: default, solarized-dark, nord, dracula, gruvbox-dark
//! color_scheme = "nord"
//!
//! # Tab stop distance used by print_str (0 disables tab expansion)
//! tab_size = 4
//!
//! [window]
//! border = "single"   # none, blank, ascii, single, double
//!
//! [render]
//! line_separator = "\r\n"
//! ```
//!
//! Missing keys fall back to their defaults. An unreadable or malformed
//! file is ignored with a warning.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{BorderKind, Color, Window};
use crate::ui::Renderer;

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color scheme name
    pub color_scheme: String,
    /// Tab stop distance for new windows
    pub tab_size: usize,
    /// Child window settings
    pub window: WindowConfig,
    /// Output settings
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_scheme: "default".to_string(),
            tab_size: 4,
            window: WindowConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

/// Child window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub border: BorderKind,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            border: BorderKind::Line,
        }
    }
}

/// Renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub line_separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_separator: "\n".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read config file");
                return Self::default();
            }
        };
        match Self::from_toml_str(&content) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed config file");
                Self::default()
            }
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Get config file path
    pub fn config_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".termwin").join("config.toml"))
    }

    /// Get the color scheme
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::by_name(&self.color_scheme)
    }

    /// Renderer with the configured options
    pub fn renderer(&self) -> Renderer {
        Renderer::new().with_line_separator(self.render.line_separator.clone())
    }

    /// Apply the scheme's default colors and the tab size to a window
    pub fn apply_to(&self, window: &mut Window) {
        let scheme = self.color_scheme();
        window.set_default_fg(scheme.foreground);
        window.set_default_bg(scheme.background);
        window.set_tab_size(self.tab_size);
    }
}

/// Color scheme definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,

    // Window contents
    pub foreground: Color,
    pub background: Color,

    // Child window borders and titles
    pub border_fg: Color,
    pub border_bg: Color,
    pub border_active_fg: Color,

    // Highlighted text
    pub accent: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_scheme()
    }
}

impl ColorScheme {
    /// Default color scheme: the terminal's own colors
    pub fn default_scheme() -> Self {
        Self {
            name: "default".to_string(),
            foreground: Color::RESET,
            background: Color::RESET,
            border_fg: Color::rgb(80, 80, 80),
            border_bg: Color::RESET,
            border_active_fg: Color::rgb(100, 150, 255),
            accent: Color::rgb(200, 200, 0),
        }
    }

    /// Solarized Dark scheme
    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark".to_string(),
            foreground: Color::rgb(147, 161, 161),
            background: Color::rgb(0, 43, 54),
            border_fg: Color::rgb(88, 110, 117),
            border_bg: Color::rgb(0, 43, 54),
            border_active_fg: Color::rgb(38, 139, 210),
            accent: Color::rgb(181, 137, 0),
        }
    }

    /// Nord scheme
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            foreground: Color::rgb(216, 222, 233),
            background: Color::rgb(46, 52, 64),
            border_fg: Color::rgb(76, 86, 106),
            border_bg: Color::rgb(46, 52, 64),
            border_active_fg: Color::rgb(136, 192, 208),
            accent: Color::rgb(163, 190, 140),
        }
    }

    /// Dracula scheme
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            foreground: Color::rgb(248, 248, 242),
            background: Color::rgb(40, 42, 54),
            border_fg: Color::rgb(98, 114, 164),
            border_bg: Color::rgb(40, 42, 54),
            border_active_fg: Color::rgb(189, 147, 249),
            accent: Color::rgb(80, 250, 123),
        }
    }

    /// Gruvbox Dark scheme
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "gruvbox-dark".to_string(),
            foreground: Color::rgb(235, 219, 178),
            background: Color::rgb(40, 40, 40),
            border_fg: Color::rgb(102, 92, 84),
            border_bg: Color::rgb(40, 40, 40),
            border_active_fg: Color::rgb(215, 153, 33),
            accent: Color::rgb(152, 151, 26),
        }
    }

    /// Get scheme by name, falling back to the default scheme
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "solarized-dark" | "solarized_dark" => Self::solarized_dark(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            "gruvbox-dark" | "gruvbox_dark" | "gruvbox" => Self::gruvbox_dark(),
            _ => Self::default_scheme(),
        }
    }

    /// List available schemes
    pub fn list() -> Vec<&'static str> {
        vec!["default", "solarized-dark", "nord", "dracula", "gruvbox-dark"]
    }
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
