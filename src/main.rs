//! termwin demo - renders a sample window tree to stdout
//!
//! Builds a base window with a few bordered, titled child windows (one of
//! them nested, one hidden), flattens the tree and prints the result with
//! attribute escapes. The resolved cursor position is reported on stderr.
//!
//! # Quick Start
//!
//! ```text
//! termwin                     # Default theme and border
//! termwin -t nord -b double   # Nord colors, double-line borders
//! RUST_LOG=debug termwin      # Show compositing and cursor decisions
//! ```

use std::env;
use std::io::{self, Write};

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use termwin::{
    BorderKind, Brush, ColorScheme, Config, CursorPlacement, Rect, Style, Window, WindowId,
    WindowTree,
};

/// Command line options
struct Options {
    /// Color scheme override
    theme: Option<String>,
    /// Border override
    border: Option<BorderKind>,
    width: usize,
    height: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            theme: None,
            border: None,
            width: 60,
            height: 16,
        }
    }
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("termwin {}", VERSION);
}

fn print_help() {
    eprintln!("termwin {} - layered terminal windows demo", VERSION);
    eprintln!();
    eprintln!("Usage: termwin [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -t, --theme <NAME>    Color scheme");
    eprintln!("  -b, --border <KIND>   Border: none, blank, ascii, single, double");
    eprintln!("      --width <N>       Base window width (default 60)");
    eprintln!("      --height <N>      Base window height (default 16)");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Configuration: ~/.termwin/config.toml");
    eprintln!();
    eprintln!("Color schemes: {}", ColorScheme::list().join(", "));
}

fn parse_size(args: &[String], i: usize, name: &str) -> Result<usize, String> {
    let value = args
        .get(i)
        .ok_or_else(|| format!("Missing value for {}", name))?;
    value
        .parse()
        .map_err(|_| format!("Invalid value for {}: {}", name, value))
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();
    let mut options = Options::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-t" | "--theme" => {
                i += 1;
                let theme = args.get(i).ok_or("Missing theme argument")?;
                options.theme = Some(theme.clone());
            }
            "-b" | "--border" => {
                i += 1;
                let kind = args.get(i).ok_or("Missing border argument")?;
                options.border = Some(kind.parse().map_err(|e| format!("{}", e))?);
            }
            "--width" => {
                i += 1;
                options.width = parse_size(&args, i, "--width")?;
            }
            "--height" => {
                i += 1;
                options.height = parse_size(&args, i, "--height")?;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    if options.width < 30 || options.height < 10 {
        return Err("The demo needs at least a 30x10 window".to_string());
    }
    Ok(options)
}

/// Populate `tree` with the demo layout. Returns the base window and the
/// window whose cursor should be shown.
fn build_demo(
    tree: &mut WindowTree,
    config: &Config,
    border: BorderKind,
    width: usize,
    height: usize,
) -> termwin::Result<(WindowId, WindowId)> {
    let scheme = config.color_scheme();

    let mut base = Window::new(width, height);
    config.apply_to(&mut base);
    base.print_str(
        "termwin demo\n\nBase window text sits behind every child.\n",
        Brush::new().style(Style::Bold),
    );
    base.print_str("Tabs\texpand\tto\tstops.", Brush::default());
    let base = tree.add_window(base);

    let notes = tree.new_child(base, 3, 5, width / 2 - 4, height - 8, border)?;
    tree.set_border(notes, border, scheme.border_fg, scheme.border_bg)?;
    tree.set_title(notes, "notes")?;
    {
        let win = tree.window_mut(notes)?;
        config.apply_to(win);
        win.print_str(
            "Long lines wrap at the right edge of a fixed-width window.",
            Brush::default(),
        );
    }
    tree.show(notes)?;

    let editor = tree.new_child(base, width / 2 + 1, 3, width / 2 - 3, height - 5, border)?;
    tree.set_border(editor, border, scheme.border_active_fg, scheme.border_bg)?;
    tree.set_title(editor, "editor")?;
    {
        let win = tree.window_mut(editor)?;
        config.apply_to(win);
        win.print_str("fn main() {\n", Brush::default());
        win.print_str("    hello", Brush::new().fg(scheme.accent));
        win.print_str("();\n}", Brush::default());
        win.set_cursor(4, 1)?;
    }
    tree.show(editor)?;

    // a popup nested inside the editor, covering its lower right corner
    let popup = tree.new_child(editor, 2, 4, 12, 1, BorderKind::Ascii)?;
    tree.set_border_fg(popup, scheme.accent)?;
    tree.window_mut(popup)?
        .print_str("hello: fn()", Brush::new().style(Style::Reverse));
    tree.show(popup)?;

    // created but never shown: must not appear in the output
    let hidden = tree.new_child(base, 1, 1, 10, 2, border)?;
    tree.window_mut(hidden)?.print_str("invisible", Brush::default());

    Ok((base, editor))
}

fn main() -> anyhow::Result<()> {
    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let mut config = Config::load();
    if let Some(theme) = options.theme {
        if !ColorScheme::list().contains(&theme.as_str()) {
            warn!(theme = %theme, "unknown color scheme, using default");
        }
        config.color_scheme = theme;
    }
    let border = options.border.unwrap_or(config.window.border);
    info!(
        scheme = %config.color_scheme,
        %border,
        width = options.width,
        height = options.height,
        "building demo"
    );

    let mut tree = WindowTree::new();
    let (base, editor) = build_demo(&mut tree, &config, border, options.width, options.height)
        .context("failed to build demo windows")?;

    let placement = tree
        .take_cursor_from_child(base, editor)
        .context("failed to resolve cursor")?;

    let frame = config
        .renderer()
        .render_tree(&tree, base, Rect::new(0, 0, options.width, options.height))
        .context("failed to render demo")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    writeln!(stdout)?;
    stdout.flush()?;

    match placement {
        CursorPlacement::Visible { x, y } => info!(x, y, "cursor visible"),
        CursorPlacement::Hidden => info!("cursor hidden"),
    }
    Ok(())
}
