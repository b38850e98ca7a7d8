//! termcell - render text through the terminal cell model
//!
//! Writes a line of text into a row of cells (wide characters included),
//! checks the row's span invariant and renders it with the configured
//! palette.
//!
//! # Quick Start
//!
//! ```text
//! termcell                      # Render the built-in sample
//! termcell "漢字 and ascii"      # Render custom text
//! termcell --debug "漢字"        # Show the span map instead of colors
//! termcell --config my.toml     # Use a specific config file
//! ```

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use termcell::config::Config;
use termcell::core::term::{AttributeSet, Cell, Color, Palette, Row};
use termcell::ui::{DebugRenderer, Renderer};

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const SAMPLE_TEXT: &str = "termcell: 漢字 ｗｉｄｅ and narrow";

/// Command line options
struct Options {
    config_path: Option<PathBuf>,
    cols: Option<usize>,
    debug: bool,
    text: Option<String>,
}

fn print_help() {
    eprintln!("termcell {} - terminal cell model demo", VERSION);
    eprintln!();
    eprintln!("Usage: termcell [OPTIONS] [TEXT]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <PATH>   Config file (default: ~/.termcell/config.toml)");
    eprintln!("      --cols <N>        Row width (default: from config)");
    eprintln!("  -d, --debug           Print the span map instead of styled output");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
}

fn parse_args() -> Result<Options, String> {
    let args: Vec<String> = env::args().collect();
    let mut options = Options {
        config_path: None,
        cols: None,
        debug: false,
        text: None,
    };
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                eprintln!("termcell {}", VERSION);
                std::process::exit(0);
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing config path".to_string());
                }
                options.config_path = Some(PathBuf::from(&args[i]));
            }
            "--cols" => {
                i += 1;
                let value = args.get(i).ok_or("Missing column count")?;
                let cols = value
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid column count: {}", value))?;
                options.cols = Some(cols);
            }
            "-d" | "--debug" => {
                options.debug = true;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            arg => {
                options.text = Some(arg.to_string());
            }
        }
        i += 1;
    }

    Ok(options)
}

fn main() -> anyhow::Result<()> {
    let options = match parse_args() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let config = match &options.config_path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load(),
    };
    let palette = config.build_palette().context("Invalid palette configuration")?;
    let cols = options.cols.unwrap_or(config.cols);

    info!(
        "termcell {} starting: {} columns, {}-slot palette",
        VERSION,
        cols,
        palette.len()
    );

    let text = options.text.as_deref().unwrap_or(SAMPLE_TEXT);
    let rows = layout(text, cols, &palette)?;

    if options.debug {
        for row in &rows {
            print!("{}", DebugRenderer::render(row));
        }
    } else {
        let mut stdout = io::stdout();
        Renderer::new(&palette).render_rows(&mut stdout, &rows)?;
    }

    Ok(())
}

/// Lay `text` out into rows, wrapping characters that do not fit.
///
/// Each word gets the next style of a small rotation (bold, underscore,
/// reverse, direct color) so the rendered output shows every attribute.
fn layout(text: &str, cols: usize, palette: &Palette) -> anyhow::Result<Vec<Row>> {
    anyhow::ensure!(cols > 0, "Row width must be at least one column");

    let base = AttributeSet::from_palette(palette);
    let styles = [
        base,
        base.with_bold(true),
        base.with_underscore(true),
        base.with_reverse(true),
        base.with_foreground(Color::from_rgb(0xFF, 0xA5, 0x00)),
    ];

    let mut rows = vec![Row::new(cols, base)];
    let mut col = 0;
    let mut word = 0;

    for ch in text.chars() {
        if ch == ' ' {
            word += 1;
        }
        let attrs = styles[word % styles.len()];

        let cell = match Cell::for_char(ch, attrs) {
            Ok(cell) => cell,
            Err(e) => {
                tracing::debug!("Skipping {:?}: {}", ch, e);
                continue;
            }
        };
        let width = cell.columns_occupied()? as usize;
        anyhow::ensure!(width <= cols, "Character {:?} is wider than the row", ch);

        if col + width > cols {
            rows.push(Row::new(cols, base));
            col = 0;
        }
        if let Some(row) = rows.last_mut() {
            col += row.write(col, cell)?;
        }
    }

    for (index, row) in rows.iter().enumerate() {
        row.validate()
            .with_context(|| format!("Row {} is malformed", index))?;
    }
    Ok(rows)
}
