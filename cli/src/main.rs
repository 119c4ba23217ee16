//! mdcopy CLI - copy rendered Markdown to the clipboard
//!
//! Reads Markdown from a file, a literal string or stdin and places HTML
//! and plain-text representations of it on the system clipboard.

mod system;

use clap::{Parser, ValueEnum};
use colored::*;
use mdcopy::{RenderOptions, Source, TextFormat};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use system::SystemClipboard;

/// Copy Markdown to the clipboard as HTML and plain text
#[derive(Parser)]
#[command(
    name = "mdcopy",
    version,
    about = "Copy Markdown to the clipboard as rich text and plain text",
    long_about = "mdcopy - render Markdown to HTML and place it on the clipboard.\n\n\
                  The plain-text representation is the source itself, word-wrapped\n\
                  plain text, or canonical Markdown, depending on --format."
)]
struct Cli {
    /// Enable smart quotes
    #[arg(short, long)]
    smart_quotes: bool,

    /// Mark clipboard contents as transient so history managers skip them
    #[arg(short, long)]
    transient: bool,

    /// Text format of the plain text clipboard representation
    #[arg(short, long, value_enum, default_value = "raw")]
    format: FormatArg,

    /// Text width for the text and markdown formats (0 disables wrapping)
    #[arg(short, long, default_value_t = mdcopy::render::DEFAULT_WIDTH)]
    width: usize,

    /// Input string
    #[arg(short, long)]
    input: Option<String>,

    /// Input file (default: stdin)
    input_file: Option<PathBuf>,

    /// Remove leading and trailing whitespace from the output
    #[arg(long)]
    trim: bool,

    /// Keep running until another application takes the clipboard (X11 needs
    /// this when no clipboard manager is running)
    #[arg(long)]
    wait: bool,

    /// Print the plain text representation instead of using the clipboard
    #[arg(long)]
    print: bool,

    /// Log each pipeline stage to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Plain text representation format
#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// The input, unchanged
    Raw,
    /// Word-wrapped plain text with link targets in place of labels
    Text,
    /// Canonical Markdown
    Markdown,
}

impl From<FormatArg> for TextFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Raw => TextFormat::Raw,
            FormatArg::Text => TextFormat::Text,
            FormatArg::Markdown => TextFormat::Markdown,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = RenderOptions::new()
        .with_smart_quotes(cli.smart_quotes)
        .with_width(cli.width)
        .with_format(cli.format.into())
        .with_trim(cli.trim);

    let source = Source::from_args(cli.input, cli.input_file).read_to_string()?;

    if cli.print {
        let contents = mdcopy::prepare(&source, &options, cli.transient)?;
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(contents.text.as_bytes())?;
        return Ok(());
    }

    let mut clipboard = SystemClipboard::new()?.with_wait(cli.wait);
    mdcopy::copy(&source, &options, cli.transient, &mut clipboard)?;
    tracing::info!(format = %options.format, "copied to clipboard");

    Ok(())
}
