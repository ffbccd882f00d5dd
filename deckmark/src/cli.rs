//! Command-line interface definitions for deckmark

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use deckmark::collaborators::ExportFormat;
use std::path::PathBuf;

/// Output format for the export command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Self-contained HTML page
    Html,
    /// PDF document (needs an external exporter)
    Pdf,
}

impl OutputFormat {
    /// Settle the export format from `--format` or the output extension
    ///
    /// Fills in a missing extension. PDF is rejected here, before the deck is
    /// read, since only HTML is built in.
    ///
    /// # Parameters
    /// * `format` - Explicit `--format`, if any
    /// * `output` - Output path, extended in place when it has no extension
    ///
    /// # Returns
    /// * `Ok(OutputFormat)` - A format deckmark can write
    /// * `Err` - Unknown extension, or PDF
    pub fn resolve(format: Option<OutputFormat>, output: &mut PathBuf) -> Result<Self> {
        let format = match format {
            Some(fmt) => {
                if output.extension().is_none() {
                    output.set_extension(match fmt {
                        OutputFormat::Html => "html",
                        OutputFormat::Pdf => "pdf",
                    });
                }
                fmt
            }
            None => match output.extension().and_then(|s| s.to_str()) {
                Some("html") | Some("htm") => OutputFormat::Html,
                Some("pdf") => OutputFormat::Pdf,
                Some(ext) => {
                    anyhow::bail!(
                        "Unknown output format for extension '.{}'. Supported: .html\nUse --format to specify explicitly.",
                        ext
                    );
                }
                None => {
                    output.set_extension("html");
                    OutputFormat::Html
                }
            },
        };

        if let OutputFormat::Pdf = format {
            anyhow::bail!(
                "PDF export needs an external exporter. Export to HTML and print it from a browser instead."
            );
        }

        Ok(format)
    }
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => ExportFormat::Html,
            OutputFormat::Pdf => ExportFormat::Pdf,
        }
    }
}

/// CLI structure for the deckmark application
#[derive(Parser)]
#[command(name = "deckmark")]
#[command(version)]
#[command(about = "Markdown slide decks", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to deckmark.toml next to the deck)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available subcommands for deckmark
#[derive(Subcommand)]
pub enum Commands {
    /// List the slides of a deck
    Slides {
        /// Markdown deck
        file: PathBuf,
    },

    /// Present a deck, reading one key name per line from stdin
    Present {
        /// Markdown deck
        file: PathBuf,

        /// 1-based slide to start from (overrides the configuration)
        #[arg(short, long)]
        start: Option<usize>,

        /// Do not start in full screen
        #[arg(long)]
        windowed: bool,
    },

    /// Replace the body of one slide
    Edit {
        /// Markdown deck
        file: PathBuf,

        /// 1-based slide number
        #[arg(short, long)]
        slide: usize,

        /// File holding the new slide body
        #[arg(short, long, value_name = "FILE")]
        content: PathBuf,

        /// Write the result here instead of back to the deck
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a deck
    Export {
        /// Markdown deck
        file: PathBuf,

        /// Output file path
        #[arg(short, long, default_value = "slides.html")]
        output: PathBuf,

        /// Output format (detected from the output extension if omitted)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Create a starter deck and deckmark.toml
    Init {
        /// Directory to initialize (defaults to current directory)
        path: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// Deck title
        #[arg(short, long)]
        title: Option<String>,
    },
}
