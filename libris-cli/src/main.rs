//! Libris - an in-memory library catalog manager
//!
//! Main entry point: parses flags, initializes tracing, then hands a
//! freshly constructed [`Library`] to the interactive menu loop. All
//! state lives in process memory and is lost on exit.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use libris_core::library::Library;

mod menu;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// How listing options render the catalog and the registry
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    Table,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Parser, Debug)]
#[clap(
    name = "libris",
    about = "Interactive in-memory library catalog manager",
    version
)]
struct Cli {
    /// Set log level (logs go to stderr; the menu stays on stdout)
    #[clap(long, default_value = "warn")]
    log_level: LogLevel,

    /// Output format for the display options
    #[clap(long, default_value = "table")]
    format: OutputFormat,
}

/// Initialize the tracing subscriber from CLI flags.
///
/// Logs go to stderr so prompts and listings on stdout stay clean.
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}


fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    let mut library = Library::new();
    tracing::debug!("interactive session starting with an empty library");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run(
        &mut library,
        cli.format,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}
