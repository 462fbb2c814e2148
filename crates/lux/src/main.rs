//! Lux CLI - documentation tooling for the smart lighting control site.
//!
//! Provides commands for:
//! - `render`: Expand page macros and the table-of-contents marker in a page
//! - `describe`: List every navigation page with its resolved description
//! - `tree`: Print the navigation tree

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DescribeArgs, RenderArgs, TreeArgs};
use output::Output;

/// Lux - documentation tooling.
#[derive(Parser)]
#[command(name = "lux", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page, replacing macros and the table-of-contents marker.
    Render(RenderArgs),
    /// List every page in the navigation with its description.
    Describe(DescribeArgs),
    /// Print the navigation tree as a nested list.
    Tree(TreeArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so rendered pages on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Describe(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
