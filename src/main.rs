mod analysis;
mod cli;
mod report;

use analysis::run_analysis;
use clap::Parser;
use cli::{Cli, OutputFormat};
use report::render_summary;
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Diagnostics go to stderr so JSON on stdout stays machine readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Collect the form: an optional input file, then individual flags on top,
    // checked against the ranges the desktop viewer accepts.
    let cli = Cli::parse();
    let inputs = cli.resolve_inputs()?;

    // One update: clamp the load position, solve the reactions, sample the
    // moment diagram and derive the bending stress. A degenerate section still
    // yields reactions.
    let summary = run_analysis(&inputs)?;

    match cli.format {
        OutputFormat::Text => print!("{}", render_summary(&summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}
