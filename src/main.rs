use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;

use tui_controls::data::{self, Dataset};
use tui_controls::demo::DemoApp;

#[derive(Parser)]
#[command(name = "controls-demo")]
#[command(about = "Demo page for the select field and sortable table controls")]
#[command(version)]
struct Cli {
    /// Load table rows from a JSON array of flat objects
    #[arg(short = 'f', long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Start with the dark color scheme
    #[arg(long)]
    dark: bool,

    /// Enable verbose logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut dataset = Dataset::builtin();
    if let Some(path) = &cli.data {
        dataset.rows = data::load_rows(path)?;
    }

    DemoApp::new(dataset, cli.dark).run()
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "tui_controls=debug"
    } else {
        "tui_controls=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
