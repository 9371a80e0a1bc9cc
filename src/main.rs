//! Markpair - a split-pane terminal markdown editor with live preview.
//!
//! # Usage
//!
//! ```bash
//! markpair draft.md
//! markpair --section 2 draft.md
//! markpair --window-ms 500 draft.md
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use markpair::app::App;
use markpair::section::SectionTarget;
use markpair::sync::DEFAULT_WINDOW_MS;

/// A split-pane terminal markdown editor with live preview
#[derive(Parser, Debug)]
#[command(name = "markpair", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit (created on first save if missing)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Open focused on the Nth section (1-based); non-numeric values
    /// are ignored
    #[arg(short, long, value_name = "N")]
    section: Option<String>,

    /// Preview update throttle window in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_WINDOW_MS)]
    window_ms: u64,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let section = SectionTarget::parse(cli.section.as_deref());

    let mut app = App::new(cli.file)
        .with_section(section)
        .with_window_ms(cli.window_ms);

    app.run().context("Application error")
}
