//! Command-line entry point for laying out one day.
//!
//! # Responsibility
//! - Read `START-END` spans from arguments into an `EventStore`.
//! - Print the resulting node groups as JSON on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use daygrid_core::{default_log_level, init_logging, parse_span, EventStore, LoggingConfig};
use log::info;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "daygrid", version)]
#[command(about = "Lay out one day of events into side-by-side columns")]
struct Args {
    /// Absolute directory for rolling log files; logging stays off without it
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Event spans as START-END minute offsets, e.g. 540-600
    #[arg(required = true)]
    spans: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout is reserved for JSON.
    if let Some(log_dir) = &args.log_dir {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(&LoggingConfig::new(level, log_dir.clone()))
            .context("failed to initialize logging")?;
    }

    let mut store = EventStore::new();
    for span in &args.spans {
        let (start, end) = parse_span(span)?;
        store
            .add_event(start, end)
            .with_context(|| format!("rejected span `{span}`"))?;
    }

    let node_groups = store.layout()?;
    info!(
        "event=cli_layout module=cli status=ok events={} groups={}",
        store.len(),
        node_groups.len()
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&node_groups)?
    } else {
        serde_json::to_string(&node_groups)?
    };
    println!("{output}");
    Ok(())
}
