use anyhow::{Context, Result};
use log::info;

use crate::cli::ListArgs;
use crate::commands::runtime::{block_on, orchestrator};
use crate::common::setup_logging;

/// Print the year groups as JSON on stdout
pub fn run_list(args: ListArgs) -> Result<usize> {
    setup_logging(&args.source.log_level)?;

    let orchestrator = orchestrator(&args.source)?;
    let loaded = block_on(orchestrator.load())?
        .with_context(|| format!("Failed to load publications from {}", args.source.source))?;

    if loaded.groups.is_empty() {
        info!("No publications found (parsed 0 entries)");
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&loaded.groups)?
    } else {
        serde_json::to_string(&loaded.groups)?
    };
    println!("{}", json);

    Ok(loaded.record_count())
}
