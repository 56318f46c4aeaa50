use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use crate::cli::DownloadArgs;
use crate::commands::runtime::{block_on, client};
use crate::common::{create_spinner, setup_logging};
use crate::download::Download;
use crate::fetch::{fetch_bibliography, BibSource};

/// Fetch the bibliography and save it unchanged as publications.bib
pub fn run_download(args: DownloadArgs) -> Result<PathBuf> {
    setup_logging(&args.log_level)?;

    let client = client()?;
    let source = BibSource::parse(&args.source);

    let spinner = create_spinner(&format!("Fetching {}", source));
    let text = block_on(fetch_bibliography(&client, &source))?;
    spinner.finish_and_clear();
    let text = text.with_context(|| format!("Failed to fetch {}", source))?;

    let path = Download::from_source(&text).save_to_dir(&args.output_dir)?;
    info!("Saved bibliography to {}", path.display());
    Ok(path)
}
