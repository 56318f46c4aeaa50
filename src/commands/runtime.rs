use anyhow::{Context, Result};
use reqwest::Client;
use std::future::Future;

use crate::cli::SourceArgs;
use crate::fetch::{create_client, BibSource};
use crate::orchestrator::Orchestrator;

/// One load cycle runs at a time, so a current-thread runtime is enough
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;
    Ok(rt.block_on(future))
}

pub fn client() -> Result<Client> {
    create_client().context("Failed to create HTTP client")
}

/// Build the orchestrator described by the shared source arguments
pub fn orchestrator(args: &SourceArgs) -> Result<Orchestrator> {
    Ok(Orchestrator::new(
        client()?,
        BibSource::parse(&args.source),
        args.parser.primary(),
    ))
}
