use anyhow::{bail, Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::cli::RenderArgs;
use crate::commands::runtime::{block_on, orchestrator};
use crate::common::{create_spinner, setup_logging, RenderStats};
use crate::document::HtmlDocument;
use crate::orchestrator::LoadOutcome;
use crate::render::RenderOptions;

fn load_document(args: &RenderArgs) -> Result<HtmlDocument> {
    match &args.template {
        Some(path) => {
            let html = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template: {}", path))?;
            Ok(HtmlDocument::new(html, args.container.clone()))
        }
        None => Ok(HtmlDocument::with_default_template(&args.container)),
    }
}

/// Render the publication list into an HTML page
pub fn run_render(args: RenderArgs) -> Result<RenderStats> {
    let start_time = Instant::now();

    setup_logging(&args.source.log_level)?;

    info!("Starting publication list render");
    info!("Source: {}", args.source.source);
    info!("Template: {}", args.template.as_deref().unwrap_or("(built-in)"));
    info!("Container: #{}", args.container);
    info!("Output: {}", args.output);

    let mut document = load_document(&args)?;
    let orchestrator = orchestrator(&args.source)?.with_options(RenderOptions {
        first_author_only: args.first_author_only,
    });

    let spinner = create_spinner(&format!("Loading {}", orchestrator.source()));
    let outcome = block_on(orchestrator.run(&mut document))?;
    spinner.finish_and_clear();

    let mut stats = RenderStats {
        outcome: outcome.as_str(),
        ..Default::default()
    };

    match &outcome {
        LoadOutcome::Aborted(err) => bail!("Nothing rendered: {}", err),
        LoadOutcome::Failed(err) => warn!("Writing error page: {}", err),
        LoadOutcome::Empty => warn!("Writing page without publications"),
        LoadOutcome::Loaded(loaded) => {
            stats.groups = loaded.groups.len();
            stats.records = loaded.record_count();
        }
    }

    fs::write(&args.output, document.into_html())
        .with_context(|| format!("Failed to write output file: {}", args.output))?;

    if args.with_download {
        if let LoadOutcome::Loaded(loaded) = &outcome {
            let dir = Path::new(&args.output)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            loaded.download().save_to_dir(dir)?;
        }
    }

    info!("==================== SUMMARY ====================");
    info!("Outcome: {}", stats.outcome);
    info!("Publications: {} in {} year groups", stats.records, stats.groups);
    info!("Output: {}", args.output);
    info!("Elapsed: {:.2?}", start_time.elapsed());
    info!("=================================================");

    Ok(stats)
}
