use log::{error, info, warn};
use reqwest::Client;

use crate::common::{DisplayGroup, RawEntry};
use crate::document::{DetailToggles, RenderTarget};
use crate::download::Download;
use crate::error::LoadError;
use crate::fetch::{fetch_bibliography, BibSource};
use crate::group::sort_and_group;
use crate::normalize::normalize_entries;
use crate::parse::{parse_with_fallback, EntryParser};
use crate::render::{message, render_groups, RenderOptions};

pub const LOADING_MESSAGE: &str = "Loading publications…";
pub const EMPTY_MESSAGE: &str = "No publications found (parsed 0 entries).";
pub const ERROR_MESSAGE: &str = "Error loading publications. See logs for details.";

/// Result of one parsed and grouped bibliography
#[derive(Debug, Clone)]
pub struct LoadedPublications {
    pub source_text: String,
    pub groups: Vec<DisplayGroup>,
    pub toggles: DetailToggles,
}

impl LoadedPublications {
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    /// The fetched text, offered as `publications.bib`
    pub fn download(&self) -> Download {
        Download::from_source(&self.source_text)
    }
}

/// How a load cycle ended. Every variant has already been reported to the target.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Publications rendered into the container
    Loaded(LoadedPublications),
    /// Source fetched but no entries could be parsed
    Empty,
    /// Fetch failed; the error placeholder was shown
    Failed(LoadError),
    /// Nothing was attempted because the render target is unusable
    Aborted(LoadError),
}

impl LoadOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadOutcome::Loaded(_) => "loaded",
            LoadOutcome::Empty => "empty",
            LoadOutcome::Failed(_) => "failed",
            LoadOutcome::Aborted(_) => "aborted",
        }
    }
}

/// Runs fetch → parse → normalize → sort/group → render for one bibliography.
/// The optional library parser is injected here and tried before the fallback.
pub struct Orchestrator {
    client: Client,
    source: BibSource,
    primary: Option<Box<dyn EntryParser>>,
    options: RenderOptions,
}

impl Orchestrator {
    pub fn new(client: Client, source: BibSource, primary: Option<Box<dyn EntryParser>>) -> Self {
        Self {
            client,
            source,
            primary,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn source(&self) -> &BibSource {
        &self.source
    }

    /// Parse source text into raw entries, trying the injected parser first
    pub fn parse(&self, text: &str) -> Vec<RawEntry> {
        parse_with_fallback(self.primary.as_deref(), text)
    }

    /// Synchronous half of the pipeline. Raw entries are dropped once normalized.
    pub fn process(&self, text: &str) -> Vec<DisplayGroup> {
        let records = {
            let entries = self.parse(text);
            info!("Parsed {} entries", entries.len());
            normalize_entries(&entries)
        };
        sort_and_group(records)
    }

    /// Fetch and process without touching any render target
    pub async fn load(&self) -> Result<LoadedPublications, LoadError> {
        let source_text = fetch_bibliography(&self.client, &self.source).await?;
        let groups = self.process(&source_text);
        let toggles = DetailToggles::from_groups(&groups);
        Ok(LoadedPublications {
            source_text,
            groups,
            toggles,
        })
    }

    /// Full load cycle into a render target. Never returns an error: failures
    /// are logged and shown as placeholder messages.
    pub async fn run<T: RenderTarget + ?Sized>(&self, target: &mut T) -> LoadOutcome {
        if !target.has_container() {
            let err = LoadError::RenderTargetMissing {
                container: target.container_id().to_string(),
            };
            error!("{}. Aborting before fetch.", err);
            return LoadOutcome::Aborted(err);
        }

        target.replace_list(&message(LOADING_MESSAGE));

        let loaded = match self.load().await {
            Ok(loaded) => loaded,
            Err(err) => {
                error!("Loading publications failed: {}", err);
                target.replace_list(&message(ERROR_MESSAGE));
                return LoadOutcome::Failed(err);
            }
        };

        if loaded.groups.is_empty() {
            warn!("No entries parsed from {}", self.source);
            target.replace_list(&message(EMPTY_MESSAGE));
            return LoadOutcome::Empty;
        }

        info!(
            "Rendering {} publications in {} year groups",
            loaded.record_count(),
            loaded.groups.len()
        );
        target.replace_list(&render_groups(&loaded.groups, self.options));

        LoadOutcome::Loaded(loaded)
    }
}
