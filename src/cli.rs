use clap::{Args, Parser, Subcommand};

use crate::document::DEFAULT_CONTAINER_ID;
use crate::parse::ParserChoice;

pub const DEFAULT_SOURCE: &str = "publications.bib";

#[derive(Parser)]
#[command(name = "publication-list")]
#[command(about = "Fetch a BibTeX bibliography and render it as a year-grouped publication list")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the publication list into an HTML page
    Render(RenderArgs),

    /// Print the normalized, year-grouped publications as JSON
    List(ListArgs),

    /// Save the raw bibliography as publications.bib
    Download(DownloadArgs),
}

/// Where to read the bibliography and how to parse it
#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    /// Bibliography location: an http(s) URL or a local path
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Parser strategy tried before the regex fallback
    #[arg(long, value_enum, default_value = "auto")]
    pub parser: ParserChoice,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// HTML template containing the container element (default: built-in page)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Id of the container element the list is written into
    #[arg(short, long, default_value = DEFAULT_CONTAINER_ID)]
    pub container: String,

    /// Output HTML file
    #[arg(short, long, default_value = "publications.html")]
    pub output: String,

    /// Show only the first author of each entry
    #[arg(long)]
    pub first_author_only: bool,

    /// Also write publications.bib next to the output page
    #[arg(long)]
    pub with_download: bool,
}

#[derive(Parser, Clone, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Parser, Clone, Debug)]
pub struct DownloadArgs {
    /// Bibliography location: an http(s) URL or a local path
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Directory to write publications.bib into
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let cli = Cli::try_parse_from(["publication-list", "render"]).unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.source.source, DEFAULT_SOURCE);
                assert_eq!(args.source.parser, ParserChoice::Auto);
                assert_eq!(args.container, "pub-list");
                assert_eq!(args.output, "publications.html");
                assert!(!args.first_author_only);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_list_with_fallback_parser() {
        let cli = Cli::try_parse_from([
            "publication-list",
            "list",
            "--source",
            "https://example.org/pubs.bib",
            "--parser",
            "fallback",
            "--pretty",
        ])
        .unwrap();
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.source.source, "https://example.org/pubs.bib");
                assert_eq!(args.source.parser, ParserChoice::Fallback);
                assert!(args.pretty);
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_rejects_unknown_parser() {
        assert!(Cli::try_parse_from(["publication-list", "list", "--parser", "magic"]).is_err());
    }
}
