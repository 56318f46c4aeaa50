pub mod fallback;
#[cfg(feature = "biblatex")]
pub mod library;

pub use fallback::FallbackParser;
#[cfg(feature = "biblatex")]
pub use library::LibraryParser;

use log::{info, warn};

use crate::common::RawEntry;

/// A strategy for turning bibliography source text into raw entries
pub trait EntryParser {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Parse the whole source. `None` means the strategy produced no usable result.
    fn parse(&self, text: &str) -> Option<Vec<RawEntry>>;
}

/// Which strategy to try before the regex fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ParserChoice {
    /// Library-backed parser when compiled in, then fallback
    Auto,
    /// Regex fallback parser only
    Fallback,
}

impl ParserChoice {
    /// Build the optional primary parser for this choice
    pub fn primary(self) -> Option<Box<dyn EntryParser>> {
        match self {
            ParserChoice::Fallback => None,
            ParserChoice::Auto => library_parser(),
        }
    }
}

#[cfg(feature = "biblatex")]
fn library_parser() -> Option<Box<dyn EntryParser>> {
    Some(Box::new(LibraryParser))
}

#[cfg(not(feature = "biblatex"))]
fn library_parser() -> Option<Box<dyn EntryParser>> {
    None
}

/// Try the primary parser, falling back to the regex parser when it is absent,
/// yields nothing usable, or yields an empty list
pub fn parse_with_fallback(primary: Option<&dyn EntryParser>, text: &str) -> Vec<RawEntry> {
    if let Some(parser) = primary {
        info!("Using parser: {}", parser.name());
        match parser.parse(text) {
            Some(entries) if !entries.is_empty() => return entries,
            Some(_) => warn!("Parser {} returned no entries, running fallback parse", parser.name()),
            None => warn!("Parser {} gave no usable result, running fallback parse", parser.name()),
        }
    }

    FallbackParser.parse(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedParser(Option<Vec<RawEntry>>);

    impl EntryParser for FixedParser {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn parse(&self, _text: &str) -> Option<Vec<RawEntry>> {
            self.0.clone()
        }
    }

    const SOURCE: &str = "@article{fromregex,\n title={T}\n}";

    #[test]
    fn test_no_primary_uses_fallback() {
        let entries = parse_with_fallback(None, SOURCE);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].citation_key, "fromregex");
    }

    #[test]
    fn test_primary_result_wins() {
        let primary = FixedParser(Some(vec![RawEntry::new("fromlib", "book")]));
        let entries = parse_with_fallback(Some(&primary), SOURCE);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].citation_key, "fromlib");
    }

    #[test]
    fn test_empty_primary_result_falls_back() {
        let primary = FixedParser(Some(Vec::new()));
        let entries = parse_with_fallback(Some(&primary), SOURCE);
        assert_eq!(entries[0].citation_key, "fromregex");
    }

    #[test]
    fn test_unusable_primary_result_falls_back() {
        let primary = FixedParser(None);
        let entries = parse_with_fallback(Some(&primary), SOURCE);
        assert_eq!(entries[0].citation_key, "fromregex");
    }

    #[test]
    fn test_fallback_choice_has_no_primary() {
        assert!(ParserChoice::Fallback.primary().is_none());
    }
}
