//! HTML fragments for the publication list.
//!
//! Every function here is pure: records in, markup out. Displayed text goes
//! through LaTeX decoding and then HTML escaping; link targets are
//! URI-encoded. The per-entry BibTeX block is keyed by the record's raw
//! source text, which is also what the toggle link carries in `data-key`.

use crate::common::{DisplayGroup, PublicationRecord};
use crate::text::{decode_latex, escape_html, href};

/// Display switches for the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show only the first author of each entry
    pub first_author_only: bool,
}

/// Placeholder list item for loading, empty and error states
pub fn message(text: &str) -> String {
    format!(r#"<li class="muted">{}</li>"#, escape_html(text))
}

fn display(text: &str) -> String {
    escape_html(&decode_latex(text))
}

/// BibTeX text shown in the detail block: the verbatim source when known,
/// otherwise a block rebuilt from the record
pub fn bibtex_block(record: &PublicationRecord) -> String {
    if !record.raw_source.trim().is_empty() {
        return record.raw_source.clone();
    }

    let mut fields: Vec<(&str, String)> = Vec::new();
    if !record.title.is_empty() {
        fields.push(("title", record.title.clone()));
    }
    if !record.authors.is_empty() {
        fields.push(("author", record.authors.join(" and ")));
    }
    if !record.year.is_empty() {
        fields.push(("year", record.year.clone()));
    }
    if !record.venue.is_empty() {
        let name = if record.entry_type.eq_ignore_ascii_case("article") {
            "journal"
        } else {
            "booktitle"
        };
        fields.push((name, record.venue.clone()));
    }
    if !record.doi.is_empty() {
        fields.push(("doi", record.doi.clone()));
    }
    if !record.url.is_empty() {
        fields.push(("url", record.url.clone()));
    }

    let body: Vec<String> = fields
        .iter()
        .map(|(name, value)| format!("  {} = {{{}}}", name, value))
        .collect();

    format!("@{}{{{},\n{}\n}}", record.entry_type, record.id, body.join(",\n"))
}

pub fn render_entry(record: &PublicationRecord, options: RenderOptions) -> String {
    let shown_authors = if options.first_author_only {
        &record.authors[..record.authors.len().min(1)]
    } else {
        &record.authors[..]
    };
    let authors_html = shown_authors
        .iter()
        .map(|a| format!(r#"<span class="pub-author">{}</span>"#, display(a)))
        .collect::<Vec<_>>()
        .join(", ");

    let mut meta = Vec::new();
    if !record.venue.is_empty() {
        meta.push(format!(
            r#"<span class="pub-conference"><em>{}</em></span>"#,
            display(&record.venue)
        ));
    }
    if !record.year.is_empty() {
        meta.push(format!(r#"<span class="pub-year">{}</span>"#, escape_html(&record.year)));
    }
    let meta_html = if meta.is_empty() {
        authors_html
    } else {
        format!("{} • {}", authors_html, meta.join(" • "))
    };

    let key = escape_html(&record.raw_source);
    let mut links = Vec::new();
    if !record.doi.is_empty() {
        links.push(format!(
            r#"<a class="pub-link" href="{}" target="_blank" rel="noopener">DOI</a>"#,
            href(&record.doi)
        ));
    }
    if !record.url.is_empty() {
        links.push(format!(
            r#"<a class="pub-link" href="{}" target="_blank" rel="noopener">PDF</a>"#,
            href(&record.url)
        ));
    }
    links.push(format!(
        r##"<a class="pub-link bibtex-toggle" href="#" data-key="{}">BibTeX</a>"##,
        key
    ));

    format!(
        r#"<li class="pub-entry" id="pub-{id}">
  <div class="pub-main"><span class="pub-title">{title}</span></div>
  <div class="pub-meta">{meta}</div>
  <div class="pub-actions">{links}</div>
  <pre class="pub-bib hidden" id="bib-{key}">{bib}</pre>
</li>"#,
        id = escape_html(&record.id),
        title = display(&record.title),
        meta = meta_html,
        links = links.join(" • "),
        key = key,
        bib = escape_html(&bibtex_block(record)),
    )
}

/// Year heading (omitted for the undated group) followed by the entries
pub fn render_group(group: &DisplayGroup, options: RenderOptions) -> String {
    let mut parts = Vec::with_capacity(group.records.len() + 1);
    if !group.is_undated() {
        parts.push(format!(
            r#"<li class="year-splitter">{}</li>"#,
            escape_html(&group.label)
        ));
    }
    parts.extend(group.records.iter().map(|r| render_entry(r, options)));
    parts.join("\n")
}

pub fn render_groups(groups: &[DisplayGroup], options: RenderOptions) -> String {
    groups
        .iter()
        .map(|g| render_group(g, options))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PublicationRecord {
        PublicationRecord {
            id: "alcaraz2023".to_string(),
            entry_type: "inproceedings".to_string(),
            title: "Norms for Agents & {\\'e}tudes".to_string(),
            authors: vec!["Alcaraz, B.".to_string(), "Fran{\\c c}ois, M.".to_string()],
            year: "2023".to_string(),
            doi: "https://doi.org/10.1000/xyz".to_string(),
            url: "https://example.org/paper one.pdf".to_string(),
            venue: "AAMAS".to_string(),
            raw_source: "@inproceedings{alcaraz2023,\n title={Norms}\n}".to_string(),
        }
    }

    #[test]
    fn test_entry_markup() {
        let html = render_entry(&sample(), RenderOptions::default());
        assert!(html.contains(r#"id="pub-alcaraz2023""#));
        assert!(html.contains("Norms for Agents &amp; études"));
        assert!(html.contains(r#"<span class="pub-author">François, M.</span>"#));
        assert!(html.contains("<em>AAMAS</em>"));
        assert!(html.contains(r#"<span class="pub-year">2023</span>"#));
        assert!(html.contains(r#"href="https://doi.org/10.1000/xyz""#));
        assert!(html.contains(r#"href="https://example.org/paper%20one.pdf""#));
        assert!(html.contains(r#"class="pub-bib hidden""#));
        assert!(html.contains("@inproceedings{alcaraz2023,\n title={Norms}\n}"));
    }

    #[test]
    fn test_toggle_key_matches_block_id() {
        let html = render_entry(&sample(), RenderOptions::default());
        let key = escape_html(&sample().raw_source);
        assert!(html.contains(&format!(r#"data-key="{}""#, key)));
        assert!(html.contains(&format!(r#"id="bib-{}""#, key)));
    }

    #[test]
    fn test_links_omitted_when_absent() {
        let mut record = sample();
        record.doi.clear();
        record.url.clear();
        let html = render_entry(&record, RenderOptions::default());
        assert!(!html.contains(">DOI<"));
        assert!(!html.contains(">PDF<"));
        assert!(html.contains(">BibTeX<"));
    }

    #[test]
    fn test_first_author_only() {
        let options = RenderOptions { first_author_only: true };
        let html = render_entry(&sample(), options);
        assert!(html.contains("Alcaraz, B."));
        assert!(!html.contains("François"));
    }

    #[test]
    fn test_bibtex_block_reconstructed_without_source() {
        let record = PublicationRecord {
            id: "smith2020".to_string(),
            entry_type: "article".to_string(),
            title: "A Study".to_string(),
            authors: vec!["Smith, J.".to_string(), "Doe, A.".to_string()],
            year: "2020".to_string(),
            venue: "Nature".to_string(),
            ..Default::default()
        };
        assert_eq!(
            bibtex_block(&record),
            "@article{smith2020,\n  title = {A Study},\n  author = {Smith, J. and Doe, A.},\n  year = {2020},\n  journal = {Nature}\n}"
        );
    }

    #[test]
    fn test_group_headings() {
        let dated = DisplayGroup {
            label: "2021".to_string(),
            records: vec![sample()],
        };
        let undated = DisplayGroup {
            label: String::new(),
            records: vec![sample()],
        };
        let html = render_groups(&[dated, undated], RenderOptions::default());
        assert_eq!(html.matches("year-splitter").count(), 1);
        assert!(html.starts_with(r#"<li class="year-splitter">2021</li>"#));
        assert_eq!(html.matches(r#"class="pub-entry""#).count(), 2);
    }

    #[test]
    fn test_message_is_escaped() {
        assert_eq!(message("a < b"), r#"<li class="muted">a &lt; b</li>"#);
    }
}
