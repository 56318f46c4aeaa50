pub mod toggle;

pub use toggle::DetailToggles;

use crate::download::DOWNLOAD_FILE_NAME;

/// Default id of the list element publications are written into
pub const DEFAULT_CONTAINER_ID: &str = "pub-list";

/// Somewhere the publication list can be written
pub trait RenderTarget {
    /// Id of the designated container element
    fn container_id(&self) -> &str;

    /// Whether the designated container element exists
    fn has_container(&self) -> bool;

    /// Replace the container's contents with the given list items
    fn replace_list(&mut self, items_html: &str);
}

/// Byte range of a container's inner HTML plus the tag that encloses it
#[derive(Debug, Clone, PartialEq, Eq)]
struct ContainerSpan {
    inner_start: usize,
    inner_end: usize,
}

/// An HTML page held in memory with one designated container element.
///
/// The container is found by its `id` attribute; its inner HTML runs up to the
/// first closing tag of the same name, so the container must not nest another
/// element with the same tag.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    html: String,
    container_id: String,
}

impl HtmlDocument {
    pub fn new(html: impl Into<String>, container_id: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            container_id: container_id.into(),
        }
    }

    /// The built-in page: a list container, a download link and the toggle script
    pub fn with_default_template(container_id: &str) -> Self {
        Self::new(default_template(container_id), container_id)
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Position of the container's `id` attribute. The attribute must follow
    /// whitespace so `data-id="..."` and similar names never match.
    fn id_attribute_pos(&self) -> Option<usize> {
        let needles = [
            format!(r#"id="{}""#, self.container_id),
            format!("id='{}'", self.container_id),
        ];
        needles
            .iter()
            .filter_map(|needle| {
                self.html
                    .match_indices(needle.as_str())
                    .map(|(pos, _)| pos)
                    .find(|&pos| {
                        self.html[..pos]
                            .chars()
                            .next_back()
                            .is_some_and(char::is_whitespace)
                    })
            })
            .min()
    }

    fn container_span(&self) -> Option<ContainerSpan> {
        let attr_pos = self.id_attribute_pos()?;

        let tag_start = self.html[..attr_pos].rfind('<')?;
        let tag_name: String = self.html[tag_start + 1..attr_pos]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if tag_name.is_empty() {
            return None;
        }

        let inner_start = attr_pos + self.html[attr_pos..].find('>')? + 1;
        let closing = format!("</{}>", tag_name);
        let inner_end = inner_start + self.html[inner_start..].find(&closing)?;

        Some(ContainerSpan {
            inner_start,
            inner_end,
        })
    }

    /// Current inner HTML of the container
    pub fn container_html(&self) -> Option<&str> {
        self.container_span()
            .map(|span| &self.html[span.inner_start..span.inner_end])
    }
}

impl RenderTarget for HtmlDocument {
    fn container_id(&self) -> &str {
        &self.container_id
    }

    fn has_container(&self) -> bool {
        self.container_span().is_some()
    }

    fn replace_list(&mut self, items_html: &str) {
        if let Some(span) = self.container_span() {
            let replacement = format!("\n{}\n", items_html);
            self.html
                .replace_range(span.inner_start..span.inner_end, &replacement);
        }
    }
}

pub fn default_template(container_id: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Publications</title>
<style>
  .hidden {{ display: none; }}
  .muted {{ color: #777; }}
  .year-splitter {{ list-style: none; font-weight: bold; margin-top: 1em; }}
  .pub-bib {{ background: #f6f6f6; padding: 0.5em; white-space: pre-wrap; }}
</style>
</head>
<body>
<h1>Publications</h1>
<p><a id="download-bib" href="{download}" download>Download BibTeX</a></p>
<ul id="{id}"></ul>
<script>
document.getElementById('{id}').addEventListener('click', function (ev) {{
  var t = ev.target;
  if (!t.classList.contains('bibtex-toggle')) return;
  ev.preventDefault();
  var pre = document.getElementById('bib-' + t.dataset.key);
  if (pre) pre.classList.toggle('hidden');
}});
</script>
</body>
</html>
"#,
        id = container_id,
        download = DOWNLOAD_FILE_NAME,
    )
}
