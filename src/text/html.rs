use url::Url;

/// Escape text for use inside HTML element content or a double-quoted attribute
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link target ready to be placed in an `href="..."` attribute. Absolute URLs
/// are serialized by `url`, which percent-encodes spaces and non-ASCII.
/// Anything that does not parse (relative paths) is only HTML-escaped.
pub fn href(target: &str) -> String {
    match Url::parse(target.trim()) {
        Ok(url) => escape_html(url.as_str()),
        Err(_) => escape_html(target),
    }
}
