use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A single escape wrapped in braces: `{\'e}`, `{\c c}`
    static ref BRACED_ESCAPE: Regex = Regex::new(r"\{\\([^}]+)\}").unwrap();

    /// Backslash before a single letter, left over after the accent table ran
    static ref BACKSLASH_LETTER: Regex = Regex::new(r"\\([a-zA-Z])").unwrap();
}

/// Escapes with a precomposed replacement. Order matters only in that every
/// entry must run before the generic backslash cleanup.
const ACCENTS: &[(&str, &str)] = &[
    ("\\^i", "î"),
    ("\\'e", "é"),
    ("\\`e", "è"),
    ("\\\"o", "ö"),
    ("\\\"u", "ü"),
    ("\\'a", "á"),
    ("\\`a", "à"),
    ("\\~n", "ñ"),
    ("\\c c", "ç"),
];

/// Decode the LaTeX escapes commonly found in a personal bibliography into
/// displayable Unicode.
///
/// Unknown macros degrade to their bare letters: braces and single-letter
/// backslashes are removed, nothing is ever rejected.
pub fn decode_latex(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut result = BRACED_ESCAPE.replace_all(input, "\\$1").into_owned();

    for (escape, accented) in ACCENTS {
        result = result.replace(escape, accented);
    }

    result.retain(|c| c != '{' && c != '}');

    let mut result = BACKSLASH_LETTER.replace_all(&result, "$1").into_owned();

    // `$\pi$` has lost its backslash by now
    result = result.replacen("$pi$", "π", 1);

    result
}
