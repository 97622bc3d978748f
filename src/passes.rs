//! Simple text substitution passes.
//!
//! Each pass is a pure `&str -> String` function. They assume the nested
//! constructs (captions, templates, tables) are already gone: link conversion
//! in particular would otherwise leak caption text.

use regex_lite::Regex;

use crate::entities::decode_entities;
use crate::patterns::{
    BARE_EXTERNAL_LINK_RE, BEHAVIOUR_SWITCH_RE, BLANK_LINES_RE, CONVERT_RE, EMPHASIS_RE,
    EMPTY_PARENS_RE, ESCAPED_HTML_COMMENT_RE, EXTERNAL_LINK_RE, HEADING_RE, HTML_COMMENT_RE,
    INDENT_RE, INTERNAL_LINK_RE, INTERWIKI_LINE_RE, NON_PROSE_BLOCK_RES, TAG_RE,
    TRAILING_SPACE_RE,
};

/// Replace `{{convert|value|unit|...}}` with `value unit`.
///
/// Runs before template removal so the measurement survives in the text.
pub fn fix_unit_conversion(text: &str) -> String {
    CONVERT_RE.replace_all(text, "$1 $2").into_owned()
}

/// Remove HTML comments in both literal and escaped form.
pub fn remove_html_comments(text: &str) -> String {
    let text = HTML_COMMENT_RE.replace_all(text, "");
    ESCAPED_HTML_COMMENT_RE.replace_all(&text, "").into_owned()
}

/// Remove `<math>`, `<gallery>` and similar non-prose blocks.
pub fn remove_non_prose_blocks(text: &str) -> String {
    NON_PROSE_BLOCK_RES
        .iter()
        .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
}

/// Remove `__NOTOC__`, `__TOC__` and other behaviour switches.
pub fn remove_behaviour_switches(text: &str) -> String {
    BEHAVIOUR_SWITCH_RE.replace_all(text, "").into_owned()
}

/// Compile a pattern matching `[[Namespace:...]]` category links for the
/// given namespace names.
pub fn category_link_pattern<S: AsRef<str>>(
    namespaces: &[S],
) -> Result<Regex, regex_lite::Error> {
    let names = namespaces
        .iter()
        .map(|ns| regex_lite::escape(ns.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\[\[[ \t]*(?i:{names})[ \t]*:[^\]\n]*\]\]"))
}

/// Remove category links matched by a [`category_link_pattern`].
pub fn remove_category_links(text: &str, pattern: &Regex) -> String {
    pattern.replace_all(text, "").into_owned()
}

/// Remove lines that hold only an interlanguage link.
pub fn remove_interwiki_lines(text: &str) -> String {
    INTERWIKI_LINE_RE.replace_all(text, "").into_owned()
}

/// Replace `[[target|label]]` with `label` and `[[target]]` with `target`.
pub fn convert_internal_links(text: &str) -> String {
    INTERNAL_LINK_RE.replace_all(text, "$1").into_owned()
}

/// Replace `[url label]` with `label`; drop unlabeled `[url]`.
pub fn convert_external_links(text: &str) -> String {
    let text = EXTERNAL_LINK_RE.replace_all(text, "$1");
    BARE_EXTERNAL_LINK_RE.replace_all(&text, "").into_owned()
}

/// Strip `''italic''`, `'''bold'''` and `'''''both'''''` markers.
pub fn remove_emphasis(text: &str) -> String {
    EMPHASIS_RE.replace_all(text, "").into_owned()
}

/// Reduce `== Heading ==` lines to `Heading`.
pub fn remove_heading_markers(text: &str) -> String {
    HEADING_RE.replace_all(text, "$1").into_owned()
}

/// Strip `:` indentation at line starts.
pub fn remove_indentation(text: &str) -> String {
    INDENT_RE.replace_all(text, "").into_owned()
}

/// Decode character references, twice, since dumps double-encode.
///
/// Entity syntax that the source escaped once more (an article showing
/// `&nbsp;` literally) comes out as a live entity, and decodes again if the
/// output is cleaned a second time.
pub fn decode_html_entities(text: &str) -> String {
    decode_entities(&decode_entities(text))
}

/// Remove any tag markup still present, such as `<br />` or `<span>`.
pub fn remove_html_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// Drop parentheses left empty once their template content is gone.
pub fn remove_empty_parentheticals(text: &str) -> String {
    EMPTY_PARENS_RE.replace_all(text, "").into_owned()
}

/// Trim trailing spaces, fold blank line runs to one blank line, and trim
/// the whole document.
pub fn collapse_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = TRAILING_SPACE_RE.replace_all(&text, "");
    let text = BLANK_LINES_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}
