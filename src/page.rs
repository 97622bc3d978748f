//! Accessors for the metadata region of a raw `<page>` element.
//!
//! Pages come straight from the dump, so these work on the raw XML text
//! without parsing it: the wikitext inside `<text>` is not well-formed XML
//! in any useful sense.

use std::borrow::Cow;

use quick_xml::escape::unescape;

use crate::language::Language;

const TITLE_START: &str = "<title>";
const TITLE_END: &str = "</title>";
const TEXT_START: &str = "<text";
const TEXT_END: &str = "</text>";
const NS_START: &str = "<ns>";
const NS_END: &str = "</ns>";

/// Content between the first `start` marker and the following `end` marker.
fn between<'a>(page: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = page.find(start)? + start.len();
    let to = page[from..].find(end)? + from;
    Some(&page[from..to])
}

/// The wikitext of a page: the body of its `<text ...>` element.
///
/// Input without a `<text` element is taken to be bare wikitext and returned
/// as-is. An empty `<text/>` element yields an empty string, as does a
/// `<text` tag that is never closed with `>`.
pub fn markup(page: &str) -> &str {
    let Some(tag_start) = find_text_tag(page) else {
        return page;
    };
    let Some(tag_len) = page[tag_start..].find('>') else {
        return "";
    };
    let body_start = tag_start + tag_len + 1;
    if page[..body_start].ends_with("/>") {
        return "";
    }
    let body = &page[body_start..];
    match body.find(TEXT_END) {
        Some(end) => &body[..end],
        None => body,
    }
}

/// Offset of the first `<text` tag, skipping longer names like `<textarea`.
fn find_text_tag(page: &str) -> Option<usize> {
    page.match_indices(TEXT_START).map(|(at, _)| at).find(|&at| {
        page.as_bytes()
            .get(at + TEXT_START.len())
            .is_none_or(|&next| next.is_ascii_whitespace() || next == b'>' || next == b'/')
    })
}

/// The page title with newline runs folded to single spaces and XML escapes
/// resolved. Missing markers give an empty title.
pub fn title(page: &str) -> String {
    let Some(raw) = between(page, TITLE_START, TITLE_END) else {
        return String::new();
    };
    let folded = fold_newlines(raw);
    match unescape(&folded) {
        Ok(unescaped) => unescaped.into_owned(),
        Err(_) => folded.into_owned(),
    }
}

/// Replace each run of line breaks with one space.
pub fn fold_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    let mut folded = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if c == '\n' || c == '\r' {
            if !in_break {
                folded.push(' ');
            }
            in_break = true;
        } else {
            folded.push(c);
            in_break = false;
        }
    }
    Cow::Owned(folded)
}

/// The page namespace from `<ns>`, if present and numeric.
pub fn namespace(page: &str) -> Option<i32> {
    between(page, NS_START, NS_END)?.trim().parse().ok()
}

/// Whether the page is an article, i.e. in namespace 0.
///
/// Pages without an `<ns>` element are assumed to be articles.
pub fn is_article(page: &str) -> bool {
    match namespace(page) {
        Some(ns) => ns == 0,
        None => !page.contains(NS_START),
    }
}

/// Whether `text` (raw page or cleaned output) starts with a redirect marker.
pub fn is_redirect(text: &str, language: Language) -> bool {
    let body = markup(text).trim_start();
    language.redirect_markers().iter().any(|marker| {
        body.get(..marker.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(marker))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<page>
    <title>Anarchism</title>
    <ns>0</ns>
    <id>12</id>
    <revision>
      <text xml:space="preserve">'''Anarchism''' is a [[political philosophy]].</text>
    </revision>
  </page>"#;

    #[test]
    fn test_markup() {
        assert_eq!(
            markup(PAGE),
            "'''Anarchism''' is a [[political philosophy]]."
        );
        assert_eq!(markup("plain [[wikitext]]"), "plain [[wikitext]]");
        assert_eq!(markup(r#"<text xml:space="preserve" />"#), "");
        assert_eq!(markup("<text bytes=\"3\">abc"), "abc");
        assert_eq!(markup("<text>abc</text>"), "abc");
    }

    #[test]
    fn test_markup_ignores_longer_tag_names() {
        let text = "Lead text. Use <textarea>box</textarea> here.";
        assert_eq!(markup(text), text);
        assert_eq!(
            markup("<textarea>a</textarea><text xml:space=\"preserve\">b</text>"),
            "b"
        );
    }

    #[test]
    fn test_title() {
        assert_eq!(title(PAGE), "Anarchism");
        assert_eq!(title("<title>AT&amp;T</title>"), "AT&T");
        assert_eq!(title("<title>Two\n\nlines</title>"), "Two lines");
        assert_eq!(title("no markers here"), "");
        assert_eq!(title("<title>unterminated"), "");
    }

    #[test]
    fn test_title_bad_escape_kept_raw() {
        assert_eq!(title("<title>A & B</title>"), "A & B");
    }

    #[test]
    fn test_fold_newlines() {
        assert!(matches!(fold_newlines("one line"), Cow::Borrowed(_)));
        assert_eq!(fold_newlines("a\r\nb\n\n\nc"), "a b c");
    }

    #[test]
    fn test_namespace() {
        assert_eq!(namespace(PAGE), Some(0));
        assert_eq!(namespace("<ns>14</ns>"), Some(14));
        assert_eq!(namespace("<ns>x</ns>"), None);
        assert!(is_article(PAGE));
        assert!(!is_article("<ns>14</ns>"));
        assert!(is_article("no namespace"));
    }

    #[test]
    fn test_is_redirect() {
        assert!(is_redirect("#REDIRECT [[Anarchy]]", Language::En));
        assert!(is_redirect("  #redirect [[Anarchy]]", Language::En));
        assert!(is_redirect(
            "<page><text xml:space=\"preserve\">#WEITERLEITUNG [[X]]</text></page>",
            Language::De
        ));
        assert!(is_redirect("#重定向 [[无政府主义]]", Language::Zh));
        assert!(!is_redirect("Anarchism is", Language::En));
        assert!(!is_redirect("#RE", Language::En));
    }
}
