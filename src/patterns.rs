//! Cached regex patterns for the language-independent text passes.
//!
//! Uses LazyLock to compile patterns once on first use. Patterns that depend
//! on the wiki's language live on [`crate::Cleaner`] instead.

use regex_lite::Regex;
use std::sync::LazyLock;

// === Block patterns ===

/// Matches `<!-- ... -->` comments
pub static HTML_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Matches `&lt;!-- ... --&gt;` comments as they appear in dumps
pub static ESCAPED_HTML_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)&lt;!--.*?--&gt;").unwrap());

/// Elements whose content is never prose.
pub const NON_PROSE_TAGS: &[&str] = &["math", "gallery", "timeline", "imagemap", "score"];

/// One pattern per non-prose element, matching either lexical form.
pub static NON_PROSE_BLOCK_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NON_PROSE_TAGS
        .iter()
        .map(|tag| {
            let pattern = format!(
                r"(?s)(?:<|&lt;){tag}(?:\s[^<>]*?)?(?:>|&gt;).*?(?:<|&lt;)/{tag}\s*(?:>|&gt;)"
            );
            Regex::new(&pattern).unwrap()
        })
        .collect()
});

/// Matches `{{convert|5|km|...}}` unit templates with a plain value
pub static CONVERT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(?i:convert)\|\s*([0-9][0-9.,\-]*)\s*\|\s*([^|{}]+?)\s*(?:\|[^{}]*)?\}\}")
        .unwrap()
});

// === Inline patterns ===

/// Matches `__NOTOC__`-style behaviour switches
pub static BEHAVIOUR_SWITCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__[A-Z]+__").unwrap());

/// Matches a line holding only an interlanguage link such as `[[de:Anarchismus]]`
pub static INTERWIKI_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\[\[[a-z]{2,3}(?:-[a-z]+)*:[^\]\n]*\]\][ \t]*(?:\n|$)").unwrap()
});

/// Matches `[[target|label]]` and `[[target]]`, capturing the shown text
pub static INTERNAL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(?:[^\[\]|]*\|)?([^\[\]]*)\]\]").unwrap());

/// Matches `[http://example.org label]`, capturing the label
pub static EXTERNAL_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:(?:https?|ftp):)?//[^\s\]]+[ \t]+([^\]\n]*)\]").unwrap()
});

/// Matches `[http://example.org]` with no label
pub static BARE_EXTERNAL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?:(?:https?|ftp):)?//[^\s\]]+\]").unwrap());

/// Matches bold, italic, and bold italic quote runs
pub static EMPHASIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'''''|'''|''").unwrap());

/// Matches `== Heading ==` lines, capturing the heading text
pub static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*=+[ \t]*(.*?)[ \t]*=+[ \t]*$").unwrap()
});

/// Matches leading `:` indentation
pub static INDENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^:+[ \t]*").unwrap());

/// Matches named and numeric character references
pub static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});").unwrap()
});

/// Matches opening, closing, and self-closing tags
pub static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?[a-zA-Z][a-zA-Z0-9]*(?:\s[^<>]*)?/?>").unwrap()
});

/// Matches parentheses emptied by template removal, e.g. `( )` or `(; )`
pub static EMPTY_PARENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]*\([ \t,;]*\)").unwrap());

// === Whitespace patterns ===

/// Matches trailing spaces and tabs on every line
pub static TRAILING_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

/// Matches three or more consecutive newlines
pub static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        let statics: [&LazyLock<Regex>; 16] = [
            &HTML_COMMENT_RE,
            &ESCAPED_HTML_COMMENT_RE,
            &CONVERT_RE,
            &BEHAVIOUR_SWITCH_RE,
            &INTERWIKI_LINE_RE,
            &INTERNAL_LINK_RE,
            &EXTERNAL_LINK_RE,
            &BARE_EXTERNAL_LINK_RE,
            &EMPHASIS_RE,
            &HEADING_RE,
            &INDENT_RE,
            &ENTITY_RE,
            &TAG_RE,
            &EMPTY_PARENS_RE,
            &TRAILING_SPACE_RE,
            &BLANK_LINES_RE,
        ];
        for re in statics {
            assert!(!re.as_str().is_empty());
        }
        assert_eq!(NON_PROSE_BLOCK_RES.len(), NON_PROSE_TAGS.len());
        for (tag, re) in NON_PROSE_TAGS.iter().zip(NON_PROSE_BLOCK_RES.iter()) {
            assert!(re.is_match(&format!("<{tag}>x</{tag}>")));
            assert!(re.is_match(&format!("&lt;{tag} a=&quot;b&quot;&gt;x\ny&lt;/{tag}&gt;")));
        }
    }

    #[test]
    fn test_heading_captures_text() {
        let caps = HEADING_RE.captures("== History ==").unwrap();
        assert_eq!(&caps[1], "History");
        let caps = HEADING_RE.captures("===Early life===  ").unwrap();
        assert_eq!(&caps[1], "Early life");
    }

    #[test]
    fn test_convert_captures_value_and_unit() {
        let caps = CONVERT_RE.captures("{{convert|5|km|mi|abbr=on}}").unwrap();
        assert_eq!(&caps[1], "5");
        assert_eq!(&caps[2], "km");
        assert!(CONVERT_RE.captures("{{convert|5|{{x}}}}").is_none());
    }
}
