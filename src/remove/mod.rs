//! Span removers for nested and paired markup constructs.
//!
//! [`remove_nested`] is the generic engine: one linear scan that drops every
//! span opened by a [`DelimiterPair`]'s open token and closed when the nesting
//! depth returns to zero. The image caption, template and table removers are
//! the same engine with different literals.
//!
//! An open token with no matching close removes everything through the end of
//! the input. A close token outside any span is ordinary text.

mod refs;

pub use refs::{RefSyntax, remove_refs, remove_refs_in};

use memchr::memmem;

/// Literal tokens bounding a nestable markup construct.
///
/// `open` starts a span at depth one. Inside a span, `nest` increments the
/// depth and `close` decrements it. For most constructs `nest` and `open` are
/// the same token; image captions use a prefixed trigger (`[[File:`) but nest
/// on bare brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterPair<'a> {
    pub open: &'a str,
    pub nest: &'a str,
    pub close: &'a str,
}

impl<'a> DelimiterPair<'a> {
    /// A pair where the opening token also nests.
    pub const fn new(open: &'a str, close: &'a str) -> Self {
        Self {
            open,
            nest: open,
            close,
        }
    }

    /// A pair whose spans start at `open` but nest on `nest`.
    pub const fn prefixed(open: &'a str, nest: &'a str, close: &'a str) -> Self {
        Self { open, nest, close }
    }
}

/// `{{template|...}}`
pub const TEMPLATE: DelimiterPair<'static> = DelimiterPair::new("{{", "}}");

/// `{| table |}`
pub const TABLE: DelimiterPair<'static> = DelimiterPair::new("{|", "|}");

/// Brackets that nest inside an image caption.
pub const CAPTION_NEST: &str = "[[";
pub const CAPTION_CLOSE: &str = "]]";

/// Caption prefixes recognized by [`remove_image_captions`].
pub const DEFAULT_CAPTION_PREFIXES: &[&str] = &["File", "Image"];

/// Remove every span delimited by `pair` from `text`.
///
/// Runs in a single left-to-right pass. Text outside removed spans is copied
/// unchanged; since tokens are matched as whole UTF-8 sequences, every cut
/// falls on a `char` boundary.
pub fn remove_nested(text: &str, pair: DelimiterPair<'_>) -> String {
    if pair.open.is_empty() || pair.close.is_empty() {
        return text.to_string();
    }

    let bytes = text.as_bytes();
    let open_finder = memmem::Finder::new(pair.open);
    let mut output = String::with_capacity(text.len());
    let mut pos = 0;

    while let Some(rel_start) = open_finder.find(&bytes[pos..]) {
        let start = pos + rel_start;
        output.push_str(&text[pos..start]);

        match span_end(bytes, start + pair.open.len(), pair) {
            Some(end) => pos = end,
            // Unbalanced: the span swallows the rest of the input
            None => return output,
        }
    }

    output.push_str(&text[pos..]);
    output
}

/// Find the byte offset just past the close token that brings the depth of a
/// span (already at depth one when scanning starts at `from`) back to zero.
fn span_end(bytes: &[u8], from: usize, pair: DelimiterPair<'_>) -> Option<usize> {
    let nest_finder = memmem::Finder::new(pair.nest);
    let close_finder = memmem::Finder::new(pair.close);
    let find = |finder: &memmem::Finder<'_>, at: usize| {
        finder.find(&bytes[at..]).map(|p| p + at)
    };

    let mut depth = 1usize;
    let mut next_nest = find(&nest_finder, from);
    let mut next_close = find(&close_finder, from);

    loop {
        let close_at = next_close?;
        match next_nest {
            Some(nest_at) if nest_at < close_at => {
                depth += 1;
                let cursor = nest_at + pair.nest.len();
                next_nest = find(&nest_finder, cursor);
                if close_at < cursor {
                    next_close = find(&close_finder, cursor);
                }
            }
            _ => {
                depth -= 1;
                let cursor = close_at + pair.close.len();
                if depth == 0 {
                    return Some(cursor);
                }
                next_close = find(&close_finder, cursor);
                if next_nest.is_some_and(|nest_at| nest_at < cursor) {
                    next_nest = find(&nest_finder, cursor);
                }
            }
        }
    }
}

/// Remove image and file embeds, captions included, for the given prefixes.
///
/// Each prefix gets its own scan, in order, with the span opened by
/// `[[{prefix}:`.
pub fn remove_image_captions_with<S: AsRef<str>>(text: &str, prefixes: &[S]) -> String {
    prefixes.iter().fold(text.to_string(), |acc, prefix| {
        let open = format!("{CAPTION_NEST}{}:", prefix.as_ref());
        remove_nested(
            &acc,
            DelimiterPair::prefixed(&open, CAPTION_NEST, CAPTION_CLOSE),
        )
    })
}

/// Remove `[[File:...]]` and `[[Image:...]]` embeds.
pub fn remove_image_captions(text: &str) -> String {
    remove_image_captions_with(text, DEFAULT_CAPTION_PREFIXES)
}

/// Remove `{{...}}` templates.
pub fn remove_templates(text: &str) -> String {
    remove_nested(text, TEMPLATE)
}

/// Remove `{| ... |}` tables.
pub fn remove_tables(text: &str) -> String {
    remove_nested(text, TABLE)
}
