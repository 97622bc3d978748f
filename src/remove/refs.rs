//! Citation (`<ref>`) removal.
//!
//! References do not nest, so matching is non-recursive: the nearest `</ref>`
//! after an opening tag ends the span. Dumps carry the tags HTML-escaped
//! (`&lt;ref&gt;`), and article text sometimes mixes both forms, so each
//! lexical form gets its own scan.

use memchr::memmem;

/// Lexical form of the angle brackets around a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefSyntax {
    /// `<ref>...</ref>`
    Literal,
    /// `&lt;ref&gt;...&lt;/ref&gt;`
    Escaped,
}

impl RefSyntax {
    fn lt(self) -> &'static str {
        match self {
            RefSyntax::Literal => "<",
            RefSyntax::Escaped => "&lt;",
        }
    }

    fn gt(self) -> &'static str {
        match self {
            RefSyntax::Literal => ">",
            RefSyntax::Escaped => "&gt;",
        }
    }
}

/// Remove references in both lexical forms, literal first.
pub fn remove_refs(text: &str) -> String {
    let text = remove_refs_in(text, RefSyntax::Literal);
    remove_refs_in(&text, RefSyntax::Escaped)
}

/// Remove `<ref>` spans and self-closing `<ref/>` tags written in `syntax`.
///
/// An opening tag without a matching close tag is left untouched.
pub fn remove_refs_in(text: &str, syntax: RefSyntax) -> String {
    let lt = syntax.lt();
    let gt = syntax.gt();
    let open = format!("{lt}ref");
    let close = format!("{lt}/ref{gt}");

    let bytes = text.as_bytes();
    let open_finder = memmem::Finder::new(&open);
    let gt_finder = memmem::Finder::new(gt);
    let close_finder = memmem::Finder::new(&close);

    let mut output = String::with_capacity(text.len());
    let mut pos = 0;
    let mut search = 0;

    while let Some(rel) = open_finder.find(&bytes[search..]) {
        let start = search + rel;
        let name_end = start + open.len();

        // Only the bare `ref` tag name: skip `<references/>`, `<refname>`
        if !is_tag_name_end(&text[name_end..], gt) {
            search = name_end;
            continue;
        }

        let Some(gt_rel) = gt_finder.find(&bytes[name_end..]) else {
            break;
        };
        let tag_end = name_end + gt_rel + gt.len();
        let self_closing = text[name_end..name_end + gt_rel].trim_end().ends_with('/');

        let span_end = if self_closing {
            tag_end
        } else {
            match close_finder.find(&bytes[tag_end..]) {
                Some(close_rel) => tag_end + close_rel + close.len(),
                None => {
                    search = tag_end;
                    continue;
                }
            }
        };

        output.push_str(&text[pos..start]);
        pos = span_end;
        search = span_end;
    }

    output.push_str(&text[pos..]);
    output
}

fn is_tag_name_end(rest: &str, gt: &str) -> bool {
    rest.starts_with(gt)
        || rest.starts_with('/')
        || rest.chars().next().is_some_and(char::is_whitespace)
}
