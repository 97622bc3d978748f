//! The cleaning pipeline.
//!
//! ## Pipeline Order
//!
//! The order is load-bearing: later passes assume earlier constructs are gone.
//!
//! 1. **References** - `<ref>` spans, literal then escaped
//! 2. **Image captions** - before link conversion, so caption links go too
//! 3. **Tables**
//! 4. **Templates** - unit conversions are rendered first, the rest dropped
//! 5. **Footer** - truncated from the first footer heading (optional)
//! 6. **Text passes** - comments, categories, links, emphasis, headings,
//!    entities, tags
//! 7. **Whitespace** - blank line runs folded
//! 8. **Title** - prepended with one blank line (optional)

use regex_lite::Regex;

use crate::error::Result;
use crate::language::Language;
use crate::page;
use crate::passes;
use crate::remove::{remove_image_captions_with, remove_refs, remove_tables, remove_templates};

/// Converts raw page markup to plain text.
///
/// A cleaner is immutable once built and can be shared across threads.
///
/// ```
/// use wikiclean::Cleaner;
///
/// let cleaner = Cleaner::builder().build().unwrap();
/// let text = cleaner.clean("'''Anarchism''' is a [[political philosophy]].<ref>Cite</ref>");
/// assert_eq!(text, "Anarchism is a political philosophy.");
/// ```
#[derive(Debug, Clone)]
pub struct Cleaner {
    language: Language,
    with_title: bool,
    with_footer: bool,
    category_re: Regex,
}

/// Builder for [`Cleaner`]. Defaults to English, no title, no footer.
#[derive(Debug, Clone, Default)]
pub struct CleanerBuilder {
    language: Language,
    with_title: bool,
    with_footer: bool,
}

impl CleanerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Prepend the page title to the cleaned text.
    pub fn with_title(mut self, with_title: bool) -> Self {
        self.with_title = with_title;
        self
    }

    /// Keep the trailing see-also/references/external-links sections.
    pub fn with_footer(mut self, with_footer: bool) -> Self {
        self.with_footer = with_footer;
        self
    }

    /// Compile the locale patterns and produce the cleaner.
    pub fn build(self) -> Result<Cleaner> {
        let category_re = passes::category_link_pattern(self.language.category_namespaces())?;
        log::debug!(
            "built {} cleaner (title: {}, footer: {})",
            self.language,
            self.with_title,
            self.with_footer
        );
        Ok(Cleaner {
            language: self.language,
            with_title: self.with_title,
            with_footer: self.with_footer,
            category_re,
        })
    }
}

/// Build a cleaner from a language code such as `"EN"`.
///
/// Fails with [`crate::Error::UnsupportedLanguage`] for unknown codes.
pub fn configure(language: &str, with_title: bool, with_footer: bool) -> Result<Cleaner> {
    CleanerBuilder::new()
        .language(language.parse()?)
        .with_title(with_title)
        .with_footer(with_footer)
        .build()
}

impl Cleaner {
    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::new()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn with_title(&self) -> bool {
        self.with_title
    }

    pub fn with_footer(&self) -> bool {
        self.with_footer
    }

    /// The page title, newline runs folded to spaces. Empty if absent.
    pub fn title(&self, page: &str) -> String {
        page::title(page)
    }

    /// Convert a raw page (or bare wikitext) to plain text.
    pub fn clean(&self, page: &str) -> String {
        let markup = page::markup(page);

        let text = remove_refs(markup);
        let text = remove_image_captions_with(&text, self.language.caption_prefixes());
        let text = remove_tables(&text);
        let text = passes::fix_unit_conversion(&text);
        let text = remove_templates(&text);

        let text = if self.with_footer {
            text
        } else {
            truncate_footer(&text, self.language.footer_markers())
        };

        let text = self.apply_text_passes(&text);
        let text = passes::collapse_whitespace(&text);

        log::trace!(
            "cleaned {} bytes of markup into {} bytes",
            markup.len(),
            text.len()
        );

        let title = if self.with_title {
            self.title(page)
        } else {
            String::new()
        };
        if title.is_empty() {
            text
        } else {
            format!("{title}\n\n{text}")
        }
    }

    fn apply_text_passes(&self, text: &str) -> String {
        let text = passes::remove_html_comments(text);
        let text = passes::remove_non_prose_blocks(&text);
        let text = passes::remove_behaviour_switches(&text);
        let text = passes::remove_category_links(&text, &self.category_re);
        let text = passes::remove_interwiki_lines(&text);
        let text = passes::convert_internal_links(&text);
        let text = passes::convert_external_links(&text);
        let text = passes::remove_emphasis(&text);
        let text = passes::remove_heading_markers(&text);
        let text = passes::remove_indentation(&text);
        let text = passes::decode_html_entities(&text);
        let text = passes::remove_html_tags(&text);
        passes::remove_empty_parentheticals(&text)
    }
}

/// Cut `text` at the first heading line whose name is one of `markers`.
///
/// Footer sections are trailing and contiguous, so one truncation removes all
/// of them. Marker names compare ASCII case-insensitively.
pub fn truncate_footer(text: &str, markers: &[&str]) -> String {
    match footer_start(text, markers) {
        Some(offset) => text[..offset].to_string(),
        None => text.to_string(),
    }
}

/// Byte offset of the first footer heading line.
pub fn footer_start(text: &str, markers: &[&str]) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if let Some(name) = heading_name(line)
            && markers.iter().any(|marker| name.eq_ignore_ascii_case(marker))
        {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// The text of a `== Name ==` heading line.
///
/// Anything after the closing `=` run, such as a trailing comment, is ignored.
fn heading_name(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix('=')?.trim_start_matches('=');
    let name = rest[..rest.find('=')?].trim();
    (!name.is_empty()).then_some(name)
}
