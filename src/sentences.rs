//! Sentence records for corpus output.
//!
//! Splits cleaned text on Unicode sentence boundaries (UAX #29) and numbers
//! each sentence within its article, producing lines such as
//! `Anarchism.0003\tAnarchism is a political philosophy.`

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// One numbered sentence of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord<'a> {
    pub title: &'a str,
    pub index: usize,
    pub text: String,
}

impl fmt::Display for SentenceRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:04}\t{}", self.title, self.index, self.text)
    }
}

/// Sentences of `text`, each on a single line with internal whitespace
/// folded to single spaces.
pub fn sentences(text: &str) -> impl Iterator<Item = String> + '_ {
    text.unicode_sentences()
        .map(|sentence| sentence.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|sentence| !sentence.is_empty())
}

/// Number the sentences of an article's cleaned text.
pub fn records<'a>(title: &'a str, text: &'a str) -> impl Iterator<Item = SentenceRecord<'a>> {
    sentences(text)
        .enumerate()
        .map(move |(index, text)| SentenceRecord { title, index, text })
}
