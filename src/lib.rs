//! # wikiclean
//!
//! A fast converter from Wikipedia markup to plain text, for building text
//! corpora from database dumps.
//!
//! ## Quick Start
//!
//! ```
//! use wikiclean::Cleaner;
//!
//! let cleaner = Cleaner::builder().with_title(true).build().unwrap();
//! let page = r#"<page><title>Anarchism</title><text xml:space="preserve">
//! '''Anarchism''' is a [[political philosophy]].&lt;ref&gt;Cite&lt;/ref&gt;
//! == See also ==
//! * [[Libertarianism]]
//! </text></page>"#;
//!
//! assert_eq!(cleaner.clean(page), "Anarchism\n\nAnarchism is a political philosophy.");
//! ```
//!
//! ## Reading Dumps
//!
//! ```no_run
//! use wikiclean::{Cleaner, PageReader, page};
//!
//! let cleaner = Cleaner::builder().build()?;
//! for raw in PageReader::open("enwiki-pages-articles.xml.gz")? {
//!     let raw = raw?;
//!     if page::is_article(&raw) {
//!         println!("{}", cleaner.clean(&raw));
//!     }
//! }
//! # Ok::<(), wikiclean::Error>(())
//! ```
//!
//! The span removers in [`remove`] and the passes in [`passes`] are plain
//! functions and can be used on their own.

pub mod cleaner;
pub mod dump;
pub mod entities;
pub mod error;
pub mod language;
pub mod page;
pub mod passes;
pub(crate) mod patterns;
pub mod remove;
pub mod sentences;

pub use cleaner::{Cleaner, CleanerBuilder, configure};
pub use dump::PageReader;
pub use error::{Error, Result};
pub use language::Language;
pub use remove::{
    DelimiterPair, RefSyntax, remove_image_captions, remove_nested, remove_refs, remove_tables,
    remove_templates,
};
