//! Error types for wikiclean operations.
//!
//! Only configuration and I/O can fail. Malformed markup never produces an
//! error: every removal pass degrades to over-deletion instead.

use thiserror::Error;

/// Errors that can occur while configuring a cleaner or reading a dump.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("invalid locale pattern: {0}")]
    Pattern(#[from] regex_lite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
