//! Convert RIS citation downloads into BibTeX entries.
//!
//! `ris2bib` turns a single RIS record, as exported by publisher sites such as
//! Nature or Springer, into a BibTeX `@article` entry ready to be copied.
//!
//! # Key Features
//!
//! - **Lenient RIS parsing**: lines without a `" - "` separator are skipped,
//!   unknown tags are ignored
//! - **Citation keys**: first author's family name, year and first
//!   significant title word, e.g. `Smith2021Study`
//! - **Download interception** (feature `intercept`): recognizes RIS downloads
//!   from target publishers and rejects HTML login/error pages
//!
//! # Basic Usage
//!
//! ```rust
//! let input = r#"TY  - JOUR
//! AU  - Smith, John
//! TI  - A Study of Quantum Effects
//! PY  - 2021/03/04/
//! SP  - 100
//! EP  - 110
//! ER  -"#;
//!
//! let bibtex = ris2bib::convert(input);
//! assert!(bibtex.starts_with("@article{Smith2021Study,"));
//! assert!(bibtex.contains("  pages = {100--110},\n"));
//! ```
//!
//! # Configuration
//!
//! ```rust
//! use ris2bib::bibtex::{BibtexConfig, BibtexConverter};
//!
//! let mut config = BibtexConfig::new();
//! config.set_author_fallback("Anon").set_year_fallback("nd");
//!
//! let converter = BibtexConverter::new().with_config(config);
//! assert_eq!(converter.convert("TI  - Untitled"), "@article{AnonndUntitled,\n  title = {Untitled},\n}");
//! ```
//!
//! # Error Handling
//!
//! Conversion is total and never fails. Only the payload checks of the
//! [`intercept`] module return the crate's [`Result`] type:
//!
//! ```rust
//! use ris2bib::Error;
//! use ris2bib::intercept::Interceptor;
//!
//! match Interceptor::new().convert_payload(b"<!DOCTYPE html>".to_vec()) {
//!     Ok(bibtex) => println!("{bibtex}"),
//!     Err(Error::HtmlPayload) => eprintln!("got a login page"),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! # Thread Safety
//!
//! Conversion holds no shared mutable state; converters and interceptors can
//! be shared between threads.

use thiserror::Error;

pub mod bibtex;
#[cfg(feature = "intercept")]
pub mod intercept;
mod regex;
pub mod ris;
mod utils;

// Reexports
pub use bibtex::{BibRecord, BibtexConfig, BibtexConverter};
pub use ris::{TaggedLine, parse_lines};

/// A specialized Result type for payload handling.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while accepting a downloaded payload.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Payload is an HTML page, not RIS data")]
    HtmlPayload,

    #[error("Payload is empty")]
    EmptyPayload,
}

/// Convert RIS text into a BibTeX `@article` entry using the default
/// configuration.
///
/// Never fails: missing, malformed or unrecognized lines only leave fields out.
pub fn convert(ris_text: &str) -> String {
    BibtexConverter::new().convert(ris_text)
}
