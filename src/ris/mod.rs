//! RIS line parser.
//!
//! Splits RIS text into ordered `(tag, value)` pairs. The parser is lenient:
//! it never fails, and lines without a `" - "` separator are skipped.
//!
//! # Example
//!
//! ```
//! use ris2bib::ris::{parse_lines, RisTag};
//!
//! let input = r#"TY  - JOUR
//! TI  - Example Title
//! AU  - Smith, John
//! ER  -"#;
//!
//! let lines = parse_lines(input);
//! assert_eq!(lines.len(), 3);
//! assert_eq!(lines[1].ris_tag(), RisTag::Title);
//! assert_eq!(lines[1].value, "Example Title");
//! ```

mod parse;
mod tags;

pub use parse::{RisLines, SEPARATOR, TaggedLine, parse_line, parse_lines, ris_parse};
pub use tags::{Field, FieldUpdate, RisTag, YEAR_LEN};
