//! RIS line tokenization.
//!
//! This module handles the low-level splitting of RIS text into tag/value pairs.

use compact_str::CompactString;
use either::{Either, Left, Right};
use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::ris::tags::RisTag;

/// Separator between a tag and its value, e.g. `TI  - Title`.
pub const SEPARATOR: &str = " - ";

/// One `(tag, value)` pair taken from a single RIS line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedLine {
    /// Text before the separator, trimmed. Not validated.
    pub tag: CompactString,
    /// Text after the separator, trimmed.
    pub value: String,
}

impl TaggedLine {
    pub fn new(tag: &str, value: &str) -> Self {
        Self {
            tag: CompactString::from(tag),
            value: value.to_string(),
        }
    }

    /// The recognized [RisTag] for this line.
    pub fn ris_tag(&self) -> RisTag {
        RisTag::from_tag(&self.tag)
    }
}

/// Tokenized RIS text: the tagged lines in source order, plus every line
/// that carried no separator along with its 1-based line number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RisLines {
    pub tagged: Vec<TaggedLine>,
    pub skipped: Vec<(usize, String)>,
}

/// Byte order mark, dropped along with whitespace around tags and values.
const BOM: char = '\u{feff}';

/// Parse a single line, splitting on the first [SEPARATOR].
///
/// Returns `None` when the line has no separator, e.g. blank lines or a bare
/// `ER  -` end-of-record marker.
pub fn parse_line(line: &str) -> Option<TaggedLine> {
    line.split_once(SEPARATOR).map(|(tag, value)| TaggedLine {
        tag: CompactString::from(trim_field(tag)),
        value: trim_field(value).to_string(),
    })
}

fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Parse RIS text into its tagged lines, dropping lines without a separator.
pub fn parse_lines<S: AsRef<str>>(ris_text: S) -> Vec<TaggedLine> {
    ris_text.as_ref().lines().filter_map(parse_line).collect()
}

/// Parse RIS text, keeping track of the lines that were skipped.
pub fn ris_parse<S: AsRef<str>>(ris_text: S) -> RisLines {
    let (skipped, tagged): (Vec<_>, Vec<_>) = ris_text
        .as_ref()
        .lines()
        .enumerate()
        .partition_map(|(i, line)| classify_line(i + 1, line));

    for (line_number, line) in &skipped {
        trace!("skipping RIS line {line_number} without separator: '{line}'");
    }

    RisLines { tagged, skipped }
}

fn classify_line(line_number: usize, line: &str) -> Either<(usize, String), TaggedLine> {
    parse_line(line)
        .map(Right)
        .unwrap_or_else(|| Left((line_number, line.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("TY  - JOUR", "TY", "JOUR")]
    #[case("TI  - Test Title", "TI", "Test Title")]
    #[case("AU  - Smith, John", "AU", "Smith, John")]
    #[case("ER  - ", "ER", "")]
    #[case("DO  - 10.1000/test\r", "DO", "10.1000/test")]
    #[case("  PY - 2024/05/15/  ", "PY", "2024/05/15/")]
    #[case("TI  - Spin - orbit coupling", "TI", "Spin - orbit coupling")]
    #[case("N1 - some note", "N1", "some note")]
    #[case("weird tag - value", "weird tag", "value")]
    #[case("\u{feff}AU  - Smith, John", "AU", "Smith, John")]
    #[case("TI  - Title\u{feff}", "TI", "Title")]
    fn test_parse_line_valid(
        #[case] line: &str,
        #[case] expected_tag: &str,
        #[case] expected_value: &str,
    ) {
        let result = parse_line(line).unwrap();
        assert_eq!(result, TaggedLine::new(expected_tag, expected_value));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("ER  -")]
    #[case("TY-JOUR")]
    #[case("TI  -Title")]
    fn test_parse_line_without_separator(#[case] line: &str) {
        assert_eq!(parse_line(line), None);
    }

    #[test]
    fn test_parse_lines_preserves_order() {
        let input = "TY  - JOUR\nAU  - Smith, John\n\nAU  - Doe, Jane\nER  -";
        let lines = parse_lines(input);
        assert_eq!(
            lines,
            vec![
                TaggedLine::new("TY", "JOUR"),
                TaggedLine::new("AU", "Smith, John"),
                TaggedLine::new("AU", "Doe, Jane"),
            ]
        );
    }

    #[test]
    fn test_parse_handles_crlf() {
        let input = "TY  - JOUR\r\nTI  - Title\r\nER  - \r\n";
        let lines = parse_lines(input);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], TaggedLine::new("TI", "Title"));
        assert_eq!(lines[2], TaggedLine::new("ER", ""));
    }

    #[test]
    fn test_parse_records_skipped_lines() {
        let input = "TY  - JOUR\n\nTI  - Title\nER  -";
        let result = ris_parse(input);
        assert_eq!(result.tagged.len(), 2);
        assert_eq!(
            result.skipped,
            vec![(2, String::new()), (4, "ER  -".to_string())]
        );
    }

    #[test]
    fn test_parse_leading_bom() {
        let lines = parse_lines("\u{feff}AU  - Smith, John\r\nTI  - Study\r\n");
        assert_eq!(
            lines,
            vec![
                TaggedLine::new("AU", "Smith, John"),
                TaggedLine::new("TI", "Study"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(ris_parse(""), RisLines::default());
        assert!(parse_lines("").is_empty());
    }

    #[test]
    fn test_ris_tag() {
        assert_eq!(TaggedLine::new("T1", "Title").ris_tag(), RisTag::TitleAlternative);
        assert_eq!(
            TaggedLine::new("N1", "note").ris_tag(),
            RisTag::Unknown("N1".into())
        );
    }
}
