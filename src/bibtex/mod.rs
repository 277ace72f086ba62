//! BibTeX builder.
//!
//! Folds tagged RIS lines into a [`BibRecord`], derives a citation key and
//! writes a single BibTeX entry.
//!
//! # Example
//!
//! ```
//! use ris2bib::bibtex::BibtexConverter;
//!
//! let input = r#"TY  - JOUR
//! AU  - Smith, John
//! PY  - 2021
//! TI  - A Study of Quantum Effects
//! ER  -"#;
//!
//! let bibtex = BibtexConverter::new().convert(input);
//! assert_eq!(
//!     bibtex,
//!     "@article{Smith2021Study,\n  author = {Smith, John},\n  title = {A Study of Quantum Effects},\n  year = {2021},\n}"
//! );
//! ```

mod key;
mod record;
mod write;

pub use record::BibRecord;

use crate::ris::ris_parse;

/// Configuration for BibTeX generation.
///
/// The defaults produce `@article` entries keyed like `Smith2021Study`, with
/// `Nature` standing in for a missing author and `xxxx` for a missing year.
///
/// # Examples
///
/// ```
/// use ris2bib::bibtex::BibtexConfig;
///
/// let mut config = BibtexConfig::new();
/// config.set_author_fallback("Anon").set_min_title_word_len(4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibtexConfig {
    /// Entry type written after `@`
    pub(crate) entry_type: String,
    /// Author part of the key when the record has no authors
    pub(crate) author_fallback: String,
    /// Year part of the key when the record has no year
    pub(crate) year_fallback: String,
    /// Minimum length of the title word used in the key
    pub(crate) min_title_word_len: usize,
}

impl Default for BibtexConfig {
    fn default() -> Self {
        Self {
            entry_type: "article".to_string(),
            author_fallback: "Nature".to_string(),
            year_fallback: "xxxx".to_string(),
            min_title_word_len: 3,
        }
    }
}

impl BibtexConfig {
    /// Creates a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry type
    pub fn set_entry_type(&mut self, entry_type: &str) -> &mut Self {
        self.entry_type = entry_type.to_string();
        self
    }

    /// Sets the author used in keys of records without authors
    pub fn set_author_fallback(&mut self, author: &str) -> &mut Self {
        self.author_fallback = author.to_string();
        self
    }

    /// Sets the year used in keys of records without a year
    pub fn set_year_fallback(&mut self, year: &str) -> &mut Self {
        self.year_fallback = year.to_string();
        self
    }

    /// Sets the minimum length of the title word used in keys
    pub fn set_min_title_word_len(&mut self, len: usize) -> &mut Self {
        self.min_title_word_len = len;
        self
    }

    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    pub fn author_fallback(&self) -> &str {
        &self.author_fallback
    }

    pub fn year_fallback(&self) -> &str {
        &self.year_fallback
    }

    pub fn min_title_word_len(&self) -> usize {
        self.min_title_word_len
    }
}

/// Converter from RIS text to a BibTeX entry.
///
/// Conversion never fails: missing or malformed lines only leave fields out.
#[derive(Debug, Clone, Default)]
pub struct BibtexConverter {
    config: BibtexConfig,
}

impl BibtexConverter {
    /// Creates a new converter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: BibtexConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BibtexConfig {
        &self.config
    }

    /// Build the record for a piece of RIS text without serializing it.
    pub fn record(&self, ris_text: &str) -> BibRecord {
        BibRecord::from_lines(&ris_parse(ris_text).tagged)
    }

    /// Convert RIS text into a BibTeX entry.
    pub fn convert(&self, ris_text: &str) -> String {
        self.record(ris_text).to_bibtex(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NATURE_RIS: &str = "TY  - JOUR\r
AU  - Smith, John\r
AU  - Doe, Jane\r
TI  - A Study of Quantum Effects\r
JO  - Nature\r
PY  - 2024/05/15/\r
DA  - 2024/05/15/\r
VL  - 629\r
IS  - 8012\r
SP  - 100\r
EP  - 110\r
SN  - 1476-4687\r
UR  - https://doi.org/10.1038/s41586-024-00000-0\r
DO  - 10.1038/s41586-024-00000-0\r
ID  - Smith2024\r
ER  - \r
";

    #[test]
    fn test_convert_nature_export() {
        let bibtex = BibtexConverter::new().convert(NATURE_RIS);
        let expected = "@article{Smith2024Study,
  author = {Smith, John and Doe, Jane},
  title = {A Study of Quantum Effects},
  journal = {Nature},
  year = {2024},
  volume = {629},
  number = {8012},
  pages = {100--110},
  doi = {10.1038/s41586-024-00000-0},
  url = {https://doi.org/10.1038/s41586-024-00000-0},
}";
        assert_eq!(bibtex, expected);
    }

    #[test]
    fn test_convert_is_deterministic() {
        let converter = BibtexConverter::new();
        assert_eq!(converter.convert(NATURE_RIS), converter.convert(NATURE_RIS));
    }

    #[test]
    fn test_unrelated_tag_order_does_not_matter() {
        let a = "AU  - Smith, John\nVL  - 3\nDO  - 10.1/x\nTI  - Title";
        let b = "DO  - 10.1/x\nAU  - Smith, John\nTI  - Title\nVL  - 3";
        let converter = BibtexConverter::new();
        assert_eq!(converter.convert(a), converter.convert(b));
    }

    #[test]
    fn test_same_tag_order_matters() {
        let a = "AU  - Smith, John\nAU  - Doe, Jane\nTI  - First\nTI  - Second";
        let b = "AU  - Doe, Jane\nAU  - Smith, John\nTI  - Second\nTI  - First";
        let converter = BibtexConverter::new();
        let bib_a = converter.convert(a);
        let bib_b = converter.convert(b);
        assert!(bib_a.starts_with("@article{SmithxxxxSecond,"));
        assert!(bib_a.contains("author = {Smith, John and Doe, Jane}"));
        assert!(bib_b.starts_with("@article{DoexxxxFirst,"));
        assert!(bib_b.contains("author = {Doe, Jane and Smith, John}"));
    }

    #[test]
    fn test_record() {
        let record = BibtexConverter::new().record("SP  - 5\nEP  - 5\nN1  - note");
        assert_eq!(record.pages().as_deref(), Some("5"));
        assert!(record.authors.is_empty());
    }

    #[test]
    fn test_with_config() {
        let mut config = BibtexConfig::new();
        config.set_entry_type("misc").set_year_fallback("0000");
        let converter = BibtexConverter::new().with_config(config.clone());
        assert_eq!(converter.config(), &config);
        assert_eq!(converter.convert(""), "@misc{Nature0000,\n}");
    }

    #[test]
    fn test_converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<BibtexConverter>();
        assert_send_sync::<BibtexConfig>();
        assert_send_sync::<BibRecord>();
    }

    #[test]
    fn test_convert_with_bom() {
        let bibtex = BibtexConverter::new().convert("\u{feff}AU  - Smith, John\nTI  - Study");
        assert_eq!(
            bibtex,
            "@article{SmithxxxxStudy,\n  author = {Smith, John},\n  title = {Study},\n}"
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = BibtexConfig::default();
        assert_eq!(config.entry_type(), "article");
        assert_eq!(config.author_fallback(), "Nature");
        assert_eq!(config.year_fallback(), "xxxx");
        assert_eq!(config.min_title_word_len(), 3);
    }
}
