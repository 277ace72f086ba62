//! Citation key derivation.
//!
//! A key is the first author's family name, the year and the first
//! significant title word, concatenated: `Smith2021Study`.

use log::debug;

use crate::bibtex::{BibRecord, BibtexConfig};
use crate::utils::{compact_family_name, non_empty, significant_word};

impl BibRecord {
    /// Derive the citation key for this record.
    ///
    /// Missing authors fall back to [`BibtexConfig::author_fallback`] and a
    /// missing year to [`BibtexConfig::year_fallback`]. A title without a
    /// long enough word contributes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ris2bib::bibtex::{BibRecord, BibtexConfig};
    ///
    /// let record = BibRecord {
    ///     authors: vec!["Smith, John".to_string()],
    ///     year: Some("2021".to_string()),
    ///     title: Some("A Study of Quantum Effects".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(record.citation_key(&BibtexConfig::default()), "Smith2021Study");
    /// ```
    pub fn citation_key(&self, config: &BibtexConfig) -> String {
        let author = match self.authors.first() {
            Some(first) => compact_family_name(first),
            None => config.author_fallback.clone(),
        };
        let year = non_empty(&self.year).unwrap_or(config.year_fallback.as_str());
        let word = self
            .title
            .as_deref()
            .and_then(|title| significant_word(title, config.min_title_word_len))
            .unwrap_or_default();

        let key = format!("{author}{year}{word}");
        debug!("derived citation key '{key}'");
        key
    }
}
