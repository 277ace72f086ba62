//! BibTeX serialization.

use crate::bibtex::{BibRecord, BibtexConfig};
use crate::utils::non_empty;

/// Separator placed between authors in the `author` field.
const AUTHOR_SEPARATOR: &str = " and ";

impl BibRecord {
    /// Page range in LaTeX form (`100--110`).
    ///
    /// A missing or identical end page yields the start page alone; without a
    /// start page there are no pages at all.
    pub fn pages(&self) -> Option<String> {
        let start = non_empty(&self.start_page)?;
        match non_empty(&self.end_page) {
            Some(end) if end != start => Some(format!("{start}--{end}")),
            _ => Some(start.to_string()),
        }
    }

    /// Serialize the record as a single BibTeX entry.
    ///
    /// Fields are written in a fixed order and skipped when empty. Values are
    /// embedded verbatim: braces and backslashes are not escaped.
    pub fn to_bibtex(&self, config: &BibtexConfig) -> String {
        let authors = self.authors.join(AUTHOR_SEPARATOR);
        let pages = self.pages();
        let fields = [
            ("author", Some(authors.as_str())),
            ("title", self.title.as_deref()),
            ("journal", self.journal.as_deref()),
            ("year", self.year.as_deref()),
            ("volume", self.volume.as_deref()),
            ("number", self.issue.as_deref()),
            ("pages", pages.as_deref()),
            ("doi", self.doi.as_deref()),
            ("url", self.url.as_deref()),
        ];

        let mut entry = format!("@{}{{{},\n", config.entry_type, self.citation_key(config));
        for (label, value) in fields {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                entry.push_str(&format!("  {label} = {{{value}}},\n"));
            }
        }
        entry.push('}');
        entry
    }
}
