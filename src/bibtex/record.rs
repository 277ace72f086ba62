//! Bibliographic record built by folding tagged RIS lines.
//!
//! # Field Processing Strategy
//! - **Append**: authors keep their source order
//! - **Last-wins**: every other field takes the value of its latest tag
//! - **Truncate**: date tags keep only the leading year

use log::trace;
use serde::{Deserialize, Serialize};

use crate::ris::{Field, FieldUpdate, TaggedLine};

/// Fields accumulated from an RIS record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibRecord {
    /// Raw author strings, usually "Family, Given"
    pub authors: Vec<String>,
    pub title: Option<String>,
    pub journal: Option<String>,
    /// At most four characters
    pub year: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub start_page: Option<String>,
    pub end_page: Option<String>,
    pub doi: Option<String>,
    pub url: Option<String>,
}

impl BibRecord {
    /// Create a new empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sequence of tagged lines into a record.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a TaggedLine>,
    {
        lines.into_iter().fold(Self::new(), Self::apply)
    }

    /// Return the record with one tagged line applied.
    ///
    /// Lines whose tag the builder does not recognize leave the record untouched.
    #[must_use]
    pub fn apply(mut self, line: &TaggedLine) -> Self {
        match line.ris_tag().update() {
            Some(update) => self.update(update, &line.value),
            None => trace!("ignoring RIS tag '{}'", line.tag),
        }
        self
    }

    fn update(&mut self, update: FieldUpdate, value: &str) {
        match update {
            FieldUpdate::AppendAuthor => self.authors.push(value.to_string()),
            FieldUpdate::Overwrite(field) => *self.slot(field) = Some(value.to_string()),
            FieldUpdate::Truncate(field, len) => {
                *self.slot(field) = Some(value.chars().take(len).collect())
            }
        }
    }

    /// Get the value of a single-valued field.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Title => &self.title,
            Field::Journal => &self.journal,
            Field::Year => &self.year,
            Field::Volume => &self.volume,
            Field::Issue => &self.issue,
            Field::StartPage => &self.start_page,
            Field::EndPage => &self.end_page,
            Field::Doi => &self.doi,
            Field::Url => &self.url,
        };
        value.as_deref()
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Journal => &mut self.journal,
            Field::Year => &mut self.year,
            Field::Volume => &mut self.volume,
            Field::Issue => &mut self.issue,
            Field::StartPage => &mut self.start_page,
            Field::EndPage => &mut self.end_page,
            Field::Doi => &mut self.doi,
            Field::Url => &mut self.url,
        }
    }
}
