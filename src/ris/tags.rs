//! RIS format tags and the record fields they update.
//!
//! Only the tags needed to build a journal article entry are recognized.
//! Everything else maps to [`RisTag::Unknown`] and is ignored by the builder.
//! See: http://en.wikipedia.org/wiki/RIS_(file_format)

use compact_str::CompactString;

/// Number of leading characters kept from a date tag (`PY`/`Y1`).
pub const YEAR_LEN: usize = 4;

/// RIS format tags.
#[allow(clippy::upper_case_acronyms)]
#[non_exhaustive]
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub enum RisTag {
    /// TY - Type of reference
    Type,
    /// TI - Primary title
    Title,
    /// T1 - Primary title (alternative)
    TitleAlternative,
    /// AU - Author
    Author,
    /// A1 - Primary author
    AuthorPrimary,
    /// JF - Journal/Periodical name: full format
    JournalFull,
    /// JO - Journal/Periodical name: full format (alternative)
    JournalFullAlternative,
    /// JA - Journal/Periodical name: standard abbreviation
    JournalAbbreviation,
    /// PY - Publication year
    PublicationYear,
    /// Y1 - Primary date
    DatePrimary,
    /// VL - Volume number
    Volume,
    /// IS - Issue number
    Issue,
    /// SP - Start page
    StartPage,
    /// EP - End page
    EndPage,
    /// DO - DOI
    Doi,
    /// UR - Web/URL
    Url,
    /// ER - End of reference
    EndOfReference,
    /// Unknown tag
    Unknown(CompactString),
}

/// Single-valued fields of a [`BibRecord`](crate::bibtex::BibRecord).
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum Field {
    Title,
    Journal,
    Year,
    Volume,
    Issue,
    StartPage,
    EndPage,
    Doi,
    Url,
}

/// How a tagged value changes the record.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum FieldUpdate {
    /// Push onto the ordered author list.
    AppendAuthor,
    /// Replace the field with the value (last write wins).
    Overwrite(Field),
    /// Replace the field with the first `n` characters of the value.
    Truncate(Field, usize),
}

impl RisTag {
    /// Convert a string tag to a RisTag enum.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "TY" => RisTag::Type,
            "TI" => RisTag::Title,
            "T1" => RisTag::TitleAlternative,
            "AU" => RisTag::Author,
            "A1" => RisTag::AuthorPrimary,
            "JF" => RisTag::JournalFull,
            "JO" => RisTag::JournalFullAlternative,
            "JA" => RisTag::JournalAbbreviation,
            "PY" => RisTag::PublicationYear,
            "Y1" => RisTag::DatePrimary,
            "VL" => RisTag::Volume,
            "IS" => RisTag::Issue,
            "SP" => RisTag::StartPage,
            "EP" => RisTag::EndPage,
            "DO" => RisTag::Doi,
            "UR" => RisTag::Url,
            "ER" => RisTag::EndOfReference,
            _ => RisTag::Unknown(CompactString::from(tag)),
        }
    }

    /// Convert a RisTag enum back to its string representation.
    pub fn as_tag(&self) -> &str {
        match self {
            RisTag::Type => "TY",
            RisTag::Title => "TI",
            RisTag::TitleAlternative => "T1",
            RisTag::Author => "AU",
            RisTag::AuthorPrimary => "A1",
            RisTag::JournalFull => "JF",
            RisTag::JournalFullAlternative => "JO",
            RisTag::JournalAbbreviation => "JA",
            RisTag::PublicationYear => "PY",
            RisTag::DatePrimary => "Y1",
            RisTag::Volume => "VL",
            RisTag::Issue => "IS",
            RisTag::StartPage => "SP",
            RisTag::EndPage => "EP",
            RisTag::Doi => "DO",
            RisTag::Url => "UR",
            RisTag::EndOfReference => "ER",
            RisTag::Unknown(tag) => tag,
        }
    }

    /// Check if this tag represents an author field.
    pub fn is_author_tag(&self) -> bool {
        matches!(self, RisTag::Author | RisTag::AuthorPrimary)
    }

    /// The record update this tag triggers, or `None` if the builder ignores it.
    pub fn update(&self) -> Option<FieldUpdate> {
        let update = match self {
            tag if tag.is_author_tag() => FieldUpdate::AppendAuthor,
            RisTag::Title | RisTag::TitleAlternative => FieldUpdate::Overwrite(Field::Title),
            RisTag::JournalFull
            | RisTag::JournalFullAlternative
            | RisTag::JournalAbbreviation => FieldUpdate::Overwrite(Field::Journal),
            RisTag::PublicationYear | RisTag::DatePrimary => {
                FieldUpdate::Truncate(Field::Year, YEAR_LEN)
            }
            RisTag::Volume => FieldUpdate::Overwrite(Field::Volume),
            RisTag::Issue => FieldUpdate::Overwrite(Field::Issue),
            RisTag::StartPage => FieldUpdate::Overwrite(Field::StartPage),
            RisTag::EndPage => FieldUpdate::Overwrite(Field::EndPage),
            RisTag::Doi => FieldUpdate::Overwrite(Field::Doi),
            RisTag::Url => FieldUpdate::Overwrite(Field::Url),
            _ => return None,
        };
        Some(update)
    }
}
