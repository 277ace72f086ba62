use crate::regex::Regex;
use once_cell::sync::Lazy;

/// Anything that is not an ASCII word character.
static SYMBOL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

/// Returns the value only if it is set and not empty.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Family name of an author written as "Family, Given", with every
/// whitespace character removed so it can be used inside a citation key.
///
/// Names without a comma are used whole.
pub fn compact_family_name(name: &str) -> String {
    let family = name.split_once(',').map_or(name, |(family, _)| family);
    family.chars().filter(|c| !c.is_whitespace()).collect()
}

/// First word of `title` with at least `min_len` characters, after symbols
/// have been stripped.
///
/// Words are split on Unicode whitespace before stripping, so the result is
/// the same with either regex backend.
pub fn significant_word(title: &str, min_len: usize) -> Option<String> {
    title
        .split_whitespace()
        .map(|word| SYMBOL_REGEX.replace_all(word, ""))
        .find(|word| word.chars().count() >= min_len)
        .map(|word| word.into_owned())
}
