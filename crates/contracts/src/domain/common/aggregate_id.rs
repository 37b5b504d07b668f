use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for aggregate identifier types
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the ID to its string form
    fn as_string(&self) -> String;

    /// Build the ID from its string form
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Trailing run of ASCII digits of an identifier, parsed as a number.
///
/// `"12"` -> 12, `"ORD-007"` -> 7, `"abc"` -> None.
pub fn numeric_suffix(id: &str) -> Option<u64> {
    let digits_start = id
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    id[digits_start..].parse().ok()
}

/// Next identifier in a sequence: highest numeric suffix among `ids` + 1.
///
/// Identifiers without a numeric suffix count as 0, so an empty or fully
/// non-numeric collection starts at "1".
pub fn next_sequential_id<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let highest = ids
        .into_iter()
        .filter_map(numeric_suffix)
        .max()
        .unwrap_or(0);
    (highest.saturating_add(1)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_suffix() {
        assert_eq!(numeric_suffix("12"), Some(12));
        assert_eq!(numeric_suffix("ORD-007"), Some(7));
        assert_eq!(numeric_suffix("abc"), None);
        assert_eq!(numeric_suffix(""), None);
    }

    #[test]
    fn test_next_id_uses_highest_suffix_not_length() {
        assert_eq!(next_sequential_id(["1", "2", "3"]), "4");
        assert_eq!(next_sequential_id(["1", "9", "3"]), "10");
        assert_eq!(next_sequential_id(["custom", "5"]), "6");
    }

    #[test]
    fn test_next_id_on_empty_collection() {
        assert_eq!(next_sequential_id(std::iter::empty()), "1");
        assert_eq!(next_sequential_id(["draft"]), "1");
    }
}
