//! Case-insensitive prefix search over terms.
//!
//! Terms are compared through their [`Display`] rendering, whatever their
//! underlying type. The query is literal text: characters such as `.`, `*` or
//! `[` match themselves and nothing else.
//!
//! Case folding uses [`char::to_lowercase`] on both sides, so it covers
//! non-ASCII letters too (`"ÉCOLE"` starts with `"éc"`).

use std::fmt::Display;

use crate::TermLocationIndex;

impl<K, V, E> TermLocationIndex<K, V, E>
where
    K: Display,
{
    /// Returns every term whose string form starts with `query`, ignoring
    /// case.
    ///
    /// The result is collected eagerly and follows term-iteration order, which
    /// is unspecified. An empty `query` matches every term.
    ///
    /// # Examples
    ///
    /// ```
    /// use termloc_core::TermLocationIndex;
    ///
    /// let mut index = TermLocationIndex::new();
    /// index.insert("Apple", "doc1.txt", 5);
    /// index.insert("application", "doc2.txt", 2);
    /// index.insert("banana", "doc1.txt", 1);
    ///
    /// let mut terms = index.terms_with_prefix("APP");
    /// terms.sort_unstable();
    /// assert_eq!(terms, [&"Apple", &"application"]);
    ///
    /// // Pattern metacharacters are plain text
    /// assert!(index.terms_with_prefix("a.p").is_empty());
    /// ```
    #[must_use]
    pub fn terms_with_prefix(&self, query: &str) -> Vec<&K> {
        let matches = self
            .terms()
            .filter(|term| starts_with_ignore_case(&term.to_string(), query))
            .collect::<Vec<_>>();
        log::trace!(
            "prefix {query:?} matched {} of {} term(s)",
            matches.len(),
            self.len()
        );
        matches
    }
}

/// Returns `true` if `text` starts with `prefix`, comparing lowercased
/// characters.
#[must_use]
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|expected| text.next() == Some(expected))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    type StrIndex = TermLocationIndex<&'static str, u32, u32>;

    fn index_of(terms: &[&'static str]) -> StrIndex {
        terms.iter().map(|&term| (term, 0, 0)).collect()
    }

    fn matches(index: &StrIndex, query: &str) -> HashSet<&'static str> {
        index.terms_with_prefix(query).into_iter().copied().collect()
    }

    #[test]
    fn test_starts_with_ignore_case() {
        assert!(starts_with_ignore_case("apple", "app"));
        assert!(starts_with_ignore_case("Apple", "aPP"));
        assert!(starts_with_ignore_case("apple", ""));
        assert!(starts_with_ignore_case("apple", "apple"));
        assert!(!starts_with_ignore_case("apple", "apples"));
        assert!(!starts_with_ignore_case("", "a"));
        assert!(!starts_with_ignore_case("banana", "app"));
        assert!(starts_with_ignore_case("ÉCOLE", "éc"));
    }

    #[test]
    fn test_terms_with_prefix() {
        let index = index_of(&["apple", "Application", "banana", "grape"]);
        assert_eq!(matches(&index, "app"), HashSet::from(["apple", "Application"]));
        assert_eq!(matches(&index, "BAN"), HashSet::from(["banana"]));
        assert!(matches(&index, "cherry").is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let index = index_of(&["apple", "banana"]);
        assert_eq!(matches(&index, ""), HashSet::from(["apple", "banana"]));
    }

    #[test]
    fn test_empty_index() {
        let index = index_of(&[]);
        assert!(index.terms_with_prefix("a").is_empty());
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let index = index_of(&["a+b", "aab", "a.c", "abc", "[x]", "(y"]);
        assert_eq!(matches(&index, "a+"), HashSet::from(["a+b"]));
        assert_eq!(matches(&index, "a."), HashSet::from(["a.c"]));
        assert_eq!(matches(&index, "[x"), HashSet::from(["[x]"]));
        assert_eq!(matches(&index, "("), HashSet::from(["(y"]));
        assert!(matches(&index, ".*").is_empty());
    }

    #[test]
    fn test_non_string_terms_use_display() {
        let index = [(1024u32, 'a', 0u8), (10, 'b', 0), (2048, 'c', 0)]
            .into_iter()
            .collect::<TermLocationIndex<_, _, _>>();
        let mut terms = index.terms_with_prefix("10");
        terms.sort_unstable();
        assert_eq!(terms, [&10, &1024]);
    }

    proptest! {
        #[test]
        fn prop_matches_lowercase_starts_with(
            terms in prop::collection::hash_set("[a-cA-C]{0,4}", 0..16),
            query in "[a-cA-C]{0,2}",
        ) {
            let index = terms
                .iter()
                .map(|term| (term.clone(), 0u8, 0u8))
                .collect::<TermLocationIndex<_, _, _>>();
            let actual = index
                .terms_with_prefix(&query)
                .into_iter()
                .cloned()
                .collect::<HashSet<_>>();
            let expected = terms
                .iter()
                .filter(|term| term.to_lowercase().starts_with(&query.to_lowercase()))
                .cloned()
                .collect::<HashSet<_>>();
            prop_assert_eq!(actual, expected);
        }
    }
}
