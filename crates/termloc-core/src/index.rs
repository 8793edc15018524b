//! The term → location → positions container.
//!
//! This module provides [`TermLocationIndex`] along with the iterators it
//! hands out ([`Terms`] and [`Iter`]).
//!
//! # Structure
//!
//! The container is a single owned mapping from term to an owned mapping from
//! location to an owned `Vec` of positions:
//!
//! ```text
//! K ──► V ──► [E, E, E, ...]
//!   └─► V ──► [E, ...]
//! ```
//!
//! Entries are created on the first [`insert`] for a term or (term, location)
//! pair and are never removed, so every stored term has at least one location
//! and every stored location has at least one position.
//!
//! [`insert`]: TermLocationIndex::insert

use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map},
    fmt,
    hash::Hash,
    iter::FusedIterator,
};

use crate::location_set::LocationSet;

/// Locations of a single term, each with its insertion-ordered positions.
pub(crate) type LocationMap<V, E> = HashMap<V, Vec<E>>;

/// A three-level container mapping terms to locations to positions.
///
/// `K` is the term (e.g. a word), `V` the location it occurs in (e.g. a file
/// name) and `E` an occurrence marker inside that location (e.g. an offset).
///
/// Positions for a (term, location) pair keep their insertion order and are
/// not deduplicated. No ordering is guaranteed among terms or among the
/// locations of a term.
///
/// The container performs no internal synchronization. Share it between
/// threads behind an external lock, or keep one index per shard.
///
/// # Examples
///
/// ```
/// use termloc_core::TermLocationIndex;
///
/// let mut index = TermLocationIndex::new();
/// index.insert("fox", "a.txt", 3);
/// index.insert("fox", "a.txt", 3);
/// index.insert("fox", "b.txt", 7);
///
/// // Repeated positions are kept
/// assert_eq!(index.positions_of("fox", "a.txt"), Some(&[3, 3][..]));
/// assert_eq!(index.location_count("fox"), 2);
/// assert_eq!(index.position_count(), 3);
/// ```
#[derive(Clone)]
pub struct TermLocationIndex<K, V, E> {
    terms: HashMap<K, LocationMap<V, E>>,
}

impl<K, V, E> Default for TermLocationIndex<K, V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, E> TermLocationIndex<K, V, E> {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: HashMap::new(),
        }
    }

    /// Creates an empty index with room for at least `terms` distinct terms.
    #[must_use]
    pub fn with_capacity(terms: usize) -> Self {
        Self {
            terms: HashMap::with_capacity(terms),
        }
    }

    /// Returns the number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the total number of positions stored over all pairs.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.terms
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Returns an iterator over all terms, in unspecified order.
    #[must_use]
    pub fn terms(&self) -> Terms<'_, K, V, E> {
        Terms {
            inner: self.terms.keys(),
        }
    }

    /// Returns an iterator over every term together with its locations.
    ///
    /// # Examples
    ///
    /// ```
    /// use termloc_core::TermLocationIndex;
    ///
    /// let index: TermLocationIndex<_, _, _> =
    ///     [("a", "x", 1), ("a", "y", 2), ("b", "x", 3)].into_iter().collect();
    ///
    /// let mut counts = index
    ///     .iter()
    ///     .map(|(term, locations)| (*term, locations.len()))
    ///     .collect::<Vec<_>>();
    /// counts.sort_unstable();
    /// assert_eq!(counts, [("a", 2), ("b", 1)]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V, E> {
        Iter {
            inner: self.terms.iter(),
        }
    }
}

impl<K, V, E> TermLocationIndex<K, V, E>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    /// Appends `position` to the positions recorded for `(term, location)`.
    ///
    /// A missing term or location entry is created on the way. Existing
    /// positions are never overwritten: inserting the same triple twice
    /// records the position twice.
    pub fn insert(&mut self, term: K, location: V, position: E) {
        self.terms
            .entry(term)
            .or_default()
            .entry(location)
            .or_default()
            .push(position);
    }

    /// Returns the locations recorded for `term`, or `None` if `term` was
    /// never inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use termloc_core::TermLocationIndex;
    ///
    /// let mut index = TermLocationIndex::new();
    /// index.insert(String::from("apple"), String::from("doc1.txt"), 5);
    /// index.insert(String::from("apple"), String::from("doc2.txt"), 2);
    ///
    /// let locations = index.locations_of("apple").unwrap();
    /// assert_eq!(locations.len(), 2);
    /// assert!(locations.contains("doc1.txt"));
    /// assert!(index.locations_of("cherry").is_none());
    /// ```
    #[must_use]
    pub fn locations_of<Q>(&self, term: &Q) -> Option<LocationSet<'_, V, E>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.terms.get(term).map(LocationSet::new)
    }

    /// Returns the positions of `term` in `location` in insertion order, or
    /// `None` if the pair was never inserted.
    #[must_use]
    pub fn positions_of<Q, R>(&self, term: &Q, location: &R) -> Option<&[E]>
    where
        K: Borrow<Q>,
        V: Borrow<R>,
        Q: Hash + Eq + ?Sized,
        R: Hash + Eq + ?Sized,
    {
        self.terms.get(term)?.get(location).map(Vec::as_slice)
    }

    /// Returns `true` if `term` has at least one recorded location.
    #[must_use]
    pub fn contains_term<Q>(&self, term: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.terms.contains_key(term)
    }

    /// Returns `true` if `term` has at least one position in `location`.
    #[must_use]
    pub fn contains_location<Q, R>(&self, term: &Q, location: &R) -> bool
    where
        K: Borrow<Q>,
        V: Borrow<R>,
        Q: Hash + Eq + ?Sized,
        R: Hash + Eq + ?Sized,
    {
        self.terms
            .get(term)
            .is_some_and(|locations| locations.contains_key(location))
    }

    /// Returns the number of distinct locations of `term` (0 if absent).
    #[must_use]
    pub fn location_count<Q>(&self, term: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.terms.get(term).map_or(0, HashMap::len)
    }
}

impl<K, V, E> fmt::Debug for TermLocationIndex<K, V, E>
where
    K: fmt::Debug,
    V: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(&self.terms).finish()
    }
}

impl<K, V, E> PartialEq for TermLocationIndex<K, V, E>
where
    K: Hash + Eq,
    V: Hash + Eq,
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl<K, V, E> Eq for TermLocationIndex<K, V, E>
where
    K: Hash + Eq,
    V: Hash + Eq,
    E: Eq,
{
}

impl<K, V, E> Extend<(K, V, E)> for TermLocationIndex<K, V, E>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V, E)>,
    {
        for (term, location, position) in iter {
            self.insert(term, location, position);
        }
    }
}

impl<K, V, E> FromIterator<(K, V, E)> for TermLocationIndex<K, V, E>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V, E)>,
    {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<'a, K, V, E> IntoIterator for &'a TermLocationIndex<K, V, E> {
    type Item = (&'a K, LocationSet<'a, V, E>);
    type IntoIter = Iter<'a, K, V, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the terms of a [`TermLocationIndex`].
///
/// Created by [`TermLocationIndex::terms`].
#[derive(Debug, Clone)]
pub struct Terms<'a, K, V, E> {
    inner: hash_map::Keys<'a, K, LocationMap<V, E>>,
}

impl<'a, K, V, E> Iterator for Terms<'a, K, V, E> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, E> FusedIterator for Terms<'_, K, V, E> {}
impl<K, V, E> ExactSizeIterator for Terms<'_, K, V, E> {}

/// Iterator over `(term, locations)` pairs of a [`TermLocationIndex`].
///
/// Created by [`TermLocationIndex::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V, E> {
    inner: hash_map::Iter<'a, K, LocationMap<V, E>>,
}

impl<'a, K, V, E> Iterator for Iter<'a, K, V, E> {
    type Item = (&'a K, LocationSet<'a, V, E>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(term, locations)| (term, LocationSet::new(locations)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V, E> FusedIterator for Iter<'_, K, V, E> {}
impl<K, V, E> ExactSizeIterator for Iter<'_, K, V, E> {}
