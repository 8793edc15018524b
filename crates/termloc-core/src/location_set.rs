//! Read-only view over the locations of a single term.
//!
//! [`LocationSet`] is what [`TermLocationIndex::locations_of`] returns. It
//! borrows the index, so the locations it reports always match the current
//! contents and cannot be modified through it.
//!
//! [`TermLocationIndex::locations_of`]: crate::TermLocationIndex::locations_of

use std::{borrow::Borrow, collections::hash_map, fmt, hash::Hash, iter::FusedIterator};

use crate::index::LocationMap;

/// The set of locations recorded for one term.
///
/// Locations are unique (they are mapping keys) and iterate in unspecified
/// order. Each location also carries the positions recorded for it, reachable
/// through [`positions_of`] and [`entries`].
///
/// [`positions_of`]: LocationSet::positions_of
/// [`entries`]: LocationSet::entries
///
/// # Examples
///
/// ```
/// use termloc_core::TermLocationIndex;
///
/// let mut index = TermLocationIndex::new();
/// index.insert("fox", "a.txt", 1);
/// index.insert("fox", "a.txt", 4);
/// index.insert("fox", "b.txt", 2);
///
/// let locations = index.locations_of("fox").unwrap();
/// assert_eq!(locations.len(), 2);
/// assert!(locations.contains("b.txt"));
/// assert_eq!(locations.positions_of("a.txt"), Some(&[1, 4][..]));
/// ```
pub struct LocationSet<'a, V, E> {
    locations: &'a LocationMap<V, E>,
}

impl<V, E> Clone for LocationSet<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for LocationSet<'_, V, E> {}

impl<V, E> fmt::Debug for LocationSet<'_, V, E>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, V, E> LocationSet<'a, V, E> {
    pub(crate) fn new(locations: &'a LocationMap<V, E>) -> Self {
        Self { locations }
    }

    /// Returns the number of distinct locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the set holds no location.
    ///
    /// Sets handed out by the index are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns an iterator over the locations.
    #[must_use]
    pub fn iter(&self) -> Locations<'a, V, E> {
        Locations {
            inner: self.locations.keys(),
        }
    }

    /// Returns an iterator over `(location, positions)` pairs.
    #[must_use]
    pub fn entries(&self) -> Entries<'a, V, E> {
        Entries {
            inner: self.locations.iter(),
        }
    }
}

impl<'a, V, E> LocationSet<'a, V, E>
where
    V: Hash + Eq,
{
    /// Returns `true` if `location` is in the set.
    #[must_use]
    pub fn contains<R>(&self, location: &R) -> bool
    where
        V: Borrow<R>,
        R: Hash + Eq + ?Sized,
    {
        self.locations.contains_key(location)
    }

    /// Returns the insertion-ordered positions recorded at `location`.
    #[must_use]
    pub fn positions_of<R>(&self, location: &R) -> Option<&'a [E]>
    where
        V: Borrow<R>,
        R: Hash + Eq + ?Sized,
    {
        self.locations.get(location).map(Vec::as_slice)
    }
}

impl<'a, V, E> IntoIterator for LocationSet<'a, V, E> {
    type Item = &'a V;
    type IntoIter = Locations<'a, V, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, E> IntoIterator for &LocationSet<'a, V, E> {
    type Item = &'a V;
    type IntoIter = Locations<'a, V, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the locations of a [`LocationSet`].
#[derive(Debug, Clone)]
pub struct Locations<'a, V, E> {
    inner: hash_map::Keys<'a, V, Vec<E>>,
}

impl<'a, V, E> Iterator for Locations<'a, V, E> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, E> FusedIterator for Locations<'_, V, E> {}
impl<V, E> ExactSizeIterator for Locations<'_, V, E> {}

/// Iterator over the `(location, positions)` pairs of a [`LocationSet`].
#[derive(Debug, Clone)]
pub struct Entries<'a, V, E> {
    inner: hash_map::Iter<'a, V, Vec<E>>,
}

impl<'a, V, E> Iterator for Entries<'a, V, E> {
    type Item = (&'a V, &'a [E]);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(location, positions)| (location, positions.as_slice()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V, E> FusedIterator for Entries<'_, V, E> {}
impl<V, E> ExactSizeIterator for Entries<'_, V, E> {}
