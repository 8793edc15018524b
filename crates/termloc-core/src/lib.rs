//! Term → location → positions container for inverted indexes.
//!
//! This crate provides [`TermLocationIndex`], a three-level container that
//! associates a **term** with the set of **locations** it appears in and, for
//! each (term, location) pair, the insertion-ordered **positions** at which it
//! occurs there. It is the storage primitive of an inverted index such as
//! word → file → list of offsets.
//!
//! # Overview
//!
//! - [`index`]: the container itself, its insertion and lookup operations, and
//!   iterators over terms.
//! - [`location_set`]: [`LocationSet`], the read-only view over the locations
//!   recorded for one term.
//! - [`prefix`]: case-insensitive literal prefix search over terms.
//! - [`dump`]: the human-readable text dump and [`DumpError`].
//!
//! Tokenizing input, ranking results and parsing the dump back are left to
//! callers.
//!
//! # Examples
//!
//! ```
//! use termloc_core::TermLocationIndex;
//!
//! let mut index = TermLocationIndex::new();
//! index.insert("apple".to_owned(), "doc1.txt".to_owned(), 5);
//! index.insert("apple".to_owned(), "doc1.txt".to_owned(), 10);
//! index.insert("apple".to_owned(), "doc2.txt".to_owned(), 2);
//! index.insert("banana".to_owned(), "doc1.txt".to_owned(), 1);
//!
//! let locations = index.locations_of("apple").unwrap();
//! assert_eq!(locations.len(), 2);
//! assert!(locations.contains("doc2.txt"));
//!
//! assert_eq!(index.positions_of("apple", "doc1.txt"), Some(&[5, 10][..]));
//! assert_eq!(index.positions_of("apple", "doc3.txt"), None);
//! assert!(!index.contains_term("cherry"));
//! assert_eq!(index.terms_with_prefix("APP"), vec!["apple"]);
//! ```

pub mod dump;
pub mod index;
pub mod location_set;
pub mod prefix;

// Re-export commonly used types
pub use self::{
    dump::{DumpDisplay, DumpError},
    index::TermLocationIndex,
    location_set::LocationSet,
};
