//! Human-readable text dump of a [`TermLocationIndex`].
//!
//! # Format
//!
//! ```text
//! <term-1>
//! "<location-a>", pos, pos, pos
//! "<location-b>", pos, pos
//!
//! <term-2>
//! "<location-c>", pos
//!
//! ```
//!
//! Each term is printed unquoted on its own line, followed by one line per
//! location: the location in double quotes, then its positions in insertion
//! order, all separated by `", "`. Every term block ends with a blank line.
//! Terms and locations appear in iteration order, which is unspecified.
//! Output is UTF-8. The format is write-only; no parser is provided.

use std::{
    fmt::{self, Display},
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::TermLocationIndex;

/// Errors that can occur while dumping an index.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DumpError {
    /// The destination file could not be created.
    #[display("unable to create dump file {}: {source}", path.display())]
    Create {
        /// Path of the destination.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Writing or flushing the destination failed.
    #[display("unable to write dump: {_0}")]
    Write(#[from] io::Error),
}

/// Renders a [`TermLocationIndex`] in the dump format.
///
/// Created by [`TermLocationIndex::display`].
///
/// # Examples
///
/// ```
/// use termloc_core::TermLocationIndex;
///
/// let mut index = TermLocationIndex::new();
/// index.insert("apple", "doc1.txt", 5);
/// index.insert("apple", "doc1.txt", 10);
///
/// assert_eq!(index.display().to_string(), "apple\n\"doc1.txt\", 5, 10\n\n");
/// ```
#[derive(Debug)]
pub struct DumpDisplay<'a, K, V, E> {
    index: &'a TermLocationIndex<K, V, E>,
}

impl<K, V, E> Clone for DumpDisplay<'_, K, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, E> Copy for DumpDisplay<'_, K, V, E> {}

impl<K, V, E> Display for DumpDisplay<'_, K, V, E>
where
    K: Display,
    V: Display,
    E: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (term, locations) in self.index {
            writeln!(f, "{term}")?;
            for (location, positions) in locations.entries() {
                write!(f, "\"{location}\", ")?;
                for (i, position) in positions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{position}")?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<K, V, E> TermLocationIndex<K, V, E>
where
    K: Display,
    V: Display,
    E: Display,
{
    /// Returns a [`Display`] adapter that renders the dump format.
    #[must_use]
    pub fn display(&self) -> DumpDisplay<'_, K, V, E> {
        DumpDisplay { index: self }
    }

    /// Writes the dump to `writer` and flushes it.
    ///
    /// Output already written before a failure stays on the destination.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::Write`] if writing or flushing fails.
    pub fn dump<W>(&self, mut writer: W) -> Result<(), DumpError>
    where
        W: Write,
    {
        log::debug!("dumping {} term(s)", self.len());
        write!(writer, "{}", self.display())?;
        writer.flush()?;
        Ok(())
    }

    /// Creates (or truncates) the file at `path` and writes the dump to it.
    ///
    /// # Errors
    ///
    /// Returns [`DumpError::Create`] if the file cannot be created, and
    /// [`DumpError::Write`] if writing to it fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use termloc_core::{DumpError, TermLocationIndex};
    ///
    /// let mut index = TermLocationIndex::new();
    /// index.insert("apple", "doc1.txt", 5);
    ///
    /// // A directory is not a writable destination
    /// let err = index.dump_to_path(std::env::temp_dir()).unwrap_err();
    /// assert!(matches!(err, DumpError::Create { .. }));
    /// ```
    pub fn dump_to_path<P>(&self, path: P) -> Result<(), DumpError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| {
            log::warn!("cannot create dump file {}: {source}", path.display());
            DumpError::Create {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.dump(BufWriter::new(file))?;
        log::debug!(
            "dumped {} term(s) and {} position(s) to {}",
            self.len(),
            self.position_count(),
            path.display()
        );
        Ok(())
    }
}
