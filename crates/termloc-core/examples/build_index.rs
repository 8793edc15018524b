//! Example building an inverted index from text files.
//!
//! This example shows how to:
//! - Tokenize files into (word, file, position) triples
//! - Feed them to a `TermLocationIndex`
//! - Run case-insensitive prefix searches
//! - Dump the index to a text file
//!
//! Each file is one location; a position is the 1-based ordinal of the word
//! inside its file. Words are runs of alphanumeric characters.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example build_index -- notes/*.txt
//! ```
//!
//! Choose the dump destination (default: `invertedindex.txt`):
//!
//! ```sh
//! cargo run --example build_index -- --output index.txt notes/*.txt
//! ```
//!
//! Print the terms starting with a prefix (case-insensitive, repeatable):
//!
//! ```sh
//! cargo run --example build_index -- --prefix app --prefix ban notes/*.txt
//! ```
//!
//! Set `RUST_LOG=debug` to see what the index logs while dumping.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use rayon::prelude::*;
use termloc_core::TermLocationIndex;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Text files to index. Each file is one location.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Destination of the dump.
    #[arg(short, long, value_name = "PATH", default_value = "invertedindex.txt")]
    output: PathBuf,

    /// Print the terms starting with this prefix (case-insensitive). Repeatable.
    #[arg(short, long = "prefix", value_name = "QUERY")]
    prefixes: Vec<String>,

    /// Keep the case of words instead of lowercasing them.
    #[arg(long)]
    case_sensitive_tokens: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let tokenized = args
        .files
        .par_iter()
        .map(|path| (path, read_words(path, args.case_sensitive_tokens)))
        .collect::<Vec<_>>();

    let mut index = TermLocationIndex::new();
    for (path, words) in tokenized {
        let words = match words {
            Ok(words) => words,
            Err(err) => {
                log::warn!("skipping {}: {err}", path.display());
                continue;
            }
        };
        let location = path.display().to_string();
        index.extend(
            words
                .into_iter()
                .map(|(position, word)| (word, location.clone(), position)),
        );
    }
    log::info!(
        "indexed {} term(s), {} position(s) from {} file(s)",
        index.len(),
        index.position_count(),
        args.files.len()
    );

    for query in &args.prefixes {
        let mut terms = index.terms_with_prefix(query);
        terms.sort_unstable();
        println!("{query}:");
        for term in terms {
            let locations = index.location_count(term);
            println!("  {term} ({locations} file(s))");
        }
    }

    if let Err(err) = index.dump_to_path(&args.output) {
        eprintln!("{err}");
        eprintln!("Please check that the destination is writable.");
        process::exit(1);
    }
    println!("Wrote {}", args.output.display());
}

fn read_words(path: &Path, case_sensitive: bool) -> io::Result<Vec<(usize, String)>> {
    let text = fs::read_to_string(path)?;
    let words = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            if case_sensitive {
                word.to_owned()
            } else {
                word.to_lowercase()
            }
        })
        .enumerate()
        .map(|(i, word)| (i + 1, word))
        .collect();
    Ok(words)
}
