//! Word dictionary over a chained hash table.
//!
//! A [`Dictionary`] owns one hash table plus a word count. It is
//! mutated only by [`Dictionary::insert`]; there is no delete. Loading
//! from a file is all-or-nothing: any I/O failure, duplicate token or
//! over-length token fails the whole load and yields no dictionary.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use smol_str::SmolStr;

use self::table::HashTable;
use crate::constants::MAX_WORD_LEN;
use crate::tokenizer::Tokenize;

pub use self::error::DictionaryError;

mod error;
pub(crate) mod table;

/// A set of words indexed by a chained hash table.
#[derive(Debug, Clone)]
pub struct Dictionary {
    table: HashTable,
    len: usize,
}

impl Dictionary {
    /// Creates an empty dictionary with the initial table length.
    pub fn new() -> Dictionary {
        Dictionary {
            table: HashTable::new(),
            len: 0,
        }
    }

    /// Number of words currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no words are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stored word count divided by bucket count.
    pub fn load_factor(&self) -> f32 {
        self.table.load_factor(self.len)
    }

    /// Adds a word as the new head of its collision chain.
    ///
    /// Rejects words already present ([`DictionaryError::Duplicate`])
    /// and words over the per-word byte limit
    /// ([`DictionaryError::WordTooLong`]); neither changes the
    /// dictionary. The table doubles and rehashes once the load factor
    /// passes its threshold.
    pub fn insert(&mut self, word: &str) -> Result<(), DictionaryError> {
        if word.len() > MAX_WORD_LEN {
            return Err(DictionaryError::WordTooLong {
                len: word.len(),
                limit: MAX_WORD_LEN,
            });
        }

        if self.table.contains(word) {
            return Err(DictionaryError::Duplicate(SmolStr::new(word)));
        }

        self.table.prepend(SmolStr::new(word));
        self.len += 1;

        if self.table.is_overloaded(self.len) {
            self.table.grow();
        }

        Ok(())
    }

    /// Whether the exact word is stored. Read-only, no side effects.
    pub fn contains(&self, word: &str) -> bool {
        self.table.contains(word)
    }

    /// Visits every word exactly once: ascending bucket index, then
    /// most-recently-inserted-first within each bucket. Printing and
    /// serialization both use this order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.table.iter().map(SmolStr::as_str)
    }

    /// Builds a dictionary from a whitespace-delimited token stream.
    ///
    /// One token per line is the typical shape, but any number of
    /// whitespace-separated tokens per line is accepted. Fails on the
    /// first bad token, discarding everything read so far.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Dictionary, DictionaryError> {
        let mut dictionary = Dictionary::new();

        for line in reader.lines() {
            let line = line?;
            for token in line.tokens() {
                dictionary.insert(token)?;
            }
        }

        Ok(dictionary)
    }

    /// Opens a text file and builds a dictionary from its tokens.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
        let file = File::open(path)?;
        Dictionary::read_from(BufReader::new(file))
    }

    /// Writes every word in [`Dictionary::words`] order, one per line,
    /// newline-terminated.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), DictionaryError> {
        for word in self.words() {
            writeln!(writer, "{}", word)?;
        }

        Ok(())
    }

    /// Creates or truncates the destination file and serializes the
    /// dictionary into it. The file is closed before returning, on
    /// success or failure.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

impl Default for Dictionary {
    fn default() -> Dictionary {
        Dictionary::new()
    }
}
