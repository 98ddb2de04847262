//! Chained hash table underlying the dictionary.

use log::debug;
use smol_str::SmolStr;

use crate::constants::{INITIAL_TABLE_LEN, MAX_LOAD_FACTOR};

/// Polynomial string hash: `hash * 31 + byte` over each byte in
/// sequence, starting from 0, with wrapping 32-bit arithmetic.
/// The empty string hashes to 0.
pub(crate) fn hash_word(word: &str) -> u32 {
    word.bytes().fold(0u32, |hash, byte| {
        hash.wrapping_mul(31).wrapping_add(u32::from(byte))
    })
}

/// Fixed-length array of collision chains. Each bucket owns its chain
/// as a `Vec`; new entries are pushed to the back and chains iterate
/// in reverse, so the observable order within a chain is
/// most-recently-inserted-first.
#[derive(Debug, Clone)]
pub(crate) struct HashTable {
    buckets: Vec<Vec<SmolStr>>,
}

impl HashTable {
    pub(crate) fn new() -> HashTable {
        HashTable::with_len(INITIAL_TABLE_LEN)
    }

    fn with_len(len: usize) -> HashTable {
        HashTable {
            buckets: vec![Vec::new(); len],
        }
    }

    /// Bucket count, not stored word count.
    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket index for a word. The modulo is taken on the unsigned
    /// hash, so the index is in `[0, len)` even when the hash has its
    /// sign bit set.
    pub(crate) fn bucket_index(&self, word: &str) -> usize {
        (hash_word(word) % self.buckets.len() as u32) as usize
    }

    pub(crate) fn contains(&self, word: &str) -> bool {
        self.buckets[self.bucket_index(word)]
            .iter()
            .any(|stored| stored == word)
    }

    /// Links a word in as the new head of its chain. The caller has
    /// already ruled out duplicates.
    pub(crate) fn prepend(&mut self, word: SmolStr) {
        let index = self.bucket_index(&word);
        self.buckets[index].push(word);
    }

    /// Every stored word exactly once: ascending bucket index,
    /// newest-first within each bucket.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.buckets.iter().flat_map(|chain| chain.iter().rev())
    }

    pub(crate) fn load_factor(&self, stored: usize) -> f32 {
        stored as f32 / self.buckets.len() as f32
    }

    pub(crate) fn is_overloaded(&self, stored: usize) -> bool {
        self.load_factor(stored) > MAX_LOAD_FACTOR
    }

    /// Doubles the bucket count and rehashes every chain. Walking each
    /// old chain oldest-first keeps relative recency intact inside the
    /// new chains.
    pub(crate) fn grow(&mut self) {
        let mut next = HashTable::with_len(self.buckets.len() * 2);

        for chain in &self.buckets {
            for word in chain {
                next.prepend(word.clone());
            }
        }

        debug!(
            "table grown from {} to {} buckets",
            self.buckets.len(),
            next.buckets.len()
        );
        *self = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_word_hashes_to_zero() {
        assert_eq!(hash_word(""), 0);
    }

    #[test]
    fn hash_matches_reference_values() {
        assert_eq!(hash_word("cat"), 98_262);
        assert_eq!(hash_word("the"), 114_801);
        assert_eq!(hash_word("apple"), 93_029_210);
    }

    #[test]
    fn hash_wraps_on_overflow() {
        // Long enough that hash * 31 overflows u32 many times over.
        assert_eq!(hash_word("supercalifragilistic"), 4_101_467_033);
    }

    #[test]
    fn hash_depends_only_on_byte_content() {
        assert_eq!(hash_word("banana"), hash_word(&"banana".to_string()));
        assert_ne!(hash_word("banana"), hash_word("bananas"));
    }

    #[test]
    fn bucket_index_in_range_for_sign_bit_hashes() {
        let table = HashTable::new();
        for word in ["banana", "cherry", "zzzzzzzz", "supercalifragilistic"] {
            assert!(hash_word(word) > i32::MAX as u32);
            assert!(table.bucket_index(word) < table.len());
        }
    }

    #[test]
    fn chains_iterate_newest_first() {
        // Both words land in bucket 0 of a 16-bucket table.
        let mut table = HashTable::new();
        table.prepend(SmolStr::new("zzzzzzzz"));
        table.prepend(SmolStr::new("aaaaaaaaaa"));

        let words: Vec<&str> = table.iter().map(|w| w.as_str()).collect();
        assert_eq!(words, ["aaaaaaaaaa", "zzzzzzzz"]);
    }

    #[test]
    fn grow_doubles_and_keeps_every_word() {
        let mut table = HashTable::new();
        let words = ["apple", "banana", "cherry", "cat", "dog", "fox"];
        for word in words {
            table.prepend(SmolStr::new(word));
        }

        table.grow();

        assert_eq!(table.len(), INITIAL_TABLE_LEN * 2);
        assert_eq!(table.iter().count(), words.len());
        for word in words {
            assert!(table.contains(word));
            assert!(table.bucket_index(word) < table.len());
        }
    }
}
