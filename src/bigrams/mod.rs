//! Bigram reference sets
//!
//! The readable-string detector asks one question of the outside world: "is
//! `ab` a common two-letter sequence?". This module defines that capability
//! as the [`BigramSet`] trait and provides a compact bitmap implementation,
//! [`BigramTable`], that can be filled from an iterator, a text listing or a
//! file on disk.
//!
//! Keys are always queried lower-cased; every loader in this module lower-cases
//! entries on the way in so a listing may use either case.

mod english;

use crate::errors::{BigramError, BigramResult};
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use std::path::Path;
use tracing::debug;

pub use english::{english, COMMON_ENGLISH};

/// Number of 64-bit words needed for one bit per possible 2-byte key
const TABLE_WORDS: usize = (256 * 256) / 64;

/// Membership query against a precomputed set of common bigrams.
///
/// Implementations must be populated before any scan and must not change
/// while a scan borrows them.
pub trait BigramSet {
    /// Returns `true` if the lower-cased two-byte `key` is a recognised bigram
    fn contains(&self, key: [u8; 2]) -> bool;
}

impl<T: BigramSet + ?Sized> BigramSet for &T {
    fn contains(&self, key: [u8; 2]) -> bool {
        (**self).contains(key)
    }
}

impl<S: BuildHasher> BigramSet for HashSet<[u8; 2], S> {
    fn contains(&self, key: [u8; 2]) -> bool {
        HashSet::contains(self, &key)
    }
}

impl BigramSet for BTreeSet<[u8; 2]> {
    fn contains(&self, key: [u8; 2]) -> bool {
        BTreeSet::contains(self, &key)
    }
}

/// Fixed-size membership bitmap with one bit per possible 2-byte key.
///
/// Lookups are a shift and a mask; the table is 8 KiB regardless of how many
/// bigrams it holds.
#[derive(Clone, PartialEq, Eq)]
pub struct BigramTable {
    bits: Box<[u64]>,
    len: usize,
}

impl BigramTable {
    /// Create an empty table (every query answers `false`)
    pub fn new() -> Self {
        Self {
            bits: vec![0u64; TABLE_WORDS].into_boxed_slice(),
            len: 0,
        }
    }

    /// Build a table from raw keys, lower-casing each one
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = [u8; 2]>,
    {
        let mut table = Self::new();
        for key in keys {
            table.insert(key);
        }
        table
    }

    /// Parse a textual listing: one bigram per line, `#` starts a comment,
    /// blank lines are ignored. Entries must be exactly two bytes.
    pub fn parse(listing: &str) -> BigramResult<Self> {
        let mut table = Self::new();

        for (idx, raw) in listing.lines().enumerate() {
            let entry = match raw.split_once('#') {
                Some((before, _)) => before.trim(),
                None => raw.trim(),
            };
            if entry.is_empty() {
                continue;
            }

            match entry.as_bytes() {
                [a, b] => {
                    table.insert([*a, *b]);
                }
                _ => {
                    return Err(BigramError::InvalidEntry {
                        line: idx + 1,
                        entry: entry.to_string(),
                    })
                }
            }
        }

        Ok(table)
    }

    /// Load a listing from disk (see [`BigramTable::parse`] for the format)
    pub fn load(path: impl AsRef<Path>) -> BigramResult<Self> {
        let path = path.as_ref();
        let listing = std::fs::read_to_string(path)?;
        let table = Self::parse(&listing)?;
        debug!("Loaded {} bigrams from {}", table.len(), path.display());
        Ok(table)
    }

    /// Insert a key (lower-cased); returns `true` if it was not already present
    pub fn insert(&mut self, key: [u8; 2]) -> bool {
        let (word, mask) = Self::slot(normalise(key));
        let fresh = self.bits[word] & mask == 0;
        if fresh {
            self.bits[word] |= mask;
            self.len += 1;
        }
        fresh
    }

    /// Number of distinct bigrams held
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn slot(key: [u8; 2]) -> (usize, u64) {
        let index = ((key[0] as usize) << 8) | key[1] as usize;
        (index / 64, 1u64 << (index % 64))
    }
}

impl Default for BigramTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BigramTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BigramTable")
            .field("len", &self.len)
            .finish()
    }
}

impl BigramSet for BigramTable {
    #[inline]
    fn contains(&self, key: [u8; 2]) -> bool {
        let (word, mask) = Self::slot(key);
        self.bits[word] & mask != 0
    }
}

impl FromIterator<[u8; 2]> for BigramTable {
    fn from_iter<I: IntoIterator<Item = [u8; 2]>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

#[inline]
fn normalise(key: [u8; 2]) -> [u8; 2] {
    [key[0].to_ascii_lowercase(), key[1].to_ascii_lowercase()]
}
