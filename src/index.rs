//! The read-only index the correction engine runs against.

use crate::bigrams::{BigramIndex, BigramTable};
use crate::interner::Interner;
use crate::invariants;

/// Interner plus sorted bigram views, built once and immutable afterwards.
///
/// Every key in the views decomposes to two ids that exist in the interner;
/// construction asserts this (and the sorted-view invariants) in debug
/// builds.
#[derive(Debug, Default, Clone)]
pub struct Index {
    interner: Interner,
    bigrams: BigramIndex,
}

impl Index {
    pub fn new(interner: Interner, table: &BigramTable) -> Self {
        let index = Self {
            bigrams: BigramIndex::from_table(table),
            interner,
        };
        invariants::assert_index_consistent(&index);
        index
    }

    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    pub fn bigrams(&self) -> &BigramIndex {
        &self.bigrams
    }

    /// Number of distinct tokens.
    pub fn n_tokens(&self) -> usize {
        self.interner.len()
    }

    /// Number of stored bigrams.
    pub fn n_bigrams(&self) -> usize {
        self.bigrams.len()
    }
}
