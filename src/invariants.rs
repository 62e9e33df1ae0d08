//! Debug-mode consistency assertions for the index structures.
//!
//! Active only under `debug_assertions`; release builds compile these to
//! no-ops so construction stays cheap on large tables.

use crate::index::Index;
use crate::interner::Interner;

/// Asserts the structural invariants of a freshly built [`Index`]:
/// equal-length strictly sorted views, every key decomposing to interned
/// ids, and the interner bijection.
///
/// # Panics
///
/// Panics in debug builds if any invariant is violated.
#[inline]
pub fn assert_index_consistent(index: &Index) {
    #[cfg(debug_assertions)]
    {
        let forward = index.bigrams().forward();
        let backward = index.bigrams().backward();

        debug_assert_eq!(
            forward.len(),
            backward.len(),
            "Invariant violation: view lengths differ"
        );
        debug_assert!(
            forward.windows(2).all(|w| w[0].0 < w[1].0),
            "Invariant violation: forward view is not strictly sorted"
        );
        debug_assert!(
            backward.windows(2).all(|w| w[0].0 < w[1].0),
            "Invariant violation: backward view is not strictly sorted"
        );

        let n_tokens = index.n_tokens();
        for &(key, _) in forward {
            debug_assert!(
                (crate::bigrams::left_id(key) as usize) < n_tokens
                    && (crate::bigrams::right_id(key) as usize) < n_tokens,
                "Invariant violation: key {key:#x} references an unknown token id"
            );
        }

        assert_interner_bijection(index.interner());
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = index;
    }
}

/// Asserts that resolving and re-looking-up every assigned id is the
/// identity.
///
/// # Panics
///
/// Panics in debug builds if the mapping is not a bijection.
#[inline]
pub fn assert_interner_bijection(interner: &Interner) {
    #[cfg(debug_assertions)]
    {
        for id in 0..interner.len() as crate::TokenId {
            let token = interner.resolve(id);
            debug_assert!(
                token.is_some(),
                "Invariant violation: id {id} has no token string"
            );
            debug_assert_eq!(
                token.and_then(|t| interner.lookup(t)),
                Some(id),
                "Invariant violation: id {id} does not round-trip"
            );
        }
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = interner;
    }
}
