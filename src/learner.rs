//! Streaming bigram learner.
//!
//! Consumes a whitespace-separated token stream and counts adjacent pairs
//! within "runs" of word tokens. Punctuation terminates a run: a token with
//! a non-tokenizable edge byte contributes its stripped form and ends (or
//! restarts) the run, anything messier ends the run and is discarded.

use crate::bigrams::BigramTable;
use crate::chars::{self, TokenShape};
use crate::interner::Interner;
use crate::TokenId;
use std::io::{self, BufRead};

/// Bigrams seen fewer times than this are dropped after learning.
pub const DEFAULT_MIN_FREQUENCY: u32 = 3;

/// Learn a bigram table from a raw text corpus.
///
/// Tokens are lowercased before interning, and runs continue across line
/// breaks; only token shape terminates them. After the stream is exhausted,
/// entries with a count below `min_frequency` are discarded.
pub fn learn<R: BufRead>(
    reader: R,
    interner: &mut Interner,
    min_frequency: u32,
) -> io::Result<BigramTable> {
    let mut table = BigramTable::new();
    let mut run: Vec<TokenId> = Vec::new();

    for line in reader.lines() {
        for token in line?.split_whitespace() {
            match chars::token_shape(token) {
                TokenShape::Word => {
                    run.push(interner.intern(&chars::lowercase(token)));
                }
                TokenShape::LeadingJunk => {
                    terminate(&mut run, &mut table);
                    run.push(interner.intern(&chars::lowercase(&token[1..])));
                }
                TokenShape::TrailingJunk => {
                    run.push(interner.intern(&chars::lowercase(&token[..token.len() - 1])));
                    terminate(&mut run, &mut table);
                }
                TokenShape::Other => {
                    terminate(&mut run, &mut table);
                }
            }
        }
    }
    // A run still open at end of input emits nothing.

    table.prune_below(min_frequency);
    Ok(table)
}

/// Emit every adjacent pair of the run, then clear it.
fn terminate(run: &mut Vec<TokenId>, table: &mut BigramTable) {
    for pair in run.windows(2) {
        table.record(pair[0], pair[1]);
    }
    run.clear();
}
