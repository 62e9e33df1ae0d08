//! The line-level correction pipeline.
//!
//! A line is scanned as a stream of whitespace-separated raw tokens. Word
//! tokens accumulate into a group; a token with a junk edge byte closes the
//! group on the matching side, and anything messier flushes the group and
//! passes through verbatim. Flushing a group runs the actual correction:
//! phrase segmentation decides which positions are inspected, each
//! inspected token is scored against its neighbours' bigram distributions,
//! and the winning replacement is re-cased to match the original token.

use crate::chars::{self, TokenShape};
use crate::distance::damerau_levenshtein;
use crate::index::Index;
use crate::phrases::Wordlist;
use crate::{CorrectorConfig, TokenId};
use std::collections::HashMap;

/// Original letter case of an inspected token, used to re-case its
/// replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseType {
    /// Uppercase first code point, the rest lowercase.
    Capitalized,
    /// Every code point uppercase.
    AllUpper,
    /// Anything else; replacements stay lowercase.
    Other,
}

/// Correct a whole document. Every input line yields one output line
/// terminated by `\n`.
pub(crate) fn correct_text(
    index: &Index,
    wordlist: &Wordlist,
    config: &CorrectorConfig,
    text: &str,
) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    for line in text.lines() {
        correct_line_into(index, wordlist, config, line, &mut out);
        out.push('\n');
    }
    out
}

/// Correct a single line, without a trailing newline.
pub(crate) fn correct_line(
    index: &Index,
    wordlist: &Wordlist,
    config: &CorrectorConfig,
    line: &str,
) -> String {
    let mut out = String::with_capacity(line.len());
    correct_line_into(index, wordlist, config, line, &mut out);
    out
}

fn correct_line_into(
    index: &Index,
    wordlist: &Wordlist,
    config: &CorrectorConfig,
    line: &str,
    out: &mut String,
) {
    let mut group: Vec<String> = Vec::new();
    let mut first_emission = true;

    for token in line.split_whitespace() {
        match chars::token_shape(token) {
            TokenShape::Word => group.push(token.to_owned()),
            TokenShape::LeadingJunk => {
                if flush_group(index, wordlist, config, &mut group, first_emission, out) {
                    first_emission = false;
                }
                group.push(token.to_owned());
            }
            TokenShape::TrailingJunk => {
                group.push(token.to_owned());
                if flush_group(index, wordlist, config, &mut group, first_emission, out) {
                    first_emission = false;
                }
            }
            TokenShape::Other => {
                if flush_group(index, wordlist, config, &mut group, first_emission, out) {
                    first_emission = false;
                }
                if !first_emission {
                    out.push(' ');
                }
                out.push_str(token);
                first_emission = false;
            }
        }
    }

    flush_group(index, wordlist, config, &mut group, first_emission, out);
}

/// Correct the accumulated group and append it to `out`, separated from
/// prior output by a single space unless it opens the line. Returns true
/// when anything was emitted.
fn flush_group(
    index: &Index,
    wordlist: &Wordlist,
    config: &CorrectorConfig,
    group: &mut Vec<String>,
    first_emission: bool,
    out: &mut String,
) -> bool {
    if group.is_empty() {
        return false;
    }

    // Junk edge bytes are ASCII by construction; hold them aside and
    // reattach verbatim after correction.
    let lead = {
        let first = &mut group[0];
        if chars::is_tokenizable(first.as_bytes()[0]) {
            None
        } else {
            Some(first.remove(0))
        }
    };
    let trail = group.last_mut().and_then(|last| {
        let junk_end = last
            .as_bytes()
            .last()
            .map_or(false, |&b| !chars::is_tokenizable(b));
        if junk_end {
            last.pop()
        } else {
            None
        }
    });

    let mut lowercase: Vec<String> = group.iter().map(|t| chars::lowercase(t)).collect();

    // Tokens inside a recognized multi-token phrase are assumed correct;
    // only singleton segments are inspected.
    let mut inspected = vec![false; group.len()];
    for range in wordlist.segment(&lowercase) {
        if range.len() == 1 {
            inspected[range.start] = true;
        }
    }

    let case_types: Vec<Option<CaseType>> = group
        .iter()
        .zip(&inspected)
        .map(|(token, &inspect)| inspect.then(|| case_type(token)))
        .collect();

    // Corrections land in `lowercase` as they are found, so later positions
    // score against the corrected left neighbour.
    for i in 0..lowercase.len() {
        if !inspected[i] {
            continue;
        }
        if let Some(replacement) = best_replacement(index, config, &lowercase, i) {
            lowercase[i] = replacement;
        }
    }

    for i in 0..group.len() {
        let Some(case) = case_types[i] else { continue };
        group[i] = match case {
            CaseType::Capitalized => chars::capitalize_first(&lowercase[i]),
            CaseType::AllUpper => chars::capitalize_all(&lowercase[i]),
            CaseType::Other => std::mem::take(&mut lowercase[i]),
        };
    }

    if let Some(ch) = lead {
        group[0].insert(0, ch);
    }
    if let (Some(ch), Some(last)) = (trail, group.last_mut()) {
        last.push(ch);
    }

    if !first_emission {
        out.push(' ');
    }
    out.push_str(&group.join(" "));
    group.clear();
    true
}

/// Classify the letter case of an original token.
fn case_type(token: &str) -> CaseType {
    let bytes = token.as_bytes();
    if !chars::is_upper_at(bytes, 0) {
        return CaseType::Other;
    }
    let mut has_upper = false;
    let mut all_upper = true;
    for at in 1..bytes.len() {
        if chars::is_char_start(bytes[at]) {
            if chars::is_upper_at(bytes, at) {
                has_upper = true;
            } else {
                all_upper = false;
            }
        }
    }
    if all_upper {
        CaseType::AllUpper
    } else if has_upper {
        // Mixed case is left lowercase after correction.
        CaseType::Other
    } else {
        CaseType::Capitalized
    }
}

/// Pick the best in-vocabulary replacement for `lowercase[at]`, or `None`
/// when no candidate scores within the edit-distance threshold.
fn best_replacement(
    index: &Index,
    config: &CorrectorConfig,
    lowercase: &[String],
    at: usize,
) -> Option<String> {
    let mut left: HashMap<TokenId, u32> = HashMap::new();
    if at > 0 {
        if let Some(id) = index.interner().lookup(&lowercase[at - 1]) {
            for (right_id, count) in index.bigrams().successors(id) {
                left.insert(right_id, count);
            }
        }
    }

    let mut right: HashMap<TokenId, u32> = HashMap::new();
    if at + 1 < lowercase.len() {
        if let Some(id) = index.interner().lookup(&lowercase[at + 1]) {
            for (left_id, count) in index.bigrams().predecessors(id) {
                *right.entry(left_id).or_insert(0) += count;
            }
        }
    }

    if left.is_empty() && right.is_empty() {
        return None;
    }

    let total_left: f64 = left.values().map(|&c| f64::from(c)).sum();
    let total_right: f64 = right.values().map(|&c| f64::from(c)).sum();

    let scores: HashMap<TokenId, f64> = if left.is_empty() {
        right
            .iter()
            .map(|(&id, &c)| (id, f64::from(c) / total_right))
            .collect()
    } else if right.is_empty() {
        left.iter()
            .map(|(&id, &c)| (id, f64::from(c) / total_left))
            .collect()
    } else if config.symmetric_merge {
        merge_symmetric(&left, total_left, &right, total_right)
    } else {
        // Candidates known only to the right neighbour are not considered
        // on this path.
        left.iter()
            .map(|(&id, &c)| {
                let x = f64::from(c) / total_left;
                let y = f64::from(right.get(&id).copied().unwrap_or(0)) / total_right;
                (id, (x * y).sqrt())
            })
            .collect()
    };

    let mut candidates: Vec<(f64, TokenId)> = scores.into_iter().map(|(id, s)| (s, id)).collect();
    candidates.sort_unstable_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(config.max_candidates_per_token);

    let mut best: Option<TokenId> = None;
    let mut max_fitness = f64::MIN_POSITIVE;
    for (score, id) in candidates {
        let Some(word) = index.interner().resolve(id) else {
            continue;
        };
        let d = damerau_levenshtein(&lowercase[at], word);
        if d > config.edit_distance_threshold {
            continue;
        }
        let fitness = score * config.edit_penalty_factor.powi(d as i32);
        if fitness > max_fitness {
            max_fitness = fitness;
            best = Some(id);
        }
    }

    best.and_then(|id| index.interner().resolve(id))
        .map(str::to_owned)
}

/// The symmetric merge variant: candidates from both neighbour maps, the
/// geometric mean where both sides know the candidate, the single
/// normalized mass otherwise.
fn merge_symmetric(
    left: &HashMap<TokenId, u32>,
    total_left: f64,
    right: &HashMap<TokenId, u32>,
    total_right: f64,
) -> HashMap<TokenId, f64> {
    let mut merged: HashMap<TokenId, f64> = HashMap::new();
    for (&id, &c) in left {
        let x = f64::from(c) / total_left;
        let score = match right.get(&id) {
            Some(&rc) => (x * (f64::from(rc) / total_right)).sqrt(),
            None => x,
        };
        merged.insert(id, score);
    }
    for (&id, &c) in right {
        merged.entry(id).or_insert(f64::from(c) / total_right);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_type_classification() {
        assert_eq!(case_type("Chào"), CaseType::Capitalized);
        assert_eq!(case_type("CHÀO"), CaseType::AllUpper);
        assert_eq!(case_type("chào"), CaseType::Other);
        assert_eq!(case_type("ChÀo"), CaseType::Other);
        // A single uppercase letter counts as all-uppercase.
        assert_eq!(case_type("A"), CaseType::AllUpper);
        assert_eq!(case_type("Ằ"), CaseType::AllUpper);
    }
}
