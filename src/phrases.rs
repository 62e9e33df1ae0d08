//! Wordlist storage and multi-token phrase segmentation.

use crate::chars;
use std::collections::HashSet;
use std::io::{self, BufRead};
use std::ops::Range;

/// A set of known words and phrases, stored lowercased with single spaces
/// between the tokens of a multi-token entry.
#[derive(Debug, Default, Clone)]
pub struct Wordlist {
    phrases: HashSet<String>,
}

impl Wordlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one whitespace-separated entry at a time; underscores inside an
    /// entry separate the tokens of a phrase (`học_sinh` becomes
    /// `học sinh`).
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut wordlist = Self::new();
        for line in reader.lines() {
            for entry in line?.split_whitespace() {
                wordlist.insert(entry);
            }
        }
        Ok(wordlist)
    }

    /// Insert an entry, normalizing it to lowercased tokens joined by
    /// single spaces. Empty entries are ignored.
    pub fn insert(&mut self, entry: &str) {
        let normalized = entry
            .split(|c: char| c == '_' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(chars::lowercase)
            .collect::<Vec<_>>()
            .join(" ");
        if !normalized.is_empty() {
            self.phrases.insert(normalized);
        }
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Partition `tokens` into maximal runs whose space-joined form is a
    /// known phrase, scanning greedily left to right. A token that extends
    /// no phrase becomes a singleton range.
    ///
    /// Extension is incremental: `a b c` only forms one range when both
    /// `a b` and `a b c` are in the set.
    pub fn segment(&self, tokens: &[String]) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let start = i;
            let mut current = tokens[i].clone();
            while i + 1 < tokens.len() {
                let extended = format!("{current} {}", tokens[i + 1]);
                if self.phrases.contains(&extended) {
                    current = extended;
                    i += 1;
                } else {
                    break;
                }
            }
            i += 1;
            ranges.push(start..i);
        }
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn insert_normalizes_case_and_underscores() {
        let mut wordlist = Wordlist::new();
        wordlist.insert("Xin_Chào");
        wordlist.insert("__việt__nam__");
        assert!(wordlist.contains("xin chào"));
        assert!(wordlist.contains("việt nam"));
        assert_eq!(wordlist.len(), 2);
    }

    #[test]
    fn segment_groups_known_phrases() {
        let mut wordlist = Wordlist::new();
        wordlist.insert("xin_chào");
        let ranges = wordlist.segment(&tokens(&["xin", "chào", "bạn"]));
        assert_eq!(ranges, vec![0..2, 2..3]);
    }

    #[test]
    fn segment_requires_every_prefix() {
        let mut wordlist = Wordlist::new();
        wordlist.insert("a_b_c");
        // "a b" is unknown, so the three-token phrase is never reached.
        assert_eq!(
            wordlist.segment(&tokens(&["a", "b", "c"])),
            vec![0..1, 1..2, 2..3]
        );

        wordlist.insert("a_b");
        assert_eq!(wordlist.segment(&tokens(&["a", "b", "c"])), vec![0..3]);
    }
}
