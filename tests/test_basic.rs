// Facade-level tests: construction, accessors, batch parity, file loading.

use std::fs;
use vispell::bigrams::{pack, BigramTable};
use vispell::index::Index;
use vispell::interner::Interner;
use vispell::phrases::Wordlist;
use vispell::{Corrector, CorrectorConfig, Error};

fn greeting_corrector() -> Corrector {
    let mut interner = Interner::new();
    let mut table = BigramTable::new();
    let em = interner.intern("em");
    let chao = interner.intern("chào");
    let ban = interner.intern("bạn");
    table.insert(pack(em, chao), 5);
    table.insert(pack(chao, ban), 3);

    let mut wordlist = Wordlist::new();
    wordlist.insert("xin_chào");

    Corrector::new(
        Index::new(interner, &table),
        wordlist,
        CorrectorConfig::default(),
    )
}

#[test]
fn accessors_report_sizes() {
    let corrector = greeting_corrector();
    assert_eq!(corrector.index().n_tokens(), 3);
    assert_eq!(corrector.index().n_bigrams(), 2);
    assert_eq!(corrector.wordlist().len(), 1);
    assert_eq!(corrector.config().edit_distance_threshold, 2);
}

#[test]
fn correct_is_correct_line_plus_newlines() {
    let corrector = greeting_corrector();
    let lines = ["em chao ban.", "xin chao"];
    let document = lines.join("\n");
    let expected: String = lines
        .iter()
        .map(|line| corrector.correct_line(line) + "\n")
        .collect();
    assert_eq!(corrector.correct(&document), expected);
}

#[test]
fn batch_matches_sequential_and_preserves_order() {
    let corrector = greeting_corrector();
    let lines: Vec<String> = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                format!("em chao ban. #{i}")
            } else {
                format!("xin chào #{i}")
            }
        })
        .collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    let batch = corrector.correct_batch(&refs);
    assert_eq!(batch.len(), refs.len());
    for (line, corrected) in refs.iter().zip(&batch) {
        assert_eq!(corrected, &corrector.correct_line(line));
    }
}

#[test]
fn empty_input_is_empty_output() {
    let corrector = greeting_corrector();
    assert_eq!(corrector.correct(""), "");
    assert_eq!(corrector.correct_line(""), "");
    assert!(corrector.correct_batch(&[]).is_empty());
}

#[test]
fn from_files_loads_frequency_and_wordlist() {
    let dir = tempfile::tempdir().unwrap();
    let frequency_path = dir.path().join("frequency.txt");
    let wordlist_path = dir.path().join("wordlist.txt");
    fs::write(&frequency_path, "em chào 5\nchào bạn 3\n").unwrap();
    fs::write(&wordlist_path, "xin_chào\nviệt_nam\n").unwrap();

    let corrector =
        Corrector::from_files(&frequency_path, &wordlist_path, CorrectorConfig::default())
            .unwrap();
    assert_eq!(corrector.index().n_bigrams(), 2);
    assert_eq!(corrector.wordlist().len(), 2);
    assert_eq!(corrector.correct_line("em chao ban."), "em chào bạn.");
}

#[test]
fn from_files_names_the_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such_frequency.txt");
    let wordlist_path = dir.path().join("wordlist.txt");
    fs::write(&wordlist_path, "xin_chào\n").unwrap();

    let err = Corrector::from_files(&missing, &wordlist_path, CorrectorConfig::default())
        .expect_err("missing frequency file must fail");
    match &err {
        Error::Read { path, .. } => assert!(path.contains("no_such_frequency")),
        other => panic!("wrong error type: {other:?}"),
    }
    assert!(err.to_string().contains("no_such_frequency"));
}
