// Frequency-file persistence: round trips through real files.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};

use vispell::bigrams::{left_id, right_id, BigramTable};
use vispell::freq::{read_frequency, write_frequency};
use vispell::interner::Interner;
use vispell::learner;

/// Collapse a table to its token-keyed form; reloading renumbers ids, so
/// comparisons must go through the token strings.
fn token_keyed(interner: &Interner, table: &BigramTable) -> BTreeMap<(String, String), u32> {
    table
        .iter()
        .map(|(key, count)| {
            let left = interner.resolve(left_id(key)).unwrap().to_owned();
            let right = interner.resolve(right_id(key)).unwrap().to_owned();
            ((left, right), count)
        })
        .collect()
}

#[test]
fn learned_table_round_trips_through_a_file() {
    let corpus = "em chào bạn. em chào bạn. em chào bạn.\n\
                  bạn học giỏi. bạn học giỏi. bạn học giỏi.\n";
    let mut interner = Interner::new();
    let table = learner::learn(Cursor::new(corpus), &mut interner, 3).unwrap();
    assert_eq!(table.len(), 4);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frequency.txt");
    write_frequency(BufWriter::new(File::create(&path).unwrap()), &interner, &table).unwrap();

    let (reloaded_interner, reloaded_table) =
        read_frequency(BufReader::new(File::open(&path).unwrap())).unwrap();

    assert_eq!(
        token_keyed(&interner, &table),
        token_keyed(&reloaded_interner, &reloaded_table)
    );
}

#[test]
fn writer_output_is_deterministic() {
    let corpus = "việt nam việt nam việt nam. quê hương. quê hương. quê hương.\n";
    let mut interner = Interner::new();
    let table = learner::learn(Cursor::new(corpus), &mut interner, 2).unwrap();

    let mut first = Vec::new();
    write_frequency(&mut first, &interner, &table).unwrap();
    let mut second = Vec::new();
    write_frequency(&mut second, &interner, &table).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn malformed_tail_keeps_the_parsed_prefix() {
    let (_, table) = read_frequency(Cursor::new("em chào 5\nchào bạn not-a-count\n")).unwrap();
    assert_eq!(table.len(), 1);

    let (interner, table) = read_frequency(Cursor::new("em chào 5\nchào bạn\n")).unwrap();
    assert_eq!(table.len(), 1);
    // The dangling pair was interned before the stream ran out.
    assert!(interner.lookup("bạn").is_some());
}

#[test]
fn ids_are_assigned_in_file_order() {
    let (interner, _) = read_frequency(Cursor::new("bạn em 2\nem chào 7\n")).unwrap();
    assert_eq!(interner.lookup("bạn"), Some(0));
    assert_eq!(interner.lookup("em"), Some(1));
    assert_eq!(interner.lookup("chào"), Some(2));
}
