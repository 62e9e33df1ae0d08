//! Frequency-file persistence.
//!
//! One bigram per line, `<left-token> <right-token> <count>`, no header.
//! Loading re-interns tokens in file order, so a reloaded index is
//! functionally equivalent to the one that wrote the file even though the
//! raw ids may differ.

use crate::bigrams::{left_id, pack, right_id, BigramKey, BigramTable};
use crate::interner::Interner;
use crate::TokenId;
use std::io::{self, BufRead, Write};

/// Write a bigram table in sorted key order, one `left right count` line
/// per entry.
pub fn write_frequency<W: Write>(
    mut writer: W,
    interner: &Interner,
    table: &BigramTable,
) -> io::Result<()> {
    let mut entries: Vec<(BigramKey, u32)> = table.iter().collect();
    entries.sort_unstable();
    for (key, count) in entries {
        let (Some(left), Some(right)) = (
            interner.resolve(left_id(key)),
            interner.resolve(right_id(key)),
        ) else {
            continue;
        };
        writeln!(writer, "{left} {right} {count}")?;
    }
    writer.flush()
}

/// Read a frequency file, interning tokens as they appear.
///
/// Fields are read as a whitespace-separated stream in triples. A field
/// that should be a count but does not parse, or a trailing incomplete
/// triple, ends the parse; everything read up to that point is kept.
pub fn read_frequency<R: BufRead>(reader: R) -> io::Result<(Interner, BigramTable)> {
    let mut interner = Interner::new();
    let mut table = BigramTable::new();
    let mut pending: (Option<TokenId>, Option<TokenId>) = (None, None);

    'stream: for line in reader.lines() {
        for field in line?.split_whitespace() {
            match pending {
                (None, _) => pending.0 = Some(interner.intern(field)),
                (Some(_), None) => pending.1 = Some(interner.intern(field)),
                (Some(left), Some(right)) => {
                    let Ok(count) = field.parse::<u32>() else {
                        break 'stream;
                    };
                    table.insert(pack(left, right), count);
                    pending = (None, None);
                }
            }
        }
    }

    Ok((interner, table))
}
