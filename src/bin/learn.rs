//! Build a bigram frequency file from a raw text corpus.
//!
//! Usage: `learn [--corpus <path|->] [--frequency <path>] [--min-frequency N]`
//!
//! Passing `-` as the corpus reads from stdin.

use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process;

use vispell::bigrams::{left_id, right_id};
use vispell::interner::Interner;
use vispell::learner::{self, DEFAULT_MIN_FREQUENCY};
use vispell::{freq, Error};

struct Args {
    corpus: String,
    frequency: String,
    min_frequency: u32,
}

fn parse_args() -> Result<Args, Error> {
    let mut args = Args {
        corpus: "data/corpus.txt".to_owned(),
        frequency: "data/frequency.txt".to_owned(),
        min_frequency: DEFAULT_MIN_FREQUENCY,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--corpus" => args.corpus = expect_value(&mut iter, "--corpus")?,
            "--frequency" => args.frequency = expect_value(&mut iter, "--frequency")?,
            "--min-frequency" => {
                let value = expect_value(&mut iter, "--min-frequency")?;
                args.min_frequency = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid value for --min-frequency: \"{value}\""))
                })?;
            }
            other => return Err(Error::Config(format!("Unrecognized argument \"{other}\""))),
        }
    }
    Ok(args)
}

fn expect_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, Error> {
    iter.next()
        .ok_or_else(|| Error::Config(format!("Expected a value after \"{flag}\"")))
}

fn run() -> Result<(), Error> {
    let args = parse_args()?;

    let mut interner = Interner::new();
    let table = if args.corpus == "-" {
        learner::learn(io::stdin().lock(), &mut interner, args.min_frequency)?
    } else {
        let file = File::open(&args.corpus).map_err(|source| Error::Read {
            path: args.corpus.clone(),
            source,
        })?;
        learner::learn(BufReader::new(file), &mut interner, args.min_frequency)?
    };

    let output = File::create(&args.frequency).map_err(|source| Error::Write {
        path: args.frequency.clone(),
        source,
    })?;
    freq::write_frequency(BufWriter::new(output), &interner, &table).map_err(|source| {
        Error::Write {
            path: args.frequency.clone(),
            source,
        }
    })?;

    println!("Saved {} bigrams to \"{}\"", table.len(), args.frequency);
    if let Some((key, count)) = table.iter().max_by_key(|&(_, count)| count) {
        if let (Some(left), Some(right)) = (
            interner.resolve(left_id(key)),
            interner.resolve(right_id(key)),
        ) {
            println!("Most frequent bigram: \"{left} {right}\" with a count of {count}");
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}
