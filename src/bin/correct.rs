//! Correct a document with a learned frequency file and a wordlist.
//!
//! Usage: `correct --frequency <path> --wordlist <path> [--input <path|->]
//! [--output <path|->] [--distance N] [--candidates N] [--penalty F]
//! [--symmetric]`
//!
//! Input and output default to stdin and stdout.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process;

use vispell::{Corrector, CorrectorConfig, Error};

struct Args {
    frequency: String,
    wordlist: String,
    input: String,
    output: String,
    config: CorrectorConfig,
}

fn parse_args() -> Result<Args, Error> {
    let mut args = Args {
        frequency: "data/frequency.txt".to_owned(),
        wordlist: "data/wordlist.txt".to_owned(),
        input: "-".to_owned(),
        output: "-".to_owned(),
        config: CorrectorConfig::default(),
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frequency" => args.frequency = expect_value(&mut iter, "--frequency")?,
            "--wordlist" => args.wordlist = expect_value(&mut iter, "--wordlist")?,
            "--input" => args.input = expect_value(&mut iter, "--input")?,
            "--output" => args.output = expect_value(&mut iter, "--output")?,
            "--distance" => {
                args.config.edit_distance_threshold = parse_value(&mut iter, "--distance")?;
            }
            "--candidates" => {
                args.config.max_candidates_per_token = parse_value(&mut iter, "--candidates")?;
            }
            "--penalty" => {
                args.config.edit_penalty_factor = parse_value(&mut iter, "--penalty")?;
            }
            "--symmetric" => args.config.symmetric_merge = true,
            other => return Err(Error::Config(format!("Unrecognized argument \"{other}\""))),
        }
    }
    Ok(args)
}

fn expect_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, Error> {
    iter.next()
        .ok_or_else(|| Error::Config(format!("Expected a value after \"{flag}\"")))
}

fn parse_value<T: std::str::FromStr>(
    iter: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T, Error> {
    let value = expect_value(iter, flag)?;
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid value for {flag}: \"{value}\"")))
}

fn run() -> Result<(), Error> {
    let args = parse_args()?;
    let corrector = Corrector::from_files(&args.frequency, &args.wordlist, args.config)?;

    let text = if args.input == "-" {
        let mut buffer = String::new();
        io::stdin().lock().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&args.input).map_err(|source| Error::Read {
            path: args.input.clone(),
            source,
        })?
    };

    let corrected = corrector.correct(&text);

    if args.output == "-" {
        io::stdout().lock().write_all(corrected.as_bytes())?;
    } else {
        fs::write(&args.output, corrected).map_err(|source| Error::Write {
            path: args.output.clone(),
            source,
        })?;
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}
