//! Beecode - CLI
//!
//! Solve Spelling Bee puzzles, pack answer lists into URL-safe payloads, and
//! compare the encoding strategies.

use anyhow::{Result, bail};
use beecode::{
    codec::Encoding,
    commands::{decode_payload, encode_puzzle, evaluate_encodings, solve_puzzle},
    output::{print_decoded_words, print_encode_result, print_evaluation, print_hint_page},
    wordlists::load_from_file,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "beecode",
    about = "Spelling Bee solver with compact bit-packed answer-list encodings",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the dictionary wordlist (one word per line)
    #[arg(short = 'w', long, global = true, default_value = "nytbee_dict.txt")]
    wordlist: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle and print the hint page
    Solve {
        /// Seven letters with the required letter first, e.g. "abgcfed"
        letters: String,
    },

    /// Solve a puzzle and encode its answer list as a payload string
    Encode {
        /// Seven letters with the required letter first
        letters: String,

        /// Encoding strategy: terminated, length_prefixed, front_coded, compressed
        #[arg(short, long, default_value = "terminated")]
        method: String,
    },

    /// Decode a payload string back into its answer list
    Decode {
        /// Seven letters with the required letter first
        letters: String,

        /// The encoded payload
        payload: String,

        /// Encoding strategy the payload was produced with
        #[arg(short, long, default_value = "terminated")]
        method: String,
    },

    /// Compare all encoding strategies over random sampled puzzles
    Evaluate {
        /// Number of random puzzles to sample
        #[arg(short = 'n', long, default_value = "50")]
        samples: usize,

        /// Random seed for reproducible sampling
        #[arg(short, long, default_value = "19")]
        seed: u64,
    },
}

fn parse_method(name: &str) -> Result<Encoding> {
    match Encoding::from_name(name) {
        Some(encoding) => Ok(encoding),
        None => bail!(
            "unknown encoding '{name}' (expected one of: {})",
            Encoding::ALL.map(Encoding::name).join(", ")
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { letters } => {
            let solution = solve_puzzle(&letters, &cli.wordlist)?;
            print_hint_page(&solution);
        }
        Commands::Encode { letters, method } => {
            let encoding = parse_method(&method)?;
            let result = encode_puzzle(&letters, &cli.wordlist, encoding)?;
            print_encode_result(&result);
        }
        Commands::Decode {
            letters,
            payload,
            method,
        } => {
            let encoding = parse_method(&method)?;
            let words = decode_payload(&letters, &payload, encoding)?;
            print_decoded_words(&words);
        }
        Commands::Evaluate { samples, seed } => {
            let dictionary = load_from_file(&cli.wordlist)?;
            println!(
                "Evaluating {} strategies over {samples} random puzzles...",
                Encoding::ALL.len()
            );
            let stats = evaluate_encodings(&dictionary, samples, seed)?;
            print_evaluation(&stats);
        }
    }

    Ok(())
}
