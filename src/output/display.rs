//! Display functions for command results

use super::formatters::{columnize, format_chars};
use crate::commands::{EncodeResult, EncodingStats};
use crate::solver::Solution;
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Print the hint page for a solved puzzle
pub fn print_hint_page(solution: &Solution) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Spelling Bee Hint Page".bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    let letters: Vec<String> = solution
        .alphabet
        .letters()
        .enumerate()
        .map(|(i, letter)| {
            if i == 0 {
                letter.to_string().bright_yellow().bold().to_string()
            } else {
                letter.to_string()
            }
        })
        .collect();
    println!(
        "Letters: {} (required: {})",
        letters.join(", "),
        solution.alphabet.required().to_string().bright_yellow()
    );
    println!("Total words: {}", solution.word_count());

    if solution.pangrams.is_empty() {
        println!("Pangrams (0): {}", "none".dimmed());
    } else {
        println!(
            "Pangrams ({}): {}",
            solution.pangrams.len(),
            solution.pangrams.join(", ").green().bold()
        );
    }

    let mut by_length: FxHashMap<usize, Vec<&str>> = FxHashMap::default();
    for word in &solution.words {
        by_length.entry(word.len()).or_default().push(word);
    }
    let mut lengths: Vec<usize> = by_length.keys().copied().collect();
    lengths.sort_unstable();

    println!("\n{}", "By length:".bold());
    for length in lengths {
        let group = &by_length[&length];
        println!("{length} letters ({}): {}", group.len(), group.join(", "));
    }

    if !solution.words.is_empty() {
        println!("\n{}", "Alphabetical:".bold());
        for row in columnize(&solution.words, 3) {
            println!("{row}");
        }
    }
}

/// Print an encoded payload with its context line
pub fn print_encode_result(result: &EncodeResult) {
    println!(
        "Encoded {} words with the {} strategy ({} chars):",
        result.word_count,
        result.encoding.name().bold(),
        result.payload.len()
    );
    println!("{}", result.payload.bright_green());
}

/// Print a decoded word list, one word per line
pub fn print_decoded_words(words: &[String]) {
    println!("Decoded {} words:", words.len());
    for word in words {
        println!("{word}");
    }
}

/// Print the evaluation comparison table
pub fn print_evaluation(stats: &[EncodingStats]) {
    let Some(first) = stats.first() else {
        println!("No evaluation results.");
        return;
    };

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " Encoding comparison over {} sampled puzzles ({:.1} words avg) ",
        first.samples, first.average_words
    );
    println!("{}", "═".repeat(60).cyan());
    println!(
        "{:<18} {:>14} {:>12}",
        "method".bold(),
        "avg payload".bold(),
        "avg ratio".bold()
    );

    let best = stats
        .iter()
        .map(|s| s.average_chars)
        .fold(f64::INFINITY, f64::min);
    for stat in stats {
        let payload = format_chars(stat.average_chars);
        let line = format!(
            "{:<18} {payload:>14} {:>11.3}x",
            stat.method, stat.average_ratio
        );
        if (stat.average_chars - best).abs() < f64::EPSILON {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
    }
}
