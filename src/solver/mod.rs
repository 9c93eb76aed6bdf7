//! Spelling Bee puzzle solving
//!
//! Filters a dictionary down to the words a puzzle accepts: at least four
//! letters, containing the required letter, using only puzzle letters.

use crate::core::{Alphabet, MIN_WORD_LEN};

/// A solved puzzle: the accepted words plus its pangrams, both sorted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub alphabet: Alphabet,
    pub words: Vec<String>,
    pub pangrams: Vec<String>,
}

impl Solution {
    /// Total accepted words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Solve a puzzle against a dictionary
///
/// The dictionary is assumed lowercase (see `wordlists::loader`); entries that
/// fail any puzzle rule are skipped, not reported. Output is sorted.
///
/// # Examples
/// ```
/// use beecode::core::Alphabet;
/// use beecode::solver::solve;
///
/// let alphabet = Alphabet::new("abgcfed").unwrap();
/// let dictionary = vec!["face".to_string(), "bead".to_string(), "zebra".to_string()];
/// let solution = solve(&alphabet, &dictionary);
/// assert_eq!(solution.words, vec!["bead", "face"]);
/// ```
#[must_use]
pub fn solve(alphabet: &Alphabet, dictionary: &[String]) -> Solution {
    let required = alphabet.required();
    let mut words: Vec<String> = dictionary
        .iter()
        .filter(|word| {
            word.len() >= MIN_WORD_LEN
                && word.contains(required)
                && word.chars().all(|c| alphabet.contains(c))
        })
        .cloned()
        .collect();
    words.sort_unstable();
    words.dedup();

    let pangrams: Vec<String> = words
        .iter()
        .filter(|word| alphabet.is_pangram(word))
        .cloned()
        .collect();

    Solution {
        alphabet: alphabet.clone(),
        words,
        pangrams,
    }
}
