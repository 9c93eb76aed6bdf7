//! Puzzle alphabet representation
//!
//! An Alphabet stores the seven distinct puzzle letters with the required letter
//! first, and provides the bijection between letters and 3-bit wire symbols.

use std::fmt;

/// Number of letters in a Spelling Bee puzzle
pub const LETTER_COUNT: usize = 7;

/// Bit width of one letter symbol on the wire
///
/// Three bits cover the seven letters (codes 0-6) plus the reserved
/// end-of-word sentinel. Changing the puzzle size would require recomputing
/// this as `ceil(log2(size + 1))`.
pub const SYMBOL_BITS: u32 = 3;

/// Reserved symbol marking end-of-word in the terminated encoding
pub const SENTINEL: u64 = 7;

/// The seven puzzle letters, required letter at position 0
///
/// Positions double as wire symbols: the letter at position `i` is encoded
/// as the 3-bit value `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: [u8; LETTER_COUNT],
}

/// Error type for invalid alphabets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    WrongLetterCount(usize),
    DuplicateLetter(char),
    InvalidCharacter(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLetterCount(count) => {
                write!(f, "Puzzle needs exactly {LETTER_COUNT} distinct letters, got {count}")
            }
            Self::DuplicateLetter(letter) => {
                write!(f, "Letter '{letter}' appears more than once")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Character '{ch}' is not a lowercase letter")
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

impl Alphabet {
    /// Create an Alphabet from exactly seven distinct letters
    ///
    /// The first letter is the required letter. Input is lowercased.
    ///
    /// # Errors
    /// Returns `AlphabetError` if:
    /// - The string is not exactly 7 letters
    /// - Any character is not an ASCII letter
    /// - Any letter repeats
    ///
    /// # Examples
    /// ```
    /// use beecode::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new("abgcfed").unwrap();
    /// assert_eq!(alphabet.required(), 'a');
    ///
    /// assert!(Alphabet::new("abc").is_err());
    /// assert!(Alphabet::new("aabcdef").is_err());
    /// ```
    pub fn new(letters: &str) -> Result<Self, AlphabetError> {
        let lowered = letters.to_lowercase();

        let mut buf = [0u8; LETTER_COUNT];
        let mut count = 0;
        for ch in lowered.chars() {
            if !ch.is_ascii_lowercase() {
                return Err(AlphabetError::InvalidCharacter(ch));
            }
            let byte = ch as u8;
            if buf[..count].contains(&byte) {
                return Err(AlphabetError::DuplicateLetter(ch));
            }
            if count == LETTER_COUNT {
                return Err(AlphabetError::WrongLetterCount(lowered.chars().count()));
            }
            buf[count] = byte;
            count += 1;
        }

        if count != LETTER_COUNT {
            return Err(AlphabetError::WrongLetterCount(count));
        }

        Ok(Self { letters: buf })
    }

    /// Parse raw user input into an Alphabet
    ///
    /// Lowercases, drops non-alphabetic characters (separators, digits), and
    /// deduplicates while preserving first occurrence, then requires exactly
    /// seven letters. The first surviving letter is the required letter.
    ///
    /// # Errors
    /// Returns `AlphabetError::WrongLetterCount` if fewer or more than seven
    /// distinct letters remain after cleanup.
    ///
    /// # Examples
    /// ```
    /// use beecode::core::Alphabet;
    ///
    /// let alphabet = Alphabet::parse("A, B G C f e d").unwrap();
    /// assert_eq!(alphabet.required(), 'a');
    /// assert_eq!(alphabet.as_str(), "abgcfed");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, AlphabetError> {
        let mut unique = String::with_capacity(LETTER_COUNT);
        for ch in raw.to_lowercase().chars() {
            if ch.is_ascii_lowercase() && !unique.contains(ch) {
                unique.push(ch);
            }
        }
        Self::new(&unique)
    }

    /// The required letter (position 0)
    #[inline]
    #[must_use]
    pub const fn required(&self) -> char {
        self.letters[0] as char
    }

    /// The letters as a string, required letter first
    #[must_use]
    pub fn as_str(&self) -> String {
        self.letters.iter().map(|&b| b as char).collect()
    }

    /// Iterate over the seven letters in symbol order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|&b| b as char)
    }

    /// Check whether a letter belongs to the puzzle
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&(letter as u8))
    }

    /// Wire symbol for a letter, if it belongs to the puzzle
    #[inline]
    #[must_use]
    pub fn symbol(&self, letter: char) -> Option<u64> {
        self.letters
            .iter()
            .position(|&b| b == letter as u8)
            .map(|i| i as u64)
    }

    /// Letter for a wire symbol, `None` for the sentinel or out-of-range values
    #[inline]
    #[must_use]
    pub fn letter(&self, symbol: u64) -> Option<char> {
        if symbol < LETTER_COUNT as u64 {
            Some(self.letters[symbol as usize] as char)
        } else {
            None
        }
    }

    /// Check whether a word uses every puzzle letter at least once
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        self.letters().all(|letter| word.contains(letter))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_creation_valid() {
        let alphabet = Alphabet::new("abgcfed").unwrap();
        assert_eq!(alphabet.required(), 'a');
        assert_eq!(alphabet.as_str(), "abgcfed");
    }

    #[test]
    fn alphabet_creation_uppercase_normalized() {
        let alphabet = Alphabet::new("ABGCFED").unwrap();
        assert_eq!(alphabet.as_str(), "abgcfed");
    }

    #[test]
    fn alphabet_creation_wrong_count() {
        assert!(matches!(
            Alphabet::new("abc"),
            Err(AlphabetError::WrongLetterCount(3))
        ));
        assert!(matches!(
            Alphabet::new("abcdefgh"),
            Err(AlphabetError::WrongLetterCount(8))
        ));
        assert!(matches!(
            Alphabet::new(""),
            Err(AlphabetError::WrongLetterCount(0))
        ));
    }

    #[test]
    fn alphabet_creation_duplicate() {
        assert!(matches!(
            Alphabet::new("aabcdef"),
            Err(AlphabetError::DuplicateLetter('a'))
        ));
    }

    #[test]
    fn alphabet_creation_invalid_character() {
        assert!(matches!(
            Alphabet::new("abc1def"),
            Err(AlphabetError::InvalidCharacter('1'))
        ));
        assert!(matches!(
            Alphabet::new("abc def"),
            Err(AlphabetError::InvalidCharacter(' '))
        ));
    }

    #[test]
    fn parse_strips_separators_and_dedups() {
        let alphabet = Alphabet::parse("a, b, g, c, f, e, d").unwrap();
        assert_eq!(alphabet.as_str(), "abgcfed");

        let alphabet = Alphabet::parse("abgcfeda").unwrap();
        assert_eq!(alphabet.as_str(), "abgcfed");
    }

    #[test]
    fn parse_too_few_letters() {
        assert!(matches!(
            Alphabet::parse("aa, bb, cc"),
            Err(AlphabetError::WrongLetterCount(3))
        ));
    }

    #[test]
    fn symbol_letter_bijection() {
        let alphabet = Alphabet::new("abgcfed").unwrap();
        for (index, letter) in alphabet.letters().enumerate() {
            let symbol = alphabet.symbol(letter).unwrap();
            assert_eq!(symbol, index as u64);
            assert_eq!(alphabet.letter(symbol), Some(letter));
        }
    }

    #[test]
    fn symbol_unknown_letter() {
        let alphabet = Alphabet::new("abgcfed").unwrap();
        assert_eq!(alphabet.symbol('z'), None);
    }

    #[test]
    fn letter_sentinel_is_none() {
        let alphabet = Alphabet::new("abgcfed").unwrap();
        assert_eq!(alphabet.letter(SENTINEL), None);
        assert_eq!(alphabet.letter(12), None);
    }

    #[test]
    fn pangram_detection() {
        let alphabet = Alphabet::new("abgcfed").unwrap();
        assert!(alphabet.is_pangram("cabbagefed"));
        assert!(!alphabet.is_pangram("face"));
    }

    #[test]
    fn contains_checks_membership() {
        let alphabet = Alphabet::new("abgcfed").unwrap();
        assert!(alphabet.contains('g'));
        assert!(!alphabet.contains('z'));
    }
}
