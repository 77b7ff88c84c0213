//! Puzzle records and guess checking.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::cipher::{self, Cipher};
use crate::difficulty::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Puzzle {
    pub id: u32,
    pub quote: String,
    pub author: String,
    pub cipher: Cipher,
    pub text: String,
    pub difficulty: Difficulty,
}

/// Player-facing fields of a puzzle; the plaintext and cipher are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPuzzle {
    pub id: u32,
    pub author: String,
    pub text: String,
    pub difficulty: Difficulty,
    pub letter_numbers: BTreeMap<char, usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuessReport {
    pub correct: BTreeSet<char>,
    pub wrong: BTreeSet<char>,
    pub solved: bool,
}

impl Puzzle {
    pub fn new(
        id: u32,
        quote: &str,
        author: &str,
        cipher: Cipher,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            quote: quote.to_string(),
            author: author.to_string(),
            text: cipher.encrypt(quote),
            cipher,
            difficulty,
        }
    }

    /// Same quote re-encrypted under `cipher`, with a new id and tier.
    pub fn rekeyed(&self, id: u32, cipher: Cipher, difficulty: Difficulty) -> Self {
        Self::new(id, &self.quote, &self.author, cipher, difficulty)
    }

    /// Ciphertext letter to plaintext letter.
    pub fn solved_cipher(&self) -> Cipher {
        self.cipher.invert()
    }

    pub fn letter_numbers(&self) -> BTreeMap<char, usize> {
        cipher::letter_numbers(&self.text)
    }

    pub fn public(&self) -> PublicPuzzle {
        PublicPuzzle {
            id: self.id,
            author: self.author.clone(),
            text: self.text.clone(),
            difficulty: self.difficulty,
            letter_numbers: self.letter_numbers(),
        }
    }

    /// Grade a set of guesses keyed by ciphertext letter.
    ///
    /// Letters are compared case-insensitively. A guess for a letter absent
    /// from the ciphertext is wrong.
    pub fn check(&self, guesses: &BTreeMap<char, char>) -> GuessReport {
        let solved = self.solved_cipher();
        let present = self.letter_numbers();
        let mut report = GuessReport::default();

        for (&encrypted, &guess) in guesses {
            let encrypted = encrypted.to_ascii_uppercase();
            let right = present.contains_key(&encrypted)
                && solved.get(encrypted) == Some(guess.to_ascii_uppercase());
            if right {
                report.correct.insert(encrypted);
            } else {
                report.wrong.insert(encrypted);
            }
        }
        // A letter guessed twice under different cases counts once, and only if
        // no variant was wrong.
        report.correct.retain(|c| !report.wrong.contains(c));
        report.solved = present.keys().all(|c| report.correct.contains(c));
        report
    }
}
