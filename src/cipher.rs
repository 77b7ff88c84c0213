//! Substitution cipher: key parsing, encryption, inversion, letter labels.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("cipher key must be 26 characters long, got {len}")]
    InvalidKeyLength { len: usize },
    #[error("cipher key uses letter {letter} more than once")]
    RepeatedLetter { letter: char },
    #[error("cipher key contains non-letter character {ch:?}")]
    InvalidCharacter { ch: char },
}

/// A bijective mapping from plaintext letter to ciphertext letter.
///
/// `map[i]` is the image of the i-th letter of the alphabet, stored as an
/// uppercase ASCII byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cipher {
    map: [u8; 26],
}

impl Cipher {
    /// Build a cipher from a 26-character permutation of A-Z.
    ///
    /// Lowercase letters are accepted. Keys with the wrong length, repeated
    /// letters or non-letters are rejected.
    pub fn from_key(key: &str) -> Result<Self, CipherError> {
        let len = key.chars().count();
        if len != 26 {
            return Err(CipherError::InvalidKeyLength { len });
        }
        let mut map = [0u8; 26];
        let mut seen = [false; 26];
        for (slot, ch) in map.iter_mut().zip(key.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(CipherError::InvalidCharacter { ch });
            }
            let upper = ch.to_ascii_uppercase() as u8;
            let idx = (upper - b'A') as usize;
            if seen[idx] {
                return Err(CipherError::RepeatedLetter { letter: upper as char });
            }
            seen[idx] = true;
            *slot = upper;
        }
        Ok(Self { map })
    }

    /// The 26-character key this cipher was built from.
    pub fn key(&self) -> String {
        self.map.iter().map(|&b| b as char).collect()
    }

    /// Image of `letter`, or `None` when it is not an ASCII letter.
    pub fn get(&self, letter: char) -> Option<char> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let idx = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        Some(self.map[idx] as char)
    }

    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        ALPHABET
            .iter()
            .zip(self.map.iter())
            .map(|(&from, &to)| (from as char, to as char))
    }

    pub fn invert(&self) -> Self {
        let mut map = [0u8; 26];
        for (i, &to) in self.map.iter().enumerate() {
            map[(to - b'A') as usize] = ALPHABET[i];
        }
        Self { map }
    }

    pub fn encrypt(&self, text: &str) -> String {
        encrypt(text, self)
    }

    pub fn decrypt(&self, text: &str) -> String {
        encrypt(text, &self.invert())
    }

    /// Owned letter-to-letter map, the shape the hint collaborator expects.
    pub fn to_map(&self) -> BTreeMap<char, char> {
        self.pairs().collect()
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cipher").field(&self.key()).finish()
    }
}

impl Serialize for Cipher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(26))?;
        for (from, to) in self.pairs() {
            map.serialize_entry(&from, &to)?;
        }
        map.end()
    }
}

/// Uppercase `text` and substitute every letter through `cipher`.
///
/// Anything that is not an ASCII letter passes through unchanged, so the
/// output has exactly as many characters as the input.
pub fn encrypt(text: &str, cipher: &Cipher) -> String {
    text.chars()
        .map(|c| {
            let c = c.to_ascii_uppercase();
            cipher.get(c).unwrap_or(c)
        })
        .collect()
}

/// Label each distinct letter of `text` with its 1-based alphabetical rank.
pub fn letter_numbers(text: &str) -> BTreeMap<char, usize> {
    let mut letters: Vec<char> = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    letters.sort_unstable();
    letters.dedup();
    letters.into_iter().zip(1..).collect()
}
