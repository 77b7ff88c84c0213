//! Hint collaborator: reveals the plaintext letter behind one ciphertext letter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::puzzle::Puzzle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintRequest {
    pub encrypted_letter: String,
    /// Ciphertext letter to plaintext letter.
    pub solved_cipher: BTreeMap<char, char>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse {
    pub decrypted_letter: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("expected a single letter, got {0:?}")]
    NotALetter(String),
    #[error("letter {0} is not in the solved cipher")]
    UnknownLetter(char),
}

pub trait HintService: Send + Sync {
    fn hint(&self, request: &HintRequest) -> Result<HintResponse, HintError>;
}

/// Answers straight from the solved cipher in the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHintService;

impl HintService for LocalHintService {
    fn hint(&self, request: &HintRequest) -> Result<HintResponse, HintError> {
        let letter = single_letter(&request.encrypted_letter)?;
        let decrypted = request
            .solved_cipher
            .get(&letter)
            .or_else(|| request.solved_cipher.get(&letter.to_ascii_lowercase()))
            .ok_or(HintError::UnknownLetter(letter))?;
        Ok(HintResponse {
            decrypted_letter: decrypted.to_ascii_uppercase().to_string(),
        })
    }
}

fn single_letter(s: &str) -> Result<char, HintError> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(HintError::NotALetter(s.to_string())),
    }
}

impl Puzzle {
    /// Request asking for the plaintext behind `encrypted_letter` in this puzzle.
    pub fn hint_request(&self, encrypted_letter: &str) -> HintRequest {
        HintRequest {
            encrypted_letter: encrypted_letter.to_string(),
            solved_cipher: self.solved_cipher().to_map(),
        }
    }
}
