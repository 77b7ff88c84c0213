//! Difficulty tiers and the letter-count thresholds behind them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Intermediate,
    Advance,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty {0:?}")]
pub struct UnknownDifficulty(pub String);

impl Difficulty {
    /// Every tier, in level-addressing order.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Intermediate,
        Difficulty::Advance,
    ];

    pub fn ordinal(self) -> u32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Intermediate => 3,
            Difficulty::Advance => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advance => "advance",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

/// Fixed letter-count bucket of a quote, before round-robin resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Fixed(Difficulty),
    /// 30-35 letters: shared across hard, intermediate and advance in turn.
    RoundRobin,
}

pub const ROUND_ROBIN: [Difficulty; 3] =
    [Difficulty::Hard, Difficulty::Intermediate, Difficulty::Advance];

pub fn bucket(letters: usize) -> Bucket {
    match letters {
        0..=19 => Bucket::Fixed(Difficulty::Easy),
        20..=25 => Bucket::Fixed(Difficulty::Medium),
        30..=35 => Bucket::RoundRobin,
        36.. => Bucket::Fixed(Difficulty::Advance),
        // 26-29 falls between the explicit ranges and lands in hard.
        _ => Bucket::Fixed(Difficulty::Hard),
    }
}

pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_alphabetic()).count()
}
