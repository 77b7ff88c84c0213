//! Cryptogram puzzle engine.
//!
//! Builds substitution ciphers from 26-letter keys, keeps a static catalog of
//! quotes split into difficulty tiers, and derives level and daily puzzles
//! from it deterministically. The [`http`] module serves all of it as JSON.
//!
//! ```
//! use cryptogram::{Cipher, Difficulty};
//!
//! let cipher = Cipher::from_key("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
//! assert_eq!(cipher.encrypt("GO TO HELL"), "UG ZG ITSS");
//!
//! let puzzle = cryptogram::puzzle_for_level(Difficulty::Easy, 1).unwrap();
//! assert_eq!(puzzle.solved_cipher().encrypt(&puzzle.text), puzzle.quote);
//! ```

pub mod addressing;
pub mod catalog;
pub mod cipher;
pub mod config;
pub mod difficulty;
pub mod hint;
pub mod http;
pub mod puzzle;
pub mod telemetry;

pub use addressing::{daily_puzzle, puzzle_for_date, puzzle_for_level, LEVELS_PER_DIFFICULTY};
pub use catalog::{Catalog, CatalogError};
pub use cipher::{encrypt, letter_numbers, Cipher, CipherError};
pub use difficulty::Difficulty;
pub use hint::{HintError, HintRequest, HintResponse, HintService, LocalHintService};
pub use puzzle::{GuessReport, PublicPuzzle, Puzzle};
