//! Level and daily puzzle derivation.
//!
//! Every function here is a pure function of its inputs and the catalog: the
//! same (difficulty, level) or the same date always yields the same puzzle.

use time::{Date, OffsetDateTime};

use crate::catalog::Catalog;
use crate::difficulty::Difficulty;
use crate::puzzle::Puzzle;

/// Levels per tier, numbered from 1.
pub const LEVELS_PER_DIFFICULTY: u32 = 50;

/// First id of the date-derived namespace.
pub const DAILY_ID_BASE: u32 = 10_000;

/// Ids of level puzzles are `ordinal * LEVEL_ID_STRIDE + level`.
pub const LEVEL_ID_STRIDE: u32 = 1_000;

impl Catalog {
    /// Puzzle for a 1-based `level` of `difficulty`, or `None` when the level
    /// is out of range or the tier has no quotes.
    pub fn puzzle_for_level(&self, difficulty: Difficulty, level: u32) -> Option<Puzzle> {
        if !(1..=LEVELS_PER_DIFFICULTY).contains(&level) {
            return None;
        }
        let pool = self.pool(difficulty);
        if pool.is_empty() {
            return None;
        }
        let base = pool[(level as usize - 1) % pool.len()];
        let ordinal = difficulty.ordinal();
        let key_index = (level - 1 + ordinal * LEVELS_PER_DIFFICULTY) as usize;
        Some(base.rekeyed(
            ordinal * LEVEL_ID_STRIDE + level,
            self.key(key_index),
            difficulty,
        ))
    }

    /// Puzzle of the day for `date`, always in the medium tier.
    pub fn puzzle_for_date(&self, date: Date) -> Option<Puzzle> {
        if self.is_empty() {
            return None;
        }
        let day = u32::from(date.ordinal());
        let base = &self.puzzles()[day as usize % self.len()];
        Some(base.rekeyed(
            DAILY_ID_BASE + day,
            self.key(day as usize),
            Difficulty::Medium,
        ))
    }
}

pub fn puzzle_for_level(difficulty: Difficulty, level: u32) -> Option<Puzzle> {
    Catalog::global().puzzle_for_level(difficulty, level)
}

/// Today's UTC date.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Puzzle of the day for the current UTC date.
pub fn daily_puzzle() -> Puzzle {
    puzzle_for_date(today())
}

/// Puzzle of the day for `date` from the built-in catalog.
///
/// # Panics
///
/// Panics if the built-in catalog has no quotes, which `QUOTES` rules out.
pub fn puzzle_for_date(date: Date) -> Puzzle {
    Catalog::global()
        .puzzle_for_date(date)
        .expect("built-in catalog has quotes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KEY_POOL;
    use time::Month;

    fn date(y: i32, m: Month, d: u8) -> Date {
        Date::from_calendar_date(y, m, d).unwrap()
    }

    #[test]
    fn level_is_idempotent() {
        assert_eq!(
            puzzle_for_level(Difficulty::Easy, 1),
            puzzle_for_level(Difficulty::Easy, 1)
        );
    }

    #[test]
    fn out_of_range_levels_are_absent() {
        assert!(puzzle_for_level(Difficulty::Easy, 0).is_none());
        assert!(puzzle_for_level(Difficulty::Easy, 51).is_none());
        assert!(puzzle_for_level(Difficulty::Advance, 50).is_some());
    }

    #[test]
    fn level_ids_are_namespaced_by_tier() {
        for d in Difficulty::ALL {
            let p = puzzle_for_level(d, 7).unwrap();
            assert_eq!(p.id, d.ordinal() * 1000 + 7);
            assert_eq!(p.difficulty, d);
        }
    }

    #[test]
    fn level_picks_base_quote_with_wraparound() {
        let cat = Catalog::global();
        let pool = cat.pool(Difficulty::Easy);
        let level = pool.len() as u32 + 1;
        let p = cat.puzzle_for_level(Difficulty::Easy, level).unwrap();
        assert_eq!(p.quote, pool[0].quote);
        assert_eq!(p.author, pool[0].author);
    }

    #[test]
    fn level_key_follows_rekeying_formula() {
        let cat = Catalog::global();
        for d in Difficulty::ALL {
            for level in 1..=LEVELS_PER_DIFFICULTY {
                let p = cat.puzzle_for_level(d, level).unwrap();
                let idx = (level - 1 + d.ordinal() * 50) as usize % KEY_POOL.len();
                assert_eq!(p.cipher.key(), KEY_POOL[idx]);
                assert_eq!(p.text, p.cipher.encrypt(&p.quote));
            }
        }
    }

    #[test]
    fn distinct_key_slots_give_distinct_ciphers() {
        let n = KEY_POOL.len() as u32;
        for l1 in 1..=LEVELS_PER_DIFFICULTY {
            for l2 in 1..=LEVELS_PER_DIFFICULTY {
                if (l1 - 1) % n == (l2 - 1) % n {
                    continue;
                }
                let a = puzzle_for_level(Difficulty::Easy, l1).unwrap();
                let b = puzzle_for_level(Difficulty::Easy, l2).unwrap();
                assert_ne!(a.cipher, b.cipher, "levels {l1} and {l2}");
            }
        }
    }

    #[test]
    fn empty_pool_is_absent() {
        let cat = Catalog::from_key_strings(&[("TIME IS MONEY", "x")], &KEY_POOL).unwrap();
        assert!(cat.puzzle_for_level(Difficulty::Hard, 1).is_none());
        assert!(cat.puzzle_for_level(Difficulty::Easy, 50).is_some());
    }

    #[test]
    fn daily_follows_day_of_year() {
        let cat = Catalog::global();
        let d = date(2026, Month::October, 18);
        let day = d.ordinal() as usize;
        let p = puzzle_for_date(d);
        assert_eq!(p.id, 10_000 + day as u32);
        assert_eq!(p.difficulty, Difficulty::Medium);
        assert_eq!(p.quote, cat.puzzles()[day % cat.len()].quote);
        assert_eq!(p.cipher.key(), KEY_POOL[day % KEY_POOL.len()]);
        assert_eq!(p.text, p.cipher.encrypt(&p.quote));
    }

    #[test]
    fn daily_is_stable_within_a_day() {
        assert_eq!(daily_puzzle().id, DAILY_ID_BASE + u32::from(today().ordinal()));
        let d = date(2026, Month::March, 1);
        assert_eq!(puzzle_for_date(d), puzzle_for_date(d));
    }

    #[test]
    fn consecutive_days_differ() {
        let a = puzzle_for_date(date(2026, Month::January, 1));
        let b = puzzle_for_date(date(2026, Month::January, 2));
        assert_ne!(a.text, b.text);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn empty_catalog_has_no_daily() {
        let cat = Catalog::from_key_strings(&[], &KEY_POOL).unwrap();
        assert!(cat.puzzle_for_date(date(2026, Month::May, 5)).is_none());
    }
}
