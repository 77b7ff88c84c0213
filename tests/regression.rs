//! Frozen outputs of the public API. Any change here means puzzles players
//! already saw would render differently.

use cryptogram::{
    encrypt, letter_numbers, puzzle_for_date, puzzle_for_level, Catalog, Cipher, CipherError,
    Difficulty,
};
use time::{Date, Month};

const QWERTY: &str = "QWERTYUIOPASDFGHJKLZXCVBNM";

#[test]
fn go_to_hell_anchor() {
    let c = Cipher::from_key(QWERTY).unwrap();
    let first = encrypt("GO TO HELL", &c);
    assert_eq!(first, "UG ZG ITSS");
    assert_eq!(encrypt("GO TO HELL", &c), first);
}

#[test]
fn short_key_error() {
    assert_eq!(
        Cipher::from_key("ABCDEFGHIJKLMNOPQRSTUVWXY").unwrap_err(),
        CipherError::InvalidKeyLength { len: 25 }
    );
}

#[test]
fn first_catalog_entry_is_frozen() {
    let first = &Catalog::global().puzzles()[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.quote, "KNOWLEDGE IS POWER");
    assert_eq!(first.text, "AFGVSTRUT OL HGVTK");
    assert_eq!(first.difficulty, Difficulty::Easy);
}

#[test]
fn easy_level_one_is_frozen() {
    let p = puzzle_for_level(Difficulty::Easy, 1).unwrap();
    assert_eq!(p.id, 1);
    assert_eq!(p.quote, "KNOWLEDGE IS POWER");
    assert_eq!(p.text, "AFGVSTRUT OL HGVTK");
}

#[test]
fn tier_sizes_are_frozen() {
    let cat = Catalog::global();
    let sizes: Vec<usize> = Difficulty::ALL.iter().map(|&d| cat.pool(d).len()).collect();
    assert_eq!(sizes, vec![6, 8, 8, 2, 12]);
}

#[test]
fn new_year_daily_is_frozen() {
    let d = Date::from_calendar_date(2026, Month::January, 1).unwrap();
    let p = puzzle_for_date(d);
    assert_eq!(p.id, 10_001);
    assert_eq!(p.quote, "TIME IS MONEY");
    assert_eq!(p.difficulty, Difficulty::Medium);
}

#[test]
fn letter_numbers_of_anchor() {
    let labels = letter_numbers("UG ZG ITSS");
    assert_eq!(labels.get(&'G'), Some(&1));
    assert_eq!(labels.get(&'Z'), Some(&6));
    assert_eq!(labels.len(), 6);
}
