/*!
 * Structural annotations: revelation periods, sajdah verses and the
 * bismillah formula.
 *
 * The tables encode scholarly classification and are reproduced exactly.
 * They are read-only for the whole process.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::errors::LookupGapError;
use crate::quran::model::{Period, Sajdah};

use Period::{Madani, Makki};

/// The opening invocation, as written in the Tanzil text
pub const BISMILLAH: &str = "بِسْمِ ٱللَّهِ ٱلرَّحْمَـٰنِ ٱلرَّحِيمِ";

/// Number of surahs in the mushaf
pub const SURAH_COUNT: u16 = 114;

// @const: Revelation period by surah number, index 0 is surah 1
const PERIODS: [Period; SURAH_COUNT as usize] = [
    // 1-6
    Makki, Madani, Madani, Madani, Madani, Makki,
    // 7-12
    Makki, Madani, Madani, Makki, Makki, Makki,
    // 13-18
    Madani, Makki, Makki, Makki, Makki, Makki,
    // 19-24
    Makki, Makki, Makki, Madani, Makki, Madani,
    // 25-30
    Makki, Makki, Makki, Makki, Makki, Makki,
    // 31-36
    Makki, Makki, Madani, Makki, Makki, Makki,
    // 37-42
    Makki, Makki, Makki, Makki, Makki, Makki,
    // 43-48
    Makki, Makki, Makki, Makki, Madani, Madani,
    // 49-54
    Madani, Makki, Makki, Makki, Makki, Makki,
    // 55-60
    Madani, Makki, Madani, Madani, Madani, Madani,
    // 61-66
    Madani, Madani, Madani, Madani, Madani, Madani,
    // 67-72
    Makki, Makki, Makki, Makki, Makki, Makki,
    // 73-78
    Makki, Makki, Makki, Madani, Makki, Makki,
    // 79-84
    Makki, Makki, Makki, Makki, Makki, Makki,
    // 85-90
    Makki, Makki, Makki, Makki, Makki, Makki,
    // 91-96
    Makki, Makki, Makki, Makki, Makki, Makki,
    // 97-102
    Makki, Madani, Madani, Makki, Makki, Makki,
    // 103-108
    Makki, Makki, Makki, Makki, Makki, Makki,
    // 109-114
    Makki, Madani, Makki, Makki, Makki, Makki,
];

// @const: The fourteen prostration verses as (surah, ayah)
const SAJDAH_VERSES: [((u16, u16), Sajdah); 14] = [
    ((32, 15), Sajdah::Vajib),
    ((41, 37), Sajdah::Vajib),
    ((53, 62), Sajdah::Vajib),
    ((96, 19), Sajdah::Vajib),
    ((7, 206), Sajdah::Mustahab),
    ((13, 15), Sajdah::Mustahab),
    ((16, 50), Sajdah::Mustahab),
    ((17, 109), Sajdah::Mustahab),
    ((19, 58), Sajdah::Mustahab),
    ((22, 18), Sajdah::Mustahab),
    ((25, 60), Sajdah::Mustahab),
    ((27, 26), Sajdah::Mustahab),
    ((38, 24), Sajdah::Mustahab),
    ((84, 21), Sajdah::Mustahab),
];

static SAJDAH_TABLE: Lazy<HashMap<(u16, u16), Sajdah>> =
    Lazy::new(|| SAJDAH_VERSES.iter().copied().collect());

/// Revelation period of a surah.
///
/// Numbers outside 1..=114 are a gap in the table, not a default.
pub fn period_of(surah_number: u16) -> Result<Period, LookupGapError> {
    surah_number
        .checked_sub(1)
        .and_then(|i| PERIODS.get(usize::from(i)))
        .copied()
        .ok_or(LookupGapError::MissingPeriod(surah_number))
}

/// Sajdah classification of an ayah, `Sajdah::None` when unlisted
pub fn sajdah_of(surah_number: u16, ayah_number: u16) -> Sajdah {
    SAJDAH_TABLE
        .get(&(surah_number, ayah_number))
        .copied()
        .unwrap_or_default()
}

/// Every listed prostration verse, in table order
pub fn sajdah_verses() -> impl Iterator<Item = (u16, u16, Sajdah)> {
    SAJDAH_VERSES.iter().map(|&((surah, ayah), kind)| (surah, ayah, kind))
}

/// Exact match against the bismillah formula
pub fn is_bismillah(text: &str) -> bool {
    text == BISMILLAH
}

/// Split an inlined bismillah preface off the front of a verse.
///
/// Returns the remaining verse text when `text` starts with the formula
/// followed by a space and more text. A verse that is exactly the formula
/// is not a preface and yields `None`.
pub fn separate_bismillah(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(BISMILLAH)?.strip_prefix(' ')?;
    let rest = rest.trim_start_matches(' ');
    if rest.is_empty() { None } else { Some(rest) }
}
