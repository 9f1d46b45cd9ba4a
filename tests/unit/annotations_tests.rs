/*!
 * Tests for the revelation period and sajdah tables
 */

use tanzil_importer::errors::LookupGapError;
use tanzil_importer::quran::annotations::{self, SURAH_COUNT};
use tanzil_importer::quran::{Period, Sajdah};

const MADANI_SURAHS: [u16; 28] = [
    2, 3, 4, 5, 8, 9, 13, 22, 24, 33, 47, 48, 49, 55, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 76,
    98, 99, 110,
];

/// Test that every surah number has exactly the recorded period
#[test]
fn test_period_of_forAllSurahs_shouldMatchTable() {
    for number in 1..=SURAH_COUNT {
        let expected = if MADANI_SURAHS.contains(&number) {
            Period::Madani
        } else {
            Period::Makki
        };
        assert_eq!(annotations::period_of(number), Ok(expected), "surah {}", number);
    }
}

/// Test that numbers outside the table are reported as gaps
#[test]
fn test_period_of_outsideRange_shouldReturnLookupGap() {
    assert_eq!(annotations::period_of(0), Err(LookupGapError::MissingPeriod(0)));
    assert_eq!(
        annotations::period_of(200),
        Err(LookupGapError::MissingPeriod(200))
    );
}

/// Test the obligatory prostration verses
#[test]
fn test_sajdah_of_vajibVerses_shouldBeVajib() {
    for (surah, ayah) in [(32, 15), (41, 37), (53, 62), (96, 19)] {
        assert_eq!(annotations::sajdah_of(surah, ayah), Sajdah::Vajib);
    }
}

/// Test the recommended prostration verses
#[test]
fn test_sajdah_of_mustahabVerses_shouldBeMustahab() {
    let verses = [
        (7, 206),
        (13, 15),
        (16, 50),
        (17, 109),
        (19, 58),
        (22, 18),
        (25, 60),
        (27, 26),
        (38, 24),
        (84, 21),
    ];
    for (surah, ayah) in verses {
        assert_eq!(annotations::sajdah_of(surah, ayah), Sajdah::Mustahab);
    }
}

/// Test that unlisted verses have no prostration
#[test]
fn test_sajdah_of_unlistedVerse_shouldBeNone() {
    assert_eq!(annotations::sajdah_of(1, 1), Sajdah::None);
    assert_eq!(annotations::sajdah_of(32, 14), Sajdah::None);
    assert_eq!(annotations::sajdah_of(96, 18), Sajdah::None);
}

/// Test that the table holds fourteen verses split four to ten
#[test]
fn test_sajdah_verses_shouldHoldFourteenEntries() {
    let verses: Vec<_> = annotations::sajdah_verses().collect();
    assert_eq!(verses.len(), 14);
    assert_eq!(verses.iter().filter(|(_, _, kind)| *kind == Sajdah::Vajib).count(), 4);
    assert_eq!(
        verses.iter().filter(|(_, _, kind)| *kind == Sajdah::Mustahab).count(),
        10
    );
}

/// Test bismillah detection is an exact comparison
#[test]
fn test_is_bismillah_withExactAndNearText() {
    assert!(annotations::is_bismillah(annotations::BISMILLAH));
    assert!(!annotations::is_bismillah(&format!("{} ", annotations::BISMILLAH)));
    assert!(!annotations::is_bismillah("بِسْمِ"));
}
