/*!
 * Quran tree: mushaf, surahs, ayahs and words.
 *
 * Field order here is the order of the rendered JSON and must stay stable.
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one canonical text edition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mushaf {
    /// Short identifier, e.g. "hafs"
    pub short_name: String,
    /// Full edition name, e.g. "Hafs an Asem"
    pub full_name: String,
    /// Where the text came from, e.g. "tanzil"
    pub source_label: String,
}

impl Mushaf {
    pub fn new(
        short_name: impl Into<String>,
        full_name: impl Into<String>,
        source_label: impl Into<String>,
    ) -> Self {
        Self {
            short_name: short_name.into(),
            full_name: full_name.into(),
            source_label: source_label.into(),
        }
    }
}

/// Root of a converted Quran text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quran {
    pub mushaf: Mushaf,
    pub surahs: Vec<Surah>,
}

impl Quran {
    /// Look up a surah by its number
    pub fn surah(&self, number: u16) -> Option<&Surah> {
        self.surahs.iter().find(|surah| surah.number == number)
    }

    pub fn ayah_count(&self) -> usize {
        self.surahs.iter().map(|surah| surah.ayahs.len()).sum()
    }

    pub fn word_count(&self) -> usize {
        self.surahs.iter().map(Surah::word_count).sum()
    }
}

/// Revelation period of a surah
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Revealed before the migration
    Makki,
    /// Revealed after the migration
    Madani,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Makki => "makki",
            Self::Madani => "madani",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prostration classification of an ayah
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sajdah {
    /// Obligatory prostration
    Vajib,
    /// Recommended prostration
    Mustahab,
    #[default]
    None,
}

impl Sajdah {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vajib => "vajib",
            Self::Mustahab => "mustahab",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Sajdah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub name: String,
    /// 1..=114
    pub number: u16,
    pub period: Period,
    pub ayahs: Vec<Ayah>,
}

impl Surah {
    /// True when the surah opens with the bismillah, either as its first
    /// ayah or as a preface recorded on that ayah.
    pub fn bismillah_status(&self) -> bool {
        self.ayahs
            .first()
            .is_some_and(|ayah| ayah.is_bismillah || ayah.bismillah_text.is_some())
    }

    /// True when the first ayah is the bismillah itself
    pub fn bismillah_as_first_ayah(&self) -> bool {
        self.ayahs.first().is_some_and(|ayah| ayah.is_bismillah)
    }

    pub fn word_count(&self) -> usize {
        self.ayahs.iter().map(|ayah| ayah.words.len()).sum()
    }
}

/// A verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ayah {
    /// 1-based, restarting in every surah
    pub number: u16,
    pub sajdah: Sajdah,
    pub is_bismillah: bool,
    /// Present when the verse carries (or was separated from) a bismillah preface
    pub bismillah_text: Option<String>,
    pub words: Vec<Word>,
}

impl Ayah {
    /// Verse text rebuilt from its words
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|word| word.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A word, in verse order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
