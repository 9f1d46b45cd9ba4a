/*!
 * Translation tree, aligned to surah and ayah coordinates.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One translation of the whole mushaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Short name of the mushaf this translation belongs to
    pub mushaf: String,
    pub language: String,
    pub source: String,
    /// Text of the first translated verse, used as a display sample
    pub bismillah_text: String,
    pub translator_username: String,
    pub release_date: Option<NaiveDate>,
    pub surahs: Vec<TranslationSurah>,
}

impl Translation {
    pub fn ayah_count(&self) -> usize {
        self.surahs.iter().map(|surah| surah.ayah_translations.len()).sum()
    }

    /// Translated text at a (surah, ayah) coordinate
    pub fn text_at(&self, surah_number: u16, ayah_number: u16) -> Option<&str> {
        self.surahs
            .iter()
            .find(|surah| surah.number == surah_number)?
            .ayah_translations
            .iter()
            .find(|ayah| ayah.number == ayah_number)
            .map(|ayah| ayah.text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSurah {
    pub number: u16,
    pub name: String,
    pub ayah_translations: Vec<AyahTranslation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AyahTranslation {
    pub number: u16,
    /// Translated text with apostrophes already escaped
    pub text: String,
}
