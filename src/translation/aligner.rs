use chrono::NaiveDate;
use log::{debug, info, warn};
use std::path::Path;

use crate::cleanser;
use crate::errors::{ImportError, MalformedInputError};
use crate::language_utils;
use crate::tanzil_xml::{self, SuraElement, TanzilDocument};
use crate::translation::model::{AyahTranslation, Translation, TranslationSurah};

// @module: Translation aligner for Tanzil translation files

/// Metadata carried by a translation file name `{language}.{author}.{extension}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationMetadata {
    pub language: String,
    pub author: String,
    pub extension: String,
}

impl TranslationMetadata {
    /// Reject files whose extension is not the one the pipeline reads
    pub fn ensure_extension(&self, expected: &str) -> Result<(), MalformedInputError> {
        let expected = expected.trim_start_matches('.');
        if !self.extension.eq_ignore_ascii_case(expected) {
            return Err(MalformedInputError::UnexpectedExtension {
                found: self.extension.clone(),
                expected: expected.to_string(),
            });
        }
        Ok(())
    }

    /// Output stem `{language}.{author}`
    pub fn stem(&self) -> String {
        format!("{}.{}", self.language, self.author)
    }
}

/// Split a translation file name into language, author and extension.
///
/// Exactly three dot-separated segments are accepted; `en.mahdi.xml` gives
/// `("en", "mahdi")`, while `en.mahdi.extra.xml` is malformed.
pub fn translation_metadata<P: AsRef<Path>>(path: P) -> Result<TranslationMetadata, MalformedInputError> {
    let file_name = path
        .as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let segments: Vec<&str> = file_name.split('.').collect();
    let [language, author, extension] = segments.as_slice() else {
        return Err(MalformedInputError::FileNameSegments {
            segments: segments.len(),
            file_name,
        });
    };

    if language.is_empty() || author.is_empty() || extension.is_empty() {
        return Err(MalformedInputError::EmptyFileNameSegment(file_name));
    }

    Ok(TranslationMetadata {
        language: (*language).to_string(),
        author: (*author).to_string(),
        extension: (*extension).to_string(),
    })
}

/// Align a parsed translation document to surah/ayah coordinates.
///
/// Verse text has every apostrophe escaped; the first verse's literal text
/// becomes the translation's `bismillah_text` sample.
pub fn parse_translation(
    root: &TanzilDocument,
    mushaf_ref: &str,
    language: &str,
    source: &str,
    translator: &str,
    release_date: Option<NaiveDate>,
) -> Result<Translation, ImportError> {
    let bismillah_text = root
        .first_aya_text()
        .ok_or(MalformedInputError::MissingElement("aya"))?
        .to_string();

    match language_utils::get_language_name(language) {
        Ok(name) => debug!("Translation language: {} ({})", name, language),
        Err(_) => warn!("Unrecognized language code '{}', keeping it verbatim", language),
    }

    let surahs: Vec<TranslationSurah> = root.suras.iter().map(align_surah).collect();

    let translation = Translation {
        mushaf: mushaf_ref.to_string(),
        language: language.to_string(),
        source: source.to_string(),
        bismillah_text,
        translator_username: translator.to_string(),
        release_date,
        surahs,
    };

    info!(
        "Aligned {} ayah translations by '{}' ({})",
        translation.ayah_count(),
        translator,
        language
    );
    Ok(translation)
}

/// Convenience path from cleansed XML text to the translation tree
pub fn parse_translation_str(
    content: &str,
    mushaf_ref: &str,
    language: &str,
    source: &str,
    translator: &str,
    release_date: Option<NaiveDate>,
) -> Result<Translation, ImportError> {
    let root = tanzil_xml::parse_document(content)?;
    parse_translation(&root, mushaf_ref, language, source, translator, release_date)
}

/// Translated surah with escaped verse texts
pub fn align_surah(sura: &SuraElement) -> TranslationSurah {
    TranslationSurah {
        number: sura.index,
        name: sura.name.clone(),
        ayah_translations: sura
            .ayas
            .iter()
            .map(|aya| AyahTranslation {
                number: aya.index,
                text: cleanser::escape_apostrophes(&aya.text),
            })
            .collect(),
    }
}
