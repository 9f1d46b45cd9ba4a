use log::{debug, info};

use crate::cleanser;
use crate::errors::{ImportError, MalformedInputError};
use crate::quran::annotations;
use crate::quran::model::{Ayah, Mushaf, Quran, Sajdah, Surah, Word};
use crate::tanzil_xml::{self, AyaElement, SuraElement, TanzilDocument};

// @module: Corpus parser for the Tanzil Quran text

/// Options that change how verses are annotated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Move an inlined bismillah preface out of the first verse of a surah
    pub separate_bismillah: bool,
}

/// Build the annotated Quran tree from a parsed document.
///
/// Surahs are taken in document order, which is trusted as the canonical
/// order once the reader has checked that declared indices follow it.
pub fn parse(
    root: &TanzilDocument,
    mushaf: Mushaf,
    options: ParseOptions,
) -> Result<Quran, ImportError> {
    let surahs = root
        .suras
        .iter()
        .map(|sura| parse_surah(sura, options))
        .collect::<Result<Vec<_>, _>>()?;

    let quran = Quran { mushaf, surahs };
    info!(
        "Parsed {} surahs, {} ayahs, {} words",
        quran.surahs.len(),
        quran.ayah_count(),
        quran.word_count()
    );
    Ok(quran)
}

/// Convenience path from cleansed XML text to the tree
pub fn parse_str(
    content: &str,
    mushaf: Mushaf,
    options: ParseOptions,
) -> Result<Quran, ImportError> {
    let root = tanzil_xml::parse_document(content)?;
    parse(&root, mushaf, options)
}

/// Build one surah with its period and annotated ayahs
pub fn parse_surah(sura: &SuraElement, options: ParseOptions) -> Result<Surah, ImportError> {
    let number = sura.index;
    let period = annotations::period_of(number)?;

    let mut ayahs = Vec::with_capacity(sura.ayas.len());
    let mut bismillah_seen = false;

    for aya in &sura.ayas {
        let ayah = parse_ayah(number, aya, options);

        if ayah.is_bismillah {
            if bismillah_seen {
                return Err(MalformedInputError::DuplicateBismillah {
                    surah: number,
                    ayah: ayah.number,
                }
                .into());
            }
            bismillah_seen = true;
        }

        ayahs.push(ayah);
    }

    debug!("Surah {} ({}): {} ayahs, {}", number, sura.name, ayahs.len(), period);

    Ok(Surah {
        name: sura.name.clone(),
        number,
        period,
        ayahs,
    })
}

/// Build one ayah: sajdah lookup, bismillah detection, word split.
///
/// A `bismillah` attribute on the element is preserved as given.
pub fn parse_ayah(surah_number: u16, aya: &AyaElement, options: ParseOptions) -> Ayah {
    let is_bismillah = annotations::is_bismillah(&aya.text);
    let mut bismillah_text = aya.bismillah.clone();
    let mut verse_text = aya.text.as_str();

    if options.separate_bismillah && aya.index == 1 && surah_number != 1 {
        if let Some(rest) = annotations::separate_bismillah(verse_text) {
            debug!("Separated bismillah from {}:{}", surah_number, aya.index);
            if bismillah_text.is_none() {
                bismillah_text = Some(annotations::BISMILLAH.to_string());
            }
            verse_text = rest;
        }
    }

    let sajdah = annotations::sajdah_of(surah_number, aya.index);
    if sajdah != Sajdah::None {
        debug!("Sajdah verse {}:{} is {}", surah_number, aya.index, sajdah);
    }

    Ayah {
        number: aya.index,
        sajdah,
        is_bismillah,
        bismillah_text,
        words: words_from_text(verse_text),
    }
}

/// Words of a verse after removing the sajdah glyph
pub fn words_from_text(text: &str) -> Vec<Word> {
    let without_glyph = cleanser::strip_sajdah_glyph(text);
    cleanser::split_words(&without_glyph).map(Word::new).collect()
}
