/*!
 * Row-tuple batches for the relational store.
 *
 * Table and column names are an external contract shared with existing
 * loaders and must not change. Row identifiers are positional: a surah's
 * id is its ordinal in the document and an ayah's id is its ordinal across
 * the whole mushaf, counted from 1.
 */

use serde::Serialize;
use serde_json::{Value, json};

use crate::quran::{BISMILLAH, Period, Quran, Sajdah};
use crate::translation::Translation;

/// A row of one external table, with values in column order
pub trait TableRow {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn values(&self) -> Vec<Value>;
}

/// `mushafs(id, name, source, bismillah_text)`, the row every surah points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MushafRow {
    pub id: u32,
    pub name: String,
    pub source: String,
    pub bismillah_text: String,
}

impl TableRow for MushafRow {
    const TABLE: &'static str = "mushafs";
    const COLUMNS: &'static [&'static str] = &["id", "name", "source", "bismillah_text"];

    fn values(&self) -> Vec<Value> {
        vec![
            json!(self.id),
            json!(self.name),
            json!(self.source),
            json!(self.bismillah_text),
        ]
    }
}

/// `quran_surahs(name, period, number, bismillah_status, bismillah_as_first_ayah, mushaf_id)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurahRow {
    pub name: String,
    pub period: Period,
    pub number: u16,
    pub bismillah_status: bool,
    pub bismillah_as_first_ayah: bool,
    pub mushaf_id: u32,
}

impl TableRow for SurahRow {
    const TABLE: &'static str = "quran_surahs";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "period",
        "number",
        "bismillah_status",
        "bismillah_as_first_ayah",
        "mushaf_id",
    ];

    fn values(&self) -> Vec<Value> {
        vec![
            json!(self.name),
            json!(self.period),
            json!(self.number),
            json!(self.bismillah_status),
            json!(self.bismillah_as_first_ayah),
            json!(self.mushaf_id),
        ]
    }
}

/// `quran_ayahs(surah_id, ayah_number, sajdah)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AyahRow {
    pub surah_id: u32,
    pub ayah_number: u16,
    pub sajdah: Sajdah,
}

impl TableRow for AyahRow {
    const TABLE: &'static str = "quran_ayahs";
    const COLUMNS: &'static [&'static str] = &["surah_id", "ayah_number", "sajdah"];

    fn values(&self) -> Vec<Value> {
        vec![json!(self.surah_id), json!(self.ayah_number), json!(self.sajdah)]
    }
}

/// `quran_words(ayah_id, word)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRow {
    pub ayah_id: u32,
    pub word: String,
}

impl TableRow for WordRow {
    const TABLE: &'static str = "quran_words";
    const COLUMNS: &'static [&'static str] = &["ayah_id", "word"];

    fn values(&self) -> Vec<Value> {
        vec![json!(self.ayah_id), json!(self.word)]
    }
}

/// `translations_text(text, translation_id, ayah_id)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationTextRow {
    pub text: String,
    pub translation_id: u32,
    pub ayah_id: u32,
}

impl TableRow for TranslationTextRow {
    const TABLE: &'static str = "translations_text";
    const COLUMNS: &'static [&'static str] = &["text", "translation_id", "ayah_id"];

    fn values(&self) -> Vec<Value> {
        vec![json!(self.text), json!(self.translation_id), json!(self.ayah_id)]
    }
}

/// Rows of one table, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableBatch {
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<Value>>,
}

impl TableBatch {
    pub fn from_rows<R: TableRow>(rows: &[R]) -> Self {
        Self {
            table: R::TABLE,
            columns: R::COLUMNS,
            rows: rows.iter().map(TableRow::values).collect(),
        }
    }

    /// `table(col, ...)` header as used by the loaders
    pub fn signature(&self) -> String {
        format!("{}({})", self.table, self.columns.join(", "))
    }
}

/// All rows produced from a Quran tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuranRows {
    pub mushafs: Vec<MushafRow>,
    pub surahs: Vec<SurahRow>,
    pub ayahs: Vec<AyahRow>,
    pub words: Vec<WordRow>,
}

impl QuranRows {
    pub fn from_quran(quran: &Quran, mushaf_id: u32) -> Self {
        let mut rows = Self::default();
        let mut ayah_id: u32 = 0;

        rows.mushafs.push(MushafRow {
            id: mushaf_id,
            name: quran.mushaf.short_name.clone(),
            source: quran.mushaf.source_label.clone(),
            bismillah_text: BISMILLAH.to_string(),
        });

        for (surah_id, surah) in (1u32..).zip(&quran.surahs) {
            rows.surahs.push(SurahRow {
                name: surah.name.clone(),
                period: surah.period,
                number: surah.number,
                bismillah_status: surah.bismillah_status(),
                bismillah_as_first_ayah: surah.bismillah_as_first_ayah(),
                mushaf_id,
            });

            for ayah in &surah.ayahs {
                ayah_id += 1;
                rows.ayahs.push(AyahRow {
                    surah_id,
                    ayah_number: ayah.number,
                    sajdah: ayah.sajdah,
                });
                rows.words.extend(ayah.words.iter().map(|word| WordRow {
                    ayah_id,
                    word: word.text.clone(),
                }));
            }
        }

        rows
    }

    /// Batches in load order: the mushaf, its surahs, then ayahs, then words
    pub fn batches(&self) -> Vec<TableBatch> {
        vec![
            TableBatch::from_rows(&self.mushafs),
            TableBatch::from_rows(&self.surahs),
            TableBatch::from_rows(&self.ayahs),
            TableBatch::from_rows(&self.words),
        ]
    }
}

/// All rows produced from a translation tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRows {
    pub texts: Vec<TranslationTextRow>,
}

impl TranslationRows {
    pub fn from_translation(translation: &Translation, translation_id: u32) -> Self {
        let texts = translation
            .surahs
            .iter()
            .flat_map(|surah| surah.ayah_translations.iter())
            .zip(1u32..)
            .map(|(ayah, ayah_id)| TranslationTextRow {
                text: ayah.text.clone(),
                translation_id,
                ayah_id,
            })
            .collect();

        Self { texts }
    }

    pub fn batches(&self) -> Vec<TableBatch> {
        vec![TableBatch::from_rows(&self.texts)]
    }
}
