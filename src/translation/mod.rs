/*!
 * Translations of the mushaf: model and the aligner that builds it from
 * Tanzil translation files.
 */

pub mod aligner;
pub mod model;

pub use aligner::{TranslationMetadata, parse_translation, parse_translation_str, translation_metadata};
pub use model::{AyahTranslation, Translation, TranslationSurah};
