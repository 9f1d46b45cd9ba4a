/*!
 * # Tanzil Importer
 *
 * A Rust library for normalizing the Tanzil Quran XML text and its
 * translations into a structured record model.
 *
 * ## Features
 *
 * - Verify the Quran source against the pinned Tanzil release digest
 * - Parse surahs, ayahs and words from Tanzil XML
 * - Annotate revelation periods, sajdah verses and the bismillah
 * - Align translation files to surah/ayah coordinates
 * - Render trees as JSON (pretty or compact) or as row-tuple batches for
 *   the relational store
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `cleanser`: Comment stripping, sajdah glyph removal, word splitting, escaping
 * - `integrity`: SHA-256 source gate
 * - `tanzil_xml`: Reader for the shared `<sura>`/`<aya>` document shape
 * - `quran`: Quran model, structural annotations and corpus parser
 * - `translation`: Translation model and aligner
 * - `serializer`: JSON rendering and reading back
 * - `rows`: Row-tuple batches for the external tables
 * - `app_config`: Configuration management
 * - `app_controller`: Pipeline orchestration
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod cleanser;
pub mod errors;
pub mod file_utils;
pub mod integrity;
pub mod language_utils;
pub mod quran;
pub mod rows;
pub mod serializer;
pub mod tanzil_xml;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{BulkReport, Controller, TranslationOverrides};
pub use errors::{ImportError, IntegrityError, LookupGapError, MalformedInputError, PipelineError, Stage};
pub use quran::{Ayah, Mushaf, Period, Quran, Sajdah, Surah, Word};
pub use serializer::OutputStyle;
pub use translation::{AyahTranslation, Translation, TranslationSurah};
