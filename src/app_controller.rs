use anyhow::Result;
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, OutputFormat};
use crate::cleanser;
use crate::errors::{ImportError, MalformedInputError, PipelineError, Stage, StageContext};
use crate::file_utils::FileManager;
use crate::integrity;
use crate::quran::{self, Quran};
use crate::rows::{QuranRows, TranslationRows};
use crate::serializer;
use crate::tanzil_xml;
use crate::translation::{self, Translation, TranslationMetadata};

// @module: Application controller for the import pipeline

/// Values that replace what would otherwise come from configuration or
/// from the translation file name
#[derive(Debug, Clone, Default)]
pub struct TranslationOverrides {
    pub mushaf: Option<String>,
    pub language: Option<String>,
    pub author: Option<String>,
    pub release_date: Option<NaiveDate>,
}

/// Outcome of a bulk translation run
#[derive(Debug, Default)]
pub struct BulkReport {
    /// Output files written, in input order
    pub written: Vec<PathBuf>,
    /// Files that were skipped, with the reason
    pub failures: Vec<PipelineError>,
}

impl BulkReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read, verify and parse a Quran source file.
    ///
    /// The integrity gate runs on the exact bytes read, before any decoding.
    pub fn convert_quran(&self, input_file: &Path) -> Result<Quran, PipelineError> {
        let raw = FileManager::read_bytes(input_file).at_stage(input_file, Stage::Read)?;
        self.convert_quran_bytes(input_file, &raw)
    }

    /// Same as [`convert_quran`](Self::convert_quran) for bytes already in memory
    pub fn convert_quran_bytes(&self, input_file: &Path, raw: &[u8]) -> Result<Quran, PipelineError> {
        integrity::ensure_valid(raw, &self.config.integrity.expected_digest)
            .at_stage(input_file, Stage::Integrity)?;
        info!("Source digest verified for {:?}", input_file);

        let content = cleanser::strip_comments(raw).at_stage(input_file, Stage::Cleanse)?;

        quran::parse_str(
            &content,
            self.config.mushaf.to_mushaf(),
            self.config.parsing.to_options(),
        )
        .at_stage(input_file, Stage::Parse)
    }

    /// Render a Quran tree in the configured format
    pub fn render_quran(&self, quran: &Quran) -> Result<String, ImportError> {
        let style = self.config.output.style();
        match self.config.output.format {
            OutputFormat::Json => serializer::quran_to_json(quran, style),
            OutputFormat::Rows => {
                let rows = QuranRows::from_quran(quran, self.config.mushaf.id);
                debug!(
                    "Built {} surah, {} ayah and {} word rows",
                    rows.surahs.len(),
                    rows.ayahs.len(),
                    rows.words.len()
                );
                serializer::to_json(&rows.batches(), style)
            }
        }
    }

    /// Convert a Quran source file and write it to the output directory.
    ///
    /// Nothing is written unless every stage before writing succeeded.
    pub fn run_quran(&self, input_file: &Path, output_dir: &Path) -> Result<PathBuf, PipelineError> {
        info!("Working on {:?}", input_file);

        let quran = self.convert_quran(input_file)?;
        let rendered = self.render_quran(&quran).at_stage(input_file, Stage::Serialize)?;

        let output_path = FileManager::generate_output_path(
            output_dir,
            &self.config.mushaf.short_name,
            self.config.output.format,
        );
        FileManager::write_to_file(&output_path, &rendered).at_stage(&output_path, Stage::Write)?;

        info!("Wrote {:?} ({})", output_path, self.config.output.format);
        Ok(output_path)
    }

    /// Resolve the metadata of a translation file.
    ///
    /// Language and author come from the file name unless both are
    /// overridden; the extension is always checked.
    pub fn translation_metadata(
        &self,
        input_file: &Path,
        overrides: &TranslationOverrides,
    ) -> Result<TranslationMetadata, MalformedInputError> {
        let expected_extension = &self.config.translation.extension;

        if let (Some(language), Some(author)) = (&overrides.language, &overrides.author) {
            let extension = input_file
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default();
            let metadata = TranslationMetadata {
                language: language.clone(),
                author: author.clone(),
                extension,
            };
            metadata.ensure_extension(expected_extension)?;
            return Ok(metadata);
        }

        let mut metadata = translation::translation_metadata(input_file)?;
        metadata.ensure_extension(expected_extension)?;

        if let Some(language) = &overrides.language {
            metadata.language = language.clone();
        }
        if let Some(author) = &overrides.author {
            metadata.author = author.clone();
        }
        Ok(metadata)
    }

    /// Read, cleanse and align a translation file
    pub fn convert_translation(
        &self,
        input_file: &Path,
        overrides: &TranslationOverrides,
    ) -> Result<(TranslationMetadata, Translation), PipelineError> {
        let metadata = self
            .translation_metadata(input_file, overrides)
            .at_stage(input_file, Stage::Metadata)?;
        let raw = FileManager::read_bytes(input_file).at_stage(input_file, Stage::Read)?;
        let content = cleanser::strip_comments(&raw).at_stage(input_file, Stage::Cleanse)?;
        let root = tanzil_xml::parse_document(&content).at_stage(input_file, Stage::Parse)?;

        let mushaf = overrides
            .mushaf
            .as_deref()
            .unwrap_or(self.config.mushaf.short_name.as_str());

        let translation = translation::parse_translation(
            &root,
            mushaf,
            &metadata.language,
            &self.config.translation.source,
            &metadata.author,
            overrides.release_date,
        )
        .at_stage(input_file, Stage::Align)?;

        Ok((metadata, translation))
    }

    /// Render a translation tree in the configured format
    pub fn render_translation(&self, translation: &Translation, translation_id: u32) -> Result<String, ImportError> {
        let style = self.config.output.style();
        match self.config.output.format {
            OutputFormat::Json => serializer::translation_to_json(translation, style),
            OutputFormat::Rows => {
                let rows = TranslationRows::from_translation(translation, translation_id);
                serializer::to_json(&rows.batches(), style)
            }
        }
    }

    /// Convert one translation file and write `{language}.{author}` output
    pub fn run_translation(
        &self,
        input_file: &Path,
        output_dir: &Path,
        overrides: &TranslationOverrides,
        translation_id: u32,
    ) -> Result<PathBuf, PipelineError> {
        info!("Working on {:?}", input_file);

        let (metadata, translation) = self.convert_translation(input_file, overrides)?;
        let rendered = self
            .render_translation(&translation, translation_id)
            .at_stage(input_file, Stage::Serialize)?;

        let output_path =
            FileManager::generate_output_path(output_dir, &metadata.stem(), self.config.output.format);
        FileManager::write_to_file(&output_path, &rendered).at_stage(&output_path, Stage::Write)?;

        info!("Wrote {:?} ({})", output_path, self.config.output.format);
        Ok(output_path)
    }

    /// Convert every file of a directory independently.
    ///
    /// A failing file is reported and skipped; the others are still
    /// written. Translation ids count up from the configured first id over
    /// the files that succeed.
    pub fn run_translation_bulk(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        mushaf: Option<&str>,
    ) -> Result<BulkReport> {
        let files = FileManager::list_files(input_dir)?;
        info!("Found {} translation files in {:?}", files.len(), input_dir);

        FileManager::ensure_dir(output_dir)?;

        let overrides = TranslationOverrides {
            mushaf: mushaf.map(str::to_string),
            ..TranslationOverrides::default()
        };

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut report = BulkReport::default();
        let mut next_id = self.config.translation.first_translation_id;

        for path in &files {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            progress.set_message(file_name);

            match progress.suspend(|| self.run_translation(path, output_dir, &overrides, next_id)) {
                Ok(output_path) => {
                    next_id += 1;
                    report.written.push(output_path);
                }
                Err(e) => {
                    progress.suspend(|| error!("{}", e));
                    report.failures.push(e);
                }
            }
            progress.inc(1);
        }

        progress.finish_and_clear();
        info!(
            "Imported {} translations, {} failed",
            report.written.len(),
            report.failures.len()
        );

        Ok(report)
    }
}
