//! Application configuration module
//!
//! This module handles loading, validating and saving the importer settings.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::integrity;
use crate::quran::{Mushaf, ParseOptions};
use crate::serializer::OutputStyle;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Mushaf edition written into every output
    #[serde(default)]
    pub mushaf: MushafConfig,

    /// Integrity gate settings
    #[serde(default)]
    pub integrity: IntegrityConfig,

    /// Translation import settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Corpus parsing options
    #[serde(default)]
    pub parsing: ParsingConfig,

    /// Output rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Mushaf edition identity
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MushafConfig {
    // @field: Short identifier, also the output file stem
    #[serde(default = "default_mushaf_short_name")]
    pub short_name: String,

    // @field: Full edition name
    #[serde(default = "default_mushaf_full_name")]
    pub full_name: String,

    // @field: Source label
    #[serde(default = "default_mushaf_source")]
    pub source: String,

    // @field: Key written to quran_surahs.mushaf_id
    #[serde(default = "default_mushaf_id")]
    pub id: u32,
}

impl MushafConfig {
    pub fn to_mushaf(&self) -> Mushaf {
        Mushaf::new(&self.short_name, &self.full_name, &self.source)
    }
}

impl Default for MushafConfig {
    fn default() -> Self {
        Self {
            short_name: default_mushaf_short_name(),
            full_name: default_mushaf_full_name(),
            source: default_mushaf_source(),
            id: default_mushaf_id(),
        }
    }
}

/// Integrity gate configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IntegrityConfig {
    /// SHA-256 of the approved Quran source release
    #[serde(default = "default_expected_digest")]
    pub expected_digest: String,
}

impl Default for IntegrityConfig {
    fn default() -> Self {
        Self {
            expected_digest: default_expected_digest(),
        }
    }
}

/// Translation import configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Source label written into every translation
    #[serde(default = "default_translation_source")]
    pub source: String,

    /// Only files with this extension are read
    #[serde(default = "default_translation_extension")]
    pub extension: String,

    /// Key of the first translation; bulk runs count up from here
    #[serde(default = "default_first_translation_id")]
    pub first_translation_id: u32,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            source: default_translation_source(),
            extension: default_translation_extension(),
            first_translation_id: default_first_translation_id(),
        }
    }
}

/// Corpus parsing configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ParsingConfig {
    /// Move an inlined bismillah preface out of first verses
    #[serde(default)]
    pub separate_bismillah: bool,
}

impl ParsingConfig {
    pub fn to_options(&self) -> ParseOptions {
        ParseOptions {
            separate_bismillah: self.separate_bismillah,
        }
    }
}

/// Output format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Nested tree document
    #[default]
    Json,
    /// Row-tuple batches per table
    Rows,
}

impl OutputFormat {
    // @returns: File name suffix for this format
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Rows => "rows.json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Rows => write!(f, "rows"),
        }
    }
}

/// Output configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Indent the rendered JSON
    #[serde(default)]
    pub pretty: bool,
}

impl OutputConfig {
    pub fn style(&self) -> OutputStyle {
        OutputStyle::from_pretty_flag(self.pretty)
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_mushaf_short_name() -> String {
    "hafs".to_string()
}

fn default_mushaf_full_name() -> String {
    "Hafs an Asem".to_string()
}

fn default_mushaf_source() -> String {
    "tanzil".to_string()
}

fn default_mushaf_id() -> u32 {
    2
}

fn default_expected_digest() -> String {
    integrity::TANZIL_QURAN_SOURCE_HASH.to_string()
}

fn default_translation_source() -> String {
    "tanzil.net".to_string()
}

fn default_translation_extension() -> String {
    "xml".to_string()
}

fn default_first_translation_id() -> u32 {
    1
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| anyhow!("Failed to open config file {:?}: {}", path, e))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path, e))?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.mushaf.short_name.trim().is_empty() {
            return Err(anyhow!("Mushaf short name cannot be empty"));
        }

        if self.mushaf.short_name.contains(['/', '\\']) {
            return Err(anyhow!(
                "Mushaf short name '{}' cannot contain path separators",
                self.mushaf.short_name
            ));
        }

        if !integrity::is_digest_format(self.integrity.expected_digest.trim()) {
            return Err(anyhow!(
                "Expected digest must be 64 hexadecimal characters, got '{}'",
                self.integrity.expected_digest
            ));
        }

        if self.translation.source.trim().is_empty() {
            return Err(anyhow!("Translation source cannot be empty"));
        }

        if self.translation.extension.trim_start_matches('.').is_empty() {
            return Err(anyhow!("Translation file extension cannot be empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mushaf: MushafConfig::default(),
            integrity: IntegrityConfig::default(),
            translation: TranslationConfig::default(),
            parsing: ParsingConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
