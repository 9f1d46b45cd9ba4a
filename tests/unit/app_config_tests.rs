/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use tanzil_importer::app_config::{Config, LogLevel, OutputFormat};
use tanzil_importer::integrity::TANZIL_QURAN_SOURCE_HASH;
use tanzil_importer::serializer::OutputStyle;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.mushaf.short_name, "hafs");
    assert_eq!(config.mushaf.full_name, "Hafs an Asem");
    assert_eq!(config.mushaf.source, "tanzil");
    assert_eq!(config.mushaf.id, 2);
    assert_eq!(config.integrity.expected_digest, TANZIL_QURAN_SOURCE_HASH);
    assert_eq!(config.translation.source, "tanzil.net");
    assert_eq!(config.translation.extension, "xml");
    assert_eq!(config.translation.first_translation_id, 1);
    assert!(!config.parsing.separate_bismillah);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.style(), OutputStyle::Compact);
    assert_eq!(config.log_level, LogLevel::Info);

    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.mushaf.short_name = "  ".to_string();
    assert!(config.validate().is_err());
    config.mushaf.short_name = "out/hafs".to_string();
    assert!(config.validate().is_err());
    config.mushaf.short_name = "hafs".to_string();

    config.integrity.expected_digest = "not-a-digest".to_string();
    assert!(config.validate().is_err());
    config.integrity.expected_digest = TANZIL_QURAN_SOURCE_HASH.to_uppercase();
    assert!(config.validate().is_ok());

    config.translation.extension = ".".to_string();
    assert!(config.validate().is_err());
    config.translation.extension = "xml".to_string();

    config.translation.source = String::new();
    assert!(config.validate().is_err());
}

/// Test that a partial config file is completed with defaults
#[test]
fn test_from_file_withPartialConfig_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "mushaf": { "short_name": "warsh" }, "output": { "format": "rows", "pretty": true }, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.mushaf.short_name, "warsh");
    assert_eq!(config.mushaf.full_name, "Hafs an Asem");
    assert_eq!(config.output.format, OutputFormat::Rows);
    assert_eq!(config.output.style(), OutputStyle::Pretty);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.integrity.expected_digest, TANZIL_QURAN_SOURCE_HASH);
    Ok(())
}

/// Test that a broken config file is an error
#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ mushaf")?;
    assert!(Config::from_file(&path).is_err());
    assert!(Config::from_file(temp_dir.path().join("missing.json")).is_err());
    Ok(())
}

/// Test that the default config survives a write and read
#[test]
fn test_default_config_serialized_shouldLoadBack() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let json = serde_json::to_string_pretty(&Config::default())?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", &json)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.mushaf.id, 2);
    assert_eq!(loaded.translation.first_translation_id, 1);
    Ok(())
}

/// Test output format names and file suffixes
#[test]
fn test_output_format_fileSuffix_shouldMatchFormat() {
    assert_eq!(OutputFormat::Json.to_string(), "json");
    assert_eq!(OutputFormat::Json.file_suffix(), "json");
    assert_eq!(OutputFormat::Rows.file_suffix(), "rows.json");
    assert_eq!(OutputFormat::Rows.to_string(), "rows");
}
