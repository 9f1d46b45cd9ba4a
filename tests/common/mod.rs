/*!
 * Common test utilities for the tanzil_importer test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use tanzil_importer::app_config::Config;
use tanzil_importer::integrity;
use tanzil_importer::quran::BISMILLAH;

/// Route library logs through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Two surahs in Tanzil shape: Al-Fatiha opens with the bismillah as its
/// first ayah, Al-Baqarah carries it as a `bismillah` attribute.
pub fn quran_fixture() -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8" ?>
<!--
    Tanzil Quran Text (Simple, Version 1.1)
    Copyright (C) 2007-2024 Tanzil Project
-->
<quran>
    <sura index="1" name="الفاتحة">
        <aya index="1" text="{bismillah}"/>
        <aya index="2" text="ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَـٰلَمِينَ"/>
    </sura>
    <sura index="2" name="البقرة">
        <aya index="1" text="الٓمٓ" bismillah="{bismillah}"/>
        <aya index="2" text="ذَٰلِكَ ٱلْكِتَـٰبُ لَا رَيْبَ"/>
    </sura>
</quran>
"#,
        bismillah = BISMILLAH
    )
}

/// Translation in Tanzil shape whose header comment contains `--`
pub fn translation_fixture() -> String {
    r#"<?xml version="1.0" encoding="utf-8" ?>
<quran>
<!--
    Name: Test Translation
    Translator: Test -- Translator
-->
    <sura index="1" name="Al-Faatiha">
        <aya index="1" text="In the name of God, the Gracious, the Merciful."/>
        <aya index="2" text="Praise be to God, Lord of the Worlds."/>
    </sura>
    <sura index="2" name="Al-Baqara">
        <aya index="1" text="Alif, Lam, Meem."/>
        <aya index="2" text="This is the Book, there's no doubt in it."/>
    </sura>
</quran>
"#
    .to_string()
}

/// Default config whose integrity gate accepts the given source
pub fn config_accepting(source: &str) -> Config {
    let mut config = Config::default();
    config.integrity.expected_digest = integrity::digest_hex(source.as_bytes());
    config
}

/// Space separated token count of a verse, the reference for word counts
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}
