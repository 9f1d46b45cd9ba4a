/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use std::path::Path;
use tanzil_importer::app_config::OutputFormat;
use tanzil_importer::file_utils::FileManager;
use crate::common;

/// Test that dir_exists is true for directories only
#[test]
fn test_dir_exists_withFileAndDirectory_shouldOnlyAcceptDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "quran.xml", "<quran/>")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&test_file));
    assert!(!FileManager::dir_exists(temp_dir.path().join("missing")));
    Ok(())
}

/// Test output paths for both formats
#[test]
fn test_generate_output_path_withFormats_shouldAppendSuffix() {
    let output_dir = Path::new("/tmp/output");

    assert_eq!(
        FileManager::generate_output_path(output_dir, "hafs", OutputFormat::Json),
        Path::new("/tmp/output/hafs.json")
    );
    assert_eq!(
        FileManager::generate_output_path(output_dir, "en.sahih", OutputFormat::Rows),
        Path::new("/tmp/output/en.sahih.rows.json")
    );
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;
    assert!(FileManager::dir_exists(&nested));

    // A second call is a no-op
    FileManager::ensure_dir(&nested)?;
    Ok(())
}

/// Test that list_files only returns direct children, sorted
#[test]
fn test_list_files_withNestedDirectory_shouldListTopLevelSorted() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "fr.hamidullah.xml", "")?;
    common::create_test_file(temp_dir.path(), "en.sahih.xml", "")?;
    fs::create_dir(temp_dir.path().join("nested"))?;
    common::create_test_file(&temp_dir.path().join("nested"), "de.bubenheim.xml", "")?;

    let files = FileManager::list_files(temp_dir.path())?;
    let names: Vec<String> = files
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["en.sahih.xml", "fr.hamidullah.xml"]);
    Ok(())
}

/// Test that writing creates the parent directory and reading gets bytes back
#[test]
fn test_write_to_file_withMissingParent_shouldCreateIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out").join("hafs.json");

    FileManager::write_to_file(&path, "{}")?;
    assert_eq!(FileManager::read_bytes(&path)?, b"{}".to_vec());
    assert_eq!(fs::read_to_string(&path)?, "{}");
    Ok(())
}
