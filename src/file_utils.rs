use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::app_config::OutputFormat;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @generates: Output path `{stem}.json` or `{stem}.rows.json`
    pub fn generate_output_path<P: AsRef<Path>>(output_dir: P, stem: &str, format: OutputFormat) -> PathBuf {
        output_dir
            .as_ref()
            .join(format!("{}.{}", stem, format.file_suffix()))
    }

    /// Files directly inside `dir`, sorted by path.
    ///
    /// Bulk translation runs read every file, so the extension check is
    /// left to the caller where it can be reported per file.
    pub fn list_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            if entry.file_type().is_file() {
                result.push(entry.into_path());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a file's exact bytes
    pub fn read_bytes<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<u8>> {
        fs::read(path)
    }

    /// Write a string to a file, creating the parent directory
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content)
    }
}
