//! Source discovery.
//!
//! Finds the PNG files a batch run should process. Only the top level of the
//! input directory is searched unless `recursive` is set. Entries are sorted
//! by file name within each directory so repeated runs process files in the
//! same order.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extension of files picked up as sources (matched case-insensitively).
pub const SOURCE_EXTENSION: &str = "png";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("input directory not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("failed to read input directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// List source images under `input`.
pub fn discover_sources(input: &Path, recursive: bool) -> Result<Vec<PathBuf>, ScanError> {
    if !input.is_dir() {
        return Err(ScanError::InputNotFound(input.to_path_buf()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut sources = Vec::new();

    for entry in WalkDir::new(input)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_source_image(entry.path()) {
            sources.push(entry.into_path());
        }
    }

    Ok(sources)
}

fn is_source_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SOURCE_EXTENSION))
}
