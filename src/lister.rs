use crate::errors::AppError;
use crate::filter::ExtensionFilter;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// List the entries of `directory` whose names end with `extension`,
/// ignoring case on both sides.
pub fn list_matching(directory: &Path, extension: &str) -> Result<Vec<String>, AppError> {
    let filter = ExtensionFilter::new([extension])?;
    list_matching_filter(directory, &filter)
}

/// List the entries of `directory` accepted by `filter`.
///
/// Only one level is read. Files, subdirectories and special entries are
/// all candidates. Names keep the order the platform returned them in.
pub fn list_matching_filter(
    directory: &Path,
    filter: &ExtensionFilter,
) -> Result<Vec<String>, AppError> {
    debug!(directory = %directory.display(), suffixes = ?filter.suffixes(), "listing directory");

    let entries = fs::read_dir(directory).map_err(|e| AppError::from_io(directory, e))?;

    let mut matched = Vec::new();
    let mut scanned = 0usize;
    for entry in entries {
        let entry = entry.map_err(|e| AppError::from_io(directory, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        scanned += 1;

        if filter.matches(&name) {
            trace!(name = %name, "matched");
            matched.push(name);
        }
    }

    debug!(scanned, matched = matched.len(), "listing complete");
    Ok(matched)
}
