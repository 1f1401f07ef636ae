use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::MergeFileError;

/// Read a JSON document from a file.
///
/// # Errors
///
/// Returns an error if:
/// - Unable to read the file (`MergeFileError::Io`)
/// - File contains invalid JSON syntax (`MergeFileError::Parse`)
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Value, MergeFileError> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)?;

    serde_json::from_str(&content)
        .map_err(|source| MergeFileError::Parse { path: path_ref.to_path_buf(), source })
}

/// Write a JSON document to a file with 2-space indentation.
///
/// # Errors
///
/// Returns an error if:
/// - Unable to create parent directories
/// - Unable to serialize the value
/// - Unable to write to the file
pub fn write_document<P: AsRef<Path>>(path: P, value: &Value) -> Result<(), MergeFileError> {
    let path_ref = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path_ref.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(path_ref, json)?;

    Ok(())
}
