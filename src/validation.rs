use std::path::Path;
use tracing::warn;

use crate::MergeFileError;

fn valid_path(path: &Path) -> bool {
    !path.as_os_str().is_empty()
}

fn valid_path_that_exists(path: &Path) -> bool {
    valid_path(path) && path.exists()
}

/// Validates the three paths of a merge request before anything is parsed.
///
/// All three conditions are checked independently so that every failing
/// path is reported, not just the first one.
///
/// # Errors
///
/// Returns `MergeFileError::InvalidRequest` if:
/// - the base file path is empty or does not exist
/// - the merge file path is empty or does not exist
/// - the output file path is empty
pub fn validate_request<B, M, O>(
    base_file: B,
    merge_file: M,
    output_file: O,
) -> Result<(), MergeFileError>
where
    B: AsRef<Path>,
    M: AsRef<Path>,
    O: AsRef<Path>,
{
    let mut valid = true;

    if !valid_path_that_exists(base_file.as_ref()) {
        warn!("Base json file is invalid or missing: \"{}\"", base_file.as_ref().display());
        valid = false;
    }

    if !valid_path_that_exists(merge_file.as_ref()) {
        warn!("Merge json file is invalid or missing: \"{}\"", merge_file.as_ref().display());
        valid = false;
    }

    if !valid_path(output_file.as_ref()) {
        warn!("Output json file is invalid: \"{}\"", output_file.as_ref().display());
        valid = false;
    }

    if valid {
        Ok(())
    } else {
        Err(MergeFileError::InvalidRequest)
    }
}
