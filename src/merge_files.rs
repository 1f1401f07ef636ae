use std::path::Path;
use tracing::{debug, warn};

use crate::document::{read_document, write_document};
use crate::merge::{merge, ArrayMergeStrategy};
use crate::validation::validate_request;
use crate::MergeFileError;

/// Merge the JSON documents at `base_file` and `merge_file` and write the
/// result to `output_file`.
///
/// Validation runs before any file is parsed; nothing is written until the
/// merge has completed in full, so a failure never clobbers a pre-existing
/// output file.
///
/// # Errors
///
/// Returns an error if:
/// - Any path fails validation (`MergeFileError::InvalidRequest`)
/// - Either input cannot be read or is not valid JSON
/// - The output file cannot be written
pub fn merge_files<B, M, O>(
    base_file: B,
    merge_file: M,
    output_file: O,
    strategy: ArrayMergeStrategy,
) -> Result<(), MergeFileError>
where
    B: AsRef<Path>,
    M: AsRef<Path>,
    O: AsRef<Path>,
{
    validate_request(base_file.as_ref(), merge_file.as_ref(), output_file.as_ref())?;

    if strategy == ArrayMergeStrategy::MergeByObjectName {
        warn!("MergeByObjectName is not implemented; arrays will be combined as with CombineAll");
    }

    let base = read_document(base_file.as_ref())?;
    let overlay = read_document(merge_file.as_ref())?;

    debug!("Merging with strategy {strategy:?}");
    let result = merge(&base, &overlay, strategy);

    write_document(output_file.as_ref(), &result)
}
