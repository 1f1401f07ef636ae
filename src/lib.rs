#![allow(missing_docs)]

pub mod cli;
pub mod document;
pub mod merge;
pub mod merge_files;
pub mod validation;

pub use merge::{merge, ArrayMergeStrategy};
pub use merge_files::merge_files;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MergeFileError {
    /// One or more of the requested paths failed validation.
    #[error("Invalid request")]
    InvalidRequest,

    /// An input file existed but did not contain valid JSON.
    #[error("Failed to parse JSON from {}: Invalid JSON syntax", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
