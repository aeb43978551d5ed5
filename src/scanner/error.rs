use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal scan failures.
///
/// Unreadable subtrees and files are deliberately not represented here: they
/// are counted, warned about, and the scan continues without them.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("source directory does not exist or is not a directory: {path}")]
    MissingSourceDirectory { path: PathBuf },

    #[error("invalid key pattern configuration")]
    InvalidPatternConfig {
        #[source]
        source: regex::Error,
    },

    #[error("failed to write template file: {path}")]
    TemplateWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
