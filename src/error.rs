// src/error.rs
// =============================================================================
// Error types returned by the md-links library.
//
// Only the file stages and the final wait can fail. A link that cannot be
// reached is NOT an error: it ends up as a `LinkCheck::Failed` on its record.
// =============================================================================

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can make `md_links()` fail.
#[derive(Error, Debug)]
pub enum MdLinksError {
    /// The path is missing, not a regular file, or has zero length.
    ///
    /// Raised by the loader before any read is attempted.
    #[error("✗ The file {} is empty or does not exist", path.display())]
    FileNotFoundOrEmpty { path: PathBuf },

    /// Reading the file failed after the loader had accepted it.
    #[error("Could not read {}: {source}", path.display())]
    IoRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Waiting on the spawned link checks failed (a task panicked or was cancelled).
    #[error("Link validation did not complete: {0}")]
    Validation(String),
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, MdLinksError>;
