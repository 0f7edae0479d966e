// src/loader/file.rs
// =============================================================================
// This module gets the input file ready for extraction.
//
// Two steps, always in this order:
// 1. resolve_input: make the path absolute, then check it exists, is not
//    empty and can be opened (no read)
// 2. read_content: read the whole file as UTF-8 text
//
// Keeping the check separate from the read lets us report "missing or empty"
// precisely instead of a generic read error.
// =============================================================================

use crate::error::{MdLinksError, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

// Resolves and checks the input path
//
// Parameters:
//   path: relative (to the current directory) or absolute path
//
// Returns: the absolute path, or FileNotFoundOrEmpty
pub async fn resolve_input(path: &Path) -> Result<PathBuf> {
    let absolute = absolutize(path).map_err(|_| not_found(path))?;

    // metadata() follows symlinks, so a link to an empty file is rejected too
    let metadata = tokio::fs::metadata(&absolute)
        .await
        .map_err(|_| not_found(path))?;

    if !metadata.is_file() || metadata.len() == 0 {
        return Err(not_found(path));
    }

    // Opening without reading catches permission problems up front
    tokio::fs::File::open(&absolute)
        .await
        .map_err(|_| not_found(path))?;

    debug!(path = %absolute.display(), bytes = metadata.len(), "input accepted");
    Ok(absolute)
}

// Reads the file that resolve_input already accepted
//
// The file can still change between the two calls (or hold invalid UTF-8);
// any failure here is reported as IoRead with the underlying io::Error attached.
pub async fn read_content(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| MdLinksError::IoRead {
            path: path.to_path_buf(),
            source,
        })
}

fn not_found(path: &Path) -> MdLinksError {
    MdLinksError::FileNotFoundOrEmpty {
        path: path.to_path_buf(),
    }
}

// Joins relative paths onto the current directory and folds "." and ".."
// without touching the filesystem (symlinks are left alone)
fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}
