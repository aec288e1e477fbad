//! File-writing helpers with unified error mapping
//!
//! Both sync tasks end in exactly one whole-file write; content is fully
//! prepared in memory first, so a failed task never leaves a partial file.

use std::path::Path;

use crate::error::{Result, StewError};

fn file_write_error(path: &Path, e: std::io::Error) -> StewError {
    StewError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| file_write_error(parent, e))?;
    }
    Ok(())
}

/// Write `content` to `path`, creating parent directories and overwriting
/// any existing file.
pub fn write_text_file(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, content).map_err(|e| file_write_error(path, e))
}
