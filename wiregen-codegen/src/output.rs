//! Output file writing.

use crate::error::CodegenError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the file at `path` with `contents`.
///
/// The contents go to a temporary file next to the destination, which is
/// then renamed over it. On failure the previous file is left untouched.
///
/// # Errors
/// Returns `CodegenError::Io` if the directory or temporary file cannot be
/// created or written, and `CodegenError::Persist` if the rename fails.
pub fn write_output(path: &Path, contents: &str) -> Result<(), CodegenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.persist(path)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
