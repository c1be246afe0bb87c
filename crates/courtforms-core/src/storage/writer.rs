//! Directory creation and whole-file writes.

use crate::pipeline::PipelineError;
use std::fs;
use std::path::{Path, PathBuf};

/// Create `dir` and any missing parents. No error if it already exists.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(dir).map_err(|source| PipelineError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `bytes` to `dir/filename`, truncating any existing file. Returns the path written.
pub fn write_document(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, PipelineError> {
    let path = dir.join(filename);
    fs::write(&path, bytes).map_err(|source| PipelineError::WriteFile {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
