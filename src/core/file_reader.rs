//! Candidate file reading
//!
//! Source files are read whole and must decode as UTF-8. What happens when
//! they don't is decided by the read policy.

use std::fs;
use std::path::Path;

use crate::core::model::ScanError;

/// Strategy for files that cannot be opened or decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadPolicy {
    /// Abort the whole run on the first unreadable file
    #[default]
    Abort,
    /// Log a warning, count the file as skipped, and keep going
    Skip,
}

/// Outcome of reading one candidate file
#[derive(Debug)]
pub enum FileRead {
    /// The file's full text
    Text(String),
    /// The file was skipped under `ReadPolicy::Skip`
    Skipped(ScanError),
}

/// Read a file's full content as UTF-8 text
pub fn read_text(path: &Path) -> Result<String, ScanError> {
    let bytes = fs::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| ScanError::Decode {
        path: path.to_path_buf(),
    })
}

/// Read a file, applying the policy to failures
pub fn read_with_policy(path: &Path, policy: ReadPolicy) -> Result<FileRead, ScanError> {
    match read_text(path) {
        Ok(content) => Ok(FileRead::Text(content)),
        Err(err) => match policy {
            ReadPolicy::Abort => Err(err),
            ReadPolicy::Skip => Ok(FileRead::Skipped(err)),
        },
    }
}
