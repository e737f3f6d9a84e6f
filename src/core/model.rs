//! Scan model
//!
//! The accumulated feature set, the per-run summary, and the errors a scan
//! can fail with.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;

/// Unique feature tokens collected during one run.
///
/// Backed by a `BTreeSet`, so iteration is always in ascending byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureSet {
    features: BTreeSet<String>,
}

impl FeatureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one token, ignoring empty ones. Returns true if it was new.
    pub fn insert(&mut self, feature: impl Into<String>) -> bool {
        let feature = feature.into();
        if feature.is_empty() {
            return false;
        }
        self.features.insert(feature)
    }

    /// Union another batch of tokens into the set
    pub fn extend<I, S>(&mut self, features: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for feature in features {
            self.insert(feature);
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterate tokens in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(String::as_str)
    }

    /// Finalize into the sorted output list
    pub fn into_sorted_vec(self) -> Vec<String> {
        self.features.into_iter().collect()
    }
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Every path the walk produced, directories and the root included
    pub paths_collected: usize,

    /// Files that passed the suffix filter and were read
    pub files_scanned: usize,

    /// Files that passed the suffix filter but could not be read
    pub files_skipped: usize,

    /// Number of unique features written
    pub features: usize,
}

/// Errors that abort a scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// The walk could not list or stat a path (missing root, permissions, symlink loop)
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", .path.display())]
    Decode { path: PathBuf },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// The path the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::Walk { path, .. }
            | ScanError::Read { path, .. }
            | ScanError::Decode { path }
            | ScanError::Write { path, .. } => path,
        }
    }
}
