//! Feature scanning backend
//!
//! Walks the root, filters candidates by suffix, extracts feature references
//! from each file, and writes the sorted, deduplicated list.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::backends::walk::{collect_paths, WalkMode};
use crate::core::extract::extract_features;
use crate::core::file_reader::{read_with_policy, FileRead, ReadPolicy};
use crate::core::model::{FeatureSet, ScanError, ScanSummary};
use crate::core::paths::{display_relative, is_scan_candidate, DEFAULT_SUFFIXES};
use crate::core::render::{write_output, RenderConfig, Renderer};

/// Configuration for a scan run
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Allowed file extensions, without the leading dot
    pub suffixes: Vec<String>,

    /// How the tree is walked
    pub walk_mode: WalkMode,

    /// What to do with files that cannot be read as text
    pub read_policy: ReadPolicy,

    /// Output file format
    pub render: RenderConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            walk_mode: WalkMode::default(),
            read_policy: ReadPolicy::default(),
            render: RenderConfig::default(),
        }
    }
}

/// Collect the feature set under `root` without writing anything
pub fn scan_features(
    root: &Path,
    config: &ScanConfig,
) -> Result<(FeatureSet, ScanSummary), ScanError> {
    let paths = collect_paths(root, config.walk_mode)?;

    let mut summary = ScanSummary {
        paths_collected: paths.len(),
        ..ScanSummary::default()
    };
    info!("scanning {} paths...", paths.len());

    let mut features = FeatureSet::new();

    for path in paths
        .iter()
        .filter(|p| is_scan_candidate(p, &config.suffixes))
    {
        match read_with_policy(path, config.read_policy)? {
            FileRead::Text(content) => {
                summary.files_scanned += 1;
                let found = extract_features(&content);
                if !found.is_empty() {
                    debug!(
                        file = %display_relative(path, root),
                        references = found.len(),
                        "found feature references"
                    );
                }
                features.extend(found);
            }
            FileRead::Skipped(err) => {
                summary.files_skipped += 1;
                warn!(file = %display_relative(err.path(), root), "skipping: {}", err);
            }
        }
    }

    summary.features = features.len();
    Ok((features, summary))
}

/// Run the scan command: scan `root` and write the feature list to `output`
pub fn run_scan(root: &Path, output: &Path, config: &ScanConfig) -> Result<ScanSummary> {
    info!("scanning directory: {}", root.display());

    let (features, summary) = scan_features(root, config)
        .with_context(|| format!("scan of {} failed", root.display()))?;

    info!(
        "scanned {} of {} paths, found {} features",
        summary.files_scanned, summary.paths_collected, summary.features
    );
    if summary.files_skipped > 0 {
        warn!("{} unreadable files were skipped", summary.files_skipped);
    }

    // Render before touching the output so a failed scan leaves it intact
    let rendered = Renderer::with_config(config.render).render(&features);

    info!("writing to {}...", output.display());
    write_output(output, &rendered).context("could not write feature list")?;
    info!("done");

    Ok(summary)
}
