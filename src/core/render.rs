//! Renderer module
//!
//! Renders a FeatureSet to the output file formats: lines, json

use clap::ValueEnum;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::model::{FeatureSet, ScanError};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One feature per line, each line newline-terminated
    #[default]
    Lines,
    /// A single JSON array of features
    Json,
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for feature sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a feature set to a string
    pub fn render(&self, features: &FeatureSet) -> String {
        match self.config.format {
            OutputFormat::Lines => self.render_lines(features),
            OutputFormat::Json => self.render_json(features),
        }
    }

    fn render_lines(&self, features: &FeatureSet) -> String {
        let mut out = String::new();
        for feature in features.iter() {
            out.push_str(feature);
            out.push('\n');
        }
        out
    }

    fn render_json(&self, features: &FeatureSet) -> String {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(features)
        } else {
            serde_json::to_string(features)
        };
        // A set of strings always serializes
        let mut out = json.unwrap_or_default();
        out.push('\n');
        out
    }
}

/// Write rendered output, truncating any existing file at `path`
pub fn write_output(path: &Path, rendered: &str) -> Result<(), ScanError> {
    let to_error = |source| ScanError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(to_error)?;
    file.write_all(rendered.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)
}
