//! Viewer Configuration
//!
//! Optional TOML file whose values act as defaults for the command line.
//!
//! ```toml
//! format = "html"
//! indent = 4
//! max_depth = 5000
//! template = "page.html"
//! output = "graph.html"
//! strip_annotations = true
//! placeholder = "GRAPH_HTML"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use serde::Deserialize;

/// Output format (text, html, json)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub format: Option<OutputFormat>,
    /// Spaces per nesting level; TOML values above 65535 are rejected.
    pub indent: Option<u16>,
    pub max_depth: Option<usize>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub strip_annotations: Option<bool>,
    pub placeholder: Option<String>,
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.placeholder.as_deref() == Some("") {
            anyhow::bail!("`placeholder` must not be empty");
        }
        Ok(config)
    }
}
