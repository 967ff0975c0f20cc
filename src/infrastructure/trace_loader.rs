use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

/// Page used for HTML output when no template file is given.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../assets/graph_template.html");

pub struct TraceLoader;

impl TraceLoader {
    /// Read a trace file captured from `/sys/kernel/debug/tracing/trace`.
    pub fn read(path: &Path) -> Result<String> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace file {}", path.display()))?;
        log::debug!("read {} bytes from {}", raw.len(), path.display());
        Ok(raw)
    }
}

/// Load the HTML page template, falling back to the bundled one.
pub fn load_template(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read HTML template {}", path.display())),
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}

pub fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write output file {}", path.display()))?;
    log::info!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
