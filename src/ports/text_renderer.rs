//! Indented Text Renderer
//!
//! One line per call in pre-order, indented by nesting depth.

use anyhow::{anyhow, Result};

use crate::domain::callgraph::Forest;
use crate::ports::ForestRenderer;

/// Spaces added per nesting level unless configured otherwise.
pub const DEFAULT_INDENT_STEP: usize = 2;

/// Widest indentation a single line may carry.
pub const MAX_INDENT_WIDTH: usize = 1 << 24;

pub struct TextRenderer {
    pub step: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            step: DEFAULT_INDENT_STEP,
        }
    }
}

impl TextRenderer {
    /// Render each call on its own line, starting at `indent` spaces.
    pub fn render_lines(&self, forest: &Forest, indent: usize) -> Result<Vec<String>> {
        forest
            .walk()
            .map(|(depth, node)| -> Result<String> {
                let width = depth
                    .checked_mul(self.step)
                    .and_then(|w| w.checked_add(indent))
                    .filter(|w| *w <= MAX_INDENT_WIDTH)
                    .ok_or_else(|| {
                        anyhow!(
                            "indentation of {} at depth {} exceeds {} columns",
                            node.name,
                            depth,
                            MAX_INDENT_WIDTH
                        )
                    })?;
                Ok(format!("{:width$}{}", "", node.name, width = width))
            })
            .collect()
    }
}

impl ForestRenderer for TextRenderer {
    fn render(&self, forest: &Forest) -> Result<String> {
        let mut out = self.render_lines(forest, 0)?.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}

/// Render with two spaces per level.
pub fn render_text(forest: &Forest, indent: usize) -> Result<Vec<String>> {
    TextRenderer::default().render_lines(forest, indent)
}
