//! Collapsible HTML Renderer
//!
//! Emits the forest as nested `<ul>` lists. Every call becomes an
//! `<a class="expand">` label carrying its immediate child count, followed by
//! the list of its children (empty for leaves). The fragment is meant to be
//! substituted into a page template.

use crate::domain::callgraph::{Forest, Visit};
use crate::ports::ForestRenderer;

pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Convert a forest to an HTML list fragment.
    pub fn to_html(forest: &Forest) -> String {
        let mut html = String::from("<ul>");
        for visit in forest.events() {
            match visit {
                Visit::Enter { node, .. } => {
                    html.push_str("<li><a class=\"expand\">");
                    html.push_str(&Self::escape(&node.name));
                    html.push_str(&format!(" ({})</a><ul>", node.children.len()));
                }
                Visit::Leave { .. } => html.push_str("</ul></li>"),
            }
        }
        html.push_str("</ul>");
        html
    }

    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }
}

impl ForestRenderer for HtmlRenderer {
    fn render(&self, forest: &Forest) -> anyhow::Result<String> {
        Ok(Self::to_html(forest))
    }
}

pub fn render_html(forest: &Forest) -> String {
    HtmlRenderer::to_html(forest)
}
