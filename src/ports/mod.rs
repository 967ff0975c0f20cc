use crate::domain::callgraph::Forest;

pub mod html_renderer;
pub mod json_renderer;
pub mod text_renderer;

pub use html_renderer::{render_html, HtmlRenderer};
pub use json_renderer::JsonRenderer;
pub use text_renderer::{render_text, TextRenderer};

/// Turns a parsed forest into output text.
pub trait ForestRenderer {
    fn render(&self, forest: &Forest) -> anyhow::Result<String>;
}
