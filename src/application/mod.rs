use crate::domain::callgraph::Forest;
use crate::domain::normalize::{normalize_str, NormalizeOptions};
use crate::domain::parser::{parse_with, ParseOptions};
use crate::ports::ForestRenderer;

/// Token in the page template that receives the rendered call tree.
pub const GRAPH_PLACEHOLDER: &str = "GRAPH_HTML";

/// raw trace -> dense grammar -> forest -> rendered output
pub struct ViewUsecase<'a> {
    pub renderer: &'a dyn ForestRenderer,
    pub normalize: NormalizeOptions,
    pub parse: ParseOptions,
}

impl<'a> ViewUsecase<'a> {
    pub fn new(renderer: &'a dyn ForestRenderer) -> Self {
        Self {
            renderer,
            normalize: NormalizeOptions::default(),
            parse: ParseOptions::default(),
        }
    }

    pub fn load_forest(&self, raw: &str) -> crate::Result<Forest> {
        let dense = normalize_str(raw, &self.normalize)?;
        let forest = parse_with(&dense, &self.parse)?;
        let stats = forest.stats();
        log::info!(
            "parsed {} calls under {} top-level calls ({} leaves, max depth {})",
            stats.nodes,
            forest.len(),
            stats.leaves,
            stats.max_depth
        );
        Ok(forest)
    }

    pub fn run(&self, raw: &str) -> anyhow::Result<String> {
        let forest = self.load_forest(raw)?;
        self.renderer.render(&forest)
    }
}

/// Substitute the rendered fragment for [`GRAPH_PLACEHOLDER`].
pub fn fill_template(template: &str, fragment: &str) -> String {
    substitute(template, GRAPH_PLACEHOLDER, fragment)
}

/// Substitute the fragment for a custom placeholder, which must not be empty.
pub fn fill_template_at(template: &str, placeholder: &str, fragment: &str) -> anyhow::Result<String> {
    if placeholder.is_empty() {
        anyhow::bail!("template placeholder must not be empty");
    }
    Ok(substitute(template, placeholder, fragment))
}

fn substitute(template: &str, placeholder: &str, fragment: &str) -> String {
    if !template.contains(placeholder) {
        log::warn!("template has no {} placeholder; graph will be missing", placeholder);
    }
    template.replace(placeholder, fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{HtmlRenderer, TextRenderer};

    const TRACE: &str = "# tracer: function_graph\n 0) | a();\n 0) | b() {\n 0) | c();\n 0) | }\n";

    #[test]
    fn test_run_text() {
        let renderer = TextRenderer::default();
        let out = ViewUsecase::new(&renderer).run(TRACE).unwrap();
        assert_eq!(out, "a\nb\n  c\n");
    }

    #[test]
    fn test_run_html_into_template() {
        let renderer = HtmlRenderer;
        let fragment = ViewUsecase::new(&renderer).run(TRACE).unwrap();
        let page = fill_template("<body>GRAPH_HTML</body>", &fragment);
        assert!(page.starts_with("<body><ul><li><a class=\"expand\">a (0)</a>"));
        assert!(page.ends_with("</ul></body>"));
    }

    #[test]
    fn test_errors_surface_as_library_errors() {
        let renderer = TextRenderer::default();
        let usecase = ViewUsecase::new(&renderer);
        let err = usecase.load_forest("# tracer: nop\n").unwrap_err();
        assert!(matches!(err, crate::Error::Format { .. }));

        let err = usecase
            .load_forest("# tracer: function_graph\n 0) | f() {\n")
            .unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_fill_template_at_custom_placeholder() {
        assert_eq!(
            fill_template_at("[[X]]", "X", "<ul></ul>").unwrap(),
            "[[<ul></ul>]]"
        );
    }

    #[test]
    fn test_empty_placeholder_is_rejected() {
        let err = fill_template_at("<p></p>", "", "X").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
