//! JSON Renderer
//!
//! Flat pre-order listing of calls with their depth, via `api::dto`.

use crate::api::dto::TraceDto;
use crate::domain::callgraph::Forest;
use crate::ports::ForestRenderer;

#[derive(Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl ForestRenderer for JsonRenderer {
    fn render(&self, forest: &Forest) -> anyhow::Result<String> {
        let dto = TraceDto::from(forest);
        let json = if self.pretty {
            serde_json::to_string_pretty(&dto)?
        } else {
            serde_json::to_string(&dto)?
        };
        Ok(json)
    }
}
