use serde::{Deserialize, Serialize};
use crate::domain::callgraph::Forest;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceDto {
    pub nodes: usize,
    pub leaves: usize,
    pub max_depth: usize,
    pub calls: Vec<CallRecordDto>,
}

/// One call in pre-order; `calls` is the number of immediate children.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallRecordDto {
    pub name: String,
    pub depth: usize,
    pub calls: usize,
}

impl From<&Forest> for TraceDto {
    fn from(forest: &Forest) -> Self {
        let stats = forest.stats();
        let calls = forest
            .walk()
            .map(|(depth, node)| CallRecordDto {
                name: node.name.clone(),
                depth,
                calls: node.children.len(),
            })
            .collect();

        TraceDto {
            nodes: stats.nodes,
            leaves: stats.leaves,
            max_depth: stats.max_depth,
            calls,
        }
    }
}
