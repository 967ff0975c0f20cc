// Domain layer: call trees, trace normalization and the call grammar parser.

pub mod callgraph;
pub mod error;
pub mod normalize;
pub mod parser;
