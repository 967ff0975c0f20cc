// Library entry point for the function_graph call-tree viewer.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::callgraph::{CallNode, Forest, ForestStats};
pub use domain::error::{Error, ParseErrorReason, Result};
pub use domain::normalize::{normalize, normalize_str, NormalizeOptions};
pub use domain::parser::{parse, parse_with, ParseOptions};
pub use ports::{render_html, render_text};
