// Infrastructure for the viewer: files in, files out, configuration.

pub mod config;
pub mod trace_loader;

pub use config::{OutputFormat, ViewerConfig};
pub use trace_loader::{load_template, write_output, TraceLoader, DEFAULT_TEMPLATE};
