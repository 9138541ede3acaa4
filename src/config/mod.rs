//! JSON configuration for the command-line tools.
mod tool;

pub use tool::{load_config, parse_config, OutputConfig, ToolConfig};
