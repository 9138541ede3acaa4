use crate::error::{Error, Result};
use crate::transform::Pipeline;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `gray_tool` binary.
#[derive(Debug, Deserialize)]
pub struct ToolConfig {
    /// Image to load; any format the `image` crate decodes, converted to gray.
    pub input: PathBuf,
    #[serde(default)]
    pub pipeline: Pipeline,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Edited image; the extension selects the encoder.
    pub image: PathBuf,
    /// Optional JSON run report (timings, thresholds, histograms).
    #[serde(default)]
    pub report: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ToolConfig> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&data, path)
}

/// Parse a JSON config; `origin` is only used in error messages.
pub fn parse_config(json: &str, origin: &Path) -> Result<ToolConfig> {
    serde_json::from_str(json).map_err(|source| Error::Json {
        path: origin.to_path_buf(),
        source,
    })
}
