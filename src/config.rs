use crate::refine::RefineOptions;
use crate::types::PaintChannel;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Write recovered origins as JSON to this path.
    pub json_out: Option<PathBuf>,
}

/// One synthetic gradient in the demo document.
#[derive(Clone, Deserialize)]
pub struct GradientFixture {
    /// Exact origin the readouts are rounded from.
    pub origin: [f64; 2],
    /// Channel carrying the radial gradient.
    pub channel: PaintChannel,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub refine: RefineOptions,
    #[serde(default)]
    pub output: OutputConfig,
    pub gradients: Vec<GradientFixture>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            refine: RefineOptions::default(),
            output: OutputConfig::default(),
            gradients: vec![
                GradientFixture {
                    origin: [3.14159, -2.71828],
                    channel: PaintChannel::Fill,
                },
                GradientFixture {
                    origin: [-0.25, 40.0625],
                    channel: PaintChannel::Stroke,
                },
            ],
        }
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
