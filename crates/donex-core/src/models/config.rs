//! Configuration structures for the decode pipeline and its collaborators.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration for donex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DonexConfig {
    /// Inference collaborator settings.
    pub model: ModelConfig,

    /// Output settings.
    pub output: OutputConfig,
}

/// Settings handed to the inference collaborator.
///
/// The core never loads or runs the model; it only decodes the text the
/// collaborator produces. These values describe the contract the caller
/// is expected to honor when generating that text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Hugging Face model identifier.
    pub model_id: String,

    /// Task prompt fed to the decoder to start generation.
    pub task_prompt: String,

    /// Maximum generation length in tokens.
    pub max_length: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_id: "katanaml-org/invoices-donut-model-v1".to_string(),
            task_prompt: "<s_cord-v2>".to_string(),
            max_length: 1024,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl DonexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
