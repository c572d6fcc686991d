use crate::config::default_extension;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Audio recorder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Directory for recordings (None = the OS temporary directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Recording file extension.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl RecorderConfig {
    /// Directory recordings are written to.
    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            extension: default_extension(),
        }
    }
}
