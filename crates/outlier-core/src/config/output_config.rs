//! Front-end output configuration.

use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendering of detection results. Default: table.
    pub format: Option<OutputFormat>,
    /// Rows shown in the data preview. Default: 5.
    pub preview_rows: Option<usize>,
}

impl OutputConfig {
    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Returns the effective preview row count, defaulting to 5.
    pub fn effective_preview_rows(&self) -> usize {
        self.preview_rows.unwrap_or(5)
    }
}
