// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, ScanwerkError};

/// File name of the persisted configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// Read-only settings consulted while building and validating scan requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base directory for generated output file paths.
    pub output_directory: PathBuf,
    /// Policy limit for `top + height`, in millimetres.
    pub maximum_scan_height_mm: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("data/output"),
            maximum_scan_height_mm: 297,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing file yields the defaults. Keys absent from the file keep
    /// their default values.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)
            .map_err(|e| ScanwerkError::Config(format!("{}: {e}", path.display())))?;

        if config.maximum_scan_height_mm == 0 {
            return Err(ScanwerkError::Config(
                "maximum_scan_height_mm must be greater than zero".into(),
            ));
        }

        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}
