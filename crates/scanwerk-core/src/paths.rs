// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Default locations of the config file and device descriptions.
//
// Paths are only computed here, never created: a missing file or directory
// is reported by whoever reads it.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::config::CONFIG_FILE;
use crate::error::{Result, ScanwerkError};

/// Subdirectory of the data dir holding `ID.json` / `ID.txt` descriptions.
pub const DEVICES_DIR: &str = "devices";

/// XDG-style locations (`~/.config/scanwerk`, `~/.local/share/scanwerk`).
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl Paths {
    /// Platform locations for the current user.
    pub fn resolve() -> Result<Self> {
        let project = ProjectDirs::from("org", "hyperpolymath", "scanwerk").ok_or_else(|| {
            ScanwerkError::Config("no home directory; pass --config and --devices".into())
        })?;
        Ok(Self::new(project.config_dir(), project.data_dir()))
    }

    pub fn new(config_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            data_dir: data_dir.into(),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    pub fn devices_dir(&self) -> PathBuf {
        self.data_dir.join(DEVICES_DIR)
    }
}
