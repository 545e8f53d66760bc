// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Scanwerk.

use thiserror::Error;

/// Top-level error type for all Scanwerk operations.
///
/// Validation problems are never reported through this type; they are
/// collected as plain strings by `ScanRequest::validate`.
#[derive(Debug, Error)]
pub enum ScanwerkError {
    // -- Request construction --
    #[error("could not resolve device {device}: {reason}")]
    DeviceResolution { device: String, reason: String },

    #[error("device does not advertise required feature {0}")]
    MissingCapability(String),

    #[error("invalid scan input: {0}")]
    InvalidInput(String),

    // -- Configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScanwerkError {
    /// Shorthand for a resolution failure on `device`.
    pub fn unresolved(device: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DeviceResolution {
            device: device.into(),
            reason: reason.into(),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScanwerkError>;
