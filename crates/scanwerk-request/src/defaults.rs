// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Baseline scan parameters derived purely from device capabilities.

use serde::Serialize;
use serde_json::Value;

use scanwerk_core::error::Result;
use scanwerk_core::types::{ACQUISITION_FORMAT, ConvertFormat};
use scanwerk_device::{DeviceCapabilities, features};

/// Parameters a scan uses when the caller overrides nothing.
///
/// `brightness`, `contrast` and `dynamic_lineart` are always set here; the
/// builder removes them later for devices that lack the feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanDefaults {
    pub top: i64,
    pub left: i64,
    pub width: Value,
    pub height: Value,
    pub resolution: Value,
    pub mode: Value,
    pub format: &'static str,
    pub brightness: i64,
    pub contrast: i64,
    pub convert_format: ConvertFormat,
    pub dynamic_lineart: bool,
}

impl ScanDefaults {
    /// Full scan area at the device's default resolution and mode.
    ///
    /// Fails with `MissingCapability` when the device lacks `-x`, `-y`,
    /// `--resolution` or `--mode`.
    pub fn create(caps: &DeviceCapabilities) -> Result<Self> {
        Ok(Self {
            top: 0,
            left: 0,
            width: caps.require_max(features::WIDTH)?,
            height: caps.require_max(features::HEIGHT)?,
            resolution: caps.require_default(features::RESOLUTION)?,
            mode: caps.require_default(features::MODE)?,
            format: ACQUISITION_FORMAT,
            brightness: 0,
            contrast: 0,
            convert_format: ConvertFormat::default(),
            dynamic_lineart: true,
        })
    }
}
