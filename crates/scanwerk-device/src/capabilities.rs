// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scanner capability model.
//
// Feature keys are the option names the SANE frontend uses (`-x`, `--mode`),
// so a description captured from one scanner can be compared directly with
// another.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use scanwerk_core::error::{Result, ScanwerkError};

/// Well-known feature keys.
pub mod features {
    pub const LEFT: &str = "-l";
    pub const TOP: &str = "-t";
    /// Horizontal extent of the scan area.
    pub const WIDTH: &str = "-x";
    /// Vertical extent of the scan area.
    pub const HEIGHT: &str = "-y";
    pub const RESOLUTION: &str = "--resolution";
    pub const MODE: &str = "--mode";
    pub const BRIGHTNESS: &str = "--brightness";
    pub const CONTRAST: &str = "--contrast";
    pub const DYNAMIC_LINEART: &str = "--disable-dynamic-lineart";
}

/// Allowed values and default for a single device option.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Feature {
    /// Either a `[min, max]` pair or the list of allowed values.
    #[serde(default)]
    pub limits: Vec<Value>,
    /// Step size for ranges, when the device reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Value>,
    /// `None` when the device reports the option as inactive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Feature {
    /// A `[min, max]` range feature.
    pub fn range(min: impl Into<Value>, max: impl Into<Value>, default: impl Into<Value>) -> Self {
        Self {
            limits: vec![min.into(), max.into()],
            interval: None,
            default: Some(default.into()),
        }
    }

    /// A feature restricted to an explicit list of values.
    pub fn list<V: Into<Value>>(values: impl IntoIterator<Item = V>, default: impl Into<Value>) -> Self {
        Self {
            limits: values.into_iter().map(Into::into).collect(),
            interval: None,
            default: Some(default.into()),
        }
    }

    /// Largest numeric limit. For a `[min, max]` pair this is the upper bound.
    pub fn max_limit(&self) -> Option<&Value> {
        self.limits
            .iter()
            .filter_map(|v| v.as_f64().map(|n| (n, v)))
            .max_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, v)| v)
    }
}

/// Everything a device advertises, keyed by feature name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    /// SANE device id, e.g. `epson2:libusb:001:004`. Empty for the unnamed set.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub features: BTreeMap<String, Feature>,
}

impl DeviceCapabilities {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            features: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with_feature(mut self, key: impl Into<String>, feature: Feature) -> Self {
        self.features.insert(key.into(), feature);
        self
    }

    pub fn feature(&self, key: &str) -> Option<&Feature> {
        self.features.get(key)
    }

    /// Whether the device advertises `key` at all.
    pub fn supports(&self, key: &str) -> bool {
        self.features.contains_key(key)
    }

    /// Like [`feature`](Self::feature), but absence is a `MissingCapability` error.
    pub fn require(&self, key: &str) -> Result<&Feature> {
        self.features
            .get(key)
            .ok_or_else(|| ScanwerkError::MissingCapability(key.to_string()))
    }

    /// Upper bound of a required range feature.
    pub fn require_max(&self, key: &str) -> Result<Value> {
        self.require(key)?
            .max_limit()
            .cloned()
            .ok_or_else(|| ScanwerkError::MissingCapability(format!("{key} limits")))
    }

    /// Default value of a required feature.
    pub fn require_default(&self, key: &str) -> Result<Value> {
        self.require(key)?
            .default
            .clone()
            .ok_or_else(|| ScanwerkError::MissingCapability(format!("{key} default")))
    }
}
