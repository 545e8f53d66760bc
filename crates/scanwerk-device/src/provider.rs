// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capability providers: resolve a device id to what that device supports.
//
// Lookups are synchronous and never retried; a failure is reported as
// `ScanwerkError::DeviceResolution` straight away.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use scanwerk_core::error::{Result, ScanwerkError};

use crate::capabilities::DeviceCapabilities;

/// Source of device capability descriptions.
pub trait CapabilityProvider {
    /// Capabilities of the named device.
    fn resolve(&self, device_id: &str) -> Result<DeviceCapabilities>;

    /// Capabilities used when the caller names no device.
    ///
    /// Defaults to an empty set, which makes default-building fail with
    /// `MissingCapability`.
    fn fallback(&self) -> Result<DeviceCapabilities> {
        Ok(DeviceCapabilities::default())
    }
}

/// In-memory registry, mostly for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    devices: HashMap<String, DeviceCapabilities>,
    fallback: Option<String>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device under its own id.
    pub fn with_device(mut self, caps: DeviceCapabilities) -> Self {
        self.devices.insert(caps.id.clone(), caps);
        self
    }

    /// Use the registered device `id` when no device is named.
    pub fn with_fallback(mut self, id: impl Into<String>) -> Self {
        self.fallback = Some(id.into());
        self
    }
}

impl CapabilityProvider for StaticProvider {
    fn resolve(&self, device_id: &str) -> Result<DeviceCapabilities> {
        self.devices
            .get(device_id)
            .cloned()
            .ok_or_else(|| ScanwerkError::unresolved(device_id, "device not registered"))
    }

    fn fallback(&self) -> Result<DeviceCapabilities> {
        match &self.fallback {
            Some(id) => self.resolve(id),
            None => Ok(DeviceCapabilities::default()),
        }
    }
}

/// Loads device descriptions from a directory.
///
/// A device `ID` is described by `ID.json` (serialized [`DeviceCapabilities`])
/// or, failing that, `ID.txt` (captured `scanimage -A` output).
#[derive(Debug, Clone)]
pub struct DirectoryProvider {
    dir: PathBuf,
    fallback: Option<String>,
}

impl DirectoryProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fallback: None,
        }
    }

    /// Use device `id` from this directory when no device is named.
    pub fn with_fallback(mut self, id: impl Into<String>) -> Self {
        self.fallback = Some(id.into());
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Ids of all described devices, sorted.
    pub fn list_devices(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let is_description = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("json") | Some("txt")
            );
            if !is_description {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    fn load_json(&self, device_id: &str, path: &Path) -> Result<DeviceCapabilities> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| ScanwerkError::unresolved(device_id, e.to_string()))?;
        let mut caps: DeviceCapabilities = serde_json::from_str(&data).map_err(|e| {
            ScanwerkError::unresolved(device_id, format!("{}: {e}", path.display()))
        })?;
        if caps.id.is_empty() {
            caps.id = device_id.to_string();
        } else if caps.id != device_id {
            warn!(file_id = %caps.id, device = device_id, "description id differs from file name");
        }
        Ok(caps)
    }

    fn load_listing(&self, device_id: &str, path: &Path) -> Result<DeviceCapabilities> {
        let listing = std::fs::read_to_string(path)
            .map_err(|e| ScanwerkError::unresolved(device_id, e.to_string()))?;
        Ok(DeviceCapabilities::from_listing(device_id, &listing))
    }
}

impl CapabilityProvider for DirectoryProvider {
    fn resolve(&self, device_id: &str) -> Result<DeviceCapabilities> {
        if device_id.is_empty()
            || device_id.contains(['/', '\\'])
            || device_id.starts_with('.')
        {
            return Err(ScanwerkError::unresolved(device_id, "not a valid device id"));
        }

        let json = self.dir.join(format!("{device_id}.json"));
        let txt = self.dir.join(format!("{device_id}.txt"));

        let caps = if json.is_file() {
            self.load_json(device_id, &json)?
        } else if txt.is_file() {
            self.load_listing(device_id, &txt)?
        } else {
            debug!(device = device_id, dir = %self.dir.display(), "no description found");
            return Err(ScanwerkError::unresolved(
                device_id,
                format!("no description in {}", self.dir.display()),
            ));
        };

        info!(device = device_id, features = caps.features.len(), "device capabilities loaded");
        Ok(caps)
    }

    fn fallback(&self) -> Result<DeviceCapabilities> {
        match &self.fallback {
            Some(id) => self.resolve(id),
            None => Ok(DeviceCapabilities::default()),
        }
    }
}
