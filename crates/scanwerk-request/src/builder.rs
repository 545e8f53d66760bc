// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request assembly: resolve device → defaults → merge → output path → prune.
//
// Each step takes its input by value and returns a new one; nothing is
// mutated after it has been handed on.

use serde_json::{Map, Value};
use tracing::debug;

use scanwerk_core::AppConfig;
use scanwerk_core::error::{Result, ScanwerkError};
use scanwerk_device::{CapabilityProvider, DeviceCapabilities, features};

use crate::clock::{Clock, SystemClock};
use crate::defaults::ScanDefaults;
use crate::request::ScanRequest;

/// Optional request fields and the device feature each one depends on.
const OPTIONAL_FEATURES: [(&str, &str); 3] = [
    ("brightness", features::BRIGHTNESS),
    ("contrast", features::CONTRAST),
    ("dynamicLineart", features::DYNAMIC_LINEART),
];

/// Turns caller input into a [`ScanRequest`].
pub struct RequestBuilder<P, C = SystemClock> {
    provider: P,
    config: AppConfig,
    clock: C,
}

impl<P: CapabilityProvider> RequestBuilder<P> {
    pub fn new(provider: P, config: AppConfig) -> Self {
        Self {
            provider,
            config,
            clock: SystemClock,
        }
    }
}

impl<P: CapabilityProvider, C: Clock> RequestBuilder<P, C> {
    /// Replace the time source used for generated file names.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> RequestBuilder<P, C2> {
        RequestBuilder {
            provider: self.provider,
            config: self.config,
            clock,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build a request from a JSON object of caller overrides.
    ///
    /// Fails with `DeviceResolution` when a named device can't be resolved,
    /// `MissingCapability` when the device lacks geometry, resolution or mode,
    /// and `InvalidInput` when the input isn't a JSON object at all. Field
    /// values are never judged here: the result is complete but not yet
    /// validated.
    pub fn build(&self, input: Value) -> Result<ScanRequest> {
        let Value::Object(input) = input else {
            return Err(ScanwerkError::InvalidInput(
                "scan input must be a JSON object".into(),
            ));
        };

        let caps = self.resolve_device(&input)?;
        let defaults = ScanDefaults::create(&caps)?;
        let merged = merge(defaults, input)?;
        let merged = self.with_output_path(merged);
        let pruned = prune(merged, &caps);

        let request: ScanRequest = serde_json::from_value(Value::Object(pruned))
            .map_err(|e| ScanwerkError::InvalidInput(e.to_string()))?;

        debug!(request = ?request, "scan request assembled");
        Ok(request)
    }

    fn resolve_device(&self, input: &Map<String, Value>) -> Result<DeviceCapabilities> {
        match input.get("device") {
            Some(Value::String(id)) if !id.is_empty() => self.provider.resolve(id),
            None | Some(Value::Null) | Some(Value::String(_)) => {
                debug!("no device named, using fallback capabilities");
                self.provider.fallback()
            }
            Some(other) => Err(ScanwerkError::unresolved(
                other.to_string(),
                "device id must be a string",
            )),
        }
    }

    /// Add `outputFilepath` when the caller didn't supply one.
    fn with_output_path(&self, mut request: Map<String, Value>) -> Map<String, Value> {
        if request.contains_key("outputFilepath") {
            return request;
        }
        let extension = match request.get("convertFormat") {
            Some(Value::String(ext)) => ext.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        let file_name = format!("scan_{}.{extension}", self.clock.timestamp());
        let path = self.config.output_directory.join(file_name);
        request.insert(
            "outputFilepath".into(),
            Value::String(path.to_string_lossy().into_owned()),
        );
        request
    }
}

/// Shallow merge: every input key replaces the default wholesale.
fn merge(defaults: ScanDefaults, input: Map<String, Value>) -> Result<Map<String, Value>> {
    let Value::Object(mut merged) = serde_json::to_value(defaults)? else {
        return Err(ScanwerkError::InvalidInput(
            "defaults did not serialize to an object".into(),
        ));
    };
    merged.extend(input);
    Ok(merged)
}

/// Drop optional fields whose feature the device doesn't advertise.
///
/// Runs after the merge, so caller-supplied values are dropped too. Any other
/// key, known or not, is kept.
fn prune(request: Map<String, Value>, caps: &DeviceCapabilities) -> Map<String, Value> {
    request
        .into_iter()
        .filter(|(key, _)| {
            let keep = OPTIONAL_FEATURES
                .iter()
                .find(|(field, _)| *field == key.as_str())
                .is_none_or(|(_, feature)| caps.supports(feature));
            if !keep {
                debug!(field = %key, device = %caps.id, "pruned unsupported option");
            }
            keep
        })
        .collect()
}
