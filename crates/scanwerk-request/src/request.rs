// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The assembled scan request and its validation.
//
// Numeric fields are kept as raw JSON values: they come from form input, and
// the validator has to be able to report `width: 10.5` or `top: "abc"` rather
// than reject the whole request at parse time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use scanwerk_core::AppConfig;
use scanwerk_core::types::ConvertFormat;

/// Parameters for a single scan, ready to validate and run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    pub top: Value,
    pub left: Value,
    pub width: Value,
    pub height: Value,
    pub resolution: Value,
    /// `None` when the caller cleared it with `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Value>,
    /// Acquisition format written by the scanner backend.
    pub format: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<Value>,
    /// Output container; kept raw so unknown formats reach the validator.
    pub convert_format: Value,
    /// `true` by default; devices may advertise `yes`/`no` instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_lineart: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<Value>,
    pub output_filepath: Value,
    /// Caller-supplied keys with no dedicated field, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScanRequest {
    /// Parsed output format, if it is one of the accepted ones.
    pub fn output_format(&self) -> Option<ConvertFormat> {
        self.convert_format.as_str().and_then(ConvertFormat::from_extension)
    }

    /// Every problem with this request, in a stable order. Empty means valid.
    ///
    /// Never fails fast, so a form can show all problems at once. Resolution,
    /// mode against device limits, and `left + width` are not checked.
    pub fn validate(&self, config: &AppConfig) -> Vec<String> {
        let mut errors = Vec::new();

        if self.mode.is_none() {
            errors.push("Invalid mode: unset".to_string());
        }

        for (field, value) in [
            ("width", &self.width),
            ("height", &self.height),
            ("top", &self.top),
            ("left", &self.left),
        ] {
            check_integer(&mut errors, field, value);
        }

        // Pruned for devices without the feature; absent is fine.
        for (field, value) in [
            ("brightness", &self.brightness),
            ("contrast", &self.contrast),
            ("depth", &self.depth),
        ] {
            if let Some(value) = value {
                check_integer(&mut errors, field, value);
            }
        }

        if let (Some(top), Some(height)) = (self.top.as_f64(), self.height.as_f64()) {
            let max = f64::from(config.maximum_scan_height_mm);
            if top + height > max {
                errors.push(format!(
                    "Top + height exceed maximum dimensions ({} > {})",
                    top + height,
                    config.maximum_scan_height_mm
                ));
            }
        }

        if self.output_format().is_none() {
            errors.push(format!("Invalid format type: {}", describe(&self.convert_format)));
        }

        if errors.is_empty() {
            debug!(output = %self.output_filepath, "scan request valid");
        } else {
            warn!(problems = errors.len(), "scan request failed validation");
        }
        errors
    }
}

fn check_integer(errors: &mut Vec<String>, field: &str, value: &Value) {
    if !is_integer(value) {
        errors.push(format!("Invalid {field}: {}", describe(value)));
    }
}

/// Whole numbers, including whole-valued floats such as `5.0`.
fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64()
                || n.is_u64()
                || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
        }
        _ => false,
    }
}

/// Render a value for an error message; strings without quotes.
fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_request() -> ScanRequest {
        ScanRequest {
            device: Some("X".into()),
            top: json!(0),
            left: json!(0),
            width: json!(216),
            height: json!(297),
            resolution: json!(300),
            mode: Some(json!("Color")),
            format: json!("tiff"),
            brightness: None,
            contrast: None,
            convert_format: json!("tif"),
            dynamic_lineart: None,
            depth: None,
            output_filepath: json!("data/output/scan_2026-01-01 00.00.00.tif"),
            extra: Map::new(),
        }
    }

    #[test]
    fn valid_request_has_no_errors() {
        assert!(valid_request().validate(&AppConfig::default()).is_empty());
    }

    #[test]
    fn fractional_width_reported_once() {
        let request = ScanRequest {
            width: json!(10.5),
            ..valid_request()
        };
        let errors = request.validate(&AppConfig::default());
        let width_errors: Vec<_> = errors.iter().filter(|e| e.contains("width")).collect();
        assert_eq!(width_errors.len(), 1);
        assert!(width_errors[0].contains("10.5"));
    }

    #[test]
    fn whole_float_counts_as_integer() {
        let request = ScanRequest {
            left: json!(5.0),
            ..valid_request()
        };
        assert!(request.validate(&AppConfig::default()).is_empty());
    }

    #[test]
    fn string_geometry_rejected() {
        let request = ScanRequest {
            top: json!("12"),
            ..valid_request()
        };
        let errors = request.validate(&AppConfig::default());
        assert_eq!(errors, vec!["Invalid top: 12".to_string()]);
    }

    #[test]
    fn unset_mode_rejected() {
        let request = ScanRequest {
            mode: None,
            ..valid_request()
        };
        let errors = request.validate(&AppConfig::default());
        assert!(errors.iter().any(|e| e.starts_with("Invalid mode")));
    }

    #[test]
    fn exceeding_maximum_height() {
        let config = AppConfig {
            maximum_scan_height_mm: 1000,
            ..Default::default()
        };
        let request = ScanRequest {
            top: json!(100),
            height: json!(5000),
            ..valid_request()
        };
        let errors = request.validate(&config);
        assert!(errors.iter().any(|e| e.contains("exceed maximum dimensions")));
    }

    #[test]
    fn height_exactly_at_maximum_is_allowed() {
        let config = AppConfig {
            maximum_scan_height_mm: 297,
            ..Default::default()
        };
        assert!(valid_request().validate(&config).is_empty());
    }

    #[test]
    fn left_plus_width_not_checked() {
        let request = ScanRequest {
            left: json!(500),
            width: json!(5000),
            ..valid_request()
        };
        assert!(request.validate(&AppConfig::default()).is_empty());
    }

    #[test]
    fn convert_format_must_be_known() {
        let bmp = ScanRequest {
            convert_format: json!("bmp"),
            ..valid_request()
        };
        let errors = bmp.validate(&AppConfig::default());
        assert!(errors.iter().any(|e| e.starts_with("Invalid format type")));

        let png = ScanRequest {
            convert_format: json!("png"),
            ..valid_request()
        };
        assert!(png.validate(&AppConfig::default()).is_empty());
    }

    #[test]
    fn optional_fields_checked_when_present() {
        let request = ScanRequest {
            brightness: Some(json!("bright")),
            contrast: Some(json!(10)),
            depth: Some(json!(8.5)),
            ..valid_request()
        };
        let errors = request.validate(&AppConfig::default());
        assert_eq!(
            errors,
            vec![
                "Invalid brightness: bright".to_string(),
                "Invalid depth: 8.5".to_string(),
            ]
        );
    }

    #[test]
    fn all_problems_collected_in_order() {
        let request = ScanRequest {
            mode: None,
            width: json!(1.5),
            height: json!(null),
            convert_format: json!("gif"),
            ..valid_request()
        };
        let errors = request.validate(&AppConfig::default());
        assert_eq!(
            errors,
            vec![
                "Invalid mode: unset".to_string(),
                "Invalid width: 1.5".to_string(),
                "Invalid height: null".to_string(),
                "Invalid format type: gif".to_string(),
            ]
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let request = ScanRequest {
            width: json!(10.5),
            convert_format: json!("bmp"),
            ..valid_request()
        };
        let config = AppConfig::default();
        assert_eq!(request.validate(&config), request.validate(&config));
    }

    #[test]
    fn extra_keys_round_trip_through_serde() {
        let value = json!({
            "top": 0, "left": 0, "width": 216, "height": 297,
            "resolution": 300, "mode": "Color", "format": "tiff",
            "convertFormat": "pdf", "outputFilepath": "out/scan.pdf",
            "batch": "manual"
        });
        let request: ScanRequest = serde_json::from_value(value).expect("deserialize");
        assert_eq!(request.extra.get("batch"), Some(&json!("manual")));
        assert_eq!(request.output_format(), Some(ConvertFormat::Pdf));
        assert_eq!(serde_json::to_value(&request).expect("serialize")["batch"], json!("manual"));
    }

    #[test]
    fn non_string_format_reported_not_rejected() {
        let request = ScanRequest {
            convert_format: json!(12),
            ..valid_request()
        };
        assert_eq!(
            request.validate(&AppConfig::default()),
            vec!["Invalid format type: 12".to_string()]
        );
    }
}
