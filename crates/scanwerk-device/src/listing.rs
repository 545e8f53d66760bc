// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Parser for `scanimage -A` option listings.
//
// Recognised option line shapes:
//
//     -x 0..215.9mm [215.9]
//     --mode Lineart|Gray|Color [Color]
//     --resolution 600|300|150dpi [150]
//     --brightness -100..100% (in steps of 1) [0]
//     --disable-dynamic-lineart[=(yes|no)] [no]
//     --depth 8|16 [inactive]
//
// Option descriptions are indented further than option lines and are skipped.

use serde_json::Value;
use tracing::debug;

use crate::capabilities::{DeviceCapabilities, Feature};

/// Option lines are indented by four spaces; descriptions by eight.
const MAX_OPTION_INDENT: usize = 6;

impl DeviceCapabilities {
    /// Build capabilities from captured `scanimage -A` output.
    ///
    /// Lines that don't look like options are ignored, so the listing can be
    /// passed through verbatim including its header and group titles.
    pub fn from_listing(id: impl Into<String>, listing: &str) -> Self {
        let mut caps = DeviceCapabilities::new(id);
        for line in listing.lines() {
            if let Some((key, feature)) = parse_option_line(line) {
                caps.features.insert(key, feature);
            }
        }
        debug!(device = %caps.id, features = caps.features.len(), "parsed scanimage listing");
        caps
    }
}

/// Parse one option line into its key and feature.
fn parse_option_line(line: &str) -> Option<(String, Feature)> {
    let indent = line.len() - line.trim_start().len();
    let line = line.trim();
    if indent > MAX_OPTION_INDENT || !line.starts_with('-') || line.starts_with("--help") {
        return None;
    }
    // "-" followed by a digit is a negative number in a description, not an option.
    if !line[1..].starts_with(|c: char| c == '-' || c.is_ascii_alphabetic()) {
        return None;
    }

    let (rest, default) = split_default(line);
    let (name, mut spec) = match rest.split_once(char::is_whitespace) {
        Some((name, spec)) => (name, spec.trim()),
        None => (rest, ""),
    };

    // `--flag[=(yes|no)]` carries its allowed values in the name.
    let (name, inline_values) = match name.split_once("[=(") {
        Some((name, values)) => (name, values.strip_suffix(")]")),
        None => (name, None),
    };
    if let Some(values) = inline_values {
        spec = values;
    }

    let (spec, interval) = split_interval(spec);
    let limits = if let Some((min, max)) = spec.split_once("..") {
        vec![scalar(strip_unit(min)), scalar(strip_unit(max))]
    } else if spec.is_empty() {
        Vec::new()
    } else {
        spec.split('|').map(|v| scalar(strip_unit(v))).collect()
    };

    let default = default
        .filter(|d| *d != "inactive")
        .map(|d| scalar(strip_unit(d)));

    Some((
        name.to_string(),
        Feature {
            limits,
            interval,
            default,
        },
    ))
}

/// Split a trailing `[default]` off the line.
fn split_default(line: &str) -> (&str, Option<&str>) {
    if let Some(body) = line.strip_suffix(']') {
        if let Some(idx) = body.rfind(" [") {
            return (body[..idx].trim_end(), Some(&body[idx + 2..]));
        }
    }
    (line, None)
}

/// Split `(in steps of N)` off a range spec.
fn split_interval(spec: &str) -> (&str, Option<Value>) {
    match spec.split_once("(in steps of ") {
        Some((head, tail)) => {
            let step = tail.trim_end_matches(')').trim();
            (head.trim_end(), Some(scalar(step)))
        }
        None => (spec, None),
    }
}

/// Drop a unit suffix (`mm`, `dpi`, `%`, `us`) from a numeric token.
///
/// Non-numeric tokens such as `Color` are returned unchanged.
fn strip_unit(token: &str) -> &str {
    let token = token.trim();
    let stripped = token.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
    if stripped.parse::<f64>().is_ok() {
        stripped
    } else {
        token
    }
}

/// Integer if possible, then float, otherwise string.
fn scalar(token: &str) -> Value {
    if let Ok(n) = token.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(f) = token.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(token.to_string())
}
