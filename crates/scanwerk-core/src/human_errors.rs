// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for people filling in a scan form.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Severity drives how a front end presents it.

use crate::error::ScanwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix it by changing what they asked for.
    ActionRequired,
    /// The scanner or installation needs attention; retrying won't help.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `ScanwerkError` into a `HumanError`.
pub fn humanize_error(err: &ScanwerkError) -> HumanError {
    match err {
        ScanwerkError::DeviceResolution { device, .. } => HumanError {
            message: format!("We couldn't find the scanner \"{device}\"."),
            suggestion: "Check that the scanner is switched on and connected, then pick it again from the list.".into(),
            severity: Severity::ActionRequired,
        },

        ScanwerkError::MissingCapability(feature) => HumanError {
            message: "This scanner didn't tell us what it can do.".into(),
            suggestion: format!(
                "The scanner driver is missing the {feature} setting. Try a different scanner or reinstall its driver."
            ),
            severity: Severity::Permanent,
        },

        ScanwerkError::InvalidInput(detail) => HumanError {
            message: "Some of the scan settings don't make sense.".into(),
            suggestion: format!("Check the settings and try again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        ScanwerkError::Config(_) => HumanError {
            message: "The scanning settings file is damaged.".into(),
            suggestion: "Fix or delete the configuration file to go back to the defaults.".into(),
            severity: Severity::Permanent,
        },

        ScanwerkError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "A file we need is missing.".into(),
                suggestion: "Check the paths given on the command line.".into(),
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "We're not allowed to read a file we need.".into(),
                suggestion: "Check the file permissions, then try again.".into(),
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "Something went wrong reading from disk.".into(),
                suggestion: format!("Try again. ({io_err})"),
                severity: Severity::Permanent,
            },
        },

        ScanwerkError::Serialization(_) => HumanError {
            message: "We couldn't read the scan settings.".into(),
            suggestion: "The settings must be a JSON object, for example {\"device\": \"epson2:libusb:001:004\"}.".into(),
            severity: Severity::ActionRequired,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_device_names_the_device() {
        let err = ScanwerkError::unresolved("plustek:libusb:002:003", "not found");
        let human = humanize_error(&err);
        assert!(human.message.contains("plustek:libusb:002:003"));
        assert_eq!(human.severity, Severity::ActionRequired);
    }

    #[test]
    fn missing_capability_is_permanent() {
        let human = humanize_error(&ScanwerkError::MissingCapability("--mode".into()));
        assert_eq!(human.severity, Severity::Permanent);
        assert!(human.suggestion.contains("--mode"));
    }

    #[test]
    fn missing_file_is_actionable() {
        let err = ScanwerkError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(humanize_error(&err).severity, Severity::ActionRequired);
    }
}
