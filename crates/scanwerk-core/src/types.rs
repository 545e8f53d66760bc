// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for scan requests.

use serde::{Deserialize, Serialize};

/// Format the scanner backend writes before any conversion.
pub const ACQUISITION_FORMAT: &str = "tiff";

/// Output container a finished scan is converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvertFormat {
    #[default]
    Tif,
    Jpg,
    Png,
    Pdf,
}

impl ConvertFormat {
    /// Every accepted output format, in display order.
    pub const ALL: [ConvertFormat; 4] = [Self::Tif, Self::Jpg, Self::Png, Self::Pdf];

    /// File extension, also the wire value of `convertFormat`.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Tif => "tif",
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }

    /// Exact match on the wire value. `"jpeg"` or `"TIF"` are not accepted.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }
}

impl std::fmt::Display for ConvertFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_is_exact() {
        assert_eq!(ConvertFormat::from_extension("png"), Some(ConvertFormat::Png));
        assert_eq!(ConvertFormat::from_extension("PNG"), None);
        assert_eq!(ConvertFormat::from_extension("bmp"), None);
        assert_eq!(ConvertFormat::from_extension("tiff"), None);
    }

    #[test]
    fn serde_uses_extension() {
        let json = serde_json::to_string(&ConvertFormat::Pdf).expect("serialize");
        assert_eq!(json, "\"pdf\"");
    }
}
