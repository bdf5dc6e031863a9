//! Palette manifest declaration and loading.
//!
//! A manifest is the JSON shape used to ship a palette as configuration:
//!
//! ```json
//! { "version": "1.0.0", "colors": ["#F28B82", "#FBBC04"] }
//! ```

use super::{Palette, PaletteError};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Declarative palette document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteManifest {
    /// Semantic version string (`major.minor.patch`).
    pub version: String,
    /// Colors in index order.
    pub colors: Vec<String>,
}

impl PaletteManifest {
    /// Parses a manifest from JSON text without validating colors.
    pub fn from_json_str(raw: &str) -> Result<Self, PaletteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    /// - Returns `PaletteError::Io` when the file cannot be read.
    /// - Returns `PaletteError::Parse` when the JSON shape does not match.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let manifest = Self::from_json_str(&raw)?;
        info!(
            "event=palette_manifest_load module=palette status=ok version={} colors={} path={}",
            manifest.version,
            manifest.colors.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Validates the declaration and turns it into a usable palette.
    pub fn into_palette(self) -> Result<Palette, PaletteError> {
        Palette::new(&self.version, self.colors)
    }
}

impl From<&Palette> for PaletteManifest {
    fn from(value: &Palette) -> Self {
        Self {
            version: value.version().to_string(),
            colors: value.colors().to_vec(),
        }
    }
}
