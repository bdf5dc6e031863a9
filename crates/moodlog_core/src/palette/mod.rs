//! Tag color palettes.
//!
//! # Responsibility
//! - Own the closed, versioned list of colors a tag label can resolve to.
//! - Load palettes shipped as JSON manifests.
//!
//! # Invariants
//! - A palette always holds at least one color.
//! - Index `i` refers to the same color for the lifetime of a palette.
//! - Colors are stored as uppercase `#RRGGBB` / `#RRGGBBAA` strings.

pub mod manifest;

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$").expect("valid hex color regex")
});

/// Version of the built-in palette.
pub const DEFAULT_PALETTE_VERSION: &str = "1.0.0";

/// Built-in tag chip colors, in index order.
pub const DEFAULT_PALETTE_COLORS: &[&str] = &[
    "#F28B82", "#FBBC04", "#FFF475", "#CCFF90", "#A7FFEB", "#CBF0F8", "#AECBFA", "#D7AEFB",
    "#FDCFE8", "#E6C9A8",
];

/// Ordered, immutable set of tag colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    version: String,
    colors: Vec<String>,
}

impl Palette {
    /// Builds a palette after validating version and color entries.
    ///
    /// # Errors
    /// - Returns an error when `version` is not `major.minor.patch`.
    /// - Returns an error when `colors` is empty, holds a malformed hex color,
    ///   or repeats a color (case-insensitive).
    pub fn new<I, S>(version: &str, colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let version = version.trim();
        if version.is_empty() {
            return Err(PaletteError::EmptyVersion);
        }
        if !is_semver_triplet(version) {
            return Err(PaletteError::InvalidVersion(version.to_string()));
        }

        let mut dedup = BTreeSet::<String>::new();
        let mut normalized_colors = Vec::new();
        for (index, color) in colors.into_iter().enumerate() {
            let normalized = normalize_color(color.as_ref(), index)?;
            if !dedup.insert(normalized.clone()) {
                return Err(PaletteError::DuplicateColor(normalized));
            }
            normalized_colors.push(normalized);
        }

        if normalized_colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self {
            version: version.to_string(),
            colors: normalized_colors,
        })
    }

    /// Semantic version of this color list.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of colors. Never zero.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            version: DEFAULT_PALETTE_VERSION.to_string(),
            colors: DEFAULT_PALETTE_COLORS
                .iter()
                .map(|color| (*color).to_string())
                .collect(),
        }
    }
}

fn normalize_color(raw: &str, index: usize) -> Result<String, PaletteError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PaletteError::EmptyColor(index));
    }
    if !HEX_COLOR_RE.is_match(trimmed) {
        return Err(PaletteError::InvalidColor(trimmed.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

fn is_semver_triplet(value: &str) -> bool {
    let parts: Vec<&str> = value.split('.').collect();
    if parts.len() != 3 {
        return false;
    }
    parts
        .iter()
        .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}

/// Palette construction and loading errors.
#[derive(Debug)]
pub enum PaletteError {
    EmptyVersion,
    InvalidVersion(String),
    Empty,
    /// Blank entry at the given position.
    EmptyColor(usize),
    InvalidColor(String),
    DuplicateColor(String),
    /// Manifest file could not be read.
    Io(std::io::Error),
    /// Manifest text is not valid JSON for the manifest shape.
    Parse(serde_json::Error),
}

impl Display for PaletteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyVersion => write!(f, "palette version must not be empty"),
            Self::InvalidVersion(value) => write!(
                f,
                "palette version is invalid: {value} (expected major.minor.patch)"
            ),
            Self::Empty => write!(f, "palette must contain at least one color"),
            Self::EmptyColor(index) => write!(f, "palette color at index {index} is empty"),
            Self::InvalidColor(value) => write!(
                f,
                "palette color is invalid: {value} (expected #RRGGBB or #RRGGBBAA)"
            ),
            Self::DuplicateColor(value) => write!(f, "palette color is duplicated: {value}"),
            Self::Io(err) => write!(f, "failed to read palette manifest: {err}"),
            Self::Parse(err) => write!(f, "failed to parse palette manifest: {err}"),
        }
    }
}

impl Error for PaletteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PaletteError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PaletteError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Palette, PaletteError, DEFAULT_PALETTE_COLORS, DEFAULT_PALETTE_VERSION};

    #[test]
    fn default_palette_passes_own_validation() {
        let validated = Palette::new(DEFAULT_PALETTE_VERSION, DEFAULT_PALETTE_COLORS.iter())
            .expect("built-in palette should validate");
        assert_eq!(validated, Palette::default());
        assert_eq!(validated.len(), 10);
        assert!(!validated.is_empty());
    }

    #[test]
    fn new_trims_and_uppercases_colors() {
        let palette = Palette::new(" 2.1.0 ", [" #ff0000 ", "#00ff00aa"]).unwrap();
        assert_eq!(palette.version(), "2.1.0");
        assert_eq!(palette.colors(), ["#FF0000", "#00FF00AA"]);
        assert_eq!(palette.get(1), Some("#00FF00AA"));
        assert_eq!(palette.get(2), None);
    }

    #[test]
    fn rejects_empty_palette() {
        let err = Palette::new("1.0.0", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, PaletteError::Empty));
    }

    #[test]
    fn rejects_duplicate_colors_case_insensitively() {
        let err = Palette::new("1.0.0", ["#abcdef", "#ABCDEF"]).unwrap_err();
        assert!(matches!(err, PaletteError::DuplicateColor(ref value) if value == "#ABCDEF"));
    }

    #[test]
    fn rejects_malformed_entries() {
        let err = Palette::new("1.0.0", ["#12345"]).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidColor(_)));

        let err = Palette::new("1.0.0", ["#123456", "  "]).unwrap_err();
        assert!(matches!(err, PaletteError::EmptyColor(1)));

        let err = Palette::new("1.0.0", ["red"]).unwrap_err();
        assert!(err.to_string().contains("#RRGGBB"));
    }

    #[test]
    fn rejects_invalid_version_format() {
        let err = Palette::new("v1", ["#123456"]).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidVersion(_)));

        let err = Palette::new("", ["#123456"]).unwrap_err();
        assert!(matches!(err, PaletteError::EmptyVersion));
    }
}
