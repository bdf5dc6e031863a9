//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose tag coloring and core bootstrap to Dart via FRB.
//! - Resolve the active palette once per process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A broken palette manifest falls back to the built-in palette.

use log::warn;
use moodlog_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    display_label, init_logging as init_logging_inner, ping as ping_inner, Colorizer, HashUnit,
    Palette, PaletteError, PaletteManifest, TagChip,
};
use std::sync::OnceLock;

const PALETTE_PATH_ENV: &str = "MOODLOG_PALETTE_PATH";
static ACTIVE_COLORIZER: OnceLock<Colorizer> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Suggested log level for the current build (`debug` or `info`).
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Tag chip render data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChipView {
    /// Raw tag label as stored.
    pub label: String,
    /// Label with underscores shown as spaces.
    pub display_name: String,
    /// `#RRGGBB` or `#RRGGBBAA` color string.
    pub color: String,
    /// Palette index backing `color`.
    pub palette_index: u32,
}

impl From<TagChip> for TagChipView {
    fn from(value: TagChip) -> Self {
        Self {
            label: value.label,
            display_name: value.display,
            color: value.color,
            palette_index: value.index as u32,
        }
    }
}

/// Describes the palette tag colors are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteInfo {
    pub version: String,
    pub colors: Vec<String>,
}

/// Color for one tag label.
///
/// # FFI contract
/// - Sync call, pure after first palette resolution.
/// - Total: every label, including empty, returns a palette color.
#[flutter_rust_bridge::frb(sync)]
pub fn tag_color(label: String) -> String {
    active_colorizer().color_for(&label).to_owned()
}

/// Display form of a tag label (`low_energy` -> `low energy`).
#[flutter_rust_bridge::frb(sync)]
pub fn tag_display_name(label: String) -> String {
    display_label(&label)
}

/// Everything a tag chip widget needs for one label.
#[flutter_rust_bridge::frb(sync)]
pub fn tag_chip(label: String) -> TagChipView {
    active_colorizer().chip_for(&label).into()
}

/// Active palette version and colors in index order.
#[flutter_rust_bridge::frb(sync)]
pub fn palette_info() -> PaletteInfo {
    let palette = active_colorizer().palette();
    PaletteInfo {
        version: palette.version().to_string(),
        colors: palette.colors().to_vec(),
    }
}

fn active_colorizer() -> &'static Colorizer {
    ACTIVE_COLORIZER.get_or_init(|| {
        let configured = std::env::var(PALETTE_PATH_ENV).ok();
        Colorizer::new(resolve_palette(configured.as_deref()), HashUnit::CodePoint)
    })
}

fn resolve_palette(configured_path: Option<&str>) -> Palette {
    let Some(path) = configured_path.map(str::trim).filter(|path| !path.is_empty()) else {
        return Palette::default();
    };

    match load_palette(path) {
        Ok(palette) => palette,
        Err(err) => {
            warn!(
                "event=palette_resolve module=ffi status=fallback path={} error={}",
                path, err
            );
            Palette::default()
        }
    }
}

fn load_palette(path: &str) -> Result<Palette, PaletteError> {
    PaletteManifest::load(path)?.into_palette()
}
