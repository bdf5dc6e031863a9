//! Core logic for the moodlog journaling app.
//! Flutter screens call into this crate through `moodlog_ffi`.

pub mod colorize;
pub mod display;
pub mod logging;
pub mod palette;
pub mod state;

pub use colorize::{index_for_hash, label_hash, label_hash_with, Colorizer, HashUnit};
pub use display::{display_label, TagChip};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use palette::manifest::PaletteManifest;
pub use palette::{Palette, PaletteError, DEFAULT_PALETTE_COLORS, DEFAULT_PALETTE_VERSION};
pub use state::{MenuItem, MenuState, ModalState, SessionError, SessionState};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
