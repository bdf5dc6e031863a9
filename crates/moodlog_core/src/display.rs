//! Presentation helpers for tag chips.

use serde::{Deserialize, Serialize};

/// Human-facing form of a tag label (`low_energy` -> `low energy`).
pub fn display_label(label: &str) -> String {
    label.replace('_', " ")
}

/// Everything a tag chip needs to render one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagChip {
    /// Raw label; the source of the color assignment.
    pub label: String,
    /// Label with underscores shown as spaces.
    pub display: String,
    /// Palette color for `label`.
    pub color: String,
    /// Palette index for `label`.
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::display_label;

    #[test]
    fn replaces_every_underscore() {
        assert_eq!(display_label("low_energy"), "low energy");
        assert_eq!(display_label("__a_b__"), "  a b  ");
        assert_eq!(display_label(""), "");
    }
}
