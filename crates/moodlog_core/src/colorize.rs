//! Deterministic tag label colorizer.
//!
//! # Responsibility
//! - Map an arbitrary tag label to one palette entry.
//! - Keep the mapping stable across runs, devices and host languages.
//!
//! # Invariants
//! - The hash is `acc = acc * 31 + unit` folded with 32-bit wrapping
//!   arithmetic, starting from `0`.
//! - The empty label hashes to `0` and resolves to palette index `0`.
//! - Negative hashes use their unsigned magnitude, so `i32::MIN` maps to
//!   `2^31 mod N`.
//! - Colors are chosen from the raw label; display formatting happens after.

use crate::display::{display_label, TagChip};
use crate::palette::Palette;

/// Unit a label is folded over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashUnit {
    /// Unicode scalar values.
    #[default]
    CodePoint,
    /// UTF-16 code units; astral characters contribute both surrogates.
    Utf16CodeUnit,
}

/// Hashes a label over its Unicode code points.
pub fn label_hash(label: &str) -> i32 {
    label_hash_with(label, HashUnit::CodePoint)
}

/// Hashes a label over the requested unit.
pub fn label_hash_with(label: &str, unit: HashUnit) -> i32 {
    match unit {
        HashUnit::CodePoint => fold_units(label.chars().map(u32::from)),
        HashUnit::Utf16CodeUnit => fold_units(label.encode_utf16().map(u32::from)),
    }
}

fn fold_units(units: impl Iterator<Item = u32>) -> i32 {
    units.fold(0i32, |acc, unit| {
        // (acc << 5) - acc == acc * 31
        (unit as i32).wrapping_add(acc.wrapping_shl(5).wrapping_sub(acc))
    })
}

/// Reduces a hash to an index in `[0, len)`.
///
/// `len` must be non-zero; a `Palette` guarantees this.
pub fn index_for_hash(hash: i32, len: usize) -> usize {
    debug_assert!(len > 0, "palette length must be non-zero");
    hash.unsigned_abs() as usize % len
}

impl Palette {
    /// Index of the color assigned to `label`.
    pub fn index_for(&self, label: &str) -> usize {
        index_for_hash(label_hash(label), self.len())
    }

    /// Color assigned to `label`.
    pub fn color_for(&self, label: &str) -> &str {
        &self.colors()[self.index_for(label)]
    }
}

/// Palette paired with the hash unit used to resolve labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Colorizer {
    palette: Palette,
    unit: HashUnit,
}

impl Colorizer {
    pub fn new(palette: Palette, unit: HashUnit) -> Self {
        Self { palette, unit }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn unit(&self) -> HashUnit {
        self.unit
    }

    pub fn index_for(&self, label: &str) -> usize {
        index_for_hash(label_hash_with(label, self.unit), self.palette.len())
    }

    pub fn color_for(&self, label: &str) -> &str {
        &self.palette.colors()[self.index_for(label)]
    }

    /// Builds the display record for one tag chip.
    pub fn chip_for(&self, label: &str) -> TagChip {
        let index = self.index_for(label);
        TagChip {
            label: label.to_string(),
            display: display_label(label),
            color: self.palette.colors()[index].clone(),
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{fold_units, index_for_hash, label_hash, label_hash_with, HashUnit};

    fn reference_hash(units: &[u32]) -> i32 {
        let mut acc: i64 = 0;
        for unit in units {
            acc = (acc * 31 + i64::from(*unit)).rem_euclid(1 << 32);
        }
        acc as u32 as i32
    }

    #[test]
    fn empty_label_hashes_to_zero() {
        assert_eq!(label_hash(""), 0);
        assert_eq!(label_hash_with("", HashUnit::Utf16CodeUnit), 0);
    }

    #[test]
    fn red_matches_hand_computed_value() {
        // 114 -> 114 * 31 + 101 = 3635 -> 3635 * 31 + 100 = 112785
        assert_eq!(label_hash("red"), 112_785);
    }

    #[test]
    fn wraps_like_modular_multiply_add() {
        let label = "a fairly long journaling tag that overflows 32 bits";
        let units: Vec<u32> = label.chars().map(u32::from).collect();
        assert_eq!(label_hash(label), reference_hash(&units));
    }

    #[test]
    fn non_ascii_uses_code_points_not_bytes() {
        // 'é' is U+00E9; its UTF-8 bytes would give a different fold.
        assert_eq!(label_hash("é"), 0xE9);
        assert_eq!(fold_units("é".bytes().map(u32::from)), 0xC3 * 31 + 0xA9);
    }

    #[test]
    fn utf16_and_code_point_differ_only_outside_bmp() {
        assert_eq!(
            label_hash_with("café_calm", HashUnit::CodePoint),
            label_hash_with("café_calm", HashUnit::Utf16CodeUnit)
        );

        // U+1F600 is the surrogate pair D83D DE00 in UTF-16.
        assert_eq!(label_hash_with("😀", HashUnit::CodePoint), 0x1F600);
        assert_eq!(
            label_hash_with("😀", HashUnit::Utf16CodeUnit),
            reference_hash(&[0xD83D, 0xDE00])
        );
    }

    #[test]
    fn minimum_hash_uses_unsigned_magnitude() {
        assert_eq!(index_for_hash(i32::MIN, 8), 0);
        assert_eq!(index_for_hash(i32::MIN, 7), 2);
        assert_eq!(index_for_hash(-10, 4), 2);
        assert_eq!(index_for_hash(10, 4), 2);
    }
}
