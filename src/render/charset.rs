//! Static glyph tables for the geometry renderers.
//!
//! A charset is a renderer: picking `ASCII` or `UNICODE` is the only thing
//! that distinguishes the two geometry paths. Rows are indexed by
//! [`Direction`] bucket (horizontal, diagonal-up, vertical, diagonal-down).

use crate::geom::Direction;
use crate::types::BondOrder;

/// Glyphs for one renderer, keyed by direction bucket and bond order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    pub name: &'static str,
    single: [char; 4],
    double: [char; 4],
    triple: [char; 4],
    /// Alternate row for aromatic bonds; `None` falls back to the order row.
    aromatic: Option<[char; 4]>,
}

impl Charset {
    /// Select the glyph for one bond. The aromatic flag may swap the row,
    /// never the bucket.
    pub fn bond_glyph(&self, dir: Direction, order: BondOrder, aromatic: bool) -> char {
        let i = dir.index();
        if aromatic {
            if let Some(row) = self.aromatic {
                return row[i];
            }
        }
        match order {
            BondOrder::Single => self.single[i],
            BondOrder::Double => self.double[i],
            BondOrder::Triple => self.triple[i],
        }
    }
}

/// Plain-character set. ASCII has no doubled diagonal stroke, so diagonal
/// buckets keep the single stroke at higher orders.
pub const ASCII: Charset = Charset {
    name: "ascii",
    single: ['-', '/', '|', '\\'],
    double: ['=', '/', ':', '\\'],
    triple: ['#', '/', '#', '\\'],
    aromatic: None,
};

/// Box-drawing set. Aromatic bonds render dashed where the box set has a
/// dashed stroke; diagonals stay solid.
pub const UNICODE: Charset = Charset {
    name: "unicode",
    single: ['─', '╱', '│', '╲'],
    double: ['═', '╱', '║', '╲'],
    triple: ['≡', '╱', '┃', '╲'],
    aromatic: Some(['╌', '╱', '┆', '╲']),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_glyphs_fixed() {
        assert_eq!(
            ASCII.bond_glyph(Direction::Horizontal, BondOrder::Single, false),
            '-'
        );
        assert_eq!(
            ASCII.bond_glyph(Direction::Vertical, BondOrder::Single, false),
            '|'
        );
        assert_eq!(
            ASCII.bond_glyph(Direction::DiagonalUp, BondOrder::Single, false),
            '/'
        );
        assert_eq!(
            ASCII.bond_glyph(Direction::DiagonalDown, BondOrder::Single, false),
            '\\'
        );
        assert_eq!(
            ASCII.bond_glyph(Direction::Horizontal, BondOrder::Double, false),
            '='
        );
        assert_eq!(
            ASCII.bond_glyph(Direction::Horizontal, BondOrder::Triple, false),
            '#'
        );
    }

    #[test]
    fn test_unicode_glyphs_fixed() {
        assert_eq!(
            UNICODE.bond_glyph(Direction::Horizontal, BondOrder::Single, false),
            '─'
        );
        assert_eq!(
            UNICODE.bond_glyph(Direction::Vertical, BondOrder::Single, false),
            '│'
        );
        assert_eq!(
            UNICODE.bond_glyph(Direction::Horizontal, BondOrder::Double, false),
            '═'
        );
        assert_eq!(
            UNICODE.bond_glyph(Direction::Vertical, BondOrder::Double, false),
            '║'
        );
        assert_eq!(
            UNICODE.bond_glyph(Direction::Horizontal, BondOrder::Triple, false),
            '≡'
        );
    }

    #[test]
    fn test_aromatic_swaps_row_not_bucket() {
        // Unicode has an aromatic row.
        assert_eq!(
            UNICODE.bond_glyph(Direction::Horizontal, BondOrder::Single, true),
            '╌'
        );
        assert_eq!(
            UNICODE.bond_glyph(Direction::Vertical, BondOrder::Double, true),
            '┆'
        );
        // ASCII has none and falls back to the order glyph.
        assert_eq!(
            ASCII.bond_glyph(Direction::Horizontal, BondOrder::Single, true),
            '-'
        );
        assert_eq!(
            ASCII.bond_glyph(Direction::Horizontal, BondOrder::Double, true),
            '='
        );
    }
}
