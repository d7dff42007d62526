//! Geometry renderers: positioned molecule -> character canvas -> text.
//!
//! This module is pure (no I/O). A render call computes one [`Transform`],
//! rasterizes every bond onto a fresh [`Canvas`], writes atom labels over
//! the bond ends, and serializes. Bonds go down first so labels always win.

pub mod charset;

use arrayvec::ArrayVec;
use log::debug;

use crate::canvas::Canvas;
use crate::geom::{line_cells, Direction, Transform};
use crate::render::charset::Charset;
use crate::types::{BondOrder, Molecule};

/// The cells written by rasterizing one bond; transient, consumed by the
/// canvas immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRun {
    pub glyph: char,
    pub cells: Vec<(u16, u16)>,
}

/// Rasterize one bond between two canvas cells.
pub fn rasterize_bond(
    charset: &Charset,
    a: (u16, u16),
    b: (u16, u16),
    order: BondOrder,
    aromatic: bool,
) -> GlyphRun {
    let dir = Direction::of(a, b);
    GlyphRun {
        glyph: charset.bond_glyph(dir, order, aromatic),
        cells: line_cells(a, b),
    }
}

/// Cells for one element label, written left-to-right from the atom's cell.
/// A second column past the right edge is dropped, never wrapped.
pub fn label_cells(symbol: &str, cell: (u16, u16), width: u16) -> ArrayVec<(u16, u16, char), 2> {
    let mut out = ArrayVec::new();
    for (i, ch) in symbol.chars().take(2).enumerate() {
        let x = cell.0 as u32 + i as u32;
        if x >= width as u32 {
            break;
        }
        out.push((x as u16, cell.1, ch));
    }
    out
}

/// A geometry renderer: a charset plus canvas dimensions.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    charset: &'static Charset,
    width: u16,
    height: u16,
    padding: u16,
}

impl Renderer {
    /// Plain-character renderer.
    pub fn ascii(width: u16, height: u16, padding: u16) -> Self {
        Self {
            charset: &charset::ASCII,
            width,
            height,
            padding,
        }
    }

    /// Box-drawing renderer.
    pub fn unicode(width: u16, height: u16, padding: u16) -> Self {
        Self {
            charset: &charset::UNICODE,
            width,
            height,
            padding,
        }
    }

    /// Render a molecule. The empty molecule renders as the empty string,
    /// not a blank canvas.
    pub fn render(&self, mol: &Molecule) -> String {
        if mol.is_empty() {
            return String::new();
        }

        let positions: Vec<(f64, f64)> = mol.positions().collect();
        let tf = Transform::compute(&positions, self.width, self.height, self.padding);
        let cells: Vec<(u16, u16)> = positions.iter().map(|&(x, y)| tf.apply(x, y)).collect();

        let mut canvas = Canvas::new(tf.width(), tf.height());
        for bond in &mol.bonds {
            let run = rasterize_bond(
                self.charset,
                cells[bond.a],
                cells[bond.b],
                bond.order,
                bond.aromatic,
            );
            for &(x, y) in &run.cells {
                canvas.put_bond(x, y, run.glyph);
            }
        }
        for (atom, &cell) in mol.atoms.iter().zip(&cells) {
            for (x, y, ch) in label_cells(&atom.symbol, cell, canvas.width()) {
                canvas.put_atom(x, y, ch);
            }
        }

        debug!(
            "{}: rendered {} atoms / {} bonds on {}x{}",
            self.charset.name,
            mol.atom_count(),
            mol.bond_count(),
            canvas.width(),
            canvas.height()
        );
        canvas.to_text()
    }
}

/// Render with the plain-character set.
pub fn render_ascii(mol: &Molecule, width: u16, height: u16, padding: u16) -> String {
    Renderer::ascii(width, height, padding).render(mol)
}

/// Render with the box-drawing set.
pub fn render_unicode(mol: &Molecule, width: u16, height: u16, padding: u16) -> String {
    Renderer::unicode(width, height, padding).render(mol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Atom, Bond};

    #[test]
    fn test_label_cells_two_letter_symbol() {
        let cells = label_cells("Cl", (3, 2), 10);
        assert_eq!(cells.as_slice(), &[(3, 2, 'C'), (4, 2, 'l')]);
    }

    #[test]
    fn test_label_cells_truncates_at_right_edge() {
        let cells = label_cells("Cl", (9, 2), 10);
        assert_eq!(cells.as_slice(), &[(9, 2, 'C')]);
    }

    #[test]
    fn test_label_cells_off_canvas_start() {
        // The atom cell itself is clamped in bounds by the transform; this
        // guards the helper in isolation.
        let cells = label_cells("C", (10, 2), 10);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_rasterize_degenerate_bond_single_cell() {
        let run = rasterize_bond(
            &charset::ASCII,
            (4, 4),
            (4, 4),
            BondOrder::Single,
            false,
        );
        assert_eq!(run.cells, vec![(4, 4)]);
    }

    #[test]
    fn test_bond_endpoints_overwritten_by_labels() {
        let mol = Molecule::new(
            vec![Atom::new("C", 0.0, 0.0), Atom::new("C", 4.0, 0.0)],
            vec![Bond::new(0, 1, BondOrder::Single)],
        );
        let text = Renderer::ascii(20, 5, 1).render(&mol);
        // Both endpoints show the label, the run between them the bond.
        assert_eq!(text.matches('C').count(), 2);
        assert!(text.contains("C-"));
        assert!(text.contains("-C"));
    }
}
