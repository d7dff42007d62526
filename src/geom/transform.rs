//! Molecule-space to canvas-space mapping.
//!
//! One `Transform` is computed per render call and applied to every atom and
//! bond endpoint, so bond lines terminate exactly at atom cells. Molecule
//! y grows upward, text rows grow downward; `apply` flips the row.

/// Uniform scale + offset from molecule coordinates into canvas cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scale: f64,
    min_x: f64,
    min_y: f64,
    /// Canvas-space offsets with padding and centering folded in.
    off_x: f64,
    off_y: f64,
    width: u16,
    height: u16,
}

impl Transform {
    /// Fit `positions` into a `width` x `height` canvas with a blank margin
    /// of `padding` cells.
    ///
    /// Padding that would leave no usable cell is clamped down instead of
    /// failing. Callers short-circuit the zero-atom case before building a
    /// transform.
    pub fn compute(positions: &[(f64, f64)], width: u16, height: u16, padding: u16) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let pad_x = padding.min((width - 1) / 2);
        let pad_y = padding.min((height - 1) / 2);
        let usable_w = (width - 2 * pad_x) as f64;
        let usable_h = (height - 2 * pad_y) as f64;

        let (min_x, min_y, max_x, max_y) = bounds(positions);
        let bbox_w = max_x - min_x;
        let bbox_h = max_y - min_y;

        // Uniform scale preserves angles, which the glyph buckets depend on.
        let scale = if bbox_w == 0.0 && bbox_h == 0.0 {
            1.0
        } else if bbox_w == 0.0 {
            usable_h / bbox_h
        } else if bbox_h == 0.0 {
            usable_w / bbox_w
        } else {
            (usable_w / bbox_w).min(usable_h / bbox_h)
        };

        // Center whatever slack the uniform scale leaves on each axis.
        let off_x = pad_x as f64 + (usable_w - bbox_w * scale) / 2.0;
        let off_y = pad_y as f64 + (usable_h - bbox_h * scale) / 2.0;

        Self {
            scale,
            min_x,
            min_y,
            off_x,
            off_y,
            width,
            height,
        }
    }

    /// Map a molecule-space position to a canvas cell.
    ///
    /// The row is flipped so larger molecule y lands nearer the top, and the
    /// result is clamped into bounds (rounding may spill one cell past the
    /// usable area).
    pub fn apply(&self, x: f64, y: f64) -> (u16, u16) {
        let cx = ((x - self.min_x) * self.scale + self.off_x).round() as i64;
        let cy = ((y - self.min_y) * self.scale + self.off_y).round() as i64;
        let col = cx.clamp(0, self.width as i64 - 1) as u16;
        let row_up = cy.clamp(0, self.height as i64 - 1) as u16;
        (col, self.height - 1 - row_up)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}

/// Bounding box (min_x, min_y, max_x, max_y) over all positions.
fn bounds(positions: &[(f64, f64)]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(x, y) in positions {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    if positions.is_empty() {
        (0.0, 0.0, 0.0, 0.0)
    } else {
        (min_x, min_y, max_x, max_y)
    }
}
