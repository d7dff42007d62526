//! Bond-line rasterization: angle buckets and digital line enumeration.

use std::f64::consts::PI;

/// On-canvas orientation of a bond line, bucketed into the four directions a
/// character cell can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    /// Rising left to right ("/")
    DiagonalUp,
    Vertical,
    /// Falling left to right ("\")
    DiagonalDown,
}

impl Direction {
    /// Classify the undirected line through two canvas cells.
    ///
    /// Canvas rows grow downward, so the row delta is negated to measure the
    /// angle in the orientation the viewer sees. A->B and B->A classify
    /// identically (the angle is folded into `[0, pi)`).
    pub fn of(a: (u16, u16), b: (u16, u16)) -> Self {
        let dx = b.0 as f64 - a.0 as f64;
        let dy = a.1 as f64 - b.1 as f64;
        let mut angle = dy.atan2(dx);
        if angle < 0.0 {
            angle += PI;
        }
        if angle >= PI {
            angle -= PI;
        }

        // Symmetric pi/8 windows: no gaps, no overlaps.
        const STEP: f64 = PI / 8.0;
        if angle < STEP || angle >= 7.0 * STEP {
            Direction::Horizontal
        } else if angle < 3.0 * STEP {
            Direction::DiagonalUp
        } else if angle < 5.0 * STEP {
            Direction::Vertical
        } else {
            Direction::DiagonalDown
        }
    }

    /// Row index into a charset glyph table.
    pub fn index(&self) -> usize {
        match self {
            Direction::Horizontal => 0,
            Direction::DiagonalUp => 1,
            Direction::Vertical => 2,
            Direction::DiagonalDown => 3,
        }
    }
}

/// Enumerate every cell on the straight path between two cells, endpoints
/// included.
///
/// The endpoint order is canonicalized before walking, so both traversal
/// directions yield the same cell set. Coincident endpoints yield a
/// single-cell run.
pub fn line_cells(a: (u16, u16), b: (u16, u16)) -> Vec<(u16, u16)> {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };

    let (mut x0, mut y0) = (start.0 as i32, start.1 as i32);
    let (x1, y1) = (end.0 as i32, end.1 as i32);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut cells = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        cells.push((x0 as u16, y0 as u16));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
    cells
}
