//! Image-density renderer ("magic"): downsample a depiction image into a
//! luminance-ramp character grid.
//!
//! Independent of the geometry path; the provider renders the molecule to a
//! raster image upstream and this module only maps pixels to glyph density.

use image::DynamicImage;
use log::debug;

use crate::types::{CHAR_ASPECT, DEFAULT_MAGIC_COLUMNS};

/// Luminance ramp ordered dark -> light. Monotonicity is the contract; the
/// exact glyphs are tuned for white-background depictions.
const RAMP: [char; 10] = ['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Fixed contrast curve applied to mean tile luminance. Pushes mid tones
/// darker so thin bond ink survives downsampling against a white background.
const GAMMA: f64 = 1.5;

/// Converts a grayscale-convertible raster into text, `columns` cells wide.
#[derive(Debug, Clone, Copy)]
pub struct MagicRenderer {
    columns: u16,
}

impl Default for MagicRenderer {
    fn default() -> Self {
        Self {
            columns: DEFAULT_MAGIC_COLUMNS,
        }
    }
}

impl MagicRenderer {
    pub fn new(columns: u16) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Render an image as character density art.
    ///
    /// The row count follows the image aspect ratio corrected by
    /// [`CHAR_ASPECT`]. Images narrower than the column count are sampled
    /// repeatedly (pixel duplication) rather than rejected; a zero-sized
    /// image yields the empty string.
    pub fn render(&self, image: &DynamicImage) -> String {
        let gray = image.to_luma8();
        let (w, h) = gray.dimensions();
        if w == 0 || h == 0 {
            return String::new();
        }

        let cols = self.columns as u32;
        let rows = ((cols as f64) * (h as f64 / w as f64) * CHAR_ASPECT)
            .round()
            .max(1.0) as u32;
        debug!("magic: {}x{} px -> {}x{} cells", w, h, cols, rows);

        let mut out = String::with_capacity((cols as usize + 1) * rows as usize);
        for r in 0..rows {
            if r > 0 {
                out.push('\n');
            }
            // Near-uniform tiles via integer boundaries; every tile covers
            // at least one pixel.
            let y0 = ((r as u64 * h as u64) / rows as u64) as u32;
            let y0 = y0.min(h - 1);
            let y1 = ((((r + 1) as u64 * h as u64) / rows as u64) as u32).clamp(y0 + 1, h);
            for c in 0..cols {
                let x0 = ((c as u64 * w as u64) / cols as u64) as u32;
                let x0 = x0.min(w - 1);
                let x1 = ((((c + 1) as u64 * w as u64) / cols as u64) as u32).clamp(x0 + 1, w);

                let mut sum: u64 = 0;
                for y in y0..y1 {
                    for x in x0..x1 {
                        sum += u64::from(gray.get_pixel(x, y).0[0]);
                    }
                }
                let count = u64::from(x1 - x0) * u64::from(y1 - y0);
                let luminance = sum as f64 / count as f64 / 255.0;
                out.push(glyph_for(luminance));
            }
        }
        out
    }
}

/// Map a mean luminance in [0, 1] to a ramp glyph. Monotonic: darker tiles
/// never get a lighter glyph than brighter tiles.
fn glyph_for(luminance: f64) -> char {
    let l = luminance.clamp(0.0, 1.0).powf(GAMMA);
    let idx = (l * (RAMP.len() - 1) as f64).round() as usize;
    RAMP[idx.min(RAMP.len() - 1)]
}

/// Render a depiction image `columns` cells wide.
pub fn render_magic(image: &DynamicImage, columns: u16) -> String {
    MagicRenderer::new(columns).render(image)
}
