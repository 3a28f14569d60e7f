//! Grid recovery from a photographed or rasterized capture.
//!
//! The capture is partitioned one ring larger than the logical grid (20x20
//! against 18x18) so a slightly cropped border does not eat data cells; the
//! outer ring is discarded. Classification is a plain luminance heuristic,
//! not computer vision: within each cell the two diagonals accumulate
//! brightness, and the darker diagonal is taken to be the inked stroke.

use crate::error::{GlyphError, GlyphResult};
use crate::grid::{Mark, SigilGrid, GRID_SIZE};

/// Side length of the capture partition (one ring larger than the grid).
pub const CAPTURE_GRID_SIZE: usize = GRID_SIZE + 2;

/// Borrowed view over an RGBA pixel buffer.
///
/// Rows are packed top to bottom, 4 bytes per pixel; the alpha channel is
/// ignored. This is the shape image captures arrive in from the embedding
/// application.
#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> PixelView<'a> {
    /// Wrap a pixel buffer, checking it matches the declared dimensions.
    pub fn new(data: &'a [u8], width: usize, height: usize) -> GlyphResult<Self> {
        let expected = width * height * 4;
        if data.len() != expected {
            return Err(GlyphError::PixelBufferMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Mean RGB brightness of the pixel at `(x, y)`.
    fn brightness(&self, x: usize, y: usize) -> f64 {
        let i = (y * self.width + x) * 4;
        let r = self.data[i] as f64;
        let g = self.data[i + 1] as f64;
        let b = self.data[i + 2] as f64;
        (r + g + b) / 3.0
    }
}

/// Sample a sigil grid out of a captured image.
///
/// Partitions the image into [`CAPTURE_GRID_SIZE`]^2 cells, drops the outer
/// ring, and classifies each remaining cell by comparing accumulated
/// brightness along its two diagonals: a bright main diagonal means the
/// stroke runs the other way (`/`), and vice versa. Ties read `\`.
pub fn sample_grid(view: &PixelView<'_>) -> GlyphResult<SigilGrid> {
    if view.width() < CAPTURE_GRID_SIZE || view.height() < CAPTURE_GRID_SIZE {
        return Err(GlyphError::ImageTooSmall {
            width: view.width(),
            height: view.height(),
            min: CAPTURE_GRID_SIZE,
        });
    }

    let mut grid = SigilGrid::blank();

    for cap_row in 1..CAPTURE_GRID_SIZE - 1 {
        for cap_col in 1..CAPTURE_GRID_SIZE - 1 {
            let x0 = cap_col * view.width() / CAPTURE_GRID_SIZE;
            let x1 = (cap_col + 1) * view.width() / CAPTURE_GRID_SIZE;
            let y0 = cap_row * view.height() / CAPTURE_GRID_SIZE;
            let y1 = (cap_row + 1) * view.height() / CAPTURE_GRID_SIZE;
            let cell_width = x1 - x0;

            let mut main_diag = 0.0; // cells along `\`
            let mut anti_diag = 0.0; // cells along `/`

            for (py, y) in (y0..y1).enumerate() {
                for (px, x) in (x0..x1).enumerate() {
                    let brightness = view.brightness(x, y);
                    if px == py {
                        main_diag += brightness;
                    }
                    if px + py + 1 == cell_width {
                        anti_diag += brightness;
                    }
                }
            }

            let mark = if main_diag > anti_diag {
                Mark::Slash
            } else {
                Mark::Backslash
            };
            grid.set_mark(cap_row - 1, cap_col - 1, mark);
        }
    }

    Ok(grid)
}
