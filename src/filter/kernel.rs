//! Sobel gradient magnitude.
//!
//! Convolves the fixed 3×3 kernel pair and writes
//! `min(255, floor(sqrt(gx² + gy²)))` for interior pixels only. Border rows
//! and columns have no full neighbourhood and are never written or read past.

use super::FilterError;
use super::partition::RowRange;
use crate::imaging::GrayImage;

type Kernel3 = [[i32; 3]; 3];

/// Horizontal derivative kernel.
pub const GX: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
/// Vertical derivative kernel.
pub const GY: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

#[inline]
fn magnitude(sum_x: i32, sum_y: i32) -> u8 {
    let m = ((sum_x * sum_x + sum_y * sum_y) as f64).sqrt() as u32;
    m.min(255) as u8
}

/// Convolve both kernels over the three rows around `col`.
///
/// Hot-loop twin of [`gradient_at`] working on pre-sliced rows.
#[inline]
fn convolve(rows: [&[u8]; 3], col: usize) -> u8 {
    let mut sum_x = 0;
    let mut sum_y = 0;
    for (ky, row) in rows.iter().enumerate() {
        for kx in 0..3 {
            let p = i32::from(row[col + kx - 1]);
            sum_x += p * GX[ky][kx];
            sum_y += p * GY[ky][kx];
        }
    }
    magnitude(sum_x, sum_y)
}

/// Gradient magnitude at one pixel, or `None` on the border / outside.
///
/// Reads every neighbour through [`GrayImage::get`], so a pixel whose 3×3
/// window leaves the raster has no gradient.
pub fn gradient_at(image: &GrayImage, row: usize, col: usize) -> Option<u8> {
    let top = row.checked_sub(1)?;
    let left = col.checked_sub(1)?;
    let mut sum_x = 0;
    let mut sum_y = 0;
    for ky in 0..3 {
        for kx in 0..3 {
            let p = i32::from(image.get(top + ky, left + kx)?);
            sum_x += p * GX[ky][kx];
            sum_y += p * GY[ky][kx];
        }
    }
    Some(magnitude(sum_x, sum_y))
}

/// Filter the rows of `range` into `out_rows`.
///
/// `out_rows` holds exactly the rows of `range` (`range.len() * width` bytes),
/// with the first byte belonging to `(range.start, 0)`. Rows 0 and
/// `height - 1` inside the range are skipped here, whatever the caller's
/// partitioning, as are columns 0 and `width - 1`.
pub fn apply_rows(
    image: &GrayImage,
    out_rows: &mut [u8],
    range: RowRange,
) -> Result<(), FilterError> {
    let (w, h) = (image.width(), image.height());
    if range.end > h || out_rows.len() != range.len() * w {
        return Err(FilterError::RowRange {
            start: range.start,
            end: range.end,
            len: out_rows.len(),
            width: w,
            height: h,
        });
    }
    if w < 3 || h < 3 || range.is_empty() {
        return Ok(());
    }

    let first = range.start.max(1);
    let last = range.end.min(h - 1);
    for row in first..last {
        let rows = [image.row(row - 1), image.row(row), image.row(row + 1)];
        let local = (row - range.start) * w;
        let out = &mut out_rows[local..local + w];
        for (col, px) in out.iter_mut().enumerate().take(w - 1).skip(1) {
            *px = convolve(rows, col);
        }
    }
    Ok(())
}
