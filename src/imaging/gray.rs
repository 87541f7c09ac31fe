//! Owned single-channel 8-bit raster in row-major layout.
//!
//! This is the only pixel container the filter core understands. Codecs
//! produce it, the dispatcher consumes one and returns another of the same
//! dimensions.

use crate::filter::FilterError;

/// Decoded grayscale image: one byte of intensity per pixel, row-major.
///
/// The buffer length always equals `width * height`; both constructors
/// enforce this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImage {
    /// Wrap an existing pixel buffer, checking it matches the dimensions.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, FilterError> {
        let expected = pixel_count(width, height)?;
        if data.len() != expected {
            return Err(FilterError::BufferSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocate a zero-filled image.
    ///
    /// Allocation failure is reported instead of aborting the process.
    pub fn zeroed(width: usize, height: usize) -> Result<Self, FilterError> {
        let len = pixel_count(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| FilterError::Allocation { bytes: len })?;
        data.resize(len, 0);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Pixels per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total pixel count (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Linear offset of `(row, col)`, or `None` outside the raster.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Pixel value at `(row, col)`, or `None` outside the raster.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Borrow one full row.
    ///
    /// Panics if `row >= height`; callers iterate within bounds.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

fn pixel_count(width: usize, height: usize) -> Result<usize, FilterError> {
    width
        .checked_mul(height)
        .ok_or(FilterError::DimensionOverflow { width, height })
}
