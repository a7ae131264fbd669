use alloc::vec::Vec;

use crate::error::SampleError;
use crate::pixel::PixelLayout;

/// A borrowed, fully decoded interleaved pixel plane.
///
/// The plane is addressed by row stride, which may exceed
/// `width * bytes_per_pixel` when the codec pads its rows. Construction
/// validates that the buffer actually covers `height` rows at that stride;
/// the conversion engine then indexes rows without further checks.
#[derive(Clone, Copy, Debug)]
pub struct Plane<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
    layout: PixelLayout,
}

impl<'a> Plane<'a> {
    /// Wrap a raw plane buffer, validating stride and length.
    ///
    /// The last row only needs `width * bytes_per_pixel` bytes; trailing
    /// stride padding after it may be absent.
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        stride: usize,
        layout: PixelLayout,
    ) -> Result<Self, SampleError> {
        let row_bytes = (width as usize)
            .checked_mul(layout.bytes_per_pixel())
            .ok_or(SampleError::DimensionsTooLarge { width, height })?;
        if stride < row_bytes {
            return Err(SampleError::StrideTooSmall {
                stride,
                needed: row_bytes,
            });
        }
        let needed = match height {
            0 => 0,
            h => stride
                .checked_mul(h as usize - 1)
                .and_then(|n| n.checked_add(row_bytes))
                .ok_or(SampleError::DimensionsTooLarge { width, height })?,
        };
        if data.len() < needed {
            return Err(SampleError::SourceTooSmall {
                needed,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            layout,
        })
    }

    /// Wrap a tightly packed buffer (stride == `width * bytes_per_pixel`).
    pub fn from_packed(
        data: &'a [u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Self, SampleError> {
        let stride = (width as usize)
            .checked_mul(layout.bytes_per_pixel())
            .ok_or(SampleError::DimensionsTooLarge { width, height })?;
        Self::new(data, width, height, stride, layout)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// A span of `len` bytes starting `x_bytes` into row `y`.
    ///
    /// Callers must have validated the access against width/height; the
    /// constructor guarantees in-bounds indexing for any span inside a row.
    pub(crate) fn row_span(&self, y: usize, x_bytes: usize, len: usize) -> &'a [u8] {
        let start = y * self.stride + x_bytes;
        &self.data[start..start + len]
    }
}

/// An owned decoded plane, as produced by a codec adapter.
#[derive(Clone, Debug)]
pub struct PlaneBuf {
    data: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
    layout: PixelLayout,
}

impl PlaneBuf {
    /// Take ownership of decoded pixel data, validating like [`Plane::new`].
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        stride: usize,
        layout: PixelLayout,
    ) -> Result<Self, SampleError> {
        Plane::new(&data, width, height, stride, layout)?;
        Ok(Self {
            data,
            width,
            height,
            stride,
            layout,
        })
    }

    /// Borrow as a [`Plane`] view.
    pub fn as_plane(&self) -> Plane<'_> {
        Plane {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
            layout: self.layout,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_buffer() {
        let data = [0u8; 11];
        // 2x2 RGB packed needs 12 bytes.
        assert!(matches!(
            Plane::from_packed(&data, 2, 2, PixelLayout::Rgb8),
            Err(SampleError::SourceTooSmall {
                needed: 12,
                actual: 11
            })
        ));
    }

    #[test]
    fn rejects_undersized_stride() {
        let data = [0u8; 64];
        assert!(matches!(
            Plane::new(&data, 4, 2, 10, PixelLayout::Rgb8),
            Err(SampleError::StrideTooSmall {
                stride: 10,
                needed: 12
            })
        ));
    }

    #[test]
    fn accepts_unpadded_last_row() {
        // 2 rows at stride 16, but the final row stops at its 12 data bytes.
        let data = [0u8; 28];
        let plane = Plane::new(&data, 4, 2, 16, PixelLayout::Rgb8).unwrap();
        assert_eq!(plane.row_span(1, 3, 9).len(), 9);
    }

    #[test]
    fn empty_plane_is_fine() {
        let plane = Plane::from_packed(&[], 0, 0, PixelLayout::Rgba8).unwrap();
        assert_eq!(plane.width(), 0);
    }
}
