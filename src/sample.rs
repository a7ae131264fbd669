//! Subsampled plane-to-bitmap conversion.
//!
//! One pass over the destination rows, O(1) extra memory. Vertical
//! downsampling averages two source rows centered within each
//! `factor`-row block; horizontal downsampling is delegated to the row
//! conversion strategy selected by the destination format.

use crate::convert::row_converter;
use crate::error::SampleError;
use crate::pixel::PixelFormat;
use crate::plane::Plane;
use crate::rect::Rect;

/// Convert `crop` of `plane` into `dest`, downsampling by `sample_size`.
///
/// `dest_rect` must be the downsampled destination shape,
/// `crop.scaled_down(sample_size)`, and `dest` must hold at least
/// `dest_rect.height * dest_rect.width * format.bytes_per_pixel()` bytes;
/// both are checked up front and violations fail fast without touching
/// `dest`.
///
/// With `sample_size == 1` this is an exact crop-and-convert. With larger
/// factors, each destination row consumes exactly `sample_size` source
/// rows: `(sample_size - 2) / 2` are skipped, the next two are averaged,
/// and the remainder are skipped, so the sampled pair sits centered in its
/// block. Each destination pixel likewise averages `sample_size` adjacent
/// source columns across the two rows.
pub fn subsample_into(
    plane: &Plane<'_>,
    crop: Rect,
    dest: &mut [u8],
    dest_rect: Rect,
    format: PixelFormat,
    sample_size: u32,
) -> Result<(), SampleError> {
    let expected_layout = format.source_layout();
    if plane.layout() != expected_layout {
        return Err(SampleError::LayoutMismatch {
            expected: expected_layout,
            actual: plane.layout(),
        });
    }
    if sample_size < 1 {
        return Err(SampleError::InvalidSampleFactor);
    }
    if !crop.fits_within(plane.width(), plane.height()) {
        return Err(SampleError::CropOutOfBounds {
            crop,
            width: plane.width(),
            height: plane.height(),
        });
    }
    let expected_dest = crop.scaled_down(sample_size);
    if dest_rect != expected_dest {
        return Err(SampleError::SizeMismatch {
            expected: expected_dest,
            actual: dest_rect,
        });
    }

    let out_w = dest_rect.width as usize;
    let out_h = dest_rect.height as usize;
    let dims_too_large = || SampleError::DimensionsTooLarge {
        width: dest_rect.width,
        height: dest_rect.height,
    };
    let dest_stride = out_w
        .checked_mul(format.bytes_per_pixel())
        .ok_or_else(dims_too_large)?;
    let needed = dest_stride.checked_mul(out_h).ok_or_else(dims_too_large)?;
    if dest.len() < needed {
        return Err(SampleError::BufferTooSmall {
            needed,
            actual: dest.len(),
        });
    }
    if dest_rect.is_empty() {
        return Ok(());
    }

    let src_bpp = expected_layout.bytes_per_pixel();
    let x_bytes = crop.x as usize * src_bpp;
    let convert = row_converter(format);

    let rows = dest.chunks_exact_mut(dest_stride).take(out_h);
    if sample_size == 1 {
        let span = out_w * src_bpp;
        let mut src_y = crop.y as usize;
        for out_row in rows {
            convert(out_row, plane.row_span(src_y, x_bytes, span), None, out_w, 1);
            src_y += 1;
        }
    } else {
        let factor = sample_size as usize;
        // Center the two sampled rows within each factor-row block.
        let skip_start = (factor - 2) / 2;
        let skip_end = factor - 2 - skip_start;
        let span = out_w * factor * src_bpp;
        let mut src_y = crop.y as usize;
        for out_row in rows {
            src_y += skip_start;
            convert(
                out_row,
                plane.row_span(src_y, x_bytes, span),
                Some(plane.row_span(src_y + 1, x_bytes, span)),
                out_w,
                factor,
            );
            src_y += 2 + skip_end;
        }
    }
    Ok(())
}
