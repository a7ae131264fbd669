//! Row-level conversion strategies.
//!
//! One strategy per destination [`PixelFormat`], selected once per
//! conversion call. The contract mirrors the subsampling loop's needs:
//! convert `pixels` output pixels from one source row (no averaging), or
//! from two rows with a `2 x factor` box average per output pixel.

use crate::pixel::PixelFormat;

/// Convert one output row.
///
/// `primary` (and `secondary` when present) hold interleaved source pixels
/// in the format's [`source_layout`](PixelFormat::source_layout). With
/// `secondary` absent the conversion is one-to-one: pixel `i` of the output
/// comes from pixel `i` of `primary`. With `secondary` present, output pixel
/// `i` is the box average of source columns `i*factor .. (i+1)*factor`
/// across both rows, converted to the destination format.
///
/// Never reads more than `pixels * factor` source pixels per row (`pixels`
/// when `secondary` is absent) and writes exactly `pixels` destination
/// pixels.
pub(crate) type RowConvertFn = fn(&mut [u8], &[u8], Option<&[u8]>, usize, usize);

/// Strategy selection: destination format tags the concrete row function.
pub(crate) fn row_converter(format: PixelFormat) -> RowConvertFn {
    match format {
        PixelFormat::Rgb565 => rgb888_to_rgb565_row,
        PixelFormat::Rgba8888 => rgba8888_to_rgba8888_row,
    }
}

/// Truncate 8-bit channels into a little-endian 5-6-5 word.
fn pack565(r: u8, g: u8, b: u8) -> u16 {
    ((u16::from(r) & 0xf8) << 8) | ((u16::from(g) & 0xfc) << 3) | (u16::from(b) >> 3)
}

fn rgb888_to_rgb565_row(
    out: &mut [u8],
    primary: &[u8],
    secondary: Option<&[u8]>,
    pixels: usize,
    factor: usize,
) {
    match secondary {
        None => {
            for (dst, src) in out
                .chunks_exact_mut(2)
                .zip(primary.chunks_exact(3))
                .take(pixels)
            {
                dst.copy_from_slice(&pack565(src[0], src[1], src[2]).to_le_bytes());
            }
        }
        Some(secondary) => {
            let samples = (2 * factor) as u32;
            for (i, dst) in out.chunks_exact_mut(2).take(pixels).enumerate() {
                let start = i * factor * 3;
                let mut r = 0u32;
                let mut g = 0u32;
                let mut b = 0u32;
                for row in [primary, secondary] {
                    for px in row[start..start + factor * 3].chunks_exact(3) {
                        r += u32::from(px[0]);
                        g += u32::from(px[1]);
                        b += u32::from(px[2]);
                    }
                }
                let word = pack565(
                    (r / samples) as u8,
                    (g / samples) as u8,
                    (b / samples) as u8,
                );
                dst.copy_from_slice(&word.to_le_bytes());
            }
        }
    }
}

fn rgba8888_to_rgba8888_row(
    out: &mut [u8],
    primary: &[u8],
    secondary: Option<&[u8]>,
    pixels: usize,
    factor: usize,
) {
    match secondary {
        // Format-preserving: a straight row copy, alpha untouched.
        None => out[..pixels * 4].copy_from_slice(&primary[..pixels * 4]),
        Some(secondary) => {
            let samples = (2 * factor) as u32;
            for (i, dst) in out.chunks_exact_mut(4).take(pixels).enumerate() {
                let start = i * factor * 4;
                let mut acc = [0u32; 4];
                for row in [primary, secondary] {
                    for px in row[start..start + factor * 4].chunks_exact(4) {
                        for (sum, &channel) in acc.iter_mut().zip(px) {
                            *sum += u32::from(channel);
                        }
                    }
                }
                for (slot, sum) in dst.iter_mut().zip(acc) {
                    *slot = (sum / samples) as u8;
                }
            }
        }
    }
}
