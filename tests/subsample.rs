//! Engine tests: synthetic planes through `subsample_into`, with explicit
//! numeric expectations for the crop, averaging, and skip behavior.

use bitsample::{PixelFormat, PixelLayout, Plane, Rect, subsample_into};

fn pack565(r: u8, g: u8, b: u8) -> u16 {
    ((u16::from(r) & 0xf8) << 8) | ((u16::from(g) & 0xfc) << 3) | (u16::from(b) >> 3)
}

fn uniform(w: usize, h: usize, px: &[u8]) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(w * h * px.len());
    for _ in 0..w * h {
        pixels.extend_from_slice(px);
    }
    pixels
}

/// Tiled checkerboard: `period x period` tiles alternating between two
/// pixel values.
fn checkerboard(w: usize, h: usize, period: usize, a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(w * h * a.len());
    for y in 0..h {
        for x in 0..w {
            if (x / period + y / period) % 2 == 0 {
                pixels.extend_from_slice(a);
            } else {
                pixels.extend_from_slice(b);
            }
        }
    }
    pixels
}

// ── Factor 1: exact crop-and-convert ─────────────────────────────────

#[test]
fn rgba_identity_full_frame() {
    let mut pixels = Vec::new();
    for i in 0..8 * 8 * 4 {
        pixels.push(i as u8);
    }
    let plane = Plane::from_packed(&pixels, 8, 8, PixelLayout::Rgba8).unwrap();
    let mut dest = vec![0u8; 8 * 8 * 4];
    subsample_into(
        &plane,
        Rect::of_size(8, 8),
        &mut dest,
        Rect::of_size(8, 8),
        PixelFormat::Rgba8888,
        1,
    )
    .unwrap();
    assert_eq!(dest, pixels);
}

#[test]
fn rgba_identity_all_crops() {
    let mut pixels = Vec::new();
    for i in 0..6 * 5 * 4 {
        pixels.push((i * 7) as u8);
    }
    let plane = Plane::from_packed(&pixels, 6, 5, PixelLayout::Rgba8).unwrap();
    for y in 0..5u32 {
        for x in 0..6u32 {
            for h in 1..=(5 - y) {
                for w in 1..=(6 - x) {
                    let crop = Rect::new(x, y, w, h);
                    let mut dest = vec![0u8; (w * h * 4) as usize];
                    subsample_into(
                        &plane,
                        crop,
                        &mut dest,
                        Rect::of_size(w, h),
                        PixelFormat::Rgba8888,
                        1,
                    )
                    .unwrap();
                    // Row for row, the crop bytes come back untouched.
                    for row in 0..h as usize {
                        let src_off = ((y as usize + row) * 6 + x as usize) * 4;
                        let len = w as usize * 4;
                        assert_eq!(
                            &dest[row * len..(row + 1) * len],
                            &pixels[src_off..src_off + len],
                            "crop {crop:?} row {row}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn rgb565_converts_row_for_row() {
    // 8x8, each row a single color ramp step.
    let mut pixels = Vec::new();
    for y in 0..8u16 {
        for _ in 0..8 {
            pixels.extend_from_slice(&[(y * 32) as u8, 0, 255]);
        }
    }
    let plane = Plane::from_packed(&pixels, 8, 8, PixelLayout::Rgb8).unwrap();
    let mut dest = vec![0u8; 8 * 8 * 2];
    subsample_into(
        &plane,
        Rect::of_size(8, 8),
        &mut dest,
        Rect::of_size(8, 8),
        PixelFormat::Rgb565,
        1,
    )
    .unwrap();
    for y in 0..8usize {
        let expected = pack565((y * 32) as u8, 0, 255).to_le_bytes();
        for x in 0..8 {
            assert_eq!(dest[(y * 8 + x) * 2..][..2], expected, "({x},{y})");
        }
    }
}

// ── Uniform planes stay uniform at any factor ────────────────────────

#[test]
fn uniform_color_survives_any_factor_rgba() {
    let color = [90u8, 160, 200, 170];
    for factor in [1u32, 2, 3, 4, 5, 8] {
        let pixels = uniform(16, 16, &color);
        let plane = Plane::from_packed(&pixels, 16, 16, PixelLayout::Rgba8).unwrap();
        let crop = Rect::of_size(16, 16);
        let dest_rect = crop.scaled_down(factor);
        let mut dest = vec![0u8; (dest_rect.width * dest_rect.height * 4) as usize];
        subsample_into(&plane, crop, &mut dest, dest_rect, PixelFormat::Rgba8888, factor).unwrap();
        for px in dest.chunks_exact(4) {
            assert_eq!(px, color, "factor {factor}");
        }
    }
}

#[test]
fn uniform_color_survives_any_factor_rgb565() {
    let color = [96u8, 60, 200];
    let expected = pack565(96, 60, 200).to_le_bytes();
    for factor in [1u32, 2, 3, 4, 5, 8] {
        let pixels = uniform(16, 16, &color);
        let plane = Plane::from_packed(&pixels, 16, 16, PixelLayout::Rgb8).unwrap();
        let crop = Rect::of_size(16, 16);
        let dest_rect = crop.scaled_down(factor);
        let mut dest = vec![0u8; (dest_rect.width * dest_rect.height * 2) as usize];
        subsample_into(&plane, crop, &mut dest, dest_rect, PixelFormat::Rgb565, factor).unwrap();
        for px in dest.chunks_exact(2) {
            assert_eq!(px, expected, "factor {factor}");
        }
    }
}

// ── Checkerboards: explicit box-average numbers ──────────────────────

#[test]
fn tiled_checkerboard_matches_tile_colors() {
    // 2x2 tiles on a 4x4 source: each sampled block is one uniform tile,
    // so factor 2 reproduces the tile colors exactly.
    let a = [255u8, 0, 128, 255];
    let b = [0u8, 200, 50, 255];
    let pixels = checkerboard(4, 4, 2, &a, &b);
    let plane = Plane::from_packed(&pixels, 4, 4, PixelLayout::Rgba8).unwrap();
    let mut dest = vec![0u8; 2 * 2 * 4];
    subsample_into(
        &plane,
        Rect::of_size(4, 4),
        &mut dest,
        Rect::of_size(2, 2),
        PixelFormat::Rgba8888,
        2,
    )
    .unwrap();
    assert_eq!(&dest[0..4], a);
    assert_eq!(&dest[4..8], b);
    assert_eq!(&dest[8..12], b);
    assert_eq!(&dest[12..16], a);
}

#[test]
fn pixel_checkerboard_averages_both_colors() {
    // Per-pixel checkerboard: every 2x2 block holds two of each color, so
    // every destination pixel is the midpoint.
    let a = [200u8, 40, 0, 255];
    let b = [100u8, 240, 60, 255];
    let pixels = checkerboard(4, 4, 1, &a, &b);
    let plane = Plane::from_packed(&pixels, 4, 4, PixelLayout::Rgba8).unwrap();
    let mut dest = vec![0u8; 2 * 2 * 4];
    subsample_into(
        &plane,
        Rect::of_size(4, 4),
        &mut dest,
        Rect::of_size(2, 2),
        PixelFormat::Rgba8888,
        2,
    )
    .unwrap();
    for px in dest.chunks_exact(4) {
        assert_eq!(px, [150, 140, 30, 255]);
    }
}

// ── Factor 3 on 8x8: the windowed-block rule ─────────────────────────

#[test]
fn eight_by_eight_factor_three() {
    // value(x, y) = y*16 + x*2, identical across RGBA channels. The
    // average over a sampled window is then 16*avg(y) + 2*avg(x), exact
    // for the windows this factor selects.
    let mut pixels = Vec::new();
    for y in 0..8u32 {
        for x in 0..8u32 {
            pixels.extend_from_slice(&[(y * 16 + x * 2) as u8; 4]);
        }
    }
    let plane = Plane::from_packed(&pixels, 8, 8, PixelLayout::Rgba8).unwrap();
    let crop = Rect::of_size(8, 8);
    let dest_rect = crop.scaled_down(3);
    assert_eq!(dest_rect, Rect::of_size(2, 2));
    let mut dest = vec![0u8; 2 * 2 * 4];
    subsample_into(&plane, crop, &mut dest, dest_rect, PixelFormat::Rgba8888, 3).unwrap();
    // Factor 3 samples rows (0,1) and (3,4); columns 0..3 and 3..6.
    // avg(y)=0.5 or 3.5, avg(x)=1 or 4.
    let expected = [
        [10u8; 4], // 16*0.5 + 2*1
        [16u8; 4], // 16*0.5 + 2*4
        [58u8; 4], // 16*3.5 + 2*1
        [64u8; 4], // 16*3.5 + 2*4
    ];
    for (px, want) in dest.chunks_exact(4).zip(expected) {
        assert_eq!(px, want);
    }
}

// ── Stride padding and crop offsets ──────────────────────────────────

#[test]
fn padded_stride_rows_skip_padding() {
    // 4x4 RGB rows padded to 16 bytes; padding holds poison values.
    let mut data = Vec::new();
    for y in 0..4u8 {
        for x in 0..4u8 {
            data.extend_from_slice(&[y * 40 + x * 10; 3]);
        }
        data.extend_from_slice(&[0xEE; 4]);
    }
    let plane = Plane::new(&data, 4, 4, 16, PixelLayout::Rgb8).unwrap();
    let mut dest = vec![0u8; 2 * 2 * 2];
    subsample_into(
        &plane,
        Rect::of_size(4, 4),
        &mut dest,
        Rect::of_size(2, 2),
        PixelFormat::Rgb565,
        2,
    )
    .unwrap();
    // Block (0,0): values {0,10,40,50} -> 25. Poison never contributes.
    let expect = |v: u8| pack565(v, v, v).to_le_bytes();
    assert_eq!(dest[0..2], expect(25));
    assert_eq!(dest[2..4], expect(45));
    assert_eq!(dest[4..6], expect(105));
    assert_eq!(dest[6..8], expect(125));
}

#[test]
fn crop_offsets_apply_before_sampling() {
    // 6x6 with a distinct 4x4 region at (2, 2); crop + factor 2 reads only
    // that region.
    let mut pixels = uniform(6, 6, &[0u8, 0, 0, 255]);
    for y in 2..6usize {
        for x in 2..6usize {
            let off = (y * 6 + x) * 4;
            pixels[off..off + 4].copy_from_slice(&[120, 80, 40, 255]);
        }
    }
    let plane = Plane::from_packed(&pixels, 6, 6, PixelLayout::Rgba8).unwrap();
    let mut dest = vec![0u8; 2 * 2 * 4];
    subsample_into(
        &plane,
        Rect::new(2, 2, 4, 4),
        &mut dest,
        Rect::of_size(2, 2),
        PixelFormat::Rgba8888,
        2,
    )
    .unwrap();
    for px in dest.chunks_exact(4) {
        assert_eq!(px, [120, 80, 40, 255]);
    }
}

// ── Floor-division remainders ────────────────────────────────────────

#[test]
fn remainder_rows_and_columns_are_dropped() {
    // 7x7 at factor 2 -> 3x3; the 7th row/column never contributes.
    let mut pixels = Vec::new();
    for y in 0..7usize {
        for x in 0..7usize {
            let v = if x == 6 || y == 6 { 255 } else { 60 };
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    let plane = Plane::from_packed(&pixels, 7, 7, PixelLayout::Rgba8).unwrap();
    let crop = Rect::of_size(7, 7);
    let dest_rect = crop.scaled_down(2);
    assert_eq!(dest_rect, Rect::of_size(3, 3));
    let mut dest = vec![0u8; 3 * 3 * 4];
    subsample_into(&plane, crop, &mut dest, dest_rect, PixelFormat::Rgba8888, 2).unwrap();
    for px in dest.chunks_exact(4) {
        assert_eq!(px, [60, 60, 60, 255]);
    }
}
