use alloc::vec::Vec;

use enough::Stop;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::allocator::{BitmapAllocator, HeapAllocator};
use crate::codec::{ImageCodec, ImageInfo};
use crate::error::SampleError;
use crate::limits::Limits;
use crate::pixel::PixelFormat;
use crate::rect::Rect;
use crate::sample::subsample_into;

/// A decoded, subsampled, format-converted bitmap backing buffer.
#[derive(Clone, Debug)]
pub struct Bitmap {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

impl Bitmap {
    /// Access the pixel data (row-major, tightly packed).
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    /// Typed view of an [`PixelFormat::Rgba8888`] bitmap.
    ///
    /// Returns [`SampleError::FormatMismatch`] for other formats.
    #[cfg(feature = "rgb")]
    pub fn as_rgba(&self) -> Result<&[rgb::RGBA8], SampleError> {
        if self.format != PixelFormat::Rgba8888 {
            return Err(SampleError::FormatMismatch {
                expected: PixelFormat::Rgba8888,
                actual: self.format,
            });
        }
        Ok(self.pixels.as_pixels())
    }

    /// Zero-copy [`imgref::ImgRef`] view of an RGBA bitmap.
    ///
    /// Returns [`SampleError::FormatMismatch`] for other formats.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> Result<imgref::ImgRef<'_, rgb::RGBA8>, SampleError> {
        let pixels = self.as_rgba()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// Builder for a subsampled decode.
///
/// Defaults: RGBA8888 output, sample size 1, full-image crop, no limits.
/// Sample sizes below 1 are clamped to 1 at decode time.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a, C> {
    codec: &'a C,
    data: &'a [u8],
    format: PixelFormat,
    sample_size: u32,
    crop: Option<Rect>,
    limits: Option<Limits>,
}

impl<'a, C: ImageCodec> DecodeRequest<'a, C> {
    pub fn new(codec: &'a C, data: &'a [u8]) -> Self {
        Self {
            codec,
            data,
            format: PixelFormat::Rgba8888,
            sample_size: 1,
            crop: None,
            limits: None,
        }
    }

    /// Destination pixel format.
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    /// Integer downsample factor: each `n x n` source block becomes one
    /// destination pixel.
    pub fn with_sample_size(mut self, sample_size: u32) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Crop window into the source image. Defaults to the full image.
    pub fn with_crop(mut self, crop: Rect) -> Self {
        self.crop = Some(crop);
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Bounds-only path: intrinsic dimensions without any pixel decode.
    pub fn probe(&self) -> Result<ImageInfo, SampleError> {
        self.codec.probe(self.data)
    }

    /// Decode with the default heap allocator.
    pub fn decode(self, stop: impl Stop) -> Result<Bitmap, SampleError> {
        let mut allocator = HeapAllocator;
        self.decode_with(&mut allocator, &stop)
    }

    /// Decode into a buffer obtained from `allocator`.
    ///
    /// Pipeline: probe -> validate crop -> size destination
    /// (`floor(crop / sample_size)` per axis) -> check limits -> full codec
    /// decode -> allocate -> subsampled conversion.
    pub fn decode_with(
        self,
        allocator: &mut dyn BitmapAllocator,
        stop: &dyn Stop,
    ) -> Result<Bitmap, SampleError> {
        let sample_size = self.sample_size.max(1);
        let info = self.codec.probe(self.data)?;
        if let Some(limits) = &self.limits {
            limits.check(info.width, info.height)?;
        }
        let crop = self
            .crop
            .unwrap_or_else(|| Rect::of_size(info.width, info.height));
        if !crop.fits_within(info.width, info.height) {
            return Err(SampleError::CropOutOfBounds {
                crop,
                width: info.width,
                height: info.height,
            });
        }
        let dest_rect = crop.scaled_down(sample_size);
        let dest_bytes = (dest_rect.width as usize)
            .checked_mul(dest_rect.height as usize)
            .and_then(|px| px.checked_mul(self.format.bytes_per_pixel()))
            .ok_or(SampleError::DimensionsTooLarge {
                width: dest_rect.width,
                height: dest_rect.height,
            })?;
        if let Some(limits) = &self.limits {
            limits.check_memory(dest_bytes)?;
        }

        stop.check()?;
        let plane = self
            .codec
            .decode_plane(self.data, self.format.source_layout(), stop)?;
        stop.check()?;

        let mut pixels = allocator.allocate(dest_rect.width, dest_rect.height, self.format)?;
        subsample_into(
            &plane.as_plane(),
            crop,
            &mut pixels,
            dest_rect,
            self.format,
            sample_size,
        )?;
        Ok(Bitmap {
            pixels,
            width: dest_rect.width,
            height: dest_rect.height,
            format: self.format,
        })
    }
}
