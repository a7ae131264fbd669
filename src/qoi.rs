//! QOI codec adapter backed by `rapid-qoi`.

use alloc::format;
use alloc::vec::Vec;

use enough::Stop;
use rapid_qoi::Qoi;

use crate::codec::{ImageCodec, ImageInfo};
use crate::error::SampleError;
use crate::pixel::PixelLayout;
use crate::plane::PlaneBuf;

const QOI_MAGIC: &[u8; 4] = b"qoif";

/// [`ImageCodec`] implementation for the QOI format.
#[derive(Clone, Copy, Debug, Default)]
pub struct QoiCodec;

impl QoiCodec {
    fn header(data: &[u8]) -> Result<Qoi, SampleError> {
        Qoi::decode_header(data).map_err(|e| match e {
            rapid_qoi::DecodeError::InvalidMagic => SampleError::UnrecognizedFormat,
            other => SampleError::InvalidHeader(format!("{other:?}")),
        })
    }

    fn native_layout(qoi: &Qoi) -> PixelLayout {
        if qoi.colors.has_alpha() {
            PixelLayout::Rgba8
        } else {
            PixelLayout::Rgb8
        }
    }
}

impl ImageCodec for QoiCodec {
    fn sniff(&self, data: &[u8]) -> bool {
        data.len() >= QOI_MAGIC.len() && &data[..QOI_MAGIC.len()] == QOI_MAGIC
    }

    fn probe(&self, data: &[u8]) -> Result<ImageInfo, SampleError> {
        let qoi = Self::header(data)?;
        Ok(ImageInfo {
            width: qoi.width,
            height: qoi.height,
            native_layout: Self::native_layout(&qoi),
        })
    }

    fn decode_plane(
        &self,
        data: &[u8],
        layout: PixelLayout,
        stop: &dyn Stop,
    ) -> Result<PlaneBuf, SampleError> {
        // Header errors stay distinguishable from entropy-stream errors.
        Self::header(data)?;
        stop.check()?;
        let (qoi, pixels) = Qoi::decode_alloc(data)
            .map_err(|e| SampleError::DecodeFailed(format!("{e:?}")))?;
        let native = Self::native_layout(&qoi);
        stop.check()?;
        let pixels = adapt_channels(pixels, native, layout);
        let stride = qoi.width as usize * layout.bytes_per_pixel();
        PlaneBuf::new(pixels, qoi.width, qoi.height, stride, layout)
    }
}

/// Widen RGB to opaque RGBA, or drop alpha, to satisfy a requested layout.
fn adapt_channels(pixels: Vec<u8>, native: PixelLayout, requested: PixelLayout) -> Vec<u8> {
    match (native, requested) {
        (PixelLayout::Rgb8, PixelLayout::Rgba8) => {
            let mut out = Vec::with_capacity(pixels.len() / 3 * 4);
            for px in pixels.chunks_exact(3) {
                out.extend_from_slice(px);
                out.push(0xff);
            }
            out
        }
        (PixelLayout::Rgba8, PixelLayout::Rgb8) => {
            let mut out = Vec::with_capacity(pixels.len() / 4 * 3);
            for px in pixels.chunks_exact(4) {
                out.extend_from_slice(&px[..3]);
            }
            out
        }
        _ => pixels,
    }
}
