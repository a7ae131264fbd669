use enough::Stop;

use crate::error::SampleError;
use crate::pixel::PixelLayout;
use crate::plane::PlaneBuf;

/// Intrinsic image properties, readable without a pixel decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// The layout the codec decodes to natively (before any channel
    /// adaptation requested through [`ImageCodec::decode_plane`]).
    pub native_layout: PixelLayout,
}

/// A compressed-image codec collaborator.
///
/// The conversion engine treats codecs as opaque: they turn fully
/// materialized compressed bytes into either intrinsic metadata or a
/// decoded interleaved plane. Malformed, truncated, or unsupported input
/// surfaces as an error carrying the codec's message; no retry is ever
/// useful.
pub trait ImageCodec {
    /// Cheap magic-byte check: could `data` be this codec's format?
    ///
    /// Unlike [`probe`](Self::probe) this never allocates or errors; it
    /// exists so callers can route bytes between codecs.
    fn sniff(&self, data: &[u8]) -> bool;

    /// Read intrinsic dimensions from container metadata only.
    fn probe(&self, data: &[u8]) -> Result<ImageInfo, SampleError>;

    /// Fully decode into an interleaved plane with the requested layout.
    ///
    /// Codecs whose native channel count differs must adapt (widen RGB to
    /// RGBA with opaque alpha, or drop alpha) rather than return a
    /// mismatched plane.
    fn decode_plane(
        &self,
        data: &[u8],
        layout: PixelLayout,
        stop: &dyn Stop,
    ) -> Result<PlaneBuf, SampleError>;
}
