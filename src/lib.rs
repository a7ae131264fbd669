//! # bitsample
//!
//! Decode a compressed still image straight into a subsampled,
//! format-converted bitmap backing buffer.
//!
//! Callers that want an image at a reduced resolution (integer downsample
//! factor) or in a specific pixel layout (RGB565 vs RGBA8888) get it in a
//! single pass: the codec decodes once at full resolution, then the
//! conversion engine walks the decoded plane row by row, box-averaging
//! `n x n` source blocks into each destination pixel. No full-resolution
//! intermediate bitmap is ever allocated.
//!
//! ## Pieces
//!
//! - [`subsample_into`] — the conversion engine: decoded [`Plane`] + crop
//!   [`Rect`] + destination buffer -> subsampled, converted pixels.
//! - [`ImageCodec`] — the codec seam: probe intrinsic dimensions cheaply,
//!   decode to an interleaved plane on request. A QOI adapter
//!   ([`QoiCodec`]) ships behind the `qoi` feature.
//! - [`DecodeRequest`] — glue: probe, size the destination
//!   (`floor(dim / sample_size)`), decode, allocate, convert.
//! - [`BitmapAllocator`] — destination memory is caller territory; the
//!   default [`HeapAllocator`] hands out zeroed heap buffers.
//!
//! ## Downsampling scheme
//!
//! Integer factors only. For factor `n`, two source rows centered within
//! each `n`-row block are sampled and every destination pixel is the box
//! average of `n` adjacent columns across those two rows. Factor 1 is an
//! exact crop-and-convert.
//!
//! ## Usage
//!
//! ```no_run
//! use bitsample::{DecodeRequest, PixelFormat, QoiCodec, Unstoppable};
//!
//! let data: &[u8] = &[]; // your QOI bytes
//!
//! // Probe without decoding
//! let codec = QoiCodec;
//! let info = DecodeRequest::new(&codec, data).probe()?;
//! println!("{}x{}", info.width, info.height);
//!
//! // Decode at quarter size into an RGB565 buffer
//! let bitmap = DecodeRequest::new(&codec, data)
//!     .with_format(PixelFormat::Rgb565)
//!     .with_sample_size(4)
//!     .decode(Unstoppable)?;
//! assert_eq!(bitmap.pixels().len(), bitmap.height as usize * bitmap.stride());
//! # Ok::<(), bitsample::SampleError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod allocator;
mod codec;
mod convert;
mod decode;
mod error;
mod limits;
mod pixel;
mod plane;
mod rect;
mod sample;

#[cfg(feature = "qoi")]
pub mod qoi;

// Re-exports
pub use allocator::{BitmapAllocator, HeapAllocator};
pub use codec::{ImageCodec, ImageInfo};
pub use decode::{Bitmap, DecodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::SampleError;
pub use limits::Limits;
pub use pixel::{PixelFormat, PixelLayout};
pub use plane::{Plane, PlaneBuf};
pub use rect::Rect;
pub use sample::subsample_into;

#[cfg(feature = "qoi")]
pub use qoi::QoiCodec;
